use std::cmp::{max, Ordering};

use bit_set::BitSet;
use priority_queue::PriorityQueue;

use super::Coloring;
use crate::instance::{Instance, VertexId};

#[derive(PartialEq, Eq)]
struct SaturationKey {
    /// number of distinct colors the vertex sees
    nb_adj_colors: usize,
    degree: usize,
}

impl Ord for SaturationKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.nb_adj_colors.cmp(&other.nb_adj_colors)
            .then_with(|| self.degree.cmp(&other.degree))
    }
}

// `PartialOrd` needs to be implemented as well.
impl PartialOrd for SaturationKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/** implements a DSATUR greedy coloring.
    1. choose an uncolored vertex that sees the most colors (break ties by the largest degree)
    2. assign it the first color available
    3. mark all its neighbors seeing this color
    4. repeat until every vertex is colored
*/
pub fn saturation_largest_first(inst: &Instance) -> Coloring {
    let n: usize = inst.n();
    let mut remaining: PriorityQueue<VertexId, SaturationKey> = PriorityQueue::new();
    for v in 0..n {
        remaining.push(v, SaturationKey { nb_adj_colors: 0, degree: inst.degree(v) });
    }
    let mut colors: Vec<Option<usize>> = vec![None; n]; // colors[v] -> color assigned to v
    let mut adj_colors: Vec<BitSet> = vec![BitSet::default(); n]; // adj_colors[v] -> colors v sees
    let mut nb_colors: usize = 0;
    while let Some((current_vertex, _)) = remaining.pop() {
        // assign it a color
        let mut color: usize = 0;
        while adj_colors[current_vertex].contains(color) { color += 1; }
        colors[current_vertex] = Some(color);
        nb_colors = max(nb_colors, color + 1);
        // update saturation degree information
        for neighbor in inst.adj(current_vertex).iter()
            .filter(|neighbor| colors[**neighbor].is_none()) {
            if !adj_colors[*neighbor].contains(color) {
                adj_colors[*neighbor].insert(color);
                remaining.change_priority_by(neighbor, |k| { k.nb_adj_colors += 1; });
            }
        }
    }
    super::greedy::build_classes(&colors, nb_colors)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dsatur_path() {
        // the middle vertex has the largest degree: colored first, alone
        let inst = Instance::from_edges(3, &[(0,1),(1,2)]);
        let classes = saturation_largest_first(&inst);
        assert_eq!(classes, vec![vec![1], vec![0,2]]);
    }

    #[test]
    fn test_dsatur_triangle_needs_three_colors() {
        let inst = Instance::from_edges(3, &[(0,1),(1,2),(0,2)]);
        let classes = saturation_largest_first(&inst);
        assert_eq!(classes.len(), 3);
    }

    #[test]
    fn test_dsatur_bipartite() {
        // complete bipartite K2,2: exactly 2 colors
        let inst = Instance::from_edges(4, &[(0,2),(0,3),(1,2),(1,3)]);
        let classes = saturation_largest_first(&inst);
        assert_eq!(classes.len(), 2);
    }
}
