use std::collections::VecDeque;

use bit_set::BitSet;
use rand::seq::SliceRandom;

use super::Coloring;
use crate::instance::{Instance, VertexId};

/** colors the vertices following `order`, assigning each the smallest color
absent from its already-colored neighbors */
pub fn sequential(inst: &Instance, order: &[VertexId]) -> Coloring {
    let n = inst.n();
    let mut colors: Vec<Option<usize>> = vec![None; n];
    let mut nb_colors = 0;
    for &v in order {
        let mut adj_colors: BitSet = BitSet::default(); // colors v sees
        for &u in inst.adj(v) {
            if let Some(c) = colors[u] {
                adj_colors.insert(c);
            }
        }
        let mut color = 0;
        while adj_colors.contains(color) { color += 1; }
        colors[v] = Some(color);
        if color + 1 > nb_colors { nb_colors = color + 1; }
    }
    build_classes(&colors, nb_colors)
}

/// groups the vertices into classes given their colors
pub(crate) fn build_classes(colors: &[Option<usize>], nb_colors: usize) -> Coloring {
    let mut res = vec![vec![]; nb_colors];
    for (v, c) in colors.iter().enumerate() {
        res[c.expect("build_classes: uncolored vertex")].push(v);
    }
    res
}

/// colors the vertices by decreasing degree
pub fn largest_first(inst: &Instance) -> Coloring {
    let mut order: Vec<VertexId> = (0..inst.n()).collect();
    order.sort_by_key(|v| std::cmp::Reverse(inst.degree(*v)));
    sequential(inst, &order)
}

/// colors the vertices in a uniformly random order
pub fn random_sequential(inst: &Instance) -> Coloring {
    let mut order: Vec<VertexId> = (0..inst.n()).collect();
    order.shuffle(&mut rand::thread_rng());
    sequential(inst, &order)
}

/// traversal used to order each connected component
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Traversal {
    /// breadth-first
    Bfs,
    /// depth-first
    Dfs,
}

/** colors the vertices component by component, following a BFS or DFS
traversal of each component, so that every vertex (but the component roots)
is colored after one of its neighbors */
pub fn connected_sequential(inst: &Instance, traversal: Traversal) -> Coloring {
    let n = inst.n();
    let mut order = Vec::with_capacity(n);
    let mut visited: BitSet = BitSet::default();
    for root in 0..n {
        if visited.contains(root) { continue; }
        visited.insert(root);
        let mut frontier: VecDeque<VertexId> = VecDeque::new();
        frontier.push_back(root);
        loop {
            let next = match traversal {
                Traversal::Bfs => frontier.pop_front(),
                Traversal::Dfs => frontier.pop_back(),
            };
            let v = match next {
                None => break,
                Some(v) => v,
            };
            order.push(v);
            for &u in inst.adj(v) {
                if !visited.contains(u) {
                    visited.insert(u);
                    frontier.push_back(u);
                }
            }
        }
    }
    sequential(inst, &order)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_path() {
        let inst = Instance::from_edges(3, &[(0,1),(1,2)]);
        let classes = sequential(&inst, &[0,1,2]);
        assert_eq!(classes, vec![vec![0,2], vec![1]]);
    }

    #[test]
    fn test_largest_first_star() {
        // the center of a star gets its own color
        let inst = Instance::from_edges(4, &[(0,1),(0,2),(0,3)]);
        let classes = largest_first(&inst);
        assert_eq!(classes.len(), 2);
        assert_eq!(classes[0], vec![0]);
        assert_eq!(classes[1], vec![1,2,3]);
    }

    #[test]
    fn test_connected_sequential_orders_whole_graph() {
        // two components
        let inst = Instance::from_edges(5, &[(0,1),(2,3),(3,4)]);
        for traversal in [Traversal::Bfs, Traversal::Dfs] {
            let classes = connected_sequential(&inst, traversal);
            let nb_colored: usize = classes.iter().map(|c| c.len()).sum();
            assert_eq!(nb_colored, 5);
        }
    }

    #[test]
    fn test_random_sequential_uses_two_colors_on_path() {
        // any sequential order 2-colors a path of length 2
        let inst = Instance::from_edges(3, &[(0,1),(1,2)]);
        let classes = random_sequential(&inst);
        assert_eq!(classes.len(), 2);
    }
}
