use bit_set::BitSet;

use crate::dimacs::read_from_file;
use crate::error::GraphParseError;

/** Vertex Id */
pub type VertexId = usize;

/** a clique, given by its vertex list */
pub type Clique = Vec<VertexId>;

/** models a maximum clique instance (simple undirected graph) */
#[derive(Debug)]
pub struct Instance {
    /// nb vertices
    n: usize,
    /// nb edges
    m: usize,
    /// edges of the graph
    edges: Vec<(VertexId, VertexId)>,
    /// adj_list[i]: list of vertices adjacent to i
    adj_list: Vec<Vec<VertexId>>,
    /// adj_matrix[i]: bitset of the neighbors of i
    adj_matrix: Vec<BitSet>,
}

impl Instance {

    /// number of vertices
    pub fn n(&self) -> usize { self.n }

    /// number of edges
    pub fn m(&self) -> usize { self.m }

    /// iterator over the vertices
    pub fn vertices(&self) -> impl Iterator<Item=VertexId> { 0..self.n }

    /// list of vertices adjacent to vertex i
    pub fn adj(&self, i: VertexId) -> &[VertexId] {
        &self.adj_list[i]
    }

    /// degree of vertex i
    pub fn degree(&self, i: VertexId) -> usize {
        self.adj_list[i].len()
    }

    /// edge list
    pub fn edges(&self) -> &[(VertexId, VertexId)] {
        &self.edges
    }

    /// returns true if a and b are adjacent, O(1) using the adjacency matrix
    pub fn are_adjacent(&self, a: VertexId, b: VertexId) -> bool {
        self.adj_matrix[a].contains(b)
    }

    /** all unordered pairs (a,b), a < b, NOT joined by an edge.
    these pairs become the pairwise constraints of the LP relaxation (a clique
    contains at most one endpoint of a non-edge). */
    pub fn non_adjacent_pairs(&self) -> Vec<(VertexId, VertexId)> {
        let mut res = Vec::new();
        for a in 0..self.n {
            for b in a+1..self.n {
                if !self.are_adjacent(a, b) {
                    res.push((a, b));
                }
            }
        }
        res
    }

    /// builds the edge list
    fn build_edges(adj_list: &[Vec<VertexId>]) -> Vec<(VertexId, VertexId)> {
        let mut res = Vec::new();
        for (i, l) in adj_list.iter().enumerate() {
            for j in l {
                if i < *j {
                    res.push((i, *j));
                }
            }
        }
        res
    }

    /** constructor using an adjacency list */
    pub fn new(adj_list: Vec<Vec<VertexId>>) -> Self {
        let n = adj_list.len();
        // compute nb edges
        let mut m = 0;
        for e in &adj_list { // at the end: m = ∑ d(v)
            m += e.len();
        }
        m /= 2; // m = (∑ d(v)) / 2
        let edges = Self::build_edges(&adj_list);
        let mut adj_matrix = vec![BitSet::default(); n];
        for (a, row) in adj_matrix.iter_mut().enumerate() {
            for b in &adj_list[a] {
                row.insert(*b);
            }
        }
        Self { n, m, edges, adj_list, adj_matrix }
    }

    /** constructor using an edge list over n vertices */
    pub fn from_edges(n: usize, edges: &[(VertexId, VertexId)]) -> Self {
        let mut adj_list = vec![Vec::new(); n];
        for (a, b) in edges {
            adj_list[*a].push(*b);
            adj_list[*b].push(*a);
        }
        Self::new(adj_list)
    }

    /// creates an instance from a DIMACS file
    pub fn from_file(filename: &str) -> Result<Self, GraphParseError> {
        let (_, _, adj_list) = read_from_file(filename)?;
        Ok(Self::new(adj_list))
    }

    /// print statistics of the instance
    pub fn display_statistics(&self) {
        println!("\t{} \t vertices", self.n());
        println!("\t{} \t edges", self.m());
        if self.n() > 0 {
            let degrees: Vec<usize> = (0..self.n()).map(|i| self.degree(i)).collect();
            println!("\t{} \t min degree", degrees.iter().min().unwrap());
            println!("\t{} \t max degree", degrees.iter().max().unwrap());
        }
    }
}

/**
returns None if the clique is infeasible (a repeated vertex or a missing edge)
returns its size if it is feasible
*/
pub fn checker(inst: &Instance, clique: &[VertexId]) -> Option<usize> {
    let mut visited = BitSet::new();
    for v in clique {
        if visited.contains(*v) {
            return None; // already added
        }
        visited.insert(*v);
    }
    for v1 in clique {
        for v2 in clique {
            if v1 != v2 && !inst.are_adjacent(*v1, *v2) {
                return None;
            }
        }
    }
    Some(clique.len())
}


#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Instance {
        Instance::from_edges(3, &[(0,1),(1,2),(0,2)])
    }

    #[test]
    fn test_new_instance() {
        let inst = Instance::new(vec![vec![1,2], vec![0], vec![0]]);
        assert_eq!(inst.n(), 3);
        assert_eq!(inst.m(), 2);
        assert_eq!(inst.adj(0), &[1,2]);
        assert!(inst.are_adjacent(0,1));
        assert!(!inst.are_adjacent(1,2));
    }

    #[test]
    fn test_edges() {
        let inst = triangle();
        assert_eq!(inst.edges(), &[(0,1),(0,2),(1,2)]);
    }

    #[test]
    fn test_non_adjacent_pairs_path() {
        // path 0 - 1 - 2: the only non-edge is (0,2)
        let inst = Instance::from_edges(3, &[(0,1),(1,2)]);
        assert_eq!(inst.non_adjacent_pairs(), vec![(0,2)]);
    }

    #[test]
    fn test_non_adjacent_pairs_complete() {
        assert!(triangle().non_adjacent_pairs().is_empty());
    }

    #[test]
    fn test_non_adjacent_pairs_edgeless() {
        let inst = Instance::from_edges(3, &[]);
        assert_eq!(inst.non_adjacent_pairs(), vec![(0,1),(0,2),(1,2)]);
    }

    #[test]
    fn test_checker() {
        let inst = triangle();
        assert_eq!(checker(&inst, &[0,1,2]), Some(3));
        assert_eq!(checker(&inst, &[0,1]), Some(2));
        assert_eq!(checker(&inst, &[]), Some(0));
        assert_eq!(checker(&inst, &[0,0]), None); // repeated vertex
        let path = Instance::from_edges(3, &[(0,1),(1,2)]);
        assert_eq!(checker(&path, &[0,2]), None); // missing edge
    }
}
