//! Greedy coloring heuristics for the relaxation cuts.
//!
//! Each heuristic produces a valid coloring (adjacent vertices get different
//! colors); every color class is an independent set, and a clique contains at
//! most one vertex of each, which is what makes the classes useful as LP
//! cuts. None of the heuristics needs to be optimal.

/// sequential greedy colorings (largest-first, random, connected BFS/DFS)
pub mod greedy;

/// saturation-based greedy coloring
pub mod dsatur;

/// independent-set-seeded coloring (RLF style)
pub mod independent_set;

use std::collections::HashSet;

use crate::instance::{Instance, VertexId};

/** a coloring, represented as a partition: classes[c] lists the vertices
with color c */
pub type Coloring = Vec<Vec<VertexId>>;

/// available coloring strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColoringStrategy {
    /// color vertices by decreasing degree
    LargestFirst,
    /// color vertices in a uniformly random order
    RandomSequential,
    /// grow one maximal independent set per color
    IndependentSet,
    /// color vertices component by component, BFS order
    ConnectedSequentialBfs,
    /// color vertices component by component, DFS order
    ConnectedSequentialDfs,
    /// color the vertex seeing the most colors first (DSATUR)
    SaturationLargestFirst,
}

/// strategies applied by default when building the relaxation
pub const DEFAULT_STRATEGIES: [ColoringStrategy; 6] = [
    ColoringStrategy::LargestFirst,
    ColoringStrategy::RandomSequential,
    ColoringStrategy::IndependentSet,
    ColoringStrategy::ConnectedSequentialBfs,
    ColoringStrategy::ConnectedSequentialDfs,
    ColoringStrategy::SaturationLargestFirst,
];

/// colors the instance with the given strategy
pub fn color_classes(inst: &Instance, strategy: ColoringStrategy) -> Coloring {
    match strategy {
        ColoringStrategy::LargestFirst => greedy::largest_first(inst),
        ColoringStrategy::RandomSequential => greedy::random_sequential(inst),
        ColoringStrategy::IndependentSet => independent_set::independent_set_seeded(inst),
        ColoringStrategy::ConnectedSequentialBfs =>
            greedy::connected_sequential(inst, greedy::Traversal::Bfs),
        ColoringStrategy::ConnectedSequentialDfs =>
            greedy::connected_sequential(inst, greedy::Traversal::Dfs),
        ColoringStrategy::SaturationLargestFirst => dsatur::saturation_largest_first(inst),
    }
}

/** collects the color classes of every strategy as independent sets.
identical classes appearing in several colorings are kept once; singleton
classes are dropped (the variable bounds already enforce them). members are
sorted by vertex id. */
pub fn independent_sets(inst: &Instance, strategies: &[ColoringStrategy]) -> Vec<Vec<VertexId>> {
    let mut known: HashSet<Vec<VertexId>> = HashSet::new();
    let mut res = Vec::new();
    for strategy in strategies {
        for mut class in color_classes(inst, *strategy) {
            if class.len() < 2 {
                continue;
            }
            class.sort_unstable();
            if known.insert(class.clone()) {
                res.push(class);
            }
        }
    }
    res
}


#[cfg(test)]
mod tests {
    use super::*;

    /// the Petersen graph (3-regular, chromatic number 3, clique number 2)
    fn petersen() -> Instance {
        Instance::from_edges(10, &[
            (0,1),(1,2),(2,3),(3,4),(4,0),
            (5,7),(7,9),(9,6),(6,8),(8,5),
            (0,5),(1,6),(2,7),(3,8),(4,9),
        ])
    }

    /// checks that the classes partition the vertex set and are conflict-free
    fn check_valid_coloring(inst: &Instance, classes: &Coloring) {
        let mut seen = vec![false; inst.n()];
        for class in classes {
            for v in class {
                assert!(!seen[*v], "vertex {} colored twice", v);
                seen[*v] = true;
            }
            for v1 in class {
                for v2 in class {
                    assert!(v1 == v2 || !inst.are_adjacent(*v1, *v2));
                }
            }
        }
        assert!(seen.iter().all(|b| *b), "some vertex is uncolored");
    }

    #[test]
    fn test_all_strategies_valid_on_petersen() {
        let inst = petersen();
        for strategy in &DEFAULT_STRATEGIES {
            let classes = color_classes(&inst, *strategy);
            check_valid_coloring(&inst, &classes);
        }
    }

    #[test]
    fn test_all_strategies_valid_on_path() {
        let inst = Instance::from_edges(3, &[(0,1),(1,2)]);
        for strategy in &DEFAULT_STRATEGIES {
            check_valid_coloring(&inst, &color_classes(&inst, *strategy));
        }
    }

    #[test]
    fn test_independent_sets_are_independent() {
        let inst = petersen();
        for set in independent_sets(&inst, &DEFAULT_STRATEGIES) {
            assert!(set.len() >= 2);
            for v1 in &set {
                for v2 in &set {
                    assert!(v1 == v2 || !inst.are_adjacent(*v1, *v2));
                }
            }
        }
    }

    #[test]
    fn test_independent_sets_deduplicated() {
        let inst = Instance::from_edges(3, &[(0,1),(1,2)]);
        // every deterministic strategy 2-colors the path into {0,2} / {1};
        // the duplicates collapse and the singleton is dropped
        let strategies = [ColoringStrategy::LargestFirst, ColoringStrategy::SaturationLargestFirst];
        let sets = independent_sets(&inst, &strategies);
        assert_eq!(sets, vec![vec![0, 2]]);
    }

    #[test]
    fn test_independent_sets_complete_graph() {
        // in a complete graph every class is a singleton: no cut survives
        let inst = Instance::from_edges(3, &[(0,1),(1,2),(0,2)]);
        assert!(independent_sets(&inst, &DEFAULT_STRATEGIES).is_empty());
    }

    #[test]
    fn test_independent_sets_empty_graph() {
        let inst = Instance::new(vec![]);
        assert!(independent_sets(&inst, &DEFAULT_STRATEGIES).is_empty());
    }
}
