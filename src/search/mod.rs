//! Branch-and-bound search for the maximum clique.

/// LP-based branch-and-bound engine
pub mod clique_bnb;
