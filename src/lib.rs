//! Exact maximum clique solver based on branch-and-bound over an LP relaxation
//! strengthened by coloring-derived independent-set cuts.

// #![warn(clippy::all, clippy::pedantic)]
// useful additional warnings if docs are missing, or crates imported but unused, etc.
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unsafe_code)]
#![warn(unused_extern_crates)]
#![warn(variant_size_differences)]

// not sure if already by default in clippy
#![warn(clippy::similar_names)]
#![warn(clippy::shadow_unrelated)]
#![warn(clippy::shadow_same)]
#![warn(clippy::shadow_reuse)]


/// error types (input parsing, CLI configuration)
pub mod error;

/// read DIMACS graph files
pub mod dimacs;

/// clique instance base type and checker
pub mod instance;

/// greedy coloring heuristics producing independent sets
pub mod coloring;

/// LP relaxation of the maximum clique problem
pub mod relaxation;

/// LP solver interface and simplex-backed implementation
pub mod lp;

/// branch-and-bound search for the maximum clique
pub mod search;

/// helper and utility methods for executables
pub mod util;
