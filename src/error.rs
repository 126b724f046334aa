//! Error types for instance loading and executable configuration.
//!
//! LP failures at a search node are deliberately not here: they are local to
//! the search (an infeasible node is pruned, never reported as an error) and
//! live in [`crate::lp::LpFailure`].

use thiserror::Error;

/// Errors raised while reading a DIMACS graph file.
#[derive(Error, Debug)]
pub enum GraphParseError {
    /// The file could not be read at all
    #[error("unable to read {path}: {source}")]
    Io {
        /// path of the offending file
        path: String,
        /// underlying io error
        #[source]
        source: std::io::Error,
    },

    /// No `p <name> <n> <m>` line found
    #[error("no problem line found")]
    MissingHeader,

    /// More than one `p` line found
    #[error("several problem lines found")]
    DuplicateHeader,

    /// A `p` or `e` line that does not match the format
    #[error("malformed line: {0:?}")]
    MalformedLine(String),

    /// An edge endpoint outside `1..=n`
    #[error("edge ({u},{v}) out of range (the graph has {n} vertices)")]
    VertexOutOfRange {
        /// first endpoint (as written in the file)
        u: usize,
        /// second endpoint (as written in the file)
        v: usize,
        /// declared number of vertices
        n: usize,
    },

    /// An edge joining a vertex to itself (the graph must be simple)
    #[error("self-loop on vertex {0}")]
    SelfLoop(usize),
}

/// Errors raised while reading command-line parameters.
#[derive(Error, Debug)]
pub enum ConfigurationError {
    /// A required argument is absent
    #[error("missing required argument: {0}")]
    MissingArgument(&'static str),

    /// An argument value that cannot be parsed
    #[error("unable to parse {name}: {value:?}")]
    InvalidValue {
        /// argument name
        name: &'static str,
        /// the rejected value
        value: String,
    },
}
