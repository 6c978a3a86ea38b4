//! Errors surfaced by the depth-first algorithms.
//!
//! Two families are reported:
//! - precondition violations (a named vertex is missing), detected before any
//!   traversal work begins
//! - structural violations discovered mid-walk (a directed cycle, or an
//!   undirected graph with no designated sources)
//!
//! Misuse of extension points is not represented here; the payload set is
//! closed at the type level, so there is no runtime "unrecognized
//! representation" state to report.

use core::fmt;

/// The error type for `search`, `traverse` and `toposort`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraversalError {
    /// The start vertex (or a designated source/root) is not in the graph.
    StartVertexNotFound {
        /// `Debug` rendering of the missing vertex.
        vertex: String,
    },
    /// The search target is not in the graph.
    TargetVertexNotFound {
        /// `Debug` rendering of the missing vertex.
        vertex: String,
    },
    /// A back edge was observed while walking a directed graph.
    CycleDetected,
    /// Toposort on an undirected graph was called without sources.
    NoSources,
}

impl TraversalError {
    pub(crate) fn start_vertex(vertex: &impl fmt::Debug) -> Self {
        Self::StartVertexNotFound {
            vertex: format!("{vertex:?}"),
        }
    }

    pub(crate) fn target_vertex(vertex: &impl fmt::Debug) -> Self {
        Self::TargetVertexNotFound {
            vertex: format!("{vertex:?}"),
        }
    }

    /// Returns `true` for errors raised before any traversal work began.
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            Self::StartVertexNotFound { .. } | Self::TargetVertexNotFound { .. }
        )
    }
}

impl fmt::Display for TraversalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StartVertexNotFound { vertex } => {
                write!(f, "start vertex {vertex} is not present in the graph")
            }
            Self::TargetVertexNotFound { vertex } => {
                write!(f, "target vertex {vertex} is not present in the graph")
            }
            Self::CycleDetected => f.write_str("cycle detected in graph"),
            Self::NoSources => f.write_str("undirected graphs do not have sources"),
        }
    }
}

impl std::error::Error for TraversalError {}
