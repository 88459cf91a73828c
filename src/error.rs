//! Error type surfaced to callers of the Voronoi builder.
//!
//! None of these are recovered internally (§7 of the design notes): a
//! pathological input surfaces synchronously so the caller can report a
//! diagnostic and retry with perturbed input, rather than the core silently
//! substituting NaN or a partially built diagram.

use thiserror::Error;

/// Errors produced while constructing or processing a [`crate::Voronoi`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum VoronoiError {
    /// No sites were supplied to the builder.
    #[error("no sites supplied")]
    InputEmpty,

    /// A floating-point predicate degenerated: division by zero in the
    /// parabola intersection, a negative discriminant, or an otherwise
    /// pathological beachline walk. Typically caused by duplicated or
    /// exactly cocircular sites; retrying with a small y-perturbation
    /// usually avoids it.
    #[error("numeric degeneracy: {0}")]
    NumericDegeneracy(String),

    /// An event queue was popped or peeked while empty. This indicates an
    /// internal invariant failure in the sweep driver, not an input
    /// condition.
    #[error("event queue popped while empty")]
    QueuePopEmpty,
}

/// Convenience alias for fallible operations on a [`crate::Voronoi`].
pub type Result<T> = std::result::Result<T, VoronoiError>;
