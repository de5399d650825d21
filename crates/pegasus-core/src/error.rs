//! Central error types for the Pegasus collision core.
//!
//! The core is pure computation, so error kinds are few. Degenerate
//! geometry encountered inside the intersection engines (parallel rays,
//! parallel planes) is reported as a miss rather than an error; only
//! programmer errors and invalid input data surface here.

use crate::shapes::ShapeType;
use thiserror::Error;

/// Result type alias for Pegasus operations.
pub type Result<T> = std::result::Result<T, PegasusError>;

/// Central error type for the collision core.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PegasusError {
    /// An ordered shape-type pair with no registered intersection engine.
    ///
    /// This is a programmer error, not a runtime condition: the engine
    /// set is fixed at construction.
    #[error("no intersection engine registered for shape pair ({first:?}, {second:?})")]
    UnsupportedShapePair {
        /// Tag of the first shape of the ordered pair.
        first: ShapeType,
        /// Tag of the second shape of the ordered pair.
        second: ShapeType,
    },

    /// Validation failure for input data.
    #[error("validation error: {0}")]
    Validation(String),
}
