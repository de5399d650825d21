//! Core traits for Pegasus geometric types.

use crate::error::Result;

/// Trait for types that can validate their internal state.
pub trait Validatable {
    /// Validate the object's state.
    ///
    /// # Errors
    /// Returns [`PegasusError::Validation`](crate::error::PegasusError::Validation)
    /// if validation fails.
    fn validate(&self) -> Result<()>;

    /// Check if the object is valid without returning an error.
    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}
