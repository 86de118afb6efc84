//! Error types for pixel operations.

use thiserror::Error;

/// Error type for pixel operations.
#[derive(Error, Debug)]
pub enum OpsError {
    /// Scale factor is not a positive finite number.
    #[error("invalid scale factor: {factor}")]
    InvalidScale {
        /// The rejected factor
        factor: f64,
    },

    /// Failure propagated from grid allocation or access.
    #[error(transparent)]
    Core(#[from] raster_core::Error),
}

/// Result type for pixel operations.
pub type OpsResult<T> = Result<T, OpsError>;
