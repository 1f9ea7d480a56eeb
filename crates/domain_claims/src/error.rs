//! Claims domain errors

use thiserror::Error;

use core_kernel::{ClaimId, PortError};

/// Errors that can occur in the claims domain
#[derive(Debug, Error)]
pub enum ClaimError {
    #[error("Claim not found: {0}")]
    ClaimNotFound(ClaimId),

    #[error("No images uploaded for claim {0}")]
    NoImagesUploaded(ClaimId),

    #[error("Analysis provider unavailable: {0}")]
    AnalysisUnavailable(String),

    #[error("Analysis produced an invalid result: {0}")]
    InvalidAnalysis(String),

    #[error(transparent)]
    Port(#[from] PortError),
}

impl ClaimError {
    /// Returns true if the error was caused by the request rather than the system
    pub fn is_client_error(&self) -> bool {
        match self {
            ClaimError::ClaimNotFound(_) | ClaimError::NoImagesUploaded(_) => true,
            ClaimError::Port(err) => err.is_not_found() || err.is_validation(),
            ClaimError::AnalysisUnavailable(_) | ClaimError::InvalidAnalysis(_) => false,
        }
    }
}
