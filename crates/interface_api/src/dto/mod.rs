//! Request and response bodies

pub mod claims;
pub mod images;

use serde::{Deserialize, Serialize};

/// Body returned by operations that have nothing else to report
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}
