//! Damage photos uploaded against a claim

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{ClaimId, ImageId};

/// Record of an uploaded damage photo
///
/// Only metadata is kept; the file itself lives with the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedImage {
    pub id: ImageId,
    pub claim_id: ClaimId,
    pub filename: String,
    /// Human-readable size, e.g. `2.4 MB`
    pub file_size: String,
    pub uploaded_at: DateTime<Utc>,
}

/// Fields supplied when recording an upload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUploadedImage {
    pub claim_id: ClaimId,
    pub filename: String,
    pub file_size: String,
}

impl UploadedImage {
    /// Stamps an upload with its id and the current time
    pub fn record(id: ImageId, new: NewUploadedImage) -> Self {
        Self {
            id,
            claim_id: new.claim_id,
            filename: new.filename,
            file_size: new.file_size,
            uploaded_at: Utc::now(),
        }
    }
}
