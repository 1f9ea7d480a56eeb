//! Image upload DTOs

use serde::Deserialize;
use validator::Validate;

use core_kernel::ClaimId;
use domain_claims::NewUploadedImage;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UploadImageRequest {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub filename: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub file_size: String,
}

impl UploadImageRequest {
    pub fn for_claim(self, claim_id: ClaimId) -> NewUploadedImage {
        NewUploadedImage {
            claim_id,
            filename: self.filename,
            file_size: self.file_size,
        }
    }
}
