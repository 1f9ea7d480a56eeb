//! Claims DTOs

use serde::Deserialize;
use validator::Validate;

use domain_claims::{ClaimPatch, ClaimStatus, NewClaim};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateClaimRequest {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub claim_number: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub policyholder: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub policy_number: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub vehicle: String,
    /// Any non-empty status; defaults to `initiated`
    #[validate(length(min = 1, message = "must not be empty"))]
    pub status: Option<String>,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub agent_name: String,
}

impl CreateClaimRequest {
    /// Converts the request into domain input
    pub fn into_new_claim(self) -> NewClaim {
        NewClaim {
            claim_number: self.claim_number,
            policyholder: self.policyholder,
            policy_number: self.policy_number,
            vehicle: self.vehicle,
            status: self.status.map(ClaimStatus::from),
            agent_name: self.agent_name,
        }
    }
}

/// Partial claim update; omitted fields stay as they are
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateClaimRequest {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub claim_number: Option<String>,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub policyholder: Option<String>,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub policy_number: Option<String>,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub vehicle: Option<String>,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub status: Option<String>,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub agent_name: Option<String>,
}

impl UpdateClaimRequest {
    /// Converts the request into a patch
    pub fn into_patch(self) -> ClaimPatch {
        ClaimPatch {
            claim_number: self.claim_number,
            policyholder: self.policyholder,
            policy_number: self.policy_number,
            vehicle: self.vehicle,
            status: self.status.map(ClaimStatus::from),
            agent_name: self.agent_name,
        }
    }
}
