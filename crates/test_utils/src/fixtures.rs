//! Pre-built Test Fixtures
//!
//! Provides ready-to-use test data for common entities. These fixtures are
//! consistent and predictable for unit tests.

use chrono::{DateTime, TimeZone, Utc};
use core_kernel::ClaimId;
use domain_claims::{ClaimPatch, ClaimStatus, NewClaim, NewUploadedImage, NewUser};

/// Fixture for claim test data
pub struct ClaimFixtures;

impl ClaimFixtures {
    /// The claim seeded as id 1 in the demo store
    pub fn demo_claim_id() -> ClaimId {
        ClaimId::new(1)
    }

    /// A fresh claim with no status, so the default applies
    pub fn new_claim() -> NewClaim {
        NewClaim {
            claim_number: "CLM-2024-002001".to_string(),
            policyholder: "Priya Natarajan".to_string(),
            policy_number: "POL-445566778".to_string(),
            vehicle: "2022 Subaru Outback".to_string(),
            status: None,
            agent_name: "Sarah Johnson".to_string(),
        }
    }

    /// Patch that approves a claim
    pub fn approve() -> ClaimPatch {
        ClaimPatch::status(ClaimStatus::Approved)
    }
}

/// Fixture for uploaded image test data
pub struct ImageFixtures;

impl ImageFixtures {
    /// The upload used in the image round-trip scenario
    pub fn upload(claim_id: ClaimId) -> NewUploadedImage {
        NewUploadedImage {
            claim_id,
            filename: "x.jpg".to_string(),
            file_size: "2.4 MB".to_string(),
        }
    }

    /// An upload with a specific file name
    pub fn named(claim_id: ClaimId, filename: impl Into<String>) -> NewUploadedImage {
        NewUploadedImage {
            claim_id,
            filename: filename.into(),
            file_size: "1.8 MB".to_string(),
        }
    }
}

/// Fixture for user test data
pub struct UserFixtures;

impl UserFixtures {
    /// The demo agent account
    pub fn agent() -> NewUser {
        NewUser {
            username: "sjohnson".to_string(),
            password: "correct-horse-battery".to_string(),
        }
    }
}

/// Fixture for temporal test data
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// A timestamp well before any test runs
    pub fn long_ago() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap()
    }
}
