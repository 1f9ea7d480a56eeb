//! Claim aggregate

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use core_kernel::ClaimId;

/// Claim status
///
/// The named variants are the statuses the claims UI knows about. Any other
/// value is kept verbatim in [`ClaimStatus::Other`], so agents can record
/// statuses the backend has no special handling for.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ClaimStatus {
    /// Claim opened, nothing submitted yet
    #[default]
    Initiated,
    /// Agent is collecting photos and details
    InProgress,
    /// Assessment reviewed by the agent
    Reviewed,
    /// Approved for repair
    Approved,
    /// Rejected
    Rejected,
    /// Waiting on a supervisor sign-off
    PendingApproval,
    /// Under review by the carrier
    UnderReview,
    /// Saved but not submitted
    Draft,
    /// Any status without a named variant
    Other(String),
}

impl ClaimStatus {
    /// Named statuses, in lifecycle order
    pub const ALL: [ClaimStatus; 8] = [
        ClaimStatus::Draft,
        ClaimStatus::Initiated,
        ClaimStatus::InProgress,
        ClaimStatus::UnderReview,
        ClaimStatus::Reviewed,
        ClaimStatus::PendingApproval,
        ClaimStatus::Approved,
        ClaimStatus::Rejected,
    ];

    /// Wire name of the status
    pub fn as_str(&self) -> &str {
        match self {
            ClaimStatus::Initiated => "initiated",
            ClaimStatus::InProgress => "in_progress",
            ClaimStatus::Reviewed => "reviewed",
            ClaimStatus::Approved => "approved",
            ClaimStatus::Rejected => "rejected",
            ClaimStatus::PendingApproval => "pending_approval",
            ClaimStatus::UnderReview => "under_review",
            ClaimStatus::Draft => "draft",
            ClaimStatus::Other(status) => status,
        }
    }

    /// Whether the claim has reached a decision
    pub fn is_decided(&self) -> bool {
        matches!(self, ClaimStatus::Approved | ClaimStatus::Rejected)
    }
}

impl fmt::Display for ClaimStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for ClaimStatus {
    fn from(s: &str) -> Self {
        ClaimStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .unwrap_or_else(|| ClaimStatus::Other(s.to_string()))
    }
}

impl From<String> for ClaimStatus {
    fn from(s: String) -> Self {
        ClaimStatus::from(s.as_str())
    }
}

impl From<ClaimStatus> for String {
    fn from(status: ClaimStatus) -> Self {
        match status {
            ClaimStatus::Other(status) => status,
            named => named.as_str().to_string(),
        }
    }
}

impl FromStr for ClaimStatus {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ClaimStatus::from(s))
    }
}

/// A vehicle damage claim
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claim {
    /// Unique identifier
    pub id: ClaimId,
    /// Human-facing claim number, e.g. `CLM-2024-001537`
    pub claim_number: String,
    /// Name of the insured
    pub policyholder: String,
    /// Policy number
    pub policy_number: String,
    /// Vehicle description, e.g. `2021 Honda Accord`
    pub vehicle: String,
    /// Status
    pub status: ClaimStatus,
    /// Handling agent
    pub agent_name: String,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

/// Fields supplied when opening a claim
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewClaim {
    pub claim_number: String,
    pub policyholder: String,
    pub policy_number: String,
    pub vehicle: String,
    /// Defaults to [`ClaimStatus::Initiated`]
    #[serde(default)]
    pub status: Option<ClaimStatus>,
    pub agent_name: String,
}

/// Partial update of a claim; absent fields are left untouched
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimPatch {
    pub claim_number: Option<String>,
    pub policyholder: Option<String>,
    pub policy_number: Option<String>,
    pub vehicle: Option<String>,
    pub status: Option<ClaimStatus>,
    pub agent_name: Option<String>,
}

impl ClaimPatch {
    /// Creates a patch that only changes the status
    pub fn status(status: ClaimStatus) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }

    /// Returns true if the patch changes no field
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl Claim {
    /// Opens a claim from caller-supplied fields
    pub fn open(id: ClaimId, new: NewClaim) -> Self {
        let now = Utc::now();

        Self {
            id,
            claim_number: new.claim_number,
            policyholder: new.policyholder,
            policy_number: new.policy_number,
            vehicle: new.vehicle,
            status: new.status.unwrap_or_default(),
            agent_name: new.agent_name,
            created_at: now,
            updated_at: now,
        }
    }

    /// Merges a partial update and stamps `updated_at`
    ///
    /// `updated_at` always moves forward, even when the clock has not
    /// ticked since the previous write.
    pub fn apply(&mut self, patch: ClaimPatch) {
        if let Some(claim_number) = patch.claim_number {
            self.claim_number = claim_number;
        }
        if let Some(policyholder) = patch.policyholder {
            self.policyholder = policyholder;
        }
        if let Some(policy_number) = patch.policy_number {
            self.policy_number = policy_number;
        }
        if let Some(vehicle) = patch.vehicle {
            self.vehicle = vehicle;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(agent_name) = patch.agent_name {
            self.agent_name = agent_name;
        }
        self.updated_at = advance(self.updated_at);
    }
}

fn advance(previous: DateTime<Utc>) -> DateTime<Utc> {
    let now = Utc::now();
    if now > previous {
        now
    } else {
        previous + Duration::microseconds(1)
    }
}
