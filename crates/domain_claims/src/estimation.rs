//! Repair cost estimations

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{ClaimId, EstimationId};

use crate::error::ClaimError;

/// Repair cost breakdown in whole currency units
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostEstimation {
    pub id: EstimationId,
    pub claim_id: ClaimId,
    pub bumper_repair: u32,
    pub paintwork: u32,
    pub headlight: u32,
    pub miscellaneous: u32,
    pub total: u32,
    pub low_estimate: u32,
    pub high_estimate: u32,
    /// Free text, e.g. `4-6 business days`
    pub completion_time: String,
    pub created_at: DateTime<Utc>,
}

/// Fields supplied when recording an estimation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCostEstimation {
    pub claim_id: ClaimId,
    pub bumper_repair: u32,
    pub paintwork: u32,
    pub headlight: u32,
    pub miscellaneous: u32,
    pub total: u32,
    pub low_estimate: u32,
    pub high_estimate: u32,
    pub completion_time: String,
}

/// Line items of a repair estimate, before totals are derived
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CostBreakdown {
    pub bumper_repair: u32,
    pub paintwork: u32,
    pub headlight: u32,
    pub miscellaneous: u32,
}

impl CostBreakdown {
    /// Sum of all line items, or `None` if it does not fit in a `u32`
    pub fn total(&self) -> Option<u32> {
        self.bumper_repair
            .checked_add(self.paintwork)?
            .checked_add(self.headlight)?
            .checked_add(self.miscellaneous)
    }
}

impl NewCostEstimation {
    /// Builds an estimation whose total is the sum of its line items
    ///
    /// A sum that overflows is recorded as `u32::MAX` and fails [`check`](Self::check).
    pub fn from_breakdown(
        claim_id: ClaimId,
        breakdown: CostBreakdown,
        low_estimate: u32,
        high_estimate: u32,
        completion_time: impl Into<String>,
    ) -> Self {
        Self {
            claim_id,
            bumper_repair: breakdown.bumper_repair,
            paintwork: breakdown.paintwork,
            headlight: breakdown.headlight,
            miscellaneous: breakdown.miscellaneous,
            total: breakdown.total().unwrap_or(u32::MAX),
            low_estimate,
            high_estimate,
            completion_time: completion_time.into(),
        }
    }

    /// Line items of this estimation
    pub fn breakdown(&self) -> CostBreakdown {
        CostBreakdown {
            bumper_repair: self.bumper_repair,
            paintwork: self.paintwork,
            headlight: self.headlight,
            miscellaneous: self.miscellaneous,
        }
    }

    /// Checks the total against the line items and the estimate range
    pub fn check(&self) -> Result<(), ClaimError> {
        let Some(sum) = self.breakdown().total() else {
            return Err(ClaimError::InvalidAnalysis(format!(
                "line items of {:?} overflow the total",
                self.breakdown()
            )));
        };
        if self.total != sum {
            return Err(ClaimError::InvalidAnalysis(format!(
                "total {} does not match line items {}",
                self.total, sum
            )));
        }
        if !(self.low_estimate <= self.total && self.total <= self.high_estimate) {
            return Err(ClaimError::InvalidAnalysis(format!(
                "total {} outside estimate range {}..={}",
                self.total, self.low_estimate, self.high_estimate
            )));
        }
        Ok(())
    }
}

impl CostEstimation {
    /// Stamps an estimation with its id and the current time
    pub fn record(id: EstimationId, new: NewCostEstimation) -> Self {
        Self {
            id,
            claim_id: new.claim_id,
            bumper_repair: new.bumper_repair,
            paintwork: new.paintwork,
            headlight: new.headlight,
            miscellaneous: new.miscellaneous,
            total: new.total,
            low_estimate: new.low_estimate,
            high_estimate: new.high_estimate,
            completion_time: new.completion_time,
            created_at: Utc::now(),
        }
    }
}
