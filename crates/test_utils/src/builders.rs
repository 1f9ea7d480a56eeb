//! Test Data Builders
//!
//! Provides builder patterns for constructing test data with sensible defaults.
//! These builders allow tests to specify only the relevant fields while using
//! defaults for everything else.

use core_kernel::ClaimId;
use domain_claims::{
    ClaimStatus, CostBreakdown, DamageItem, NewClaim, NewCostEstimation, NewDamageAssessment, Severity,
};

use crate::fixtures::ClaimFixtures;

/// Builder for constructing new-claim payloads
pub struct TestClaimBuilder {
    claim: NewClaim,
}

impl Default for TestClaimBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestClaimBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            claim: ClaimFixtures::new_claim(),
        }
    }

    /// Sets the claim number
    pub fn with_claim_number(mut self, number: impl Into<String>) -> Self {
        self.claim.claim_number = number.into();
        self
    }

    /// Sets the policyholder
    pub fn with_policyholder(mut self, name: impl Into<String>) -> Self {
        self.claim.policyholder = name.into();
        self
    }

    /// Sets the vehicle
    pub fn with_vehicle(mut self, vehicle: impl Into<String>) -> Self {
        self.claim.vehicle = vehicle.into();
        self
    }

    /// Sets an explicit status
    pub fn with_status(mut self, status: ClaimStatus) -> Self {
        self.claim.status = Some(status);
        self
    }

    /// Builds the payload
    pub fn build(self) -> NewClaim {
        self.claim
    }
}

/// Builder for damage assessment payloads
pub struct TestAssessmentBuilder {
    assessment: NewDamageAssessment,
}

impl TestAssessmentBuilder {
    /// Creates a builder for the given claim with one moderate dent
    pub fn for_claim(claim_id: ClaimId) -> Self {
        Self {
            assessment: NewDamageAssessment {
                claim_id,
                confidence: 80,
                damage_items: vec![DamageItem::new("Rear Door", Severity::Moderate, "Left rear door", 0.81)],
                recommendations: vec!["Repair and repaint left rear door".to_string()],
                analysis_complete: None,
            },
        }
    }

    /// Sets the overall confidence
    pub fn with_confidence(mut self, confidence: u8) -> Self {
        self.assessment.confidence = confidence;
        self
    }

    /// Adds a damage item
    pub fn with_item(mut self, item: DamageItem) -> Self {
        self.assessment.damage_items.push(item);
        self
    }

    /// Marks the analysis complete
    pub fn complete(mut self) -> Self {
        self.assessment.analysis_complete = Some(true);
        self
    }

    /// Builds the payload
    pub fn build(self) -> NewDamageAssessment {
        self.assessment
    }
}

/// Builder for cost estimation payloads
pub struct TestEstimationBuilder {
    claim_id: ClaimId,
    breakdown: CostBreakdown,
    spread: u32,
    completion_time: String,
}

impl TestEstimationBuilder {
    /// Creates a builder for the given claim
    pub fn for_claim(claim_id: ClaimId) -> Self {
        Self {
            claim_id,
            breakdown: CostBreakdown {
                bumper_repair: 0,
                paintwork: 400,
                headlight: 0,
                miscellaneous: 100,
            },
            spread: 100,
            completion_time: "2-3 business days".to_string(),
        }
    }

    /// Sets the line items
    pub fn with_breakdown(mut self, breakdown: CostBreakdown) -> Self {
        self.breakdown = breakdown;
        self
    }

    /// Builds the payload; the range is the total plus or minus the spread
    pub fn build(self) -> NewCostEstimation {
        let total = self.breakdown.total().unwrap_or(u32::MAX);
        NewCostEstimation::from_breakdown(
            self.claim_id,
            self.breakdown,
            total.saturating_sub(self.spread),
            total.saturating_add(self.spread),
            self.completion_time,
        )
    }
}
