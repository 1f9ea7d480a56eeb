//! Damage analysis providers
//!
//! An [`AnalysisProvider`] turns a claim and its photos into a damage
//! assessment and a repair estimate. The only implementation shipped is
//! [`SimulatedAnalysisProvider`], which waits a fixed delay and returns a
//! canned front-right collision result. A model-backed provider plugs in
//! behind the same trait.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use core_kernel::ClaimId;

use crate::assessment::{DamageItem, NewDamageAssessment, Severity};
use crate::claim::Claim;
use crate::error::ClaimError;
use crate::estimation::{CostBreakdown, NewCostEstimation};
use crate::image::UploadedImage;

/// Default latency of the simulated provider
pub const DEFAULT_ANALYSIS_DELAY: Duration = Duration::from_millis(3000);

/// Unsaved output of one analysis run
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisOutcome {
    pub assessment: NewDamageAssessment,
    pub estimation: NewCostEstimation,
}

impl AnalysisOutcome {
    /// Validates both halves and checks they reference the same claim
    pub fn check(&self) -> Result<(), ClaimError> {
        if self.assessment.claim_id != self.estimation.claim_id {
            return Err(ClaimError::InvalidAnalysis(format!(
                "assessment for {} paired with estimation for {}",
                self.assessment.claim_id, self.estimation.claim_id
            )));
        }
        self.assessment.check()?;
        self.estimation.check()?;
        Ok(())
    }
}

/// Capability that analyzes damage photos of a claim
#[async_trait]
pub trait AnalysisProvider: Send + Sync + 'static {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Produces an assessment and estimation for the claim
    ///
    /// Implementations must not persist anything; the caller stores the
    /// outcome.
    async fn analyze(&self, claim: &Claim, images: &[UploadedImage]) -> Result<AnalysisOutcome, ClaimError>;
}

/// Fixed-response provider standing in for a vision model
#[derive(Debug, Clone)]
pub struct SimulatedAnalysisProvider {
    delay: Duration,
}

impl SimulatedAnalysisProvider {
    /// Creates a provider that responds after `delay`
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Creates a provider that responds immediately
    pub fn instant() -> Self {
        Self::new(Duration::ZERO)
    }

    /// Configured latency
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// The canned result for a front-right collision
    pub fn sample_outcome(claim_id: ClaimId) -> AnalysisOutcome {
        let damage_items = vec![
            DamageItem::new(
                "Front Right Headlight Housing",
                Severity::Severe,
                "Right front headlight assembly",
                0.97,
            ),
            DamageItem::new(
                "Front Right Body Panel",
                Severity::Moderate,
                "Right front quarter panel",
                0.94,
            ),
            DamageItem::new(
                "Front Bumper Corner",
                Severity::Minor,
                "Right front bumper corner",
                0.89,
            ),
        ];

        let recommendations = vec![
            "Replace right front headlight assembly with OEM parts".to_string(),
            "Professional body panel repair and paint matching required".to_string(),
            "Minor bumper corner repair can be completed with existing work".to_string(),
        ];

        let breakdown = CostBreakdown {
            bumper_repair: 320,
            paintwork: 650,
            headlight: 480,
            miscellaneous: 150,
        };

        AnalysisOutcome {
            assessment: NewDamageAssessment {
                claim_id,
                confidence: 94,
                damage_items,
                recommendations,
                analysis_complete: Some(true),
            },
            estimation: NewCostEstimation::from_breakdown(
                claim_id,
                breakdown,
                1450,
                1750,
                "4-6 business days",
            ),
        }
    }
}

impl Default for SimulatedAnalysisProvider {
    fn default() -> Self {
        Self::new(DEFAULT_ANALYSIS_DELAY)
    }
}

#[async_trait]
impl AnalysisProvider for SimulatedAnalysisProvider {
    fn name(&self) -> &'static str {
        "simulated"
    }

    async fn analyze(&self, claim: &Claim, images: &[UploadedImage]) -> Result<AnalysisOutcome, ClaimError> {
        debug!(
            claim_id = %claim.id,
            images = images.len(),
            delay = ?self.delay,
            "Simulating damage analysis"
        );

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        Ok(Self::sample_outcome(claim.id))
    }
}
