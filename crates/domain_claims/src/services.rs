//! Claims domain services
//!
//! This module contains domain services that orchestrate operations
//! spanning the store and the analysis provider.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use core_kernel::ClaimId;

use crate::analysis::AnalysisProvider;
use crate::assessment::DamageAssessment;
use crate::error::ClaimError;
use crate::estimation::CostEstimation;
use crate::ports::ClaimsPort;

/// Stored result of one analysis run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub assessment: DamageAssessment,
    pub estimation: CostEstimation,
}

/// Service that runs damage analysis for a claim
///
/// Holds the store and the provider behind trait objects, so it is cheap
/// to clone into request handlers.
#[derive(Clone)]
pub struct ClaimAnalysisService {
    store: Arc<dyn ClaimsPort>,
    provider: Arc<dyn AnalysisProvider>,
}

impl ClaimAnalysisService {
    /// Creates a new analysis service
    ///
    /// # Arguments
    ///
    /// * `store` - Where claims, images and results live
    /// * `provider` - What produces the assessment
    pub fn new(store: Arc<dyn ClaimsPort>, provider: Arc<dyn AnalysisProvider>) -> Self {
        Self { store, provider }
    }

    /// Analyzes the uploaded photos of a claim and stores the result
    ///
    /// This method:
    /// 1. Loads the claim and its uploaded images
    /// 2. Asks the provider for an assessment and estimation
    /// 3. Validates the provider output
    /// 4. Stores both records in one store operation, replacing any
    ///    earlier analysis of the claim
    ///
    /// The store is not locked while the provider runs.
    ///
    /// # Errors
    ///
    /// * `ClaimNotFound` - no claim has this id
    /// * `NoImagesUploaded` - the claim has no photos to analyze
    /// * `InvalidAnalysis` - the provider returned inconsistent data
    /// * `Port` - the store failed
    pub async fn analyze(&self, claim_id: ClaimId) -> Result<AnalysisResult, ClaimError> {
        let claim = self
            .store
            .get_claim(claim_id)
            .await?
            .ok_or(ClaimError::ClaimNotFound(claim_id))?;

        let images = self.store.get_uploaded_images(claim_id).await?;
        if images.is_empty() {
            warn!(%claim_id, "Analysis requested before any image was uploaded");
            return Err(ClaimError::NoImagesUploaded(claim_id));
        }

        info!(
            %claim_id,
            provider = self.provider.name(),
            images = images.len(),
            "Starting damage analysis"
        );

        let outcome = self.provider.analyze(&claim, &images).await?;
        if outcome.assessment.claim_id != claim_id {
            return Err(ClaimError::InvalidAnalysis(format!(
                "provider answered for {} instead of {}",
                outcome.assessment.claim_id, claim_id
            )));
        }
        outcome.check()?;

        let (assessment, estimation) = self
            .store
            .record_analysis(outcome.assessment, outcome.estimation)
            .await?;

        info!(
            %claim_id,
            assessment_id = %assessment.id,
            estimation_id = %estimation.id,
            total = estimation.total,
            "Damage analysis stored"
        );

        Ok(AnalysisResult { assessment, estimation })
    }
}
