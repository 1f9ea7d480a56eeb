//! Damage analysis handlers

use axum::{extract::State, Json};

use core_kernel::ClaimId;
use domain_claims::{AnalysisResult, CostEstimation, DamageAssessment};

use crate::error::ApiError;
use crate::extract::ApiPath;
use crate::AppState;

/// Runs the damage analysis for a claim
///
/// Responds once the provider has finished, which takes a few seconds
/// with the simulated provider.
pub async fn analyze_claim(
    State(state): State<AppState>,
    ApiPath(claim_id): ApiPath<ClaimId>,
) -> Result<Json<AnalysisResult>, ApiError> {
    Ok(Json(state.analysis.analyze(claim_id).await?))
}

/// Gets the latest damage assessment, or `null` if none was made
pub async fn get_assessment(
    State(state): State<AppState>,
    ApiPath(claim_id): ApiPath<ClaimId>,
) -> Result<Json<Option<DamageAssessment>>, ApiError> {
    Ok(Json(state.store.get_damage_assessment(claim_id).await?))
}

/// Gets the latest cost estimation, or `null` if none was made
pub async fn get_estimation(
    State(state): State<AppState>,
    ApiPath(claim_id): ApiPath<ClaimId>,
) -> Result<Json<Option<CostEstimation>>, ApiError> {
    Ok(Json(state.store.get_cost_estimation(claim_id).await?))
}
