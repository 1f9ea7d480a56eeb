//! Claims handlers

use axum::{extract::State, http::StatusCode, Json};
use tracing::info;

use core_kernel::ClaimId;
use domain_claims::{Claim, ClaimError};

use crate::dto::claims::{CreateClaimRequest, UpdateClaimRequest};
use crate::error::ApiError;
use crate::extract::{ApiJson, ApiPath};
use crate::AppState;

/// Lists every claim, oldest id first
pub async fn list_claims(State(state): State<AppState>) -> Result<Json<Vec<Claim>>, ApiError> {
    Ok(Json(state.store.list_claims().await?))
}

/// Opens a new claim
pub async fn create_claim(
    State(state): State<AppState>,
    body: ApiJson<CreateClaimRequest>,
) -> Result<(StatusCode, Json<Claim>), ApiError> {
    let new = body.validated()?.into_new_claim();
    let claim = state.store.create_claim(new).await?;

    info!(claim_id = %claim.id, claim_number = %claim.claim_number, "Claim opened");
    Ok((StatusCode::CREATED, Json(claim)))
}

/// Gets a claim by ID
pub async fn get_claim(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<ClaimId>,
) -> Result<Json<Claim>, ApiError> {
    let claim = state
        .store
        .get_claim(id)
        .await?
        .ok_or(ClaimError::ClaimNotFound(id))?;

    Ok(Json(claim))
}

/// Applies a partial update to a claim
pub async fn update_claim(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<ClaimId>,
    body: ApiJson<UpdateClaimRequest>,
) -> Result<Json<Claim>, ApiError> {
    let patch = body.validated()?.into_patch();
    let claim = state
        .store
        .update_claim(id, patch)
        .await?
        .ok_or(ClaimError::ClaimNotFound(id))?;

    info!(claim_id = %id, status = %claim.status, "Claim updated");
    Ok(Json(claim))
}
