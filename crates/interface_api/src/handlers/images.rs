//! Image upload handlers

use axum::{extract::State, Json};
use tracing::info;

use core_kernel::{ClaimId, ImageId, PortError};
use domain_claims::UploadedImage;

use crate::dto::images::UploadImageRequest;
use crate::dto::SuccessResponse;
use crate::error::ApiError;
use crate::extract::{ApiJson, ApiPath};
use crate::AppState;

/// Lists the images uploaded for a claim, in upload order
pub async fn list_images(
    State(state): State<AppState>,
    ApiPath(claim_id): ApiPath<ClaimId>,
) -> Result<Json<Vec<UploadedImage>>, ApiError> {
    Ok(Json(state.store.get_uploaded_images(claim_id).await?))
}

/// Records an uploaded image against a claim
pub async fn upload_image(
    State(state): State<AppState>,
    ApiPath(claim_id): ApiPath<ClaimId>,
    body: ApiJson<UploadImageRequest>,
) -> Result<Json<UploadedImage>, ApiError> {
    let new = body.validated()?.for_claim(claim_id);
    let image = state.store.create_uploaded_image(new).await?;

    info!(%claim_id, image_id = %image.id, filename = %image.filename, "Image uploaded");
    Ok(Json(image))
}

/// Deletes an uploaded image
pub async fn delete_image(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<ImageId>,
) -> Result<Json<SuccessResponse>, ApiError> {
    if !state.store.delete_uploaded_image(id).await? {
        return Err(PortError::not_found("Image", id).into());
    }

    info!(image_id = %id, "Image deleted");
    Ok(Json(SuccessResponse::ok()))
}
