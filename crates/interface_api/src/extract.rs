//! Request extractors that reject with [`ApiError`]
//!
//! Axum's own `Json` and `Path` reject with plain-text bodies; these
//! wrappers keep every failure in the `{"error", "message"}` shape.

use axum::extract::{FromRequest, FromRequestParts};
use validator::Validate;

use crate::error::ApiError;

/// JSON body extractor
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// Path parameter extractor
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct ApiPath<T>(pub T);

impl<T: Validate> ApiJson<T> {
    /// Runs the body's field validators and unwraps it
    pub fn validated(self) -> Result<T, ApiError> {
        self.0.validate()?;
        Ok(self.0)
    }
}
