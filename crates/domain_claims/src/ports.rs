//! Claims Domain Ports
//!
//! This module defines the storage port for the claims domain. Application
//! services and HTTP handlers depend on [`ClaimsPort`] only, so the backing
//! adapter (in-memory today) can be swapped without touching callers.
//!
//! # Usage
//!
//! ```rust,ignore
//! use domain_claims::ports::ClaimsPort;
//! use std::sync::Arc;
//!
//! let store: Arc<dyn ClaimsPort> = Arc::new(InMemoryClaimsStore::with_sample_data());
//! let claim = store.get_claim(ClaimId::new(1)).await?;
//! ```
//!
//! # Conventions
//!
//! - Lookups return `Ok(None)` (or an empty `Vec`) when nothing matches;
//!   absence is not an error.
//! - Create operations assign the identifier and timestamps.
//! - `claim_id` references on child records are not checked by the store.

use async_trait::async_trait;

use core_kernel::{ClaimId, DomainPort, HealthCheckable, ImageId, PortError, UserId};

use crate::assessment::{DamageAssessment, NewDamageAssessment};
use crate::claim::{Claim, ClaimPatch, NewClaim};
use crate::estimation::{CostEstimation, NewCostEstimation};
use crate::image::{NewUploadedImage, UploadedImage};
use crate::user::{NewUser, User};

/// Repository contract for every entity in the claims domain
#[async_trait]
pub trait ClaimsPort: DomainPort + HealthCheckable {
    // ------------------------------------------------------------------
    // Users
    // ------------------------------------------------------------------

    /// Retrieves a user by id
    async fn get_user(&self, id: UserId) -> Result<Option<User>, PortError>;

    /// Retrieves a user by username
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>, PortError>;

    /// Registers a user
    async fn create_user(&self, user: NewUser) -> Result<User, PortError>;

    // ------------------------------------------------------------------
    // Claims
    // ------------------------------------------------------------------

    /// Lists all claims ordered by id
    async fn list_claims(&self) -> Result<Vec<Claim>, PortError>;

    /// Retrieves a claim by id
    async fn get_claim(&self, id: ClaimId) -> Result<Option<Claim>, PortError>;

    /// Retrieves a claim by its claim number
    async fn get_claim_by_number(&self, claim_number: &str) -> Result<Option<Claim>, PortError>;

    /// Opens a claim; status defaults to `initiated`
    async fn create_claim(&self, claim: NewClaim) -> Result<Claim, PortError>;

    /// Merges a partial update into a claim
    ///
    /// # Returns
    ///
    /// The updated claim, or `None` if no claim has this id
    async fn update_claim(&self, id: ClaimId, patch: ClaimPatch) -> Result<Option<Claim>, PortError>;

    // ------------------------------------------------------------------
    // Assessments and estimations
    // ------------------------------------------------------------------

    /// Retrieves the damage assessment of a claim
    async fn get_damage_assessment(&self, claim_id: ClaimId) -> Result<Option<DamageAssessment>, PortError>;

    /// Records a damage assessment, replacing any earlier one for the same claim
    async fn create_damage_assessment(&self, assessment: NewDamageAssessment) -> Result<DamageAssessment, PortError>;

    /// Retrieves the cost estimation of a claim
    async fn get_cost_estimation(&self, claim_id: ClaimId) -> Result<Option<CostEstimation>, PortError>;

    /// Records a cost estimation, replacing any earlier one for the same claim
    async fn create_cost_estimation(&self, estimation: NewCostEstimation) -> Result<CostEstimation, PortError>;

    /// Records an assessment and an estimation as one unit
    ///
    /// Either both records are stored or neither is. Both must reference
    /// the same claim.
    async fn record_analysis(
        &self,
        assessment: NewDamageAssessment,
        estimation: NewCostEstimation,
    ) -> Result<(DamageAssessment, CostEstimation), PortError>;

    // ------------------------------------------------------------------
    // Images
    // ------------------------------------------------------------------

    /// Lists the images of a claim in upload order
    async fn get_uploaded_images(&self, claim_id: ClaimId) -> Result<Vec<UploadedImage>, PortError>;

    /// Records an uploaded image
    async fn create_uploaded_image(&self, image: NewUploadedImage) -> Result<UploadedImage, PortError>;

    /// Deletes an image
    ///
    /// # Returns
    ///
    /// Whether an image with this id existed
    async fn delete_uploaded_image(&self, id: ImageId) -> Result<bool, PortError>;
}
