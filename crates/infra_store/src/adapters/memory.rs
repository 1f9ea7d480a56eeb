//! In-memory adapter for the claims port
//!
//! All tables sit behind one `RwLock`, so every port operation is atomic
//! with respect to every other. Identifiers come from a single
//! [`IdGenerator`] and are unique across entity kinds.

use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use core_kernel::{
    AssessmentId, ClaimId, DomainPort, EstimationId, HealthCheckResult, HealthCheckable, IdGenerator,
    ImageId, PortError, UserId,
};
use domain_claims::{
    Claim, ClaimPatch, ClaimsPort, CostEstimation, DamageAssessment, NewClaim, NewCostEstimation,
    NewDamageAssessment, NewUploadedImage, NewUser, UploadedImage, User,
};

use crate::seed::sample_claims;

/// Row counts of every table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreCounts {
    pub users: usize,
    pub claims: usize,
    pub assessments: usize,
    pub estimations: usize,
    pub images: usize,
}

#[derive(Debug, Default)]
struct Tables {
    users: HashMap<UserId, User>,
    claims: HashMap<ClaimId, Claim>,
    // Keyed by claim: at most one assessment and one estimation per claim.
    assessments: HashMap<ClaimId, DamageAssessment>,
    estimations: HashMap<ClaimId, CostEstimation>,
    // Ordered by id, which is upload order.
    images: BTreeMap<ImageId, UploadedImage>,
}

impl Tables {
    fn counts(&self) -> StoreCounts {
        StoreCounts {
            users: self.users.len(),
            claims: self.claims.len(),
            assessments: self.assessments.len(),
            estimations: self.estimations.len(),
            images: self.images.len(),
        }
    }

    fn put_assessment(&mut self, assessment: DamageAssessment) {
        if let Some(previous) = self.assessments.insert(assessment.claim_id, assessment) {
            debug!(
                claim_id = %previous.claim_id,
                replaced = %previous.id,
                "Replaced earlier damage assessment"
            );
        }
    }

    fn put_estimation(&mut self, estimation: CostEstimation) {
        if let Some(previous) = self.estimations.insert(estimation.claim_id, estimation) {
            debug!(
                claim_id = %previous.claim_id,
                replaced = %previous.id,
                "Replaced earlier cost estimation"
            );
        }
    }
}

/// Map-backed store for claims and everything attached to them
///
/// Construct one per process (or per test) and share it through
/// `Arc<dyn ClaimsPort>`.
#[derive(Debug)]
pub struct InMemoryClaimsStore {
    ids: IdGenerator,
    tables: RwLock<Tables>,
}

impl InMemoryClaimsStore {
    /// Creates an empty store; the first identifier handed out is 1
    pub fn new() -> Self {
        Self {
            ids: IdGenerator::new(),
            tables: RwLock::new(Tables::default()),
        }
    }

    /// Creates a store pre-loaded with claims that already carry ids
    ///
    /// New identifiers continue after the highest preloaded id.
    pub fn with_claims(claims: impl IntoIterator<Item = Claim>) -> Self {
        let ids = IdGenerator::new();
        let mut tables = Tables::default();

        for claim in claims {
            ids.reserve_through(claim.id.value());
            tables.claims.insert(claim.id, claim);
        }

        Self {
            ids,
            tables: RwLock::new(tables),
        }
    }

    /// Creates a store seeded with the demo claims
    pub fn with_sample_data() -> Self {
        Self::with_claims(sample_claims())
    }

    /// Current row counts
    pub async fn counts(&self) -> StoreCounts {
        self.tables.read().await.counts()
    }
}

impl Default for InMemoryClaimsStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DomainPort for InMemoryClaimsStore {}

#[async_trait]
impl HealthCheckable for InMemoryClaimsStore {
    async fn health_check(&self) -> HealthCheckResult {
        let counts = self.counts().await;
        HealthCheckResult::healthy("memory").with_message(format!(
            "{} claims, {} images, {} assessments",
            counts.claims, counts.images, counts.assessments
        ))
    }
}

#[async_trait]
impl ClaimsPort for InMemoryClaimsStore {
    async fn get_user(&self, id: UserId) -> Result<Option<User>, PortError> {
        Ok(self.tables.read().await.users.get(&id).cloned())
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>, PortError> {
        let tables = self.tables.read().await;
        Ok(tables.users.values().find(|u| u.username == username).cloned())
    }

    async fn create_user(&self, user: NewUser) -> Result<User, PortError> {
        let user = User::register(self.ids.next_id(), user);
        self.tables.write().await.users.insert(user.id, user.clone());
        debug!(user_id = %user.id, username = %user.username, "Created user");
        Ok(user)
    }

    async fn list_claims(&self) -> Result<Vec<Claim>, PortError> {
        let tables = self.tables.read().await;
        let mut claims: Vec<Claim> = tables.claims.values().cloned().collect();
        claims.sort_by_key(|c| c.id);
        Ok(claims)
    }

    async fn get_claim(&self, id: ClaimId) -> Result<Option<Claim>, PortError> {
        Ok(self.tables.read().await.claims.get(&id).cloned())
    }

    async fn get_claim_by_number(&self, claim_number: &str) -> Result<Option<Claim>, PortError> {
        let tables = self.tables.read().await;
        Ok(tables
            .claims
            .values()
            .find(|c| c.claim_number == claim_number)
            .cloned())
    }

    async fn create_claim(&self, claim: NewClaim) -> Result<Claim, PortError> {
        let claim = Claim::open(self.ids.next_id(), claim);
        self.tables.write().await.claims.insert(claim.id, claim.clone());
        debug!(claim_id = %claim.id, claim_number = %claim.claim_number, "Created claim");
        Ok(claim)
    }

    async fn update_claim(&self, id: ClaimId, patch: ClaimPatch) -> Result<Option<Claim>, PortError> {
        let mut tables = self.tables.write().await;
        let Some(claim) = tables.claims.get_mut(&id) else {
            return Ok(None);
        };

        claim.apply(patch);
        debug!(claim_id = %id, status = %claim.status, "Updated claim");
        Ok(Some(claim.clone()))
    }

    async fn get_damage_assessment(&self, claim_id: ClaimId) -> Result<Option<DamageAssessment>, PortError> {
        Ok(self.tables.read().await.assessments.get(&claim_id).cloned())
    }

    async fn create_damage_assessment(&self, assessment: NewDamageAssessment) -> Result<DamageAssessment, PortError> {
        let id: AssessmentId = self.ids.next_id();
        let assessment = DamageAssessment::record(id, assessment);
        self.tables.write().await.put_assessment(assessment.clone());
        debug!(claim_id = %assessment.claim_id, assessment_id = %id, "Created damage assessment");
        Ok(assessment)
    }

    async fn get_cost_estimation(&self, claim_id: ClaimId) -> Result<Option<CostEstimation>, PortError> {
        Ok(self.tables.read().await.estimations.get(&claim_id).cloned())
    }

    async fn create_cost_estimation(&self, estimation: NewCostEstimation) -> Result<CostEstimation, PortError> {
        let id: EstimationId = self.ids.next_id();
        let estimation = CostEstimation::record(id, estimation);
        self.tables.write().await.put_estimation(estimation.clone());
        debug!(claim_id = %estimation.claim_id, estimation_id = %id, "Created cost estimation");
        Ok(estimation)
    }

    async fn record_analysis(
        &self,
        assessment: NewDamageAssessment,
        estimation: NewCostEstimation,
    ) -> Result<(DamageAssessment, CostEstimation), PortError> {
        if assessment.claim_id != estimation.claim_id {
            return Err(PortError::validation(format!(
                "assessment for {} cannot be recorded with estimation for {}",
                assessment.claim_id, estimation.claim_id
            )));
        }

        let assessment = DamageAssessment::record(self.ids.next_id(), assessment);
        let estimation = CostEstimation::record(self.ids.next_id(), estimation);

        let mut tables = self.tables.write().await;
        tables.put_assessment(assessment.clone());
        tables.put_estimation(estimation.clone());
        drop(tables);

        debug!(
            claim_id = %assessment.claim_id,
            assessment_id = %assessment.id,
            estimation_id = %estimation.id,
            "Recorded analysis"
        );
        Ok((assessment, estimation))
    }

    async fn get_uploaded_images(&self, claim_id: ClaimId) -> Result<Vec<UploadedImage>, PortError> {
        let tables = self.tables.read().await;
        Ok(tables
            .images
            .values()
            .filter(|image| image.claim_id == claim_id)
            .cloned()
            .collect())
    }

    async fn create_uploaded_image(&self, image: NewUploadedImage) -> Result<UploadedImage, PortError> {
        let image = UploadedImage::record(self.ids.next_id(), image);
        self.tables.write().await.images.insert(image.id, image.clone());
        debug!(claim_id = %image.claim_id, image_id = %image.id, filename = %image.filename, "Recorded image upload");
        Ok(image)
    }

    async fn delete_uploaded_image(&self, id: ImageId) -> Result<bool, PortError> {
        let removed = self.tables.write().await.images.remove(&id).is_some();
        debug!(image_id = %id, removed, "Deleted image");
        Ok(removed)
    }
}
