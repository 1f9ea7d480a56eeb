//! Vehicle Claims Domain
//!
//! This crate models a vehicle damage claim from intake through photo
//! upload, damage analysis and repair cost estimation.
//!
//! # Claim Lifecycle
//!
//! ```text
//! Draft -> Initiated -> In Progress -> Under Review -> Reviewed
//!       -> Pending Approval -> Approved/Rejected
//! ```
//!
//! Status changes are free-form partial updates; the domain does not
//! enforce transitions.

pub mod user;
pub mod claim;
pub mod image;
pub mod assessment;
pub mod estimation;
pub mod analysis;
pub mod ports;
pub mod services;
pub mod error;

pub use user::{User, NewUser};
pub use claim::{Claim, ClaimStatus, NewClaim, ClaimPatch};
pub use image::{UploadedImage, NewUploadedImage};
pub use assessment::{DamageAssessment, DamageItem, NewDamageAssessment, Severity};
pub use estimation::{CostEstimation, CostBreakdown, NewCostEstimation};
pub use analysis::{AnalysisOutcome, AnalysisProvider, SimulatedAnalysisProvider, DEFAULT_ANALYSIS_DELAY};
pub use ports::ClaimsPort;
pub use services::{AnalysisResult, ClaimAnalysisService};
pub use error::ClaimError;
