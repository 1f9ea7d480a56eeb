//! Damage assessments produced by an analysis run

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{AssessmentId, ClaimId};

use crate::error::ClaimError;

/// Severity of a single damage finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    Minor,
    Moderate,
    Severe,
}

/// One detected area of damage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DamageItem {
    /// Damaged part, e.g. `Front Bumper Corner`
    #[serde(rename = "type")]
    pub damage_type: String,
    pub severity: Severity,
    /// Where on the vehicle the damage sits
    pub location: String,
    /// Detection confidence in `0.0..=1.0`
    pub confidence: f64,
}

impl DamageItem {
    pub fn new(
        damage_type: impl Into<String>,
        severity: Severity,
        location: impl Into<String>,
        confidence: f64,
    ) -> Self {
        Self {
            damage_type: damage_type.into(),
            severity,
            location: location.into(),
            confidence,
        }
    }
}

/// Structured result of a damage analysis for a claim
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DamageAssessment {
    pub id: AssessmentId,
    pub claim_id: ClaimId,
    /// Overall confidence, 0 to 100
    pub confidence: u8,
    pub damage_items: Vec<DamageItem>,
    pub recommendations: Vec<String>,
    pub analysis_complete: bool,
    pub created_at: DateTime<Utc>,
}

/// Fields supplied when recording an assessment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDamageAssessment {
    pub claim_id: ClaimId,
    pub confidence: u8,
    pub damage_items: Vec<DamageItem>,
    pub recommendations: Vec<String>,
    /// Defaults to `false`
    #[serde(default)]
    pub analysis_complete: Option<bool>,
}

impl NewDamageAssessment {
    /// Checks ranges that the type system does not cover
    pub fn check(&self) -> Result<(), ClaimError> {
        if self.confidence > 100 {
            return Err(ClaimError::InvalidAnalysis(format!(
                "confidence {} exceeds 100",
                self.confidence
            )));
        }
        if let Some(item) = self
            .damage_items
            .iter()
            .find(|item| !(0.0..=1.0).contains(&item.confidence))
        {
            return Err(ClaimError::InvalidAnalysis(format!(
                "damage item '{}' has confidence {} outside 0..=1",
                item.damage_type, item.confidence
            )));
        }
        Ok(())
    }
}

impl DamageAssessment {
    /// Stamps an assessment with its id and the current time
    pub fn record(id: AssessmentId, new: NewDamageAssessment) -> Self {
        Self {
            id,
            claim_id: new.claim_id,
            confidence: new.confidence,
            damage_items: new.damage_items,
            recommendations: new.recommendations,
            analysis_complete: new.analysis_complete.unwrap_or(false),
            created_at: Utc::now(),
        }
    }

    /// Highest severity among the damage items
    pub fn worst_severity(&self) -> Option<Severity> {
        self.damage_items.iter().map(|item| item.severity).max()
    }
}
