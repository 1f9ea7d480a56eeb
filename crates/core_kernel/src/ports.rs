//! Port contracts shared by every adapter
//!
//! Domain crates declare their storage ports as traits extending
//! [`DomainPort`]; adapters report failures as [`PortError`] and expose
//! liveness through [`HealthCheckable`].
//!
//! ```text
//!   handlers / services
//!           |
//!           v
//!   ClaimsPort (domain_claims)  <--  InMemoryClaimsStore (infra_store)
//! ```

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure reported by a port implementation
#[derive(Debug, Error)]
pub enum PortError {
    /// Lookup by id found nothing
    #[error("Not found: {entity_type} with id {id}")]
    NotFound { entity_type: String, id: String },

    /// The input cannot be stored as given
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// The adapter itself failed
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl PortError {
    pub fn not_found(entity_type: impl Into<String>, id: impl fmt::Display) -> Self {
        PortError::NotFound {
            entity_type: entity_type.into(),
            id: id.to_string(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        PortError::Validation {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        PortError::Internal {
            message: message.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, PortError::NotFound { .. })
    }

    /// True when the caller, not the adapter, is at fault
    pub fn is_validation(&self) -> bool {
        matches!(self, PortError::Validation { .. })
    }
}

/// Marker for port traits; implementors can be shared across tasks
pub trait DomainPort: Send + Sync + 'static {}

/// Coarse adapter state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdapterHealth {
    Healthy,
    /// Serving, but slower or partially
    Degraded,
    Unhealthy,
}

impl AdapterHealth {
    /// Whether requests can still be served
    pub fn is_operational(&self) -> bool {
        !matches!(self, AdapterHealth::Unhealthy)
    }
}

/// Outcome of one health check
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthCheckResult {
    pub adapter_id: String,
    pub status: AdapterHealth,
    /// Free-form detail, e.g. table sizes
    pub message: Option<String>,
    pub checked_at: DateTime<Utc>,
}

impl HealthCheckResult {
    /// Healthy result stamped now
    pub fn healthy(adapter_id: impl Into<String>) -> Self {
        Self {
            adapter_id: adapter_id.into(),
            status: AdapterHealth::Healthy,
            message: None,
            checked_at: Utc::now(),
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

/// Adapters that can report their own health
#[async_trait::async_trait]
pub trait HealthCheckable: Send + Sync {
    async fn health_check(&self) -> HealthCheckResult;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_names_entity_and_id() {
        let error = PortError::not_found("Image", "IMG-12");
        assert!(error.is_not_found());
        assert!(!error.is_validation());
        assert_eq!(error.to_string(), "Not found: Image with id IMG-12");
    }

    #[test]
    fn test_validation_message() {
        let error = PortError::validation("claim ids differ");
        assert!(error.is_validation());
        assert_eq!(error.to_string(), "Validation error: claim ids differ");
    }

    #[test]
    fn test_only_unhealthy_is_not_operational() {
        assert!(AdapterHealth::Healthy.is_operational());
        assert!(AdapterHealth::Degraded.is_operational());
        assert!(!AdapterHealth::Unhealthy.is_operational());
    }

    #[test]
    fn test_health_result_builder() {
        let result = HealthCheckResult::healthy("memory").with_message("3 claims");
        assert_eq!(result.status, AdapterHealth::Healthy);
        assert_eq!(result.message.as_deref(), Some("3 claims"));
    }
}
