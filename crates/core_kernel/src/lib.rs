//! Core Kernel - Foundational types for the claims assessment system
//!
//! This crate provides the building blocks shared by the domain and
//! infrastructure crates:
//! - Strongly-typed entity identifiers and the identifier generator
//! - The port error type and health-check contract for adapters

pub mod identifiers;
pub mod ports;

pub use identifiers::{IdGenerator, UserId, ClaimId, AssessmentId, EstimationId, ImageId};
pub use ports::{PortError, DomainPort, AdapterHealth, HealthCheckResult, HealthCheckable};
