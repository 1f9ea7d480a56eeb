//! Storage Infrastructure Layer
//!
//! This crate provides the storage adapters behind the claims domain ports.
//!
//! # Architecture
//!
//! The crate follows the ports-and-adapters pattern: the domain defines
//! [`domain_claims::ClaimsPort`], and this crate implements it. The only
//! adapter keeps every table in process memory; nothing survives a restart.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_store::InMemoryClaimsStore;
//! use std::sync::Arc;
//!
//! let store: Arc<dyn ClaimsPort> = Arc::new(InMemoryClaimsStore::with_sample_data());
//! ```

pub mod adapters;
pub mod seed;

pub use adapters::{InMemoryClaimsStore, StoreCounts};
pub use seed::sample_claims;
