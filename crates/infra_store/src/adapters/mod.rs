//! Domain Adapters
//!
//! Adapter implementations for the domain ports.
//!
//! # Usage
//!
//! ```rust,ignore
//! use infra_store::adapters::InMemoryClaimsStore;
//! use domain_claims::ClaimsPort;
//!
//! let store = InMemoryClaimsStore::new();
//! let claim = store.get_claim(claim_id).await?;
//! ```

pub mod memory;

pub use memory::{InMemoryClaimsStore, StoreCounts};
