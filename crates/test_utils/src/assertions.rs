//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for domain types that give
//! more meaningful error messages than standard assertions.

use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

use domain_claims::{Claim, CostEstimation, NewClaim};

/// Asserts that an estimation's total equals the sum of its line items
/// and lies inside its low/high range
pub fn assert_estimation_consistent(estimation: &CostEstimation) {
    let sum = estimation.bumper_repair + estimation.paintwork + estimation.headlight + estimation.miscellaneous;
    assert_eq!(
        estimation.total, sum,
        "Estimation total {} does not match line items {}",
        estimation.total, sum
    );
    assert!(
        estimation.low_estimate <= estimation.total && estimation.total <= estimation.high_estimate,
        "Estimation total {} outside range {}..={}",
        estimation.total,
        estimation.low_estimate,
        estimation.high_estimate
    );
}

/// Asserts that a stored claim carries the caller-supplied fields
pub fn assert_claim_matches(claim: &Claim, new: &NewClaim) {
    assert_eq!(claim.claim_number, new.claim_number, "claim number");
    assert_eq!(claim.policyholder, new.policyholder, "policyholder");
    assert_eq!(claim.policy_number, new.policy_number, "policy number");
    assert_eq!(claim.vehicle, new.vehicle, "vehicle");
    assert_eq!(claim.agent_name, new.agent_name, "agent name");
    assert_eq!(claim.status, new.status.clone().unwrap_or_default(), "status");
}

/// Asserts that every value in the iterator is distinct
pub fn assert_all_unique<T, I>(values: I)
where
    T: Eq + Hash + Debug,
    I: IntoIterator<Item = T>,
{
    let mut seen = HashSet::new();
    for value in values {
        let repr = format!("{:?}", value);
        assert!(seen.insert(value), "Duplicate value: {}", repr);
    }
}
