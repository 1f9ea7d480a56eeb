//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random test data
//! that maintains domain invariants.

use core_kernel::ClaimId;
use domain_claims::{ClaimPatch, ClaimStatus, NewClaim, NewUploadedImage};
use proptest::prelude::*;

/// Strategy for generating any claim status
pub fn status_strategy() -> impl Strategy<Value = ClaimStatus> {
    prop_oneof![
        3 => prop::sample::select(ClaimStatus::ALL.to_vec()),
        1 => "[a-z]{3,8}(_[a-z]{3,8})?".prop_map(ClaimStatus::from),
    ]
}

/// Strategy for generating claim numbers in the `CLM-YYYY-NNNNNN` format
pub fn claim_number_strategy() -> impl Strategy<Value = String> {
    (2020u32..2030u32, 0u32..1_000_000u32).prop_map(|(year, seq)| format!("CLM-{}-{:06}", year, seq))
}

/// Strategy for generating names
pub fn name_strategy() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{2,10} [A-Z][a-z]{2,12}"
}

/// Strategy for generating vehicle descriptions
pub fn vehicle_strategy() -> impl Strategy<Value = String> {
    (
        2000u32..2026u32,
        prop::sample::select(vec!["Honda Accord", "Toyota Camry", "BMW 320i", "Ford F-150", "Kia Niro"]),
    )
        .prop_map(|(year, model)| format!("{} {}", year, model))
}

/// Strategy for generating new-claim payloads
pub fn new_claim_strategy() -> impl Strategy<Value = NewClaim> {
    (
        claim_number_strategy(),
        name_strategy(),
        "POL-[0-9]{9}",
        vehicle_strategy(),
        prop::option::of(status_strategy()),
        name_strategy(),
    )
        .prop_map(|(claim_number, policyholder, policy_number, vehicle, status, agent_name)| NewClaim {
            claim_number,
            policyholder,
            policy_number,
            vehicle,
            status,
            agent_name,
        })
}

/// Strategy for generating partial claim updates
pub fn claim_patch_strategy() -> impl Strategy<Value = ClaimPatch> {
    (
        prop::option::of(name_strategy()),
        prop::option::of(vehicle_strategy()),
        prop::option::of(status_strategy()),
    )
        .prop_map(|(policyholder, vehicle, status)| ClaimPatch {
            policyholder,
            vehicle,
            status,
            ..Default::default()
        })
}

/// Strategy for generating image uploads for a claim
pub fn upload_strategy(claim_id: ClaimId) -> impl Strategy<Value = NewUploadedImage> {
    ("[a-z]{1,12}\\.(jpg|png|heic)", 1u32..200u32).prop_map(move |(filename, tenths)| NewUploadedImage {
        claim_id,
        filename,
        file_size: format!("{}.{} MB", tenths / 10, tenths % 10),
    })
}
