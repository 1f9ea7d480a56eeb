//! Demo data
//!
//! The claims shown on the claims list of the demo UI. Claim 1 is the one
//! the assessment dashboard opens by default.

use chrono::{DateTime, TimeZone, Utc};

use core_kernel::ClaimId;
use domain_claims::{Claim, ClaimStatus};

/// The demo claims, with ids 1 to 3
pub fn sample_claims() -> Vec<Claim> {
    vec![
        sample_claim(
            1,
            "CLM-2024-001537",
            "Michael Chen",
            "POL-789456123",
            "2021 Honda Accord",
            ClaimStatus::InProgress,
            (day(2024, 1, 15), day(2024, 1, 20)),
        ),
        sample_claim(
            2,
            "CLM-2024-001523",
            "Emma Rodriguez",
            "POL-654321987",
            "2020 Toyota Camry",
            ClaimStatus::Approved,
            (day(2024, 1, 12), day(2024, 1, 18)),
        ),
        sample_claim(
            3,
            "CLM-2024-001498",
            "David Kim",
            "POL-111222333",
            "2019 BMW 320i",
            ClaimStatus::Reviewed,
            (day(2024, 1, 8), day(2024, 1, 15)),
        ),
    ]
}

fn sample_claim(
    id: u64,
    claim_number: &str,
    policyholder: &str,
    policy_number: &str,
    vehicle: &str,
    status: ClaimStatus,
    (created_at, updated_at): (DateTime<Utc>, DateTime<Utc>),
) -> Claim {
    Claim {
        id: ClaimId::new(id),
        claim_number: claim_number.to_string(),
        policyholder: policyholder.to_string(),
        policy_number: policy_number.to_string(),
        vehicle: vehicle.to_string(),
        status,
        agent_name: "Sarah Johnson".to_string(),
        created_at,
        updated_at,
    }
}

fn day(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .unwrap_or_default()
}
