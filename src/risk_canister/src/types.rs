use candid::CandidType;
use serde::{Deserialize, Serialize};

use risk_core::RiskTier;

/// Full scoring result for callers that want more than the letter
#[derive(CandidType, Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TierReport {
    pub risk_tier: RiskTier,
    pub tier_code: u8,
    pub description: String,
}

impl From<RiskTier> for TierReport {
    fn from(tier: RiskTier) -> Self {
        Self {
            risk_tier: tier,
            tier_code: tier.on_chain_code(),
            description: tier.description().to_string(),
        }
    }
}
