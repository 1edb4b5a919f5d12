// Import Candid serialization for Internet Computer (ICP) interfaces
use candid::CandidType;

// Import Serde for JSON serialization/deserialization
use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::classifier;

/// Creditworthiness label, from best (`A`) to worst (`C`)
#[derive(CandidType, Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RiskTier {
    A,
    B,
    C,
}

impl RiskTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskTier::A => "A",
            RiskTier::B => "B",
            RiskTier::C => "C",
        }
    }

    /// Human-readable summary shown next to the tier
    pub fn description(&self) -> &'static str {
        match self {
            RiskTier::A => "Low Risk - Excellent creditworthiness",
            RiskTier::B => "Medium Risk - Good creditworthiness",
            RiskTier::C => "High Risk - Requires careful consideration",
        }
    }

    /// Numeric code used by the lending contracts. `0` means "no tier" on-chain
    /// and is never returned here.
    pub fn on_chain_code(&self) -> u8 {
        match self {
            RiskTier::A => 3,
            RiskTier::B => 2,
            RiskTier::C => 1,
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown risk tier '{0}'")]
pub struct ParseTierError(pub String);

impl FromStr for RiskTier {
    type Err = ParseTierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A" => Ok(RiskTier::A),
            "B" => Ok(RiskTier::B),
            "C" => Ok(RiskTier::C),
            _ => Err(ParseTierError(s.to_string())),
        }
    }
}

/// The three inputs submitted for scoring. Built fresh per request.
#[derive(CandidType, Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct BorrowerProfile {
    pub credit_score: f64,
    pub income: f64,
    pub asset_value: f64,
}

impl BorrowerProfile {
    pub fn new(credit_score: f64, income: f64, asset_value: f64) -> Self {
        Self {
            credit_score,
            income,
            asset_value,
        }
    }

    pub fn tier(&self) -> RiskTier {
        classifier::classify(self.credit_score, self.income, self.asset_value)
    }
}
