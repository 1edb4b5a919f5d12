// src/risk_core/classifier.rs
use crate::types::{BorrowerProfile, RiskTier};

/// Minimum inputs a borrower must meet, all inclusive, to earn `tier`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TierRule {
    pub tier: RiskTier,
    pub min_credit_score: f64,
    pub min_income: f64,
    pub min_asset_value: f64,
}

impl TierRule {
    fn matches(&self, credit_score: f64, income: f64, asset_value: f64) -> bool {
        credit_score >= self.min_credit_score
            && income >= self.min_income
            && asset_value >= self.min_asset_value
    }
}

/// Ordered best tier first; the first matching rule wins.
pub static TIER_RULES: [TierRule; 2] = [
    TierRule {
        tier: RiskTier::A,
        min_credit_score: 750.0,
        min_income: 100_000.0,
        min_asset_value: 300_000.0,
    },
    TierRule {
        tier: RiskTier::B,
        min_credit_score: 650.0,
        min_income: 50_000.0,
        min_asset_value: 100_000.0,
    },
];

/// Tier for anyone who matches no rule
pub const FALLBACK_TIER: RiskTier = RiskTier::C;

/// Stateless classifier over [`TIER_RULES`]
#[derive(Clone, Copy, Debug, Default)]
pub struct RiskClassifier;

impl RiskClassifier {
    pub fn rules(&self) -> &'static [TierRule] {
        &TIER_RULES
    }

    pub fn classify(&self, credit_score: f64, income: f64, asset_value: f64) -> RiskTier {
        self.rules()
            .iter()
            .find(|rule| rule.matches(credit_score, income, asset_value))
            .map(|rule| rule.tier)
            .unwrap_or(FALLBACK_TIER)
    }

    pub fn classify_profile(&self, profile: &BorrowerProfile) -> RiskTier {
        self.classify(profile.credit_score, profile.income, profile.asset_value)
    }
}

/// Total over every `f64`; NaN fails every comparison and lands in `C`.
pub fn classify(credit_score: f64, income: f64, asset_value: f64) -> RiskTier {
    RiskClassifier.classify(credit_score, income, asset_value)
}
