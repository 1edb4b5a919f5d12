// src/risk_core/lib.rs
//! Borrower risk tiering.
//!
//! The classifier is a pure function of three numbers. Every hosting
//! environment (HTTP route, canister, batch script) goes through the shared
//! [`adapter`] module to turn its request shape into a [`BorrowerProfile`].

pub mod adapter;
pub mod classifier;
pub mod types;

pub use adapter::{decode_profile, score_body, AdapterError, ScoreRequest, ScoreResponse};
pub use classifier::{classify, RiskClassifier, TierRule, TIER_RULES};
pub use types::{BorrowerProfile, RiskTier};
