// src/risk_core/adapter.rs
//! Request/response contract shared by every hosting binding.
//!
//! A binding hands over whatever it received (raw bytes, a decoded
//! [`ScoreRequest`]) and gets back either a [`BorrowerProfile`] ready for
//! classification or an [`AdapterError`] it can render as `{"error": ...}`.

use candid::CandidType;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{BorrowerProfile, RiskTier};

pub const MISSING_FIELDS_MESSAGE: &str = "Missing input fields";

/// Incoming payload. Absent and `null` fields are both `None`.
#[derive(CandidType, Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ScoreRequest {
    pub credit_score: Option<f64>,
    pub income: Option<f64>,
    pub asset_value: Option<f64>,
}

impl ScoreRequest {
    pub fn new(credit_score: f64, income: f64, asset_value: f64) -> Self {
        Self {
            credit_score: Some(credit_score),
            income: Some(income),
            asset_value: Some(asset_value),
        }
    }

    /// Presence check; runs before anything is classified.
    pub fn into_profile(self) -> Result<BorrowerProfile, AdapterError> {
        match (self.credit_score, self.income, self.asset_value) {
            (Some(credit_score), Some(income), Some(asset_value)) => {
                Ok(BorrowerProfile::new(credit_score, income, asset_value))
            }
            _ => Err(AdapterError::MissingField),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdapterError {
    #[error("Missing input fields")]
    MissingField,
    #[error("Malformed request payload: {0}")]
    MalformedPayload(String),
}

impl AdapterError {
    /// HTTP status the binding should answer with
    pub fn status_code(&self) -> u16 {
        match self {
            AdapterError::MissingField | AdapterError::MalformedPayload(_) => 400,
        }
    }

    pub fn malformed(reason: impl Into<String>) -> Self {
        AdapterError::MalformedPayload(reason.into())
    }
}

impl From<serde_json::Error> for AdapterError {
    fn from(err: serde_json::Error) -> Self {
        AdapterError::MalformedPayload(err.to_string())
    }
}

/// Wire response: `{"risk_tier": "A"}` or `{"error": "..."}`
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum ScoreResponse {
    Tier { risk_tier: RiskTier },
    Error { error: String },
}

impl ScoreResponse {
    pub fn tier(tier: RiskTier) -> Self {
        ScoreResponse::Tier { risk_tier: tier }
    }

    pub fn error(message: impl Into<String>) -> Self {
        ScoreResponse::Error {
            error: message.into(),
        }
    }

    pub fn risk_tier(&self) -> Option<RiskTier> {
        match self {
            ScoreResponse::Tier { risk_tier } => Some(*risk_tier),
            ScoreResponse::Error { .. } => None,
        }
    }

    pub fn to_json(&self) -> String {
        // Both variants are a single string-valued field.
        serde_json::to_string(self).unwrap_or_else(|_| String::from("{}"))
    }
}

impl From<AdapterError> for ScoreResponse {
    fn from(err: AdapterError) -> Self {
        ScoreResponse::error(err.to_string())
    }
}

/// Raw-body decoder: JSON object bytes to a validated profile
pub fn decode_profile(body: &[u8]) -> Result<BorrowerProfile, AdapterError> {
    if body.iter().all(|b| b.is_ascii_whitespace()) {
        return Err(AdapterError::malformed("empty request body"));
    }
    let request: ScoreRequest = serde_json::from_slice(body)?;
    request.into_profile()
}

/// Decode, classify and shape the reply. Returns the HTTP status alongside it.
pub fn score_body(body: &[u8]) -> (u16, ScoreResponse) {
    match decode_profile(body) {
        Ok(profile) => (200, ScoreResponse::tier(profile.tier())),
        Err(err) => (err.status_code(), err.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn score(payload: serde_json::Value) -> (u16, serde_json::Value) {
        let (status, response) = score_body(payload.to_string().as_bytes());
        (status, serde_json::to_value(response).unwrap())
    }

    #[test]
    fn strong_borrower_gets_tier_a() {
        let (status, body) = score(json!({
            "credit_score": 800, "income": 120000, "asset_value": 350000
        }));
        assert_eq!(status, 200);
        assert_eq!(body, json!({ "risk_tier": "A" }));
    }

    #[test]
    fn weak_borrower_gets_tier_c() {
        let (status, body) = score(json!({
            "credit_score": 600, "income": 40000, "asset_value": 50000
        }));
        assert_eq!(status, 200);
        assert_eq!(body, json!({ "risk_tier": "C" }));
    }

    #[test]
    fn missing_credit_score_is_rejected_without_tier() {
        let (status, body) = score(json!({ "income": 60000, "asset_value": 150000 }));
        assert_eq!(status, 400);
        assert_eq!(body, json!({ "error": "Missing input fields" }));
        assert!(body.get("risk_tier").is_none());
    }

    #[test]
    fn null_field_counts_as_missing() {
        let (status, body) = score(json!({
            "credit_score": 700, "income": null, "asset_value": 150000
        }));
        assert_eq!(status, 400);
        assert_eq!(body["error"], MISSING_FIELDS_MESSAGE);
    }

    #[test]
    fn unparsable_body_is_malformed() {
        let (status, response) = score_body(b"{not json");
        assert_eq!(status, 400);
        assert!(matches!(
            response,
            ScoreResponse::Error { ref error } if error.starts_with("Malformed request payload")
        ));
    }

    #[test]
    fn empty_and_non_object_bodies_are_malformed() {
        assert!(matches!(decode_profile(b""), Err(AdapterError::MalformedPayload(_))));
        assert!(matches!(decode_profile(b"  \n"), Err(AdapterError::MalformedPayload(_))));
        assert!(matches!(decode_profile(b"[1, 2, 3]"), Err(AdapterError::MalformedPayload(_))));
    }

    #[test]
    fn string_numbers_are_malformed() {
        let body = br#"{"credit_score": "720", "income": 60000, "asset_value": 120000}"#;
        assert!(matches!(decode_profile(body), Err(AdapterError::MalformedPayload(_))));
    }

    #[test]
    fn fractional_values_are_accepted() {
        let body = br#"{"credit_score": 650.0, "income": 50000.5, "asset_value": 100000}"#;
        assert_eq!(decode_profile(body).unwrap().tier(), RiskTier::B);
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let (status, body) = score(json!({
            "credit_score": 720, "income": 60000, "asset_value": 120000, "address": "0xabc"
        }));
        assert_eq!(status, 200);
        assert_eq!(body["risk_tier"], "B");
    }

    #[test]
    fn response_round_trips_through_untagged_shape() {
        let parsed: ScoreResponse = serde_json::from_str(r#"{"risk_tier":"B"}"#).unwrap();
        assert_eq!(parsed.risk_tier(), Some(RiskTier::B));
        let parsed: ScoreResponse = serde_json::from_str(r#"{"error":"nope"}"#).unwrap();
        assert_eq!(parsed.risk_tier(), None);
        assert_eq!(ScoreResponse::tier(RiskTier::C).to_json(), r#"{"risk_tier":"C"}"#);
    }
}
