// src/risk_canister/lib.rs
use ic_cdk_macros::{init, query};
mod types;
use risk_core::{score_body, AdapterError, RiskTier, ScoreRequest, TIER_RULES};
use types::TierReport;

/// Validate a candid request and classify it
fn tier_for(request: ScoreRequest) -> Result<RiskTier, AdapterError> {
    request.into_profile().map(|profile| profile.tier())
}

/// Oracle-style positional arguments: exactly `[credit_score, income, asset_value]`
fn tier_for_args(args: &[String]) -> Result<RiskTier, AdapterError> {
    if args.len() < 3 {
        return Err(AdapterError::MissingField);
    }
    if args.len() > 3 {
        return Err(AdapterError::malformed(format!(
            "expected 3 arguments, got {}",
            args.len()
        )));
    }
    let mut values = [0.0f64; 3];
    for (slot, raw) in values.iter_mut().zip(args) {
        // inf and NaN parse as f64 but are rejected
        *slot = raw
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .ok_or_else(|| AdapterError::malformed(format!("'{}' is not a number", raw)))?;
    }
    Ok(risk_core::classify(values[0], values[1], values[2]))
}

#[init]
fn init() {
    ic_cdk::println!("Risk Tier Canister initialized with {} tier rules", TIER_RULES.len());
}

/// Score a candid request; errors carry the adapter message
#[query]
fn score(request: ScoreRequest) -> Result<RiskTier, String> {
    let result = tier_for(request).map_err(|e| e.to_string());
    ic_cdk::println!("score -> {:?}", result);
    result
}

/// Raw-body variant: JSON text in, `{"risk_tier"}` / `{"error"}` text out
#[query]
fn score_json(body: String) -> String {
    let (status, response) = score_body(body.as_bytes());
    ic_cdk::println!("score_json status {}", status);
    response.to_json()
}

#[query]
fn score_args(args: Vec<String>) -> Result<String, String> {
    tier_for_args(&args)
        .map(|tier| tier.to_string())
        .map_err(|e| e.to_string())
}

/// Tier with its on-chain code and description
#[query]
fn report(request: ScoreRequest) -> Result<TierReport, String> {
    tier_for(request).map(TierReport::from).map_err(|e| e.to_string())
}

/// On-chain tier code; 0 when the request is invalid
#[query]
fn tier_code(request: ScoreRequest) -> u8 {
    tier_for(request).map(|tier| tier.on_chain_code()).unwrap_or(0)
}

#[query]
fn version() -> String {
    "risk_canister v0.1.0".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn candid_request_is_classified() {
        assert_eq!(tier_for(ScoreRequest::new(750.0, 100_000.0, 300_000.0)), Ok(RiskTier::A));
        assert_eq!(tier_for(ScoreRequest::new(649.0, 50_000.0, 100_000.0)), Ok(RiskTier::C));
    }

    #[test]
    fn candid_request_with_missing_field_is_rejected() {
        let request = ScoreRequest {
            credit_score: Some(700.0),
            income: None,
            asset_value: Some(150_000.0),
        };
        assert_eq!(tier_for(request), Err(AdapterError::MissingField));
    }

    #[test]
    fn positional_args_follow_oracle_shape() {
        assert_eq!(tier_for_args(&args(&["720", "60000", "120000"])), Ok(RiskTier::B));
        assert_eq!(tier_for_args(&args(&[" 800 ", "120000.5", "350000"])), Ok(RiskTier::A));
    }

    #[test]
    fn short_or_garbled_args_are_errors() {
        assert_eq!(tier_for_args(&args(&["720", "60000"])), Err(AdapterError::MissingField));
        assert!(matches!(
            tier_for_args(&args(&["720", "lots", "120000"])),
            Err(AdapterError::MalformedPayload(_))
        ));
    }

    #[test]
    fn non_finite_or_extra_args_are_rejected() {
        for bad in [["inf", "inf", "inf"], ["NaN", "60000", "120000"], ["800", "infinity", "1"]] {
            assert!(matches!(
                tier_for_args(&args(&bad)),
                Err(AdapterError::MalformedPayload(_))
            ));
        }
        assert!(matches!(
            tier_for_args(&args(&["800", "120000", "350000", "extra"])),
            Err(AdapterError::MalformedPayload(_))
        ));
    }

    #[test]
    fn report_carries_code_and_description() {
        let report = TierReport::from(RiskTier::B);
        assert_eq!(report.tier_code, 2);
        assert_eq!(report.description, "Medium Risk - Good creditworthiness");
    }
}
