// src/risk_batch/lib.rs
//! Scores every borrower in a JSON array file, in file order.

use std::fmt;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use risk_core::{AdapterError, BorrowerProfile, RiskTier, ScoreRequest};
use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;
use thiserror::Error;
use tracing::{debug, warn};

/// One entry of the borrowers file
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct BorrowerRecord {
    #[serde(default)]
    pub address: Option<String>,
    pub credit_score: Option<f64>,
    pub income: Option<f64>,
    pub asset_value: Option<f64>,
}

impl BorrowerRecord {
    fn request(&self) -> ScoreRequest {
        ScoreRequest {
            credit_score: self.credit_score,
            income: self.income,
            asset_value: self.asset_value,
        }
    }
}

#[derive(Deserialize)]
struct AddressOnly {
    #[serde(default)]
    address: Option<String>,
}

/// One array element, left undecoded so a badly typed record fails on its own
#[derive(Debug)]
pub struct RawBorrower(Box<RawValue>);

impl RawBorrower {
    pub fn decode(&self) -> Result<BorrowerRecord, AdapterError> {
        Ok(serde_json::from_str(self.0.get())?)
    }

    /// Best-effort label, also available when the other fields are malformed
    pub fn address(&self) -> Option<String> {
        serde_json::from_str::<AddressOnly>(self.0.get())
            .ok()
            .and_then(|a| a.address)
    }

    fn profile(&self) -> Result<BorrowerProfile, AdapterError> {
        self.decode()?.request().into_profile()
    }
}

#[derive(Debug, Error)]
pub enum BatchError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid borrowers file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result for one record; exactly one of `risk_tier` / `error` is set.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct BatchOutcome {
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_tier: Option<RiskTier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl fmt::Display for BatchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.risk_tier, &self.error) {
            (Some(tier), _) => write!(f, "Borrower {} risk tier: {}", self.address, tier),
            (None, Some(error)) => write!(f, "Borrower {} error: {}", self.address, error),
            (None, None) => write!(f, "Borrower {} error: unscored", self.address),
        }
    }
}

/// Only the array shape is checked here; each element is decoded when scored.
pub fn parse_borrowers<R: Read>(reader: R) -> Result<Vec<RawBorrower>, BatchError> {
    let records: Vec<Box<RawValue>> = serde_json::from_reader(reader)?;
    Ok(records.into_iter().map(RawBorrower).collect())
}

pub fn load_borrowers(path: impl AsRef<Path>) -> Result<Vec<RawBorrower>, BatchError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| BatchError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_borrowers(BufReader::new(file))
}

/// Records without an address are labelled by 1-based position.
pub fn score_borrowers(records: &[RawBorrower]) -> Vec<BatchOutcome> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let address = record
                .address()
                .unwrap_or_else(|| format!("#{}", index + 1));
            match record.profile() {
                Ok(profile) => {
                    let tier = profile.tier();
                    debug!(%address, %tier, "scored borrower");
                    BatchOutcome {
                        address,
                        risk_tier: Some(tier),
                        error: None,
                    }
                }
                Err(err) => {
                    warn!(%address, error = %err, "skipping borrower");
                    BatchOutcome {
                        address,
                        risk_tier: None,
                        error: Some(err.to_string()),
                    }
                }
            }
        })
        .collect()
}
