// src/risk_api/serverless.rs
//! Function-as-a-service envelope: `{"statusCode", "headers", "body"}` with
//! the JSON reply carried as a string.

use std::collections::BTreeMap;

use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::ApiError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerlessResponse {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

/// Run one invocation against a raw request body.
pub fn invoke(body: &[u8]) -> ServerlessResponse {
    let (status_code, response) = risk_core::score_body(body);
    let mut headers = BTreeMap::new();
    headers.insert("Content-Type".to_string(), "application/json".to_string());
    ServerlessResponse {
        status_code,
        headers,
        body: response.to_json(),
    }
}

impl IntoResponse for ServerlessResponse {
    fn into_response(self) -> Response {
        let status = match StatusCode::from_u16(self.status_code) {
            Ok(status) => status,
            Err(_) => {
                return ApiError::Internal(format!("invalid status code {}", self.status_code))
                    .into_response()
            }
        };

        let mut response = (status, self.body).into_response();
        for (name, value) in &self.headers {
            if let (Ok(name), Ok(value)) = (
                HeaderName::from_bytes(name.as_bytes()),
                HeaderValue::from_str(value),
            ) {
                response.headers_mut().insert(name, value);
            }
        }
        response
    }
}
