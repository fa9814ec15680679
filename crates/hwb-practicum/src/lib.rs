//! Practicum status API adapter (reqwest).
//!
//! This crate implements the `hwb-core` StatusApi port over the homework
//! statuses HTTP endpoint.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;

use hwb_core::{errors::Error, ports::StatusApi, Result};

#[derive(Clone, Debug)]
pub struct PracticumClient {
    http: reqwest::Client,
    endpoint: String,
    token: String,
}

impl PracticumClient {
    pub fn new(endpoint: impl Into<String>, token: impl Into<String>) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("reqwest client build");
        Self {
            http,
            endpoint: endpoint.into(),
            token: token.into(),
        }
    }

    fn auth_header(&self) -> String {
        format!("OAuth {}", self.token)
    }
}

#[async_trait]
impl StatusApi for PracticumClient {
    async fn homework_statuses(&self, from_date: i64) -> Result<Value> {
        let response = self
            .http
            .get(&self.endpoint)
            .header("Authorization", self.auth_header())
            .query(&[("from_date", from_date)])
            .send()
            .await
            .map_err(|e| Error::Transport(format!("status endpoint request failed: {e}")))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(Error::Transport(format!(
                "status endpoint returned {status}"
            )));
        }

        // Read the body first so a bad payload is a decode failure, not a
        // transport one.
        let body = response
            .text()
            .await
            .map_err(|e| Error::Transport(format!("status endpoint body read failed: {e}")))?;

        serde_json::from_str(&body).map_err(|e| {
            Error::Decode(format!(
                "status endpoint body is not JSON: {e}: {}",
                body.chars().take(200).collect::<String>()
            ))
        })
    }
}
