use reqwest::{Client, StatusCode};
use std::error::Error;

use crate::{error::LocateError, models::IpInfo};

/// Result of one upstream lookup, before it is shaped into a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    /// Upstream answered 200; carries its `country` field, possibly empty.
    Found(String),
    /// Upstream answered 404.
    NotFound,
    /// Any other upstream status. The detail is dropped at the HTTP boundary.
    UpstreamError(StatusCode),
}

/// Client for the ipinfo.io JSON API.
///
/// Wraps a shared `reqwest::Client` with its default settings. There is no
/// request timeout, so a hanging upstream holds the calling task until the
/// connection fails.
#[derive(Debug, Clone)]
pub struct IpInfoClient {
    http: Client,
    endpoint: String,
}

impl IpInfoClient {
    pub fn new(http: Client, endpoint: impl Into<String>) -> Self {
        let endpoint = endpoint.into().trim_end_matches('/').to_string();
        Self { http, endpoint }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// The ip is interpolated as-is; validating it is left to the upstream.
    pub fn lookup_url(&self, ip: &str) -> String {
        format!("{}/{}/json", self.endpoint, ip)
    }

    /// Issue exactly one GET for `ip` and classify the answer.
    pub async fn lookup(&self, ip: &str) -> Result<LookupOutcome, LocateError> {
        let url = self.lookup_url(ip);
        tracing::debug!("Querying upstream at {}", url);

        let request = self.http.get(&url).build().map_err(|e| {
            tracing::warn!("Failed to build upstream request for {}: {}", url, e);
            LocateError::Request(e)
        })?;

        let response = self.http.execute(request).await.map_err(|e| {
            let mut error_msg = format!("Upstream request failed: {}", e);
            let mut source = e.source();
            while let Some(err) = source {
                error_msg.push_str(&format!("\n  Caused by: {}", err));
                source = err.source();
            }
            tracing::warn!("{}", error_msg);
            LocateError::Upstream(e)
        })?;

        match response.status() {
            StatusCode::OK => {
                let info: IpInfo = response.json().await.map_err(|e| {
                    tracing::warn!("Failed to parse upstream response: {}", e);
                    LocateError::Decode(e)
                })?;
                tracing::debug!("Upstream located {} in {:?}", ip, info.country);
                Ok(LookupOutcome::Found(info.country))
            }
            StatusCode::NOT_FOUND => {
                tracing::debug!("Upstream has no country for {}", ip);
                Ok(LookupOutcome::NotFound)
            }
            status => {
                tracing::warn!("Upstream returned HTTP {} for {}", status, ip);
                Ok(LookupOutcome::UpstreamError(status))
            }
        }
    }
}
