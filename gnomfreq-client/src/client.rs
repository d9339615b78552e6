//! gnomAD GraphQL client implementation.
//!
//! This module provides the [`GnomadClient`] type and its builder. One call to
//! [`VariantSource::fetch`] is one POST to the API; there is no retry and no caching.
use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::StatusCode;
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use tracing::debug;

use gnomfreq_core::{FetchFailure, GraphQlResponse, QueryPayload, VariantResponse, VariantSource};

use super::consts::{DEFAULT_TIMEOUT_SECS, JSON_CONTENT_TYPE, USER_AGENT};
use super::utils::get_default_gnomad_api;

/// Builder for constructing a [`GnomadClient`] with custom configuration.
///
/// # Examples
///
/// ```rust,no_run
/// use gnomfreq_client::GnomadClient;
/// use std::time::Duration;
///
/// # fn main() -> anyhow::Result<()> {
/// let client = GnomadClient::builder()
///     .with_api("https://gnomad.broadinstitute.org/api".to_string())
///     .with_timeout(Duration::from_secs(30))
///     .finish()?;
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct GnomadClientBuilder {
    api: Option<String>,
    timeout: Option<Duration>,
    no_proxy: bool,
}

impl GnomadClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the GraphQL endpoint.
    pub fn with_api(mut self, api: String) -> Self {
        self.api = Some(api);
        self
    }

    /// Sets the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Ignores proxy settings from the environment.
    pub fn without_proxy(mut self) -> Self {
        self.no_proxy = true;
        self
    }

    /// Consumes the builder and creates a GnomadClient.
    pub fn finish(self) -> Result<GnomadClient> {
        let api = self.api.unwrap_or_else(get_default_gnomad_api);
        let timeout = self
            .timeout
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));

        let mut http = Client::builder().timeout(timeout).user_agent(USER_AGENT);
        if self.no_proxy {
            http = http.no_proxy();
        }
        let http = http
            .build()
            .context("Failed to build the HTTP client")?;

        Ok(GnomadClient { api, http })
    }
}

/// Client for the gnomAD GraphQL endpoint.
pub struct GnomadClient {
    /// GraphQL endpoint URL
    pub api: String,
    http: Client,
}

impl GnomadClient {
    /// Creates a new builder for constructing a [`GnomadClient`].
    pub fn builder() -> GnomadClientBuilder {
        GnomadClientBuilder::default()
    }

    /// Post a query and return the raw status and body.
    fn post(&self, payload: &QueryPayload) -> Result<(StatusCode, String), FetchFailure> {
        let response = self
            .http
            .post(&self.api)
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .json(payload)
            .send()
            .map_err(|err| FetchFailure::Transport(err.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|err| FetchFailure::Transport(err.to_string()))?;
        Ok((status, body))
    }
}

impl VariantSource for GnomadClient {
    fn fetch(&self, payload: &QueryPayload) -> Result<VariantResponse, FetchFailure> {
        debug!(
            api = %self.api,
            variant = %payload.variant_id,
            dataset = %payload.build,
            category = %payload.category,
            "querying gnomAD"
        );
        let (status, body) = self.post(payload)?;
        interpret_body(status, &body)
    }
}

///
/// Interpret an API answer.
///
/// GraphQL errors are usually sent with a JSON body even on a non-2xx status, so the
/// body is parsed first and the status only matters when it isn't JSON.
///
pub fn interpret_body(status: StatusCode, body: &str) -> Result<VariantResponse, FetchFailure> {
    match serde_json::from_str::<GraphQlResponse>(body) {
        Ok(envelope) => envelope.into_variant_response(),
        Err(_) if !status.is_success() => Err(FetchFailure::Status(status.as_u16())),
        Err(err) => Err(FetchFailure::Decode(err.to_string())),
    }
}
