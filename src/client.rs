//! HTTP transport for submitting releases to the Archyl API.
use async_trait::async_trait;
use log::*;
use reqwest::{
    Client,
    header::{ACCEPT, HeaderMap, HeaderValue},
};
use secrecy::{ExposeSecret, SecretString};

use crate::{
    error::Result,
    release::{ReleaseRequest, ReleaseResponse},
};

#[cfg(test)]
use mockall::automock;

/// User agent sent with every request.
pub const USER_AGENT: &str = "archyl-release-action";

/// Header carrying the project API key.
pub const API_KEY_HEADER: &str = "X-API-Key";

/// Submits a release report and hands back whatever the API answered.
///
/// Implementations must not interpret the status code: non-2xx answers are
/// returned as a [`ReleaseResponse`], only transport failures are errors.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ReleaseClient: Send + Sync {
    async fn ingest(
        &self,
        endpoint: &str,
        api_key: &SecretString,
        request: &ReleaseRequest,
    ) -> Result<ReleaseResponse>;
}

/// [`ReleaseClient`] backed by reqwest. A single POST per call, no retries
/// and no timeout beyond reqwest's defaults.
pub struct HttpReleaseClient {
    client: Client,
}

impl HttpReleaseClient {
    pub fn new() -> crate::result::Result<Self> {
        let mut headers = HeaderMap::new();

        headers.append(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl ReleaseClient for HttpReleaseClient {
    async fn ingest(
        &self,
        endpoint: &str,
        api_key: &SecretString,
        request: &ReleaseRequest,
    ) -> Result<ReleaseResponse> {
        debug!("posting release {} to {endpoint}", request.version);

        let response = self
            .client
            .post(endpoint)
            .header(API_KEY_HEADER, api_key.expose_secret())
            .json(request)
            .send()
            .await?;

        let status = response.status().as_u16();
        let text = response.text().await?;

        debug!("ingest endpoint answered {status}");

        Ok(ReleaseResponse::from_text(status, &text))
    }
}
