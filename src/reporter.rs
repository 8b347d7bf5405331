//! Reports a single release to the Archyl API.
//!
//! The flow is linear: resolve the version, build the payload, post it once
//! and translate the answer into either a `release-id` output or a failure.
//! Nothing is retried.
use log::*;

use crate::{
    cli::Args,
    client::{HttpReleaseClient, ReleaseClient},
    config::ReporterConfig,
    error::{ReporterError, Result},
    release::{ReleaseRequest, ingest_endpoint},
    sink::ResultSink,
};

/// Name of the step output carrying the created release's id.
pub const RELEASE_ID_OUTPUT: &str = "release-id";

pub struct ReleaseReporter {
    config: ReporterConfig,
    client: Box<dyn ReleaseClient>,
}

impl ReleaseReporter {
    pub fn new(config: ReporterConfig, client: Box<dyn ReleaseClient>) -> Self {
        Self { config, client }
    }

    /// Build the payload for `version` from the configured optional fields.
    pub fn build_request(&self, version: String) -> ReleaseRequest {
        ReleaseRequest::new(version, self.config.status.clone())
            .with_changelog(&self.config.changelog)
            .with_environment(&self.config.environment)
            .with_source_url(self.config.resolve_source_url())
    }

    /// Submit the release and return the id the API assigned, if any.
    ///
    /// Fails before any network call when no version can be resolved.
    pub async fn report(&self) -> Result<Option<String>> {
        let version = self
            .config
            .resolve_version()
            .ok_or(ReporterError::MissingVersion)?;

        let request = self.build_request(version);

        let endpoint =
            ingest_endpoint(&self.config.api_url, &self.config.project_id);

        info!(
            "reporting release {} ({}) for project {}",
            request.version, request.status, self.config.project_id
        );

        let response = self
            .client
            .ingest(&endpoint, &self.config.api_key, &request)
            .await?;

        if !response.is_success() {
            return Err(ReporterError::api(response.status, &response.body));
        }

        Ok(response.release_id())
    }

    /// Run the report and publish its outcome to `sink`. Never fails past
    /// this point: every error becomes a failure message on the sink.
    pub async fn run(&self, sink: &dyn ResultSink) {
        match self.report().await {
            Ok(Some(release_id)) => {
                if let Err(err) = sink.set_output(RELEASE_ID_OUTPUT, &release_id)
                {
                    sink.set_failed(&err.to_string());
                    return;
                }
                sink.info(&format!("Release created: {release_id}"));
            }
            Ok(None) => sink.info("Release created (no ID returned)"),
            Err(err) => sink.set_failed(&err.to_string()),
        }
    }
}

/// Resolve `args`, build the HTTP client and report the release. Every
/// failure, including bad configuration, ends up on `sink`.
pub async fn execute(args: &Args, sink: &dyn ResultSink) {
    let config = match args.reporter_config() {
        Ok(config) => config,
        Err(err) => {
            sink.set_failed(&err.to_string());
            return;
        }
    };

    let client = match HttpReleaseClient::new() {
        Ok(client) => client,
        Err(err) => {
            sink.set_failed(&err.to_string());
            return;
        }
    };

    ReleaseReporter::new(config, Box::new(client)).run(sink).await;
}
