//! Typed configuration for a single release report.
//!
//! [`ReporterConfig`] holds the resolved action inputs and
//! [`RunContext`] holds the values the CI run supplies as fallbacks.
use derive_builder::Builder;
use secrecy::{ExposeSecret, SecretString};

use crate::{
    error::{ReporterError, Result},
    release::{DEFAULT_STATUS, non_empty},
};

/// Default Archyl API base url.
pub const DEFAULT_API_URL: &str = "https://api.archyl.com";

/// Values describing the CI run that invoked the reporter.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunContext {
    /// Branch or tag name that triggered the run (`GITHUB_REF_NAME`).
    pub ref_name: String,
    /// Forge server url, e.g. `https://github.com` (`GITHUB_SERVER_URL`).
    pub server_url: String,
    /// Repository in `owner/name` form (`GITHUB_REPOSITORY`).
    pub repository: String,
    /// Workflow run id (`GITHUB_RUN_ID`).
    pub run_id: String,
}

impl RunContext {
    /// Link to the workflow run, if every piece of it is known.
    pub fn run_url(&self) -> Option<String> {
        if self.server_url.is_empty()
            || self.repository.is_empty()
            || self.run_id.is_empty()
        {
            return None;
        }

        Some(format!(
            "{}/{}/actions/runs/{}",
            self.server_url, self.repository, self.run_id
        ))
    }
}

/// Resolved inputs for reporting one release.
#[derive(Debug, Clone, Builder)]
#[builder(setter(into), build_fn(private, name = "_build"))]
pub struct ReporterConfig {
    /// Base url of the Archyl API.
    #[builder(default = "DEFAULT_API_URL.into()")]
    pub api_url: String,
    /// Project scoped API key sent as `X-API-Key`.
    pub api_key: SecretString,
    /// Archyl project receiving the release.
    pub project_id: String,
    /// Explicit release version. Falls back to the run's ref name.
    #[builder(default)]
    pub version: String,
    #[builder(default = "DEFAULT_STATUS.into()")]
    pub status: String,
    #[builder(default)]
    pub changelog: String,
    #[builder(default)]
    pub environment: String,
    /// Explicit link back to the source. Falls back to the run url.
    #[builder(default)]
    pub source_url: String,
    #[builder(default)]
    pub context: RunContext,
}

impl ReporterConfigBuilder {
    /// Build the config, rejecting a blank api key or project id.
    pub fn build(&self) -> Result<ReporterConfig> {
        if self
            .api_key
            .as_ref()
            .is_none_or(|key| key.expose_secret().is_empty())
        {
            return Err(ReporterError::missing_input("api-key"));
        }

        if self.project_id.as_ref().is_none_or(|id| id.is_empty()) {
            return Err(ReporterError::missing_input("project-id"));
        }

        self._build().map_err(|e| {
            ReporterError::invalid_config(format!(
                "Failed to build reporter config: {}",
                e
            ))
        })
    }
}

impl ReporterConfig {
    pub fn builder() -> ReporterConfigBuilder {
        ReporterConfigBuilder::default()
    }

    /// The explicit version, else the ref name of the run.
    pub fn resolve_version(&self) -> Option<String> {
        non_empty(&self.version).or_else(|| non_empty(&self.context.ref_name))
    }

    /// The explicit source url, else a link to the workflow run.
    pub fn resolve_source_url(&self) -> Option<String> {
        non_empty(&self.source_url).or_else(|| self.context.run_url())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{create_test_config, create_test_context};

    #[test]
    fn builder_applies_defaults() {
        let config = ReporterConfig::builder()
            .api_key(SecretString::from("key".to_string()))
            .project_id("proj")
            .build()
            .unwrap();

        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.status, DEFAULT_STATUS);
        assert!(config.version.is_empty());
        assert!(config.changelog.is_empty());
        assert!(config.environment.is_empty());
        assert!(config.source_url.is_empty());
        assert_eq!(config.context, RunContext::default());
    }

    #[test]
    fn builder_requires_api_key() {
        let err = ReporterConfig::builder()
            .project_id("proj")
            .build()
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Input required and not supplied: api-key"
        );

        let err = ReporterConfig::builder()
            .api_key(SecretString::from("".to_string()))
            .project_id("proj")
            .build()
            .unwrap_err();
        assert!(
            matches!(err, ReporterError::MissingInput(name) if name == "api-key")
        );
    }

    #[test]
    fn builder_requires_project_id() {
        let err = ReporterConfig::builder()
            .api_key(SecretString::from("key".to_string()))
            .project_id("")
            .build()
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Input required and not supplied: project-id"
        );
    }

    #[test]
    fn debug_output_redacts_api_key() {
        let config = create_test_config();
        let debug = format!("{config:?}");
        assert!(!debug.contains("test-api-key"));
    }

    #[test]
    fn version_prefers_explicit_input() {
        let mut config = create_test_config();
        config.version = "2.0.0".into();
        config.context = create_test_context();

        assert_eq!(config.resolve_version(), Some("2.0.0".into()));
    }

    #[test]
    fn version_falls_back_to_ref_name() {
        let mut config = create_test_config();
        config.context = create_test_context();

        assert_eq!(config.resolve_version(), Some("v1.4.0".into()));
    }

    #[test]
    fn version_missing_everywhere() {
        let config = create_test_config();
        assert_eq!(config.resolve_version(), None);
    }

    #[test]
    fn source_url_prefers_explicit_input() {
        let mut config = create_test_config();
        config.source_url = "https://ci.example.com/build/7".into();
        config.context = create_test_context();

        assert_eq!(
            config.resolve_source_url(),
            Some("https://ci.example.com/build/7".into())
        );
    }

    #[test]
    fn source_url_synthesized_from_run() {
        let mut config = create_test_config();
        config.context = create_test_context();

        assert_eq!(
            config.resolve_source_url(),
            Some("https://github.com/acme/app/actions/runs/123456".into())
        );
    }

    #[test]
    fn source_url_absent_without_full_run_context() {
        let mut config = create_test_config();
        config.context = RunContext {
            server_url: "https://github.com".into(),
            repository: "acme/app".into(),
            ..Default::default()
        };

        assert_eq!(config.resolve_source_url(), None);
    }
}
