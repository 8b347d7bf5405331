//! Request and response types for the Archyl release ingest endpoint.
use serde::Serialize;
use serde_json::Value;

/// Identifies this tool as the caller in every ingested release.
pub const RELEASE_SOURCE: &str = "github_action";

/// Release status used when none is configured.
pub const DEFAULT_STATUS: &str = "deployed";

/// Body of `POST /api/v1/projects/{id}/releases/ingest`.
///
/// Optional fields are left out of the serialized JSON entirely when
/// absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseRequest {
    pub version: String,
    pub status: String,
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub changelog: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
}

impl ReleaseRequest {
    /// Create a request with only the required fields set.
    pub fn new(version: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            status: status.into(),
            source: RELEASE_SOURCE.into(),
            changelog: None,
            environment: None,
            source_url: None,
        }
    }

    pub fn with_changelog(mut self, changelog: &str) -> Self {
        self.changelog = non_empty(changelog);
        self
    }

    pub fn with_environment(mut self, environment: &str) -> Self {
        self.environment = non_empty(environment);
        self
    }

    pub fn with_source_url(mut self, source_url: Option<String>) -> Self {
        self.source_url = source_url.filter(|url| !url.is_empty());
        self
    }
}

/// Status code and decoded body returned by the ingest endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct ReleaseResponse {
    pub status: u16,
    pub body: Value,
}

impl ReleaseResponse {
    pub fn new(status: u16, body: Value) -> Self {
        Self { status, body }
    }

    /// Decode a raw response body. An empty body becomes `null` and text
    /// that is not JSON is kept verbatim as a JSON string.
    pub fn from_text(status: u16, text: &str) -> Self {
        let body = if text.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str(text)
                .unwrap_or_else(|_| Value::String(text.to_string()))
        };

        Self { status, body }
    }

    /// True for any 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// The `id` of the created release, when the API returned a usable one.
    ///
    /// `null`, `false`, `""` and zero count as no id. Strings are returned
    /// as-is and any other value is rendered as compact JSON.
    pub fn release_id(&self) -> Option<String> {
        match self.body.get("id")? {
            Value::Null | Value::Bool(false) => None,
            Value::String(id) if id.is_empty() => None,
            Value::Number(id) if id.as_f64() == Some(0.0) => None,
            Value::String(id) => Some(id.clone()),
            id => Some(id.to_string()),
        }
    }
}

/// Build the ingest endpoint for a project, tolerating any number of
/// trailing slashes on the configured API url.
pub fn ingest_endpoint(api_url: &str, project_id: &str) -> String {
    format!(
        "{}/api/v1/projects/{project_id}/releases/ingest",
        api_url.trim_end_matches('/')
    )
}

/// `Some` only for a non-empty string.
pub fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
