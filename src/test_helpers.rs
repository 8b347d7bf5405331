//! Common test helper functions shared across test modules.
use secrecy::SecretString;

use crate::{
    cli::Args,
    config::{ReporterConfig, RunContext},
};

/// Creates a test ReporterConfig with no version and an empty run context,
/// so tests opt into each fallback explicitly.
///
/// # Example
/// ```ignore
/// let mut config = create_test_config();
/// config.version = "1.0.0".into();
/// ```
pub fn create_test_config() -> ReporterConfig {
    ReporterConfig::builder()
        .api_url("https://api.archyl.test")
        .api_key(SecretString::from("test-api-key".to_string()))
        .project_id("proj-42")
        .build()
        .unwrap()
}

/// Creates a RunContext resembling a tag-triggered GitHub workflow run.
pub fn create_test_context() -> RunContext {
    RunContext {
        ref_name: "v1.4.0".into(),
        server_url: "https://github.com".into(),
        repository: "acme/app".into(),
        run_id: "123456".into(),
    }
}

/// Creates Args as if only the required inputs were passed.
pub fn create_test_args() -> Args {
    Args {
        api_url: "".into(),
        api_key: "key-123".into(),
        project_id: "proj".into(),
        version: "".into(),
        status: "".into(),
        changelog: "".into(),
        environment: "".into(),
        source_url: "".into(),
        ref_name: "".into(),
        server_url: "".into(),
        repository: "".into(),
        run_id: "".into(),
        output_file: None,
        debug: false,
    }
}
