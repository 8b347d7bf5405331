//! CLI argument parsing for the release reporter.
//!
//! Each action input can be passed as a flag or through the `INPUT_*`
//! variable the Actions runner exports for it. Run context comes from the
//! runner's `GITHUB_*` variables.
use clap::{Parser, builder::FalseyValueParser};
use secrecy::SecretString;
use std::path::PathBuf;

use crate::{
    config::{ReporterConfig, RunContext},
    error::Result,
};

/// Report a deployed release to Archyl
#[derive(Parser, Debug)]
#[command(version, about, long_about = None, disable_version_flag = true)]
pub struct Args {
    #[arg(long, env = "INPUT_API-URL", default_value = "")]
    /// Archyl API base url. Defaults to https://api.archyl.com.
    pub api_url: String,

    #[arg(
        long,
        env = "INPUT_API-KEY",
        default_value = "",
        hide_env_values = true
    )]
    /// Archyl project API key (required).
    pub api_key: String,

    #[arg(long, env = "INPUT_PROJECT-ID", default_value = "")]
    /// Archyl project id (required).
    pub project_id: String,

    #[arg(long, env = "INPUT_VERSION", default_value = "")]
    /// Release version. Falls back to GITHUB_REF_NAME.
    pub version: String,

    #[arg(long, env = "INPUT_STATUS", default_value = "")]
    /// Release status. Defaults to "deployed".
    pub status: String,

    #[arg(long, env = "INPUT_CHANGELOG", default_value = "")]
    /// Changelog or release notes.
    pub changelog: String,

    #[arg(long, env = "INPUT_ENVIRONMENT", default_value = "")]
    /// Environment the release was deployed to.
    pub environment: String,

    #[arg(long, env = "INPUT_SOURCE-URL", default_value = "")]
    /// Link to the release source. Defaults to the workflow run url.
    pub source_url: String,

    #[arg(long, env = "GITHUB_REF_NAME", default_value = "", hide = true)]
    pub ref_name: String,

    #[arg(long, env = "GITHUB_SERVER_URL", default_value = "", hide = true)]
    pub server_url: String,

    #[arg(long, env = "GITHUB_REPOSITORY", default_value = "", hide = true)]
    pub repository: String,

    #[arg(long, env = "GITHUB_RUN_ID", default_value = "", hide = true)]
    pub run_id: String,

    #[arg(long, env = "GITHUB_OUTPUT")]
    /// File step outputs are appended to.
    pub output_file: Option<PathBuf>,

    #[arg(long, env = "RUNNER_DEBUG", value_parser = FalseyValueParser::new())]
    /// Enables debug logs
    pub debug: bool,
}

impl Args {
    /// Resolve the arguments into a [`ReporterConfig`], applying defaults
    /// for blank optional inputs and rejecting blank required ones.
    pub fn reporter_config(&self) -> Result<ReporterConfig> {
        let mut builder = ReporterConfig::builder();

        builder
            .api_key(SecretString::from(input(&self.api_key)))
            .project_id(input(&self.project_id))
            .version(input(&self.version))
            .changelog(input(&self.changelog))
            .environment(input(&self.environment))
            .source_url(input(&self.source_url))
            .context(self.run_context());

        let api_url = input(&self.api_url);
        if !api_url.is_empty() {
            builder.api_url(api_url);
        }

        let status = input(&self.status);
        if !status.is_empty() {
            builder.status(status);
        }

        builder.build()
    }

    /// Fallback values supplied by the CI run.
    pub fn run_context(&self) -> RunContext {
        RunContext {
            ref_name: input(&self.ref_name),
            server_url: input(&self.server_url),
            repository: input(&self.repository),
            run_id: input(&self.run_id),
        }
    }
}

/// Inputs are trimmed, so whitespace-only values count as unset.
fn input(value: &str) -> String {
    value.trim().to_string()
}
