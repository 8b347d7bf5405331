//! Report deployed releases to the Archyl release-tracking API.
//!
//! The crate resolves action inputs into a [`ReporterConfig`], posts one
//! [`ReleaseRequest`] through a [`ReleaseClient`] and publishes the outcome
//! on a [`ResultSink`].
pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod release;
pub mod reporter;
pub mod result;
pub mod sink;

pub use cli::Args;
pub use client::{HttpReleaseClient, ReleaseClient};
pub use config::{ReporterConfig, RunContext};
pub use error::ReporterError;
pub use release::{ReleaseRequest, ReleaseResponse};
pub use reporter::{ReleaseReporter, execute};
pub use sink::{ActionSink, ResultSink};

#[cfg(test)]
pub mod test_helpers;
