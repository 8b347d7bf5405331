//! Reporting results back to the CI host.
//!
//! [`ActionSink`] speaks the GitHub Actions runner protocol: step outputs
//! are appended to the file named by `GITHUB_OUTPUT` and failures are
//! announced with the `::error::` workflow command.
use log::*;
use std::{
    cell::Cell,
    fs::OpenOptions,
    io::{self, Write},
    path::PathBuf,
};

#[cfg(test)]
use mockall::automock;

/// Where the reporter publishes its single terminal effect.
#[cfg_attr(test, automock)]
pub trait ResultSink {
    /// Publish a named step output.
    fn set_output(&self, name: &str, value: &str) -> io::Result<()>;
    /// Emit an informational message.
    fn info(&self, message: &str);
    /// Mark the invocation failed with a message.
    fn set_failed(&self, message: &str);
}

/// [`ResultSink`] for the GitHub Actions runner.
pub struct ActionSink {
    output_file: Option<PathBuf>,
    failed: Cell<bool>,
}

impl ActionSink {
    /// Without an outputs file, outputs fall back to the legacy
    /// `::set-output` command on stdout.
    pub fn new(output_file: Option<PathBuf>) -> Self {
        Self {
            output_file,
            failed: Cell::new(false),
        }
    }

    /// Whether [`ResultSink::set_failed`] was called.
    pub fn failed(&self) -> bool {
        self.failed.get()
    }
}

impl ResultSink for ActionSink {
    fn set_output(&self, name: &str, value: &str) -> io::Result<()> {
        debug!("setting output {name}");

        match &self.output_file {
            Some(path) => {
                let mut file =
                    OpenOptions::new().create(true).append(true).open(path)?;

                file.write_all(output_file_entry(name, value).as_bytes())
            }
            None => {
                println!(
                    "::set-output name={}::{}",
                    escape_property(name),
                    escape_data(value)
                );
                Ok(())
            }
        }
    }

    fn info(&self, message: &str) {
        info!("{message}");
    }

    fn set_failed(&self, message: &str) {
        self.failed.set(true);
        println!("::error::{}", escape_data(message));
    }
}

/// Format one entry of the outputs file. Multi-line values use the
/// heredoc form with a random delimiter.
fn output_file_entry(name: &str, value: &str) -> String {
    if !value.contains('\n') && !value.contains('\r') {
        return format!("{name}={value}\n");
    }

    let mut delimiter = format!("ghadelimiter_{}", nanoid::nanoid!());

    while value.contains(&delimiter) {
        delimiter = format!("ghadelimiter_{}", nanoid::nanoid!());
    }

    format!("{name}<<{delimiter}\n{value}\n{delimiter}\n")
}

/// Escape the message part of a workflow command.
fn escape_data(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Escape a property value of a workflow command.
fn escape_property(value: &str) -> String {
    escape_data(value).replace(':', "%3A").replace(',', "%2C")
}
