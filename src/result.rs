//! Result alias for process bootstrap code.
//!
//! Logger setup, HTTP client construction and the tokio entry point report
//! failures through `color-eyre`, which renders them with context and an
//! optional backtrace. Release reporting itself uses
//! [`ReporterError`](crate::error::ReporterError) so that each failure maps
//! to a single message for the CI host.

use color_eyre::eyre::Result as EyreResult;

/// Standard result type for bootstrap code.
///
/// ```rust,ignore
/// use crate::result::Result;
///
/// fn setup() -> Result<()> {
///     color_eyre::install()?;
///     Ok(())
/// }
/// ```
pub type Result<T> = EyreResult<T>;
