//! Error handling and result types for release-train.

use color_eyre::Result as EyreResult;

/// Type alias for Result with color-eyre error reporting and diagnostics.
pub type Result<T> = EyreResult<T>;
