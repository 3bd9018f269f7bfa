//! Output formatting and styling module.
//!
//! Centralizes the diagnostic output of both binaries. The sweep tool is
//! silent on success, so the surface here is small: a styled error line on
//! standard error.

use colored::*;

/// Manages CLI diagnostics with consistent styling.
pub struct OutputFormatter;

impl OutputFormatter {
    /// Prints an error message in red with an X mark to standard error.
    ///
    /// # Arguments
    ///
    /// * `message` - The message to display
    ///
    /// # Example
    ///
    /// ```no_run
    /// use dirsweep::output::OutputFormatter;
    /// OutputFormatter::error("Failed to move file");
    /// ```
    pub fn error(message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }
}
