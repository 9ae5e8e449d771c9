//! Fatal error and warning output for stderr, with color support.
//!
//! Format: `✖ Fatal [Type]: message` / `  × detail` / `  help: suggestion`

use std::error::Error;
use std::io::{IsTerminal, Write};

use super::ColorMode;
use super::ansi;
use crate::error::CleanError;

/// Error output formatter with color support.
pub struct ErrorOutput {
    use_colors: bool,
}

impl ErrorOutput {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: match mode {
                ColorMode::Always => true,
                ColorMode::Never => false,
                ColorMode::Auto => Self::stderr_supports_color(),
            },
        }
    }

    fn stderr_supports_color() -> bool {
        // https://no-color.org: presence of the variable (any value) disables color
        if std::env::var_os("NO_COLOR").is_some() {
            return false;
        }
        std::io::stderr().is_terminal()
    }

    /// Prints a fatal error, its underlying cause and a hint when one applies.
    pub fn print_fatal(&self, err: &CleanError) {
        let mut stderr = std::io::stderr().lock();
        self.write_fatal(&mut stderr, err);
    }

    /// Writes a fatal error to a writer.
    pub fn write_fatal<W: Write>(&self, w: &mut W, err: &CleanError) {
        let detail = err.source().map(ToString::to_string);
        let error_type = format!("Fatal [{}]", err.error_type());
        self.write_error(
            w,
            &error_type,
            &err.to_string(),
            detail.as_deref(),
            suggestion_for(err),
        );
    }

    pub fn print_warning(&self, message: &str, detail: Option<&str>) {
        let mut stderr = std::io::stderr().lock();
        self.write_warning(&mut stderr, message, detail);
    }

    /// Writes an error to a writer.
    pub fn write_error<W: Write>(
        &self,
        w: &mut W,
        error_type: &str,
        message: &str,
        detail: Option<&str>,
        suggestion: Option<&str>,
    ) {
        // stderr write failures are not recoverable here
        if self.use_colors {
            let _ = writeln!(
                w,
                "{}{}✖ {error_type}:{} {message}",
                ansi::BOLD,
                ansi::RED,
                ansi::RESET
            );
        } else {
            let _ = writeln!(w, "✖ {error_type}: {message}");
        }

        self.write_detail(w, detail);

        if let Some(s) = suggestion {
            if self.use_colors {
                let _ = writeln!(w, "  {}help:{} {s}", ansi::CYAN, ansi::RESET);
            } else {
                let _ = writeln!(w, "  help: {s}");
            }
        }
    }

    /// Writes a warning to a writer.
    pub fn write_warning<W: Write>(&self, w: &mut W, message: &str, detail: Option<&str>) {
        if self.use_colors {
            let _ = writeln!(
                w,
                "{}{}⚠ Warning:{} {message}",
                ansi::BOLD,
                ansi::YELLOW,
                ansi::RESET
            );
        } else {
            let _ = writeln!(w, "⚠ Warning: {message}");
        }

        self.write_detail(w, detail);
    }

    fn write_detail<W: Write>(&self, w: &mut W, detail: Option<&str>) {
        let Some(d) = detail else {
            return;
        };
        if self.use_colors {
            let _ = writeln!(w, "  {}× {d}{}", ansi::DIM, ansi::RESET);
        } else {
            let _ = writeln!(w, "  × {d}");
        }
    }

    #[cfg(test)]
    pub const fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }
}

const fn suggestion_for(err: &CleanError) -> Option<&'static str> {
    match err {
        CleanError::RootNotFound { .. } | CleanError::RootNotDirectory(_) => {
            Some("Pass an existing directory, or omit PATH to clean the current directory")
        }
        _ => None,
    }
}

#[cfg(test)]
#[path = "error_output_tests.rs"]
mod tests;
