//! Output formatting for CLI commands

/// Output helper for consistent formatting
///
/// Results go to stdout; warnings and verbose diagnostics go to stderr.
pub struct Output {
    verbose: bool,
}

impl Output {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Prints a result or success message
    pub fn success(&self, message: &str) {
        println!("{}", message);
    }

    /// Prints a warning that does not stop the command
    pub fn warn(&self, message: &str) {
        eprintln!("Warning: {}", message);
    }

    /// Prints a verbose debug message (only when --verbose is set)
    pub fn verbose(&self, message: &str) {
        if self.verbose {
            eprintln!("[verbose] {}", message);
        }
    }

    /// Prints a verbose debug message with context (only when --verbose is set)
    pub fn verbose_ctx(&self, context: &str, message: &str) {
        if self.verbose {
            eprintln!("[verbose:{}] {}", context, message);
        }
    }
}
