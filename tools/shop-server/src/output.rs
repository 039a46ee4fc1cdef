//! Console output for the server binary.

use console::style;

/// Output handler for operator-facing messages.
#[derive(Clone, Default)]
pub struct Output;

impl Output {
    /// Create a new output handler.
    pub fn new() -> Self {
        Self
    }

    /// Print an info message.
    pub fn info(&self, msg: &str) {
        eprintln!("{} {}", style("ℹ").blue(), msg);
    }

    /// Print a success message.
    pub fn success(&self, msg: &str) {
        eprintln!("{} {}", style("✓").green(), msg);
    }

    /// Print an error message.
    pub fn error(&self, msg: &str) {
        eprintln!("{} {}", style("✗").red(), style(msg).red());
    }

    /// Print a header/title.
    pub fn header(&self, msg: &str) {
        eprintln!("\n{}", style(msg).bold().underlined());
    }

    /// Print a key-value pair.
    pub fn kv(&self, key: &str, value: &str) {
        eprintln!("  {}: {}", style(key).dim(), value);
    }
}
