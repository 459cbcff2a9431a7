//! Output formatting module

pub mod styles;

use console::Term;
use owo_colors::OwoColorize as _;
pub use styles::Styles;

/// Output context carrying styling and terminal state.
pub struct OutputContext {
    /// Stylesheet for colored output.
    pub styles: Styles,
    /// Whether stdout is a TTY.
    pub is_tty: bool,
}

impl OutputContext {
    /// Create output context; colors are used only on a TTY without `no_color`.
    #[must_use]
    pub fn new(no_color: bool) -> Self {
        let is_tty = Term::stdout().is_term();

        let mut styles = Styles::default();
        if !no_color && is_tty {
            styles.colorize();
        }

        Self { styles, is_tty }
    }

    /// Print a success message prefixed with `✓`.
    pub fn success(&self, msg: &str) {
        println!("  {} {msg}", "✓".style(self.styles.success));
    }

    /// Print a warning message prefixed with `⚠`.
    pub fn warn(&self, msg: &str) {
        println!("  {} {msg}", "⚠".style(self.styles.warning));
    }

    /// Print an info message prefixed with `ℹ`.
    pub fn info(&self, msg: &str) {
        println!("  {} {msg}", "ℹ".style(self.styles.info));
    }

    /// Print a key-value pair with the key dimmed.
    pub fn kv(&self, key: &str, value: &str) {
        println!("  {}  {value}", key.style(self.styles.dim));
    }
}
