//! Output formatting

use console::style;
use trebol::FormatPolicy;

/// Console printer for command results
#[derive(Debug)]
pub struct Printer {
    /// Whether to use colors
    pub use_color: bool,
    /// Quiet mode
    pub quiet: bool,
}

impl Printer {
    /// Create a new printer
    #[must_use]
    pub fn new(use_color: bool, quiet: bool) -> Self {
        Self { use_color, quiet }
    }

    /// Print a success line
    pub fn success(&self, message: &str) {
        if self.quiet {
            return;
        }
        if self.use_color {
            println!("{} {message}", style("✓").green());
        } else {
            println!("ok: {message}");
        }
    }

    /// Print a failure line to stderr
    pub fn failure(&self, message: &str) {
        if self.use_color {
            eprintln!("{} {message}", style("✗").red());
        } else {
            eprintln!("error: {message}");
        }
    }

    /// Print one row of the columns listing
    pub fn column_row(&self, name: &str, policy: FormatPolicy) {
        let formats = policy.allowed_formats().join(", ");
        if self.use_color {
            println!("  {:<34} {}", style(name).cyan(), formats);
        } else {
            println!("  {name:<34} {formats}");
        }
    }
}

/// Check if stdout is a terminal
#[must_use]
pub fn stdout_is_terminal() -> bool {
    std::io::IsTerminal::is_terminal(&std::io::stdout())
}
