//! Colored output helpers for the CLI.

use owo_colors::OwoColorize;

/// Output style configuration.
pub struct Output {
    /// Whether to use colored output.
    pub colored: bool,
}

impl Default for Output {
    fn default() -> Self {
        Self::new()
    }
}

impl Output {
    /// Create a new output helper with colors enabled.
    pub fn new() -> Self {
        Self { colored: true }
    }

    /// Create a new output helper with colors disabled.
    pub fn no_color() -> Self {
        Self { colored: false }
    }

    /// Print a section header.
    pub fn header(&self, text: &str) {
        if self.colored {
            println!("{}", text.bright_cyan().bold());
        } else {
            println!("{}", text);
        }
    }

    /// Print a named list item with a dimmed detail column.
    pub fn item(&self, name: &str, detail: &str) {
        if self.colored {
            println!("  {}  {}", name.bright_white().bold(), detail.dimmed());
        } else {
            println!("  {}  {}", name, detail);
        }
    }

    /// Print a key/value line.
    pub fn field(&self, key: &str, value: &str) {
        if self.colored {
            println!("{}: {}", key.bright_white().bold(), value);
        } else {
            println!("{}: {}", key, value);
        }
    }

    /// Pretty-print a JSON value, coloring by its `status` tag when present.
    pub fn json(&self, value: &serde_json::Value) {
        let pretty = serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string());
        if !self.colored {
            println!("{}", pretty);
            return;
        }
        match value.get("status").and_then(|s| s.as_str()) {
            Some("error") => println!("{}", pretty.red()),
            Some("success") => println!("{}", pretty.green()),
            _ => println!("{}", pretty),
        }
    }

    /// Print an error message.
    pub fn error(&self, text: &str) {
        if self.colored {
            eprintln!("{} {}", "error:".red().bold(), text);
        } else {
            eprintln!("error: {}", text);
        }
    }
}
