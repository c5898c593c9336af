//! Terminal styling helpers

use indicatif::ProgressStyle;
use owo_colors::{OwoColorize, Stream};
use std::fmt::Display;

/// Check mark glyph
pub const CHECK: &str = "✓";
/// Warning glyph
pub const WARN: &str = "!";
/// Divergence glyph
pub const DIVERGE: &str = "≠";

/// Color helpers that respect terminal color support
pub trait Stylize: Display + Sized {
    /// Dimmed secondary text
    fn muted(&self) -> String {
        self.if_supports_color(Stream::Stdout, |t| t.dimmed())
            .to_string()
    }

    /// Bold text
    fn emphasis(&self) -> String {
        self.if_supports_color(Stream::Stdout, |t| t.bold())
            .to_string()
    }

    /// Highlighted values (names, counts)
    fn accent(&self) -> String {
        self.if_supports_color(Stream::Stdout, |t| t.cyan())
            .to_string()
    }

    /// Success text
    fn success(&self) -> String {
        self.if_supports_color(Stream::Stdout, |t| t.green())
            .to_string()
    }

    /// Warning text
    fn warn(&self) -> String {
        self.if_supports_color(Stream::Stdout, |t| t.yellow())
            .to_string()
    }

    /// Error text
    fn danger(&self) -> String {
        self.if_supports_color(Stream::Stdout, |t| t.red())
            .to_string()
    }
}

impl<T: Display> Stylize for T {}

/// Green check mark
pub fn check() -> String {
    CHECK.success()
}

/// Muted arrow for list items
pub fn arrow() -> String {
    "→".muted()
}

/// Spinner style for long-running lookups
pub fn spinner_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.cyan} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
}

/// Render `#number`, hyperlinked to `url` where the terminal supports it
pub fn pr_link(number: u64, url: &str) -> String {
    let text = format!("#{number}");
    if supports_hyperlinks::on(supports_hyperlinks::Stream::Stdout) {
        terminal_link::Link::new(&text, url).to_string()
    } else {
        format!("{text} ({url})")
    }
}
