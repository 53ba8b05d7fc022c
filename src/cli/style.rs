//! Terminal styling for upload output
//!
//! Whether color is emitted is decided per stream by `owo-colors`, which
//! honors `NO_COLOR`, `CLICOLOR_FORCE` and TTY detection.

use std::fmt::{self, Display};
use std::sync::OnceLock;

use indicatif::ProgressStyle;
pub use owo_colors::Stream;
use owo_colors::{OwoColorize, Style};

/// Semantic role of a piece of output
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    /// Paths, counts, hosts
    Accent,
    /// Completed uploads
    Success,
    /// Failures
    Error,
    /// Retries and validation problems
    Warn,
    /// Sizes and tokens
    Muted,
    /// Headers
    Emphasis,
}

impl Tone {
    const fn style(self) -> Style {
        match self {
            Self::Accent => Style::new().cyan(),
            Self::Success => Style::new().green(),
            Self::Error => Style::new().red(),
            Self::Warn => Style::new().yellow(),
            Self::Muted => Style::new().dimmed(),
            Self::Emphasis => Style::new().bold(),
        }
    }
}

/// A value painted with a [`Tone`]
#[derive(Clone, Copy, Debug)]
pub struct Painted<T> {
    value: T,
    tone: Tone,
    stream: Stream,
}

impl<T> Painted<T> {
    /// Check color support on `stream` instead of stdout
    #[must_use]
    pub const fn on(mut self, stream: Stream) -> Self {
        self.stream = stream;
        self
    }
}

impl<T: Display> Display for Painted<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let style = self.tone.style();
        write!(
            f,
            "{}",
            self.value.if_supports_color(self.stream, |v| v.style(style))
        )
    }
}

/// Paint anything displayable
pub trait Paint: Display {
    /// Apply `tone`, colored when stdout supports it
    fn paint(&self, tone: Tone) -> Painted<&Self> {
        Painted {
            value: self,
            tone,
            stream: Stream::Stdout,
        }
    }
}

impl<T: Display + ?Sized> Paint for T {}

/// Success mark
pub const CHECK: &str = "✓";
/// Failure mark
pub const CROSS: &str = "✗";
/// Retry mark
pub const RETRY: &str = "↻";

/// Clickable hyperlink (OSC 8) showing `text`, or `text (url)` when unsupported
pub fn hyperlink(stream: Stream, text: &str, url: &str) -> String {
    let target = match stream {
        Stream::Stdout => supports_hyperlinks::Stream::Stdout,
        Stream::Stderr => supports_hyperlinks::Stream::Stderr,
    };
    if supports_hyperlinks::on(target) {
        terminal_link::Link::new(text, url).to_string()
    } else {
        format!("{text} ({url})")
    }
}

/// Batch progress bar: spinner, `i/n`, current file
pub fn bar_style() -> ProgressStyle {
    static STYLE: OnceLock<ProgressStyle> = OnceLock::new();
    STYLE
        .get_or_init(|| {
            ProgressStyle::default_bar()
                .template("{spinner:.cyan} Uploading {pos}/{len} {wide_msg}")
                .expect("hardcoded progress template is valid")
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
        })
        .clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hyperlink_keeps_text() {
        let link = hyperlink(Stream::Stdout, "dir", "https://pan.baidu.com/disk/main");
        assert!(link.contains("dir"));
    }

    #[test]
    fn test_paint_keeps_text() {
        let painted = "two.txt".paint(Tone::Error).on(Stream::Stderr).to_string();
        assert!(painted.contains("two.txt"));
    }
}
