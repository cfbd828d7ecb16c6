//! Message severities
//!
//! Each severity carries the label printed between brackets and the
//! terminal color its lines are wrapped in.

use colored::Color;
use std::fmt;

/// Log severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Debug,
    Info,
    Warning,
    Error,
    Success,
}

impl Severity {
    pub const ALL: [Severity; 5] = [
        Severity::Debug,
        Severity::Info,
        Severity::Warning,
        Severity::Error,
        Severity::Success,
    ];

    /// Label printed inside the leading brackets
    pub fn label(self) -> &'static str {
        match self {
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
            Severity::Success => "SUCCESS",
        }
    }

    /// Foreground color, `None` for plain output
    pub fn color(self) -> Option<Color> {
        match self {
            Severity::Debug => None,
            Severity::Info => Some(Color::Blue),
            Severity::Warning => Some(Color::Yellow),
            Severity::Error => Some(Color::Red),
            Severity::Success => Some(Color::Green),
        }
    }

    /// SGR parameter for the color, e.g. `34` for blue
    pub fn ansi_code(self) -> Option<String> {
        self.color().map(|color| color.to_fg_str().to_string())
    }

    pub fn from_log_level(level: log::Level) -> Self {
        match level {
            log::Level::Error => Severity::Error,
            log::Level::Warn => Severity::Warning,
            log::Level::Info => Severity::Info,
            log::Level::Debug | log::Level::Trace => Severity::Debug,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
