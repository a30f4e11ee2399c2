//! Severity definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Classification of a log event.
///
/// The severity decides which sections a block contains and which icon is
/// shown on its status line. `Warning` is kept for compatibility and behaves
/// exactly like `Notice`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Default)]
pub enum Severity {
    #[default]
    Info,
    Debug,
    Verbose,
    /// Deprecated alias of [`Severity::Notice`].
    Warning,
    Notice,
    Error,
    Fault,
}

impl Severity {
    pub const ALL: [Severity; 7] = [
        Severity::Info,
        Severity::Debug,
        Severity::Verbose,
        Severity::Warning,
        Severity::Notice,
        Severity::Error,
        Severity::Fault,
    ];

    pub fn to_str(&self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Debug => "DEBUG",
            Severity::Verbose => "VERBOSE",
            Severity::Warning => "WARNING",
            Severity::Notice => "NOTICE",
            Severity::Error => "ERROR",
            Severity::Fault => "FAULT",
        }
    }

    /// Capitalized name shown on the status line
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Info => "Info",
            Severity::Debug => "Debug",
            Severity::Verbose => "Verbose",
            Severity::Warning => "Warning",
            Severity::Notice => "Notice",
            Severity::Error => "Error",
            Severity::Fault => "Fault",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Severity::Info => "\u{1F499}",
            Severity::Debug => "\u{1F49C}",
            Severity::Verbose => "\u{1F49A}",
            Severity::Warning | Severity::Notice => "\u{1F9E1}",
            Severity::Error => "\u{2764}\u{FE0F}",
            Severity::Fault => "\u{1F5A4}",
        }
    }

    /// Status line text, e.g. `💜 Debug`
    pub fn status_text(&self) -> String {
        format!("{} {}", self.emoji(), self.label())
    }

    /// Whether blocks of this severity describe the call site
    pub fn includes_file_description(&self) -> bool {
        !matches!(self, Severity::Info)
    }

    /// Whether blocks of this severity describe the calling thread
    pub fn includes_thread(&self) -> bool {
        !matches!(self, Severity::Info | Severity::Debug)
    }

    /// Error-class severities render an error message as an Error section
    pub fn is_error_class(&self) -> bool {
        matches!(self, Severity::Error | Severity::Fault)
    }

    /// Parse a severity from a string (deprecated, use FromStr trait instead)
    #[deprecated(since = "0.1.0", note = "Use FromStr trait instead: s.parse::<Severity>()")]
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        s.parse().ok()
    }

    #[cfg(feature = "console")]
    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            Severity::Info => Blue,
            Severity::Debug => Magenta,
            Severity::Verbose => Green,
            Severity::Warning | Severity::Notice => Yellow,
            Severity::Error => Red,
            Severity::Fault => BrightBlack,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "INFO" => Ok(Severity::Info),
            "DEBUG" => Ok(Severity::Debug),
            "VERBOSE" => Ok(Severity::Verbose),
            "WARNING" | "WARN" => Ok(Severity::Warning),
            "NOTICE" => Ok(Severity::Notice),
            "ERROR" => Ok(Severity::Error),
            "FAULT" => Ok(Severity::Fault),
            _ => Err(format!("Invalid severity: '{}'", s)),
        }
    }
}
