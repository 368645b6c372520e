//! Terminal styling for rendered names and timestamps.

use std::io::{self, IsTerminal};

/// ANSI escapes keyed by what they highlight.
///
/// Every field is empty when color is off, so renderers format
/// unconditionally.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    /// Dotted qualified names (blue).
    pub qualified: &'static str,
    /// Mangled names and converted values (green).
    pub value: &'static str,
    /// Field labels (dim).
    pub label: &'static str,
    pub reset: &'static str,
}

impl Palette {
    pub const ANSI: Self = Self {
        qualified: "\x1b[34m",
        value: "\x1b[32m",
        label: "\x1b[2m",
        reset: "\x1b[0m",
    };

    pub const PLAIN: Self = Self {
        qualified: "",
        value: "",
        label: "",
        reset: "",
    };
}

/// `--color` setting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "auto" => Some(Self::Auto),
            "always" => Some(Self::Always),
            "never" => Some(Self::Never),
            _ => None,
        }
    }

    /// Resolve to a palette. `Auto` needs both stdout and stderr on a terminal.
    pub fn palette(self) -> Palette {
        let enabled = match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => io::stdout().is_terminal() && io::stderr().is_terminal(),
        };
        if enabled { Palette::ANSI } else { Palette::PLAIN }
    }
}
