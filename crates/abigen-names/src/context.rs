//! Escaping contexts for mangled names.

use serde::{Deserialize, Serialize};

/// Where a mangled name ends up.
///
/// Nested names are embedded inside another mangled name (for example as a
/// generic argument), so their escapes are longer and cannot be mistaken
/// for the outer name's terminators.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NameContext {
    /// Top-level symbol.
    #[default]
    Standalone,
    /// Embedded inside another mangled name.
    Nested,
}

impl NameContext {
    pub fn from_nested(nested: bool) -> Self {
        if nested { Self::Nested } else { Self::Standalone }
    }

    pub fn is_nested(self) -> bool {
        self == Self::Nested
    }

    /// Replacement for a literal `.`.
    ///
    /// Doubles as the terminator after a namespace.
    pub fn dot_escape(self) -> &'static str {
        match self {
            Self::Standalone => "_C",
            Self::Nested => "__C",
        }
    }

    /// Replacement for a literal `_`.
    pub fn underscore_escape(self) -> &'static str {
        match self {
            Self::Standalone => "__",
            Self::Nested => "__z",
        }
    }

    /// Token appended after an escaped namespace.
    pub fn namespace_terminator(self) -> &'static str {
        self.dot_escape()
    }
}
