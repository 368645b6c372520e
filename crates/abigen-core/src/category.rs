//! Type category definitions.

use serde::{Deserialize, Serialize};

/// Category of a user-defined type.
///
/// Only `Delegate` affects mangling today; the rest are carried so that
/// records round-trip through JSON without loss.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Class,
    Interface,
    Delegate,
    Struct,
    Enum,
}

impl Category {
    /// All categories, in declaration order.
    pub const ALL: [Category; 5] = [
        Self::Class,
        Self::Interface,
        Self::Delegate,
        Self::Struct,
        Self::Enum,
    ];

    /// Parse from the lower-case spelling used on the command line and in JSON.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "class" => Some(Self::Class),
            "interface" => Some(Self::Interface),
            "delegate" => Some(Self::Delegate),
            "struct" => Some(Self::Struct),
            "enum" => Some(Self::Enum),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Interface => "interface",
            Self::Delegate => "delegate",
            Self::Struct => "struct",
            Self::Enum => "enum",
        }
    }

    pub fn is_delegate(self) -> bool {
        matches!(self, Self::Delegate)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
