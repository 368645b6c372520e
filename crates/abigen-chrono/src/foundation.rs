//! Metadata for the foundation time types.
//!
//! `TimeSpan` and `DateTime` are plain structs over a signed 64-bit tick
//! count at the ABI boundary, so they go through name synthesis like any
//! other record.

use abigen_core::{Category, TypeRecord};

/// Namespace the foundation time types are declared in.
pub const FOUNDATION_NAMESPACE: &str = "Windows.Foundation";

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum FoundationType {
    /// Duration, backed by `TimeSpan`.
    TimeSpan,
    /// Instant, backed by `TimePoint`.
    DateTime,
}

impl FoundationType {
    pub const ALL: [FoundationType; 2] = [Self::TimeSpan, Self::DateTime];

    pub fn name(self) -> &'static str {
        match self {
            Self::TimeSpan => "TimeSpan",
            Self::DateTime => "DateTime",
        }
    }

    /// C type used for the value at the ABI boundary.
    pub fn abi_repr(self) -> &'static str {
        "int64_t"
    }

    pub fn record(self) -> TypeRecord {
        TypeRecord::new(FOUNDATION_NAMESPACE, self.name(), 0, Category::Struct)
    }

    /// Every foundation record, in declaration order.
    pub fn records() -> Vec<TypeRecord> {
        Self::ALL.into_iter().map(Self::record).collect()
    }
}
