#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for abigen type metadata.
//!
//! Two layers:
//! - **Contract layer**: the `TypeMetadata` trait that metadata readers implement
//! - **Owned layer**: `TypeRecord`, a plain value loadable from a JSON type list
//!
//! Name synthesis and time conversions live in sibling crates and only
//! ever see types through `TypeMetadata`.

mod category;
mod invariants;
mod record;

#[cfg(test)]
mod category_tests;
#[cfg(test)]
mod record_tests;

pub use category::Category;
pub use invariants::ensure_well_formed;
pub use record::{RecordError, TypeRecord, parse_type_records};

// ============================================================================
// TypeMetadata Trait
// ============================================================================

/// Read-only view of a user-defined type, as supplied by a metadata reader.
///
/// Implementors must uphold the data-model invariant: `namespace` and `name`
/// are non-empty. The name may carry a compiler-generated arity suffix
/// (`Map`2`); that suffix is independent of `generic_param_count`.
pub trait TypeMetadata {
    fn namespace(&self) -> &str;
    fn name(&self) -> &str;
    fn generic_param_count(&self) -> usize;
    fn category(&self) -> Category;

    /// Whether the type declares any generic parameters.
    fn is_generic(&self) -> bool {
        self.generic_param_count() > 0
    }
}

impl<T: TypeMetadata + ?Sized> TypeMetadata for &T {
    fn namespace(&self) -> &str {
        (*self).namespace()
    }
    fn name(&self) -> &str {
        (*self).name()
    }
    fn generic_param_count(&self) -> usize {
        (*self).generic_param_count()
    }
    fn category(&self) -> Category {
        (*self).category()
    }
}
