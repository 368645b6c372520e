//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use crate::TypeMetadata;
use crate::record::check_well_formed;

/// Panic if `ty` violates the data-model invariant.
///
/// A malformed record means the metadata reader upstream is broken; there is
/// no sensible name to produce for it.
pub fn ensure_well_formed<T: TypeMetadata + ?Sized>(ty: &T) {
    if let Err(e) = check_well_formed(ty.namespace(), ty.name()) {
        panic!("TypeMetadata: {e} (metadata reader must supply well-formed records)");
    }
}
