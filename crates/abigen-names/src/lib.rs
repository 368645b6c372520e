//! Name synthesis for generated ABI artifacts.
//!
//! This crate contains:
//! - Qualified display names (`Namespace.Name`)
//! - Mangled symbol names, escaped for standalone or nested use
//! - `TypeNames`, bundling both for one type

mod context;
mod mangle;
mod qualified;
mod type_names;

#[cfg(test)]
mod qualified_tests;

pub use context::NameContext;
pub use mangle::{
    DELEGATE_PREFIX, GENERIC_MARKER, mangled_name, write_mangled_name, write_type_prefix,
};
pub use qualified::qualified_name;
pub use type_names::TypeNames;
