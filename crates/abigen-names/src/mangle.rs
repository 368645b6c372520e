//! Mangled symbol names.
//!
//! Layout of a mangled name:
//! - non-generic: `<escaped namespace><terminator>[I]<escaped name>`
//! - generic: `__F[I]<escaped name>`
//!
//! `.` and `_` are structural in this scheme, so literal occurrences are
//! re-encoded. A backtick only ever introduces an arity suffix and flattens
//! to a single `_`.

use abigen_core::{Category, TypeMetadata, ensure_well_formed};

use crate::NameContext;

/// Marker that replaces the namespace of a generic type.
pub const GENERIC_MARKER: &str = "__F";

/// Prefix inserted before the name of a delegate.
pub const DELEGATE_PREFIX: char = 'I';

/// Build the mangled name of `ty` for the given context.
///
/// # Examples
/// ```
/// use abigen_core::{Category, TypeRecord};
/// use abigen_names::{NameContext, mangled_name};
///
/// let ty = TypeRecord::new("A.B", "C", 0, Category::Class);
/// assert_eq!(mangled_name(&ty, NameContext::Standalone), "A_CB_CC");
/// ```
pub fn mangled_name<T: TypeMetadata + ?Sized>(ty: &T, ctx: NameContext) -> String {
    ensure_well_formed(ty);

    let mut result = String::new();
    if ty.is_generic() {
        // Generic types carry no namespace.
        result.push_str(GENERIC_MARKER);
    } else {
        write_mangled_name(&mut result, ty.namespace(), ctx);
        result.push_str(ctx.namespace_terminator());
    }

    write_type_prefix(&mut result, ty.category());
    write_mangled_name(&mut result, ty.name(), ctx);

    tracing::trace!(
        namespace = ty.namespace(),
        name = ty.name(),
        ?ctx,
        mangled = %result,
        "mangled type name"
    );
    result
}

/// Append `name` to `result`, escaping structural characters for `ctx`.
pub fn write_mangled_name(result: &mut String, name: &str, ctx: NameContext) {
    result.reserve(name.len());
    for c in name.chars() {
        match c {
            '.' => result.push_str(ctx.dot_escape()),
            '_' => result.push_str(ctx.underscore_escape()),
            '`' => result.push('_'),
            _ => result.push(c),
        }
    }
}

/// Append the category prefix, if the category has one.
pub fn write_type_prefix(result: &mut String, category: Category) {
    if category.is_delegate() {
        result.push(DELEGATE_PREFIX);
    }
}
