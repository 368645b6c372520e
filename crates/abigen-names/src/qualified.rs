//! Dotted display names.

use abigen_core::{TypeMetadata, ensure_well_formed};

/// Build `namespace.name`, verbatim.
///
/// # Examples
/// ```
/// use abigen_core::{Category, TypeRecord};
/// use abigen_names::qualified_name;
///
/// let ty = TypeRecord::new("Sample.Space", "Widget", 0, Category::Class);
/// assert_eq!(qualified_name(&ty), "Sample.Space.Widget");
/// ```
pub fn qualified_name<T: TypeMetadata + ?Sized>(ty: &T) -> String {
    ensure_well_formed(ty);

    let namespace = ty.namespace();
    let name = ty.name();
    let mut result = String::with_capacity(namespace.len() + name.len() + 1);
    result.push_str(namespace);
    result.push('.');
    result.push_str(name);
    result
}
