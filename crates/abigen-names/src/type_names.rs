//! All generated names for one type.

use abigen_core::TypeMetadata;
use serde::Serialize;

use crate::{NameContext, mangled_name, qualified_name};

/// Qualified name plus both mangled forms.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TypeNames {
    pub qualified: String,
    pub mangled: String,
    pub mangled_nested: String,
}

impl TypeNames {
    pub fn of<T: TypeMetadata + ?Sized>(ty: &T) -> Self {
        Self {
            qualified: qualified_name(ty),
            mangled: mangled_name(ty, NameContext::Standalone),
            mangled_nested: mangled_name(ty, NameContext::Nested),
        }
    }

    /// Mangled form for the given context.
    pub fn mangled_for(&self, ctx: NameContext) -> &str {
        match ctx {
            NameContext::Standalone => &self.mangled,
            NameContext::Nested => &self.mangled_nested,
        }
    }
}
