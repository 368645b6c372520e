//! Owned type records and JSON type-list loading.

use serde::{Deserialize, Serialize};

use crate::{Category, TypeMetadata};

/// Error while loading or validating type records.
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("type `{name}` has an empty namespace")]
    EmptyNamespace { name: String },

    #[error("type in namespace `{namespace}` has an empty name")]
    EmptyName { namespace: String },

    /// Wraps a validation failure with the position of the offending record.
    #[error("record {index}: {source}")]
    AtIndex {
        index: usize,
        #[source]
        source: Box<RecordError>,
    },

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Owned description of a user-defined type.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeRecord {
    pub namespace: String,
    pub name: String,
    #[serde(default, alias = "genericArity")]
    pub generic_arity: usize,
    pub category: Category,
}

impl TypeRecord {
    pub fn new(
        namespace: impl Into<String>,
        name: impl Into<String>,
        generic_arity: usize,
        category: Category,
    ) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
            generic_arity,
            category,
        }
    }

    /// Copy any metadata view into an owned record.
    pub fn from_metadata<T: TypeMetadata + ?Sized>(ty: &T) -> Self {
        Self::new(
            ty.namespace(),
            ty.name(),
            ty.generic_param_count(),
            ty.category(),
        )
    }

    /// Check the data-model invariant without panicking.
    pub fn validate(&self) -> Result<(), RecordError> {
        check_well_formed(&self.namespace, &self.name)
    }
}

impl TypeMetadata for TypeRecord {
    fn namespace(&self) -> &str {
        &self.namespace
    }
    fn name(&self) -> &str {
        &self.name
    }
    fn generic_param_count(&self) -> usize {
        self.generic_arity
    }
    fn category(&self) -> Category {
        self.category
    }
}

pub(crate) fn check_well_formed(namespace: &str, name: &str) -> Result<(), RecordError> {
    if namespace.is_empty() {
        return Err(RecordError::EmptyNamespace {
            name: name.to_string(),
        });
    }
    if name.is_empty() {
        return Err(RecordError::EmptyName {
            namespace: namespace.to_string(),
        });
    }
    Ok(())
}

/// Parse a JSON array of type records and validate each one.
///
/// Fails on the first invalid record, reporting its index.
pub fn parse_type_records(json: &str) -> Result<Vec<TypeRecord>, RecordError> {
    let records: Vec<TypeRecord> = serde_json::from_str(json)?;
    for (index, record) in records.iter().enumerate() {
        record.validate().map_err(|e| RecordError::AtIndex {
            index,
            source: Box::new(e),
        })?;
    }
    Ok(records)
}
