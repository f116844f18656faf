use crate::ModelField;
use serde::{Deserialize, Serialize};

/// One level of nesting above a field.
///
/// An ordered `Vec<AncestorRef>` describes the path from the model root down
/// to a field's parent.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AncestorRef {
    pub field_id: String,
    pub storage_id: String,
    #[serde(rename = "type")]
    pub field_type: String,
}

impl AncestorRef {
    pub fn new(
        field_id: impl Into<String>,
        storage_id: impl Into<String>,
        field_type: impl Into<String>,
    ) -> Self {
        Self {
            field_id: field_id.into(),
            storage_id: storage_id.into(),
            field_type: field_type.into(),
        }
    }
}

impl From<&ModelField> for AncestorRef {
    fn from(field: &ModelField) -> Self {
        Self {
            field_id: field.field_id.clone(),
            storage_id: field.storage_id.clone(),
            field_type: field.field_type.clone(),
        }
    }
}
