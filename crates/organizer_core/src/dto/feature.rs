use crate::entity::{impl_entity, Dto, EntityId};
use crate::validation::{
    FieldDescriptor, CREATED_AT_FIELD, ID_FIELD, MODIFIED_AT_FIELD, NAME_REQUIRED_MESSAGE,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Feature toggle exposed to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FeatureDto {
    pub id: EntityId,
    pub name: String,
    pub description: Option<String>,
    pub is_enabled: bool,
    created_at: DateTime<Utc>,
    pub modified_at: Option<DateTime<Utc>>,
}

const FIELDS: &[FieldDescriptor] = &[
    ID_FIELD,
    FieldDescriptor::plain("name", "name").required(NAME_REQUIRED_MESSAGE),
    FieldDescriptor::plain("description", "description"),
    FieldDescriptor::plain("is_enabled", "isEnabled"),
    CREATED_AT_FIELD,
    MODIFIED_AT_FIELD,
];

impl FeatureDto {
    pub fn new() -> Self {
        Self {
            id: 0,
            name: String::new(),
            description: None,
            is_enabled: false,
            created_at: Utc::now(),
            modified_at: None,
        }
    }

    pub fn with_fields(
        id: EntityId,
        name: impl Into<String>,
        description: Option<String>,
        is_enabled: bool,
        modified_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description,
            is_enabled,
            created_at: Utc::now(),
            modified_at,
        }
    }
}

impl Default for FeatureDto {
    fn default() -> Self {
        Self::new()
    }
}

impl_entity!(FeatureDto);

impl Dto for FeatureDto {
    const KIND: &'static str = "FeatureDto";

    fn field_descriptors() -> &'static [FieldDescriptor] {
        FIELDS
    }
}
