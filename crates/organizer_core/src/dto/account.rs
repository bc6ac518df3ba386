use crate::entity::{impl_entity, Dto, EntityId};
use crate::validation::{
    FieldDescriptor, CREATED_AT_FIELD, ID_FIELD, MODIFIED_AT_FIELD, NAME_REQUIRED_MESSAGE,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Billing/ownership account a group can belong to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AccountDto {
    pub id: EntityId,
    pub name: String,
    pub description: Option<String>,
    created_at: DateTime<Utc>,
    pub modified_at: Option<DateTime<Utc>>,
}

const FIELDS: &[FieldDescriptor] = &[
    ID_FIELD,
    FieldDescriptor::plain("name", "name").required(NAME_REQUIRED_MESSAGE),
    FieldDescriptor::plain("description", "description"),
    CREATED_AT_FIELD,
    MODIFIED_AT_FIELD,
];

impl AccountDto {
    pub fn new() -> Self {
        Self {
            id: 0,
            name: String::new(),
            description: None,
            created_at: Utc::now(),
            modified_at: None,
        }
    }

    pub fn with_fields(
        id: EntityId,
        name: impl Into<String>,
        description: Option<String>,
        modified_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description,
            created_at: Utc::now(),
            modified_at,
        }
    }
}

impl Default for AccountDto {
    fn default() -> Self {
        Self::new()
    }
}

impl_entity!(AccountDto);

impl Dto for AccountDto {
    const KIND: &'static str = "AccountDto";

    fn field_descriptors() -> &'static [FieldDescriptor] {
        FIELDS
    }
}
