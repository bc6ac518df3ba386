use crate::entity::{impl_entity, Dto, EntityId};
use crate::validation::{
    FieldDescriptor, CREATED_AT_FIELD, ID_FIELD, MODIFIED_AT_FIELD, NAME_REQUIRED_MESSAGE,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unit of work an assignment can point at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TaskDto {
    pub id: EntityId,
    pub name: String,
    pub description: Option<String>,
    pub is_completed: bool,
    created_at: DateTime<Utc>,
    pub modified_at: Option<DateTime<Utc>>,
}

const FIELDS: &[FieldDescriptor] = &[
    ID_FIELD,
    FieldDescriptor::plain("name", "name").required(NAME_REQUIRED_MESSAGE),
    FieldDescriptor::plain("description", "description"),
    FieldDescriptor::plain("is_completed", "isCompleted"),
    CREATED_AT_FIELD,
    MODIFIED_AT_FIELD,
];

impl TaskDto {
    pub fn new() -> Self {
        Self {
            id: 0,
            name: String::new(),
            description: None,
            is_completed: false,
            created_at: Utc::now(),
            modified_at: None,
        }
    }

    pub fn with_fields(
        id: EntityId,
        name: impl Into<String>,
        description: Option<String>,
        is_completed: bool,
        modified_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description,
            is_completed,
            created_at: Utc::now(),
            modified_at,
        }
    }
}

impl Default for TaskDto {
    fn default() -> Self {
        Self::new()
    }
}

impl_entity!(TaskDto);

impl Dto for TaskDto {
    const KIND: &'static str = "TaskDto";

    fn field_descriptors() -> &'static [FieldDescriptor] {
        FIELDS
    }
}
