use crate::entity::{impl_entity, Dto, EntityId};
use crate::validation::{FieldDescriptor, CREATED_AT_FIELD, ID_FIELD, MODIFIED_AT_FIELD};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Visitor tracked by session before signing in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnonymousUserDto {
    pub id: EntityId,
    pub display_name: Option<String>,
    pub session_key: String,
    pub last_seen_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    pub modified_at: Option<DateTime<Utc>>,
}

const FIELDS: &[FieldDescriptor] = &[
    ID_FIELD,
    FieldDescriptor::plain("display_name", "displayName"),
    FieldDescriptor::plain("session_key", "sessionKey").required("Session key is required"),
    FieldDescriptor::plain("last_seen_at", "lastSeenAt"),
    CREATED_AT_FIELD,
    MODIFIED_AT_FIELD,
];

impl AnonymousUserDto {
    pub fn new() -> Self {
        Self {
            id: 0,
            display_name: None,
            session_key: String::new(),
            last_seen_at: None,
            created_at: Utc::now(),
            modified_at: None,
        }
    }

    pub fn with_fields(
        id: EntityId,
        display_name: Option<String>,
        session_key: impl Into<String>,
        last_seen_at: Option<DateTime<Utc>>,
        modified_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            display_name,
            session_key: session_key.into(),
            last_seen_at,
            created_at: Utc::now(),
            modified_at,
        }
    }
}

impl Default for AnonymousUserDto {
    fn default() -> Self {
        Self::new()
    }
}

impl_entity!(AnonymousUserDto);

impl Dto for AnonymousUserDto {
    const KIND: &'static str = "AnonymousUserDto";

    fn field_descriptors() -> &'static [FieldDescriptor] {
        FIELDS
    }
}
