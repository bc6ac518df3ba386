use crate::dto::{ContactDto, ContactType};
use crate::entity::{impl_entity, Dto, EntityId};
use crate::validation::{FieldDescriptor, CREATED_AT_FIELD, ID_FIELD, MODIFIED_AT_FIELD};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Email address owned by a contact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmailDto {
    pub id: EntityId,
    pub address: String,
    #[serde(rename = "type")]
    pub email_type: ContactType,
    pub contact_id: EntityId,
    pub contact: Option<ContactDto>,
    created_at: DateTime<Utc>,
    pub modified_at: Option<DateTime<Utc>>,
}

const FIELDS: &[FieldDescriptor] = &[
    ID_FIELD,
    FieldDescriptor::plain("address", "address")
        .required("Email address is required")
        .email_address("Email address is not valid"),
    FieldDescriptor::plain("email_type", "type"),
    FieldDescriptor::plain("contact_id", "contactId")
        .positive_id("ContactId must be a positive number"),
    FieldDescriptor::plain("contact", "contact"),
    CREATED_AT_FIELD,
    MODIFIED_AT_FIELD,
];

impl EmailDto {
    pub fn new() -> Self {
        Self {
            id: 0,
            address: String::new(),
            email_type: ContactType::default(),
            contact_id: 0,
            contact: None,
            created_at: Utc::now(),
            modified_at: None,
        }
    }

    pub fn with_fields(
        id: EntityId,
        address: impl Into<String>,
        email_type: ContactType,
        contact_id: EntityId,
        contact: Option<ContactDto>,
        modified_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            address: address.into(),
            email_type,
            contact_id,
            contact,
            created_at: Utc::now(),
            modified_at,
        }
    }
}

impl Default for EmailDto {
    fn default() -> Self {
        Self::new()
    }
}

impl_entity!(EmailDto);

impl Dto for EmailDto {
    const KIND: &'static str = "EmailDto";

    fn field_descriptors() -> &'static [FieldDescriptor] {
        FIELDS
    }
}
