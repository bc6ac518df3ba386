use crate::dto::ContactType;
use crate::entity::{impl_entity, Dto, EntityId};
use crate::validation::{FieldDescriptor, CREATED_AT_FIELD, ID_FIELD, MODIFIED_AT_FIELD};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Person record; appears as a group member and as an email owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactDto {
    pub id: EntityId,
    pub first_name: String,
    pub last_name: Option<String>,
    pub email_address: Option<String>,
    #[serde(rename = "type")]
    pub contact_type: ContactType,
    pub account_id: EntityId,
    created_at: DateTime<Utc>,
    pub modified_at: Option<DateTime<Utc>>,
}

const FIELDS: &[FieldDescriptor] = &[
    ID_FIELD,
    FieldDescriptor::plain("first_name", "firstName").required("First name is required"),
    FieldDescriptor::plain("last_name", "lastName"),
    FieldDescriptor::plain("email_address", "emailAddress"),
    FieldDescriptor::plain("contact_type", "type"),
    FieldDescriptor::plain("account_id", "accountId")
        .positive_id("AccountId must be a positive number"),
    CREATED_AT_FIELD,
    MODIFIED_AT_FIELD,
];

impl ContactDto {
    pub fn new() -> Self {
        Self {
            id: 0,
            first_name: String::new(),
            last_name: None,
            email_address: None,
            contact_type: ContactType::default(),
            account_id: 0,
            created_at: Utc::now(),
            modified_at: None,
        }
    }

    pub fn with_fields(
        id: EntityId,
        first_name: impl Into<String>,
        last_name: Option<String>,
        email_address: Option<String>,
        contact_type: ContactType,
        account_id: EntityId,
        modified_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name,
            email_address,
            contact_type,
            account_id,
            created_at: Utc::now(),
            modified_at,
        }
    }
}

impl Default for ContactDto {
    fn default() -> Self {
        Self::new()
    }
}

impl_entity!(ContactDto);

impl Dto for ContactDto {
    const KIND: &'static str = "ContactDto";

    fn field_descriptors() -> &'static [FieldDescriptor] {
        FIELDS
    }
}

/// Capability view of anything that can stand in as a group member.
pub trait MemberRecord {
    fn member_id(&self) -> EntityId;

    /// First and last name joined by a single space.
    fn display_name(&self) -> String;

    /// Concrete DTO for storage in a member list.
    fn to_contact(&self) -> ContactDto;
}

impl MemberRecord for ContactDto {
    fn member_id(&self) -> EntityId {
        self.id
    }

    fn display_name(&self) -> String {
        match self.last_name.as_deref() {
            Some(last) if !last.is_empty() => format!("{} {}", self.first_name, last),
            _ => self.first_name.clone(),
        }
    }

    fn to_contact(&self) -> ContactDto {
        self.clone()
    }
}

impl<T: MemberRecord + ?Sized> MemberRecord for &T {
    fn member_id(&self) -> EntityId {
        (**self).member_id()
    }

    fn display_name(&self) -> String {
        (**self).display_name()
    }

    fn to_contact(&self) -> ContactDto {
        (**self).to_contact()
    }
}

impl<T: MemberRecord + ?Sized> MemberRecord for Box<T> {
    fn member_id(&self) -> EntityId {
        (**self).member_id()
    }

    fn display_name(&self) -> String {
        (**self).display_name()
    }

    fn to_contact(&self) -> ContactDto {
        (**self).to_contact()
    }
}
