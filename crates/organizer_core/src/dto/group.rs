//! Group DTO and its group capability view.
//!
//! # Invariants
//! - `members` is never null: a `null` payload decodes to an empty list.
//! - `set_members` stores verbatim; `assign_members` converts through the
//!   member view and stamps `modified_at`.

use crate::dto::{null_as_empty, AccountDto, ContactDto, MemberRecord};
use crate::entity::{impl_entity, Dto, Entity, EntityId};
use crate::validation::{
    FieldDescriptor, CREATED_AT_FIELD, ID_FIELD, MODIFIED_AT_FIELD, NAME_REQUIRED_MESSAGE,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Named set of contacts, optionally owned by an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GroupDto {
    pub id: EntityId,
    pub name: String,
    pub description: Option<String>,
    #[serde(deserialize_with = "null_as_empty")]
    pub members: Vec<ContactDto>,
    pub account: Option<AccountDto>,
    pub account_id: EntityId,
    created_at: DateTime<Utc>,
    pub modified_at: Option<DateTime<Utc>>,
}

const FIELDS: &[FieldDescriptor] = &[
    ID_FIELD,
    FieldDescriptor::plain("name", "name").required(NAME_REQUIRED_MESSAGE),
    FieldDescriptor::plain("description", "description"),
    FieldDescriptor::plain("members", "members"),
    FieldDescriptor::plain("account", "account"),
    FieldDescriptor::plain("account_id", "accountId")
        .positive_id("AccountId must be a positive number"),
    CREATED_AT_FIELD,
    MODIFIED_AT_FIELD,
];

impl GroupDto {
    pub fn new() -> Self {
        Self {
            id: 0,
            name: String::new(),
            description: None,
            members: Vec::new(),
            account: None,
            account_id: 0,
            created_at: Utc::now(),
            modified_at: None,
        }
    }

    pub fn with_fields(
        id: EntityId,
        name: impl Into<String>,
        description: Option<String>,
        members: Vec<ContactDto>,
        account: Option<AccountDto>,
        account_id: EntityId,
        modified_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description,
            members,
            account,
            account_id,
            created_at: Utc::now(),
            modified_at,
        }
    }

    /// Replaces the member list without touching `modified_at`.
    pub fn set_members(&mut self, members: Vec<ContactDto>) {
        self.members = members;
    }

    /// Replaces the member list from capability views, preserving order,
    /// and stamps `modified_at`.
    pub fn assign_members<I>(&mut self, members: I)
    where
        I: IntoIterator,
        I::Item: MemberRecord,
    {
        self.members = members.into_iter().map(|m| m.to_contact()).collect();
        self.touch();
    }

    /// Members seen through their capability view.
    pub fn member_views(&self) -> impl Iterator<Item = &dyn MemberRecord> + '_ {
        self.members.iter().map(|m| m as &dyn MemberRecord)
    }
}

impl Default for GroupDto {
    fn default() -> Self {
        Self::new()
    }
}

impl_entity!(GroupDto);

impl Dto for GroupDto {
    const KIND: &'static str = "GroupDto";

    fn field_descriptors() -> &'static [FieldDescriptor] {
        FIELDS
    }
}

/// Capability view of anything that can stand in as a group.
pub trait GroupRecord {
    fn group_id(&self) -> EntityId;

    fn group_name(&self) -> &str;

    /// Concrete DTO for storage in a group list.
    fn to_group(&self) -> GroupDto;
}

impl GroupRecord for GroupDto {
    fn group_id(&self) -> EntityId {
        self.id
    }

    fn group_name(&self) -> &str {
        &self.name
    }

    fn to_group(&self) -> GroupDto {
        self.clone()
    }
}

impl<T: GroupRecord + ?Sized> GroupRecord for &T {
    fn group_id(&self) -> EntityId {
        (**self).group_id()
    }

    fn group_name(&self) -> &str {
        (**self).group_name()
    }

    fn to_group(&self) -> GroupDto {
        (**self).to_group()
    }
}

impl<T: GroupRecord + ?Sized> GroupRecord for Box<T> {
    fn group_id(&self) -> EntityId {
        (**self).group_id()
    }

    fn group_name(&self) -> &str {
        (**self).group_name()
    }

    fn to_group(&self) -> GroupDto {
        (**self).to_group()
    }
}

#[cfg(test)]
mod tests {
    use super::GroupDto;
    use crate::dto::ContactDto;
    use crate::entity::Entity;

    fn contact(id: i32, first_name: &str) -> ContactDto {
        let mut contact = ContactDto::new();
        contact.id = id;
        contact.first_name = first_name.to_string();
        contact
    }

    #[test]
    fn set_members_leaves_modified_at_alone() {
        let mut group = GroupDto::new();
        group.set_members(vec![contact(1, "Ana")]);
        assert_eq!(group.members.len(), 1);
        assert_eq!(group.modified_at(), None);
    }

    #[test]
    fn assign_members_stamps_modified_at() {
        let mut group = GroupDto::new();
        let before = chrono::Utc::now();
        group.assign_members(vec![contact(1, "Ana")]);
        let stamped = group.modified_at().expect("assign stamps modified_at");
        assert!(stamped >= before);
    }

    #[test]
    fn null_members_decode_as_empty() {
        let group: GroupDto = serde_json::from_value(serde_json::json!({
            "id": 4,
            "name": "family",
            "members": null
        }))
        .expect("group decodes");
        assert!(group.members.is_empty());
        assert_eq!(group.id, 4);
    }
}
