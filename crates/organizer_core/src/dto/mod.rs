//! Data-transfer records for organizer entities.
//!
//! # Responsibility
//! - Carry entity data across the service boundary as flat serde records.
//! - Expose per-entity field metadata through `Dto::field_descriptors`.
//!
//! # Invariants
//! - A fresh record has id `0`, empty/`None` text, current `created_at` and
//!   `None` for `modified_at`.
//! - Setters and public fields never validate and never fail.
//! - Full-field constructors never touch cast members.
//!
//! # See also
//! - `crate::entity` for the capability traits.
//! - `crate::validation` for the metadata vocabulary.

mod account;
mod anonymous_user;
mod assignment;
mod contact;
mod contact_type;
mod email;
mod feature;
mod group;
mod project_assignment;
mod task;

pub use account::AccountDto;
pub use anonymous_user::AnonymousUserDto;
pub use assignment::AssignmentDto;
pub use contact::{ContactDto, MemberRecord};
pub use contact_type::ContactType;
pub use email::EmailDto;
pub use feature::FeatureDto;
pub use group::{GroupDto, GroupRecord};
pub use project_assignment::ProjectAssignmentDto;
pub use task::TaskDto;

use crate::entity::Dto;
use crate::validation::FieldDescriptor;
use serde::{Deserialize, Deserializer};

/// Kind name plus field metadata for one DTO type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub kind: &'static str,
    pub fields: &'static [FieldDescriptor],
}

impl CatalogEntry {
    pub fn of<D: Dto>() -> Self {
        Self {
            kind: D::KIND,
            fields: D::field_descriptors(),
        }
    }
}

/// Every DTO type in this crate, sorted by kind.
pub fn catalog() -> Vec<CatalogEntry> {
    let mut entries = vec![
        CatalogEntry::of::<AccountDto>(),
        CatalogEntry::of::<AnonymousUserDto>(),
        CatalogEntry::of::<AssignmentDto>(),
        CatalogEntry::of::<ContactDto>(),
        CatalogEntry::of::<EmailDto>(),
        CatalogEntry::of::<FeatureDto>(),
        CatalogEntry::of::<GroupDto>(),
        CatalogEntry::of::<ProjectAssignmentDto>(),
        CatalogEntry::of::<TaskDto>(),
    ];
    entries.sort_by_key(|entry| entry.kind);
    entries
}

/// Decodes an explicit `null` list as empty.
pub(crate) fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
