//! Entity capability contracts shared by organizer records.
//!
//! # Responsibility
//! - Define identity and timestamp access common to every organizer record.
//! - Mark the DTO variant of the entity contract and wire its refusal of
//!   cast members.
//!
//! # Invariants
//! - `created_at` is assigned once at construction and never mutated.
//! - `touch()` is the only path that stamps `modified_at` implicitly.
//! - Every `Dto` refuses every `Castable` member through one blanket impl.

pub mod cast;

use crate::validation::FieldDescriptor;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;

pub use cast::{CastMember, CastResult, Castable, UnsupportedOperation};

/// Integer identity used by every organizer record.
///
/// `0` means "not yet assigned"; range rules are declarative only.
pub type EntityId = i32;

/// Identity and timestamp access shared by organizer records.
pub trait Entity {
    fn id(&self) -> EntityId;

    fn set_id(&mut self, id: EntityId);

    /// Creation time captured when the instance was built.
    fn created_at(&self) -> DateTime<Utc>;

    fn modified_at(&self) -> Option<DateTime<Utc>>;

    fn set_modified_at(&mut self, value: Option<DateTime<Utc>>);

    /// Stamps `modified_at` with the current time.
    fn touch(&mut self) {
        self.set_modified_at(Some(Utc::now()));
    }
}

/// Data-transfer variant of the entity contract.
///
/// A DTO carries data plus declarative field metadata. It takes no part in
/// the cast hierarchy, so the blanket [`Castable`] impl below refuses every
/// cast member for it.
pub trait Dto: Entity + Serialize + DeserializeOwned {
    /// Stable entity name used in logs and error messages.
    const KIND: &'static str;

    /// Wire-ordered metadata for every serialized field.
    fn field_descriptors() -> &'static [FieldDescriptor];
}

impl<T: Dto> Castable for T {
    fn is_cast(&self) -> CastResult<bool> {
        Err(UnsupportedOperation::new(T::KIND, CastMember::IsCast))
    }

    fn set_is_cast(&mut self, _value: bool) -> CastResult<()> {
        Err(UnsupportedOperation::new(T::KIND, CastMember::SetIsCast))
    }

    fn cast_id(&self) -> CastResult<EntityId> {
        Err(UnsupportedOperation::new(T::KIND, CastMember::CastId))
    }

    fn set_cast_id(&mut self, _value: EntityId) -> CastResult<()> {
        Err(UnsupportedOperation::new(T::KIND, CastMember::SetCastId))
    }

    fn cast_type(&self) -> CastResult<String> {
        Err(UnsupportedOperation::new(T::KIND, CastMember::CastType))
    }

    fn set_cast_type(&mut self, _value: String) -> CastResult<()> {
        Err(UnsupportedOperation::new(T::KIND, CastMember::SetCastType))
    }

    fn cast<U: Entity>(&self) -> CastResult<U> {
        Err(UnsupportedOperation::new(T::KIND, CastMember::Cast))
    }

    fn to_json(&self) -> CastResult<String> {
        Err(UnsupportedOperation::new(T::KIND, CastMember::ToJson))
    }
}

/// Implements [`Entity`] for a DTO struct with the standard field names
/// `id`, `created_at` and `modified_at`.
macro_rules! impl_entity {
    ($dto:ty) => {
        impl $crate::entity::Entity for $dto {
            fn id(&self) -> $crate::entity::EntityId {
                self.id
            }

            fn set_id(&mut self, id: $crate::entity::EntityId) {
                self.id = id;
            }

            fn created_at(&self) -> ::chrono::DateTime<::chrono::Utc> {
                self.created_at
            }

            fn modified_at(&self) -> Option<::chrono::DateTime<::chrono::Utc>> {
                self.modified_at
            }

            fn set_modified_at(&mut self, value: Option<::chrono::DateTime<::chrono::Utc>>) {
                self.modified_at = value;
            }
        }
    };
}

pub(crate) use impl_entity;
