//! Cast half of the domain-entity contract.
//!
//! Domain entities can describe themselves as converted from another entity
//! type. DTOs implement the same surface but refuse every member.

use crate::entity::{Entity, EntityId};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type CastResult<T> = Result<T, UnsupportedOperation>;

/// Cast-tracking members, conversion and self-serialization.
pub trait Castable {
    fn is_cast(&self) -> CastResult<bool>;

    fn set_is_cast(&mut self, value: bool) -> CastResult<()>;

    fn cast_id(&self) -> CastResult<EntityId>;

    fn set_cast_id(&mut self, value: EntityId) -> CastResult<()>;

    fn cast_type(&self) -> CastResult<String>;

    fn set_cast_type(&mut self, value: String) -> CastResult<()>;

    /// Converts this entity into another entity type.
    fn cast<U: Entity>(&self) -> CastResult<U>
    where
        Self: Sized;

    /// Serializes this entity through its own representation.
    fn to_json(&self) -> CastResult<String>;
}

/// Member of [`Castable`] that was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastMember {
    IsCast,
    SetIsCast,
    CastId,
    SetCastId,
    CastType,
    SetCastType,
    Cast,
    ToJson,
}

impl CastMember {
    pub const ALL: [CastMember; 8] = [
        Self::IsCast,
        Self::SetIsCast,
        Self::CastId,
        Self::SetCastId,
        Self::CastType,
        Self::SetCastType,
        Self::Cast,
        Self::ToJson,
    ];

    /// Member name as it appears in error messages.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::IsCast => "is_cast",
            Self::SetIsCast => "set_is_cast",
            Self::CastId => "cast_id",
            Self::SetCastId => "set_cast_id",
            Self::CastType => "cast_type",
            Self::SetCastType => "set_cast_type",
            Self::Cast => "cast",
            Self::ToJson => "to_json",
        }
    }
}

impl Display for CastMember {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fixed refusal returned by cast members on records outside the cast
/// hierarchy. Not a recoverable runtime condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsupportedOperation {
    pub entity: &'static str,
    pub member: CastMember,
}

impl UnsupportedOperation {
    pub fn new(entity: &'static str, member: CastMember) -> Self {
        Self { entity, member }
    }
}

impl Display for UnsupportedOperation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} is not supported on {}", self.member, self.entity)
    }
}

impl Error for UnsupportedOperation {}
