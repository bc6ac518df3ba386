//! Data-transfer layer for the organizer service boundary.
//! Records here carry data and field metadata; they enforce nothing.

pub mod codec;
pub mod dto;
pub mod entity;
pub mod logging;
pub mod validation;

pub use codec::{decode, encode, CodecError, CodecResult};
pub use dto::{
    catalog, AccountDto, AnonymousUserDto, AssignmentDto, CatalogEntry, ContactDto, ContactType,
    EmailDto, FeatureDto, GroupDto, GroupRecord, MemberRecord, ProjectAssignmentDto, TaskDto,
};
pub use entity::{CastMember, CastResult, Castable, Dto, Entity, EntityId, UnsupportedOperation};
pub use logging::{default_log_level, init_logging, logging_status, LoggingConfig};
pub use validation::{FieldDescriptor, FieldFormat, FieldViolation, RangeRule, RequiredRule};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
