//! Declarative field metadata for organizer DTOs.
//!
//! # Responsibility
//! - Describe, per serialized field, its wire name and the required/range/
//!   format rules an external validator should apply.
//! - Offer lookups by property name and by wire name.
//!
//! # Invariants
//! - Metadata is descriptive only. DTO setters accept any value.
//! - Rule messages are stable text consumed by callers; do not reword.
//! - One descriptor per serialized field, listed in wire order.

pub mod check;

use crate::entity::EntityId;

pub use check::{evaluate, FieldViolation, ViolationKind};

/// Message shared by every `id` range rule.
pub const ID_RANGE_MESSAGE: &str = "Id must be a positive number";
/// Message shared by every `name` required rule.
pub const NAME_REQUIRED_MESSAGE: &str = "Name is required";

/// Presence rule: the field must be non-null and, for strings, non-empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequiredRule {
    pub message: &'static str,
}

/// Inclusive numeric bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeRule {
    pub min: i64,
    pub max: i64,
    pub message: &'static str,
}

impl RangeRule {
    pub fn contains(&self, value: i64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// Textual format rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldFormat {
    EmailAddress { message: &'static str },
}

/// Metadata for one serialized DTO field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Rust field name on the DTO struct.
    pub property: &'static str,
    /// External JSON field name.
    pub json_name: &'static str,
    pub required: Option<RequiredRule>,
    pub range: Option<RangeRule>,
    pub format: Option<FieldFormat>,
}

impl FieldDescriptor {
    /// Descriptor with no rules attached.
    pub const fn plain(property: &'static str, json_name: &'static str) -> Self {
        Self {
            property,
            json_name,
            required: None,
            range: None,
            format: None,
        }
    }

    pub const fn required(mut self, message: &'static str) -> Self {
        self.required = Some(RequiredRule { message });
        self
    }

    /// Attaches a `1..=EntityId::MAX` range rule.
    pub const fn positive_id(mut self, message: &'static str) -> Self {
        self.range = Some(RangeRule {
            min: 1,
            max: EntityId::MAX as i64,
            message,
        });
        self
    }

    pub const fn email_address(mut self, message: &'static str) -> Self {
        self.format = Some(FieldFormat::EmailAddress { message });
        self
    }

    pub fn is_required(&self) -> bool {
        self.required.is_some()
    }
}

/// Finds the descriptor for a Rust property name.
pub fn descriptor<'a>(
    descriptors: &'a [FieldDescriptor],
    property: &str,
) -> Option<&'a FieldDescriptor> {
    descriptors.iter().find(|d| d.property == property)
}

/// Finds the descriptor for an external JSON field name.
pub fn descriptor_by_json_name<'a>(
    descriptors: &'a [FieldDescriptor],
    json_name: &str,
) -> Option<&'a FieldDescriptor> {
    descriptors.iter().find(|d| d.json_name == json_name)
}

/// Descriptors shared by every DTO: `id`, `createdAt`, `modifiedAt`.
pub(crate) const ID_FIELD: FieldDescriptor =
    FieldDescriptor::plain("id", "id").positive_id(ID_RANGE_MESSAGE);
pub(crate) const CREATED_AT_FIELD: FieldDescriptor =
    FieldDescriptor::plain("created_at", "createdAt");
pub(crate) const MODIFIED_AT_FIELD: FieldDescriptor =
    FieldDescriptor::plain("modified_at", "modifiedAt");
