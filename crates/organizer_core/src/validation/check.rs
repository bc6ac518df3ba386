//! Interpreter for DTO field metadata over serialized payloads.
//!
//! DTOs never call this. It stands in for the framework layer that reads the
//! metadata and reports violations before a payload reaches a service.

use crate::validation::{FieldDescriptor, FieldFormat};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

static EMAIL_ADDRESS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email address pattern is valid")
});

/// Rule category that produced a violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationKind {
    Required,
    Range,
    Format,
}

/// One failed rule for one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub json_name: &'static str,
    pub kind: ViolationKind,
    pub message: &'static str,
}

/// Applies every descriptor to a serialized DTO object.
///
/// Missing keys are treated as `null`. Non-object payloads fail every
/// required rule and nothing else.
pub fn evaluate(descriptors: &[FieldDescriptor], payload: &Value) -> Vec<FieldViolation> {
    let mut violations = Vec::new();
    for descriptor in descriptors {
        let value = payload.get(descriptor.json_name).unwrap_or(&Value::Null);

        if let Some(rule) = descriptor.required {
            if is_missing(value) {
                violations.push(FieldViolation {
                    json_name: descriptor.json_name,
                    kind: ViolationKind::Required,
                    message: rule.message,
                });
                continue;
            }
        }

        if let Some(rule) = descriptor.range {
            if let Some(number) = value.as_i64() {
                if !rule.contains(number) {
                    violations.push(FieldViolation {
                        json_name: descriptor.json_name,
                        kind: ViolationKind::Range,
                        message: rule.message,
                    });
                }
            }
        }

        if let Some(FieldFormat::EmailAddress { message }) = descriptor.format {
            if let Some(text) = value.as_str().filter(|text| !text.is_empty()) {
                if !EMAIL_ADDRESS_RE.is_match(text) {
                    violations.push(FieldViolation {
                        json_name: descriptor.json_name,
                        kind: ViolationKind::Format,
                        message,
                    });
                }
            }
        }
    }
    violations
}

fn is_missing(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(text) => text.trim().is_empty(),
        _ => false,
    }
}
