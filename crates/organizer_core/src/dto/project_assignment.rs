use crate::dto::AssignmentDto;
use crate::entity::{impl_entity, Dto, EntityId};
use crate::validation::{FieldDescriptor, CREATED_AT_FIELD, ID_FIELD, MODIFIED_AT_FIELD};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Link between a project and one of its assignments.
///
/// `assignment_id` and `assignment` are carried side by side; the nested
/// record is optional and never derived from the key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectAssignmentDto {
    pub id: EntityId,
    pub project_id: EntityId,
    pub assignment_id: EntityId,
    pub assignment: Option<AssignmentDto>,
    created_at: DateTime<Utc>,
    pub modified_at: Option<DateTime<Utc>>,
}

const FIELDS: &[FieldDescriptor] = &[
    ID_FIELD,
    FieldDescriptor::plain("project_id", "projectId")
        .positive_id("ProjectId must be a positive number"),
    FieldDescriptor::plain("assignment_id", "assignmentId")
        .positive_id("AssignmentId must be a positive number"),
    FieldDescriptor::plain("assignment", "assignment"),
    CREATED_AT_FIELD,
    MODIFIED_AT_FIELD,
];

impl ProjectAssignmentDto {
    pub fn new() -> Self {
        Self {
            id: 0,
            project_id: 0,
            assignment_id: 0,
            assignment: None,
            created_at: Utc::now(),
            modified_at: None,
        }
    }

    pub fn with_fields(
        id: EntityId,
        project_id: EntityId,
        assignment_id: EntityId,
        assignment: Option<AssignmentDto>,
        modified_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            project_id,
            assignment_id,
            assignment,
            created_at: Utc::now(),
            modified_at,
        }
    }
}

impl Default for ProjectAssignmentDto {
    fn default() -> Self {
        Self::new()
    }
}

impl_entity!(ProjectAssignmentDto);

impl Dto for ProjectAssignmentDto {
    const KIND: &'static str = "ProjectAssignmentDto";

    fn field_descriptors() -> &'static [FieldDescriptor] {
        FIELDS
    }
}
