//! Assignment DTO.
//!
//! # Invariants
//! - `groups` defaults to `None` and serializes as `null` until set.
//! - `groups_or_empty` and `groups_mut_or_init` are the only places that
//!   substitute an empty list for `None`.
//! - `task_id` and `task` are independent; neither is derived from the other.

use crate::dto::{GroupDto, GroupRecord, TaskDto};
use crate::entity::{impl_entity, Dto, Entity, EntityId};
use crate::validation::{
    FieldDescriptor, CREATED_AT_FIELD, ID_FIELD, MODIFIED_AT_FIELD, NAME_REQUIRED_MESSAGE,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Work item handed to one or more groups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AssignmentDto {
    pub id: EntityId,
    pub name: String,
    pub description: Option<String>,
    pub is_completed: bool,
    pub groups: Option<Vec<GroupDto>>,
    pub task: Option<TaskDto>,
    pub task_id: EntityId,
    created_at: DateTime<Utc>,
    pub modified_at: Option<DateTime<Utc>>,
}

const FIELDS: &[FieldDescriptor] = &[
    ID_FIELD,
    FieldDescriptor::plain("name", "name").required(NAME_REQUIRED_MESSAGE),
    FieldDescriptor::plain("description", "description"),
    FieldDescriptor::plain("is_completed", "isCompleted"),
    FieldDescriptor::plain("groups", "groups"),
    FieldDescriptor::plain("task", "task"),
    FieldDescriptor::plain("task_id", "taskId").positive_id("TaskId must be a positive number"),
    CREATED_AT_FIELD,
    MODIFIED_AT_FIELD,
];

impl AssignmentDto {
    pub fn new() -> Self {
        Self {
            id: 0,
            name: String::new(),
            description: None,
            is_completed: false,
            groups: None,
            task: None,
            task_id: 0,
            created_at: Utc::now(),
            modified_at: None,
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn with_fields(
        id: EntityId,
        name: impl Into<String>,
        description: Option<String>,
        is_completed: bool,
        groups: Option<Vec<GroupDto>>,
        task: Option<TaskDto>,
        task_id: EntityId,
        modified_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description,
            is_completed,
            groups,
            task,
            task_id,
            created_at: Utc::now(),
            modified_at,
        }
    }

    /// Replaces the group list without touching `modified_at`.
    pub fn set_groups(&mut self, groups: Option<Vec<GroupDto>>) {
        self.groups = groups;
    }

    /// Replaces the group list from capability views, preserving order,
    /// and stamps `modified_at`.
    pub fn assign_groups<I>(&mut self, groups: I)
    where
        I: IntoIterator,
        I::Item: GroupRecord,
    {
        self.groups = Some(groups.into_iter().map(|g| g.to_group()).collect());
        self.touch();
    }

    /// Groups, or an empty slice when none were set.
    pub fn groups_or_empty(&self) -> &[GroupDto] {
        self.groups.as_deref().unwrap_or(&[])
    }

    /// Mutable group list, initialized to empty on first access after `None`.
    pub fn groups_mut_or_init(&mut self) -> &mut Vec<GroupDto> {
        self.groups.get_or_insert_with(Vec::new)
    }

    /// Groups seen through their capability view.
    pub fn group_views(&self) -> impl Iterator<Item = &dyn GroupRecord> + '_ {
        self.groups_or_empty().iter().map(|g| g as &dyn GroupRecord)
    }
}

impl Default for AssignmentDto {
    fn default() -> Self {
        Self::new()
    }
}

impl_entity!(AssignmentDto);

impl Dto for AssignmentDto {
    const KIND: &'static str = "AssignmentDto";

    fn field_descriptors() -> &'static [FieldDescriptor] {
        FIELDS
    }
}

#[cfg(test)]
mod tests {
    use super::AssignmentDto;
    use crate::dto::GroupDto;

    #[test]
    fn groups_default_to_none_and_read_as_empty() {
        let assignment = AssignmentDto::new();
        assert!(assignment.groups.is_none());
        assert!(assignment.groups_or_empty().is_empty());
        assert_eq!(assignment.group_views().count(), 0);
    }

    #[test]
    fn groups_mut_or_init_substitutes_empty_once() {
        let mut assignment = AssignmentDto::new();
        assignment.groups_mut_or_init().push(GroupDto::new());
        assignment.groups_mut_or_init().push(GroupDto::new());
        assert_eq!(assignment.groups.as_ref().map(Vec::len), Some(2));
    }

    #[test]
    fn serializes_missing_groups_as_null() {
        let json = serde_json::to_value(AssignmentDto::new()).expect("assignment serializes");
        assert!(json["groups"].is_null());
        assert!(json["task"].is_null());
        assert_eq!(json["taskId"], 0);
    }
}
