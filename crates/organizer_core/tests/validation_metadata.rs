use organizer_core::validation::{
    descriptor, descriptor_by_json_name, evaluate, ViolationKind, ID_RANGE_MESSAGE,
    NAME_REQUIRED_MESSAGE,
};
use organizer_core::{
    catalog, codec, AccountDto, AnonymousUserDto, AssignmentDto, ContactDto, Dto, EmailDto,
    FeatureDto, FieldFormat, GroupDto, ProjectAssignmentDto, RangeRule, TaskDto,
};

fn positive(message: &'static str) -> RangeRule {
    RangeRule {
        min: 1,
        max: i32::MAX as i64,
        message,
    }
}

#[test]
fn every_id_carries_the_positive_range_rule() {
    for entry in catalog() {
        let id = descriptor(entry.fields, "id").expect("every dto describes id");
        assert_eq!(id.json_name, "id", "{}", entry.kind);
        assert_eq!(id.range, Some(positive(ID_RANGE_MESSAGE)), "{}", entry.kind);
        assert!(!id.is_required(), "{}", entry.kind);
    }
}

#[test]
fn name_fields_are_required_with_fixed_message() {
    for fields in [
        AccountDto::field_descriptors(),
        TaskDto::field_descriptors(),
        GroupDto::field_descriptors(),
        AssignmentDto::field_descriptors(),
        FeatureDto::field_descriptors(),
    ] {
        let name = descriptor(fields, "name").expect("name is described");
        assert_eq!(name.required.map(|rule| rule.message), Some(NAME_REQUIRED_MESSAGE));
        assert_eq!(name.range, None);
    }
}

#[test]
fn foreign_keys_carry_named_range_messages() {
    let cases = [
        (GroupDto::field_descriptors(), "accountId", "AccountId must be a positive number"),
        (ContactDto::field_descriptors(), "accountId", "AccountId must be a positive number"),
        (AssignmentDto::field_descriptors(), "taskId", "TaskId must be a positive number"),
        (EmailDto::field_descriptors(), "contactId", "ContactId must be a positive number"),
        (
            ProjectAssignmentDto::field_descriptors(),
            "projectId",
            "ProjectId must be a positive number",
        ),
        (
            ProjectAssignmentDto::field_descriptors(),
            "assignmentId",
            "AssignmentId must be a positive number",
        ),
    ];
    for (fields, json_name, message) in cases {
        let field = descriptor_by_json_name(fields, json_name).expect("foreign key described");
        assert_eq!(field.range, Some(positive(message)), "{json_name}");
    }
}

#[test]
fn email_address_is_required_and_formatted() {
    let address = descriptor(EmailDto::field_descriptors(), "address").expect("address described");
    assert_eq!(
        address.required.map(|rule| rule.message),
        Some("Email address is required")
    );
    assert_eq!(
        address.format,
        Some(FieldFormat::EmailAddress {
            message: "Email address is not valid"
        })
    );
}

#[test]
fn other_required_fields_match_documented_messages() {
    let first = descriptor(ContactDto::field_descriptors(), "first_name").expect("described");
    assert_eq!(first.required.map(|r| r.message), Some("First name is required"));

    let session =
        descriptor(AnonymousUserDto::field_descriptors(), "session_key").expect("described");
    assert_eq!(session.required.map(|r| r.message), Some("Session key is required"));
}

#[test]
fn reference_and_timestamp_fields_have_no_rules() {
    for (fields, property) in [
        (GroupDto::field_descriptors(), "members"),
        (GroupDto::field_descriptors(), "account"),
        (AssignmentDto::field_descriptors(), "groups"),
        (AssignmentDto::field_descriptors(), "task"),
        (FeatureDto::field_descriptors(), "created_at"),
        (FeatureDto::field_descriptors(), "modified_at"),
    ] {
        let field = descriptor(fields, property).expect("described");
        assert_eq!(
            (field.required, field.range, field.format),
            (None, None, None),
            "{property}"
        );
    }
}

#[test]
fn dto_accepts_values_its_metadata_would_reject() {
    let mut email = EmailDto::new();
    email.id = -4;
    email.address = "nope".to_string();
    email.contact_id = 0;
    assert_eq!(email.id, -4);

    let payload = codec::encode_value(&email).expect("email encodes");
    let kinds: Vec<ViolationKind> = evaluate(EmailDto::field_descriptors(), &payload)
        .iter()
        .map(|violation| violation.kind)
        .collect();
    assert_eq!(
        kinds,
        vec![ViolationKind::Range, ViolationKind::Format, ViolationKind::Range]
    );
}

#[test]
fn populated_group_passes_external_evaluation() {
    let mut group = GroupDto::new();
    group.id = 1;
    group.name = "family".to_string();
    group.account_id = 2;

    let payload = codec::encode_value(&group).expect("group encodes");
    assert!(evaluate(GroupDto::field_descriptors(), &payload).is_empty());
}
