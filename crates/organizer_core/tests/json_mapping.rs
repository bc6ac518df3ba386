use organizer_core::validation::descriptor_by_json_name;
use organizer_core::{
    codec, AccountDto, AnonymousUserDto, AssignmentDto, ContactDto, ContactType, Dto, EmailDto,
    Entity, FeatureDto, GroupDto, ProjectAssignmentDto, TaskDto,
};
use serde_json::{json, Value};

const CAST_KEYS: [&str; 6] = ["isCast", "castId", "castType", "is_cast", "cast_id", "cast_type"];

fn assert_keys_match_descriptors<D: Dto + Default>() {
    let payload = codec::encode_value(&D::default()).expect("dto encodes");
    let object = payload.as_object().expect("dto encodes as object");

    let keys: Vec<&str> = object.keys().map(String::as_str).collect();
    let described: Vec<&str> = D::field_descriptors().iter().map(|d| d.json_name).collect();
    let mut sorted_keys = keys.clone();
    sorted_keys.sort();
    let mut sorted_described = described.clone();
    sorted_described.sort();
    assert_eq!(sorted_keys, sorted_described, "{}", D::KIND);

    for key in CAST_KEYS {
        assert!(!object.contains_key(key), "{} leaked {key}", D::KIND);
        assert!(descriptor_by_json_name(D::field_descriptors(), key).is_none());
    }
}

#[test]
fn serialized_keys_are_exactly_the_described_wire_names() {
    assert_keys_match_descriptors::<AccountDto>();
    assert_keys_match_descriptors::<AnonymousUserDto>();
    assert_keys_match_descriptors::<AssignmentDto>();
    assert_keys_match_descriptors::<ContactDto>();
    assert_keys_match_descriptors::<EmailDto>();
    assert_keys_match_descriptors::<FeatureDto>();
    assert_keys_match_descriptors::<GroupDto>();
    assert_keys_match_descriptors::<ProjectAssignmentDto>();
    assert_keys_match_descriptors::<TaskDto>();
}

#[test]
fn group_payload_uses_camel_case_names() {
    let mut group = GroupDto::new();
    group.id = 11;
    group.account_id = 4;
    let mut member = ContactDto::new();
    member.first_name = "Ana".to_string();
    member.contact_type = ContactType::Work;
    group.set_members(vec![member]);

    let json = codec::encode_value(&group).expect("group encodes");
    assert_eq!(json["id"], 11);
    assert_eq!(json["accountId"], 4);
    assert_eq!(json["account"], Value::Null);
    assert_eq!(json["members"][0]["firstName"], "Ana");
    assert_eq!(json["members"][0]["type"], "work");
    assert_eq!(json["modifiedAt"], Value::Null);
    assert!(json["createdAt"].is_string());
}

#[test]
fn decode_fills_missing_fields_with_defaults() {
    let email: EmailDto = codec::decode_value(json!({
        "id": 2,
        "address": "ana@example.com",
        "type": "home"
    }))
    .expect("email decodes");

    assert_eq!(email.id(), 2);
    assert_eq!(email.address, "ana@example.com");
    assert_eq!(email.email_type, ContactType::Home);
    assert_eq!(email.contact_id, 0);
    assert_eq!(email.contact, None);
    assert_eq!(email.modified_at(), None);
}

#[test]
fn decode_ignores_cast_keys_in_payload() {
    let feature: FeatureDto = codec::decode_value(json!({
        "id": 5,
        "name": "reminders",
        "isEnabled": true,
        "isCast": true,
        "castId": 9
    }))
    .expect("unknown keys are ignored");
    assert_eq!(feature.id, 5);
    assert!(feature.is_enabled);
}

#[test]
fn nested_references_survive_string_round_trip() {
    let mut assignment = AssignmentDto::new();
    assignment.id = 3;
    assignment.name = "spring cleaning".to_string();
    assignment.task = Some(TaskDto::with_fields(8, "garage", None, false, None));
    assignment.task_id = 8;
    assignment.set_groups(Some(vec![GroupDto::new()]));

    let link = ProjectAssignmentDto::with_fields(1, 2, 3, Some(assignment), None);
    let payload = codec::encode(&link).expect("link encodes");
    let decoded: ProjectAssignmentDto = codec::decode(&payload).expect("link decodes");
    assert_eq!(decoded, link);
}

#[test]
fn unknown_contact_type_is_a_decode_error() {
    let err = codec::decode::<ContactDto>(r#"{"type": "pager"}"#).expect_err("pager is unknown");
    assert!(err.to_string().contains("ContactDto"));
}
