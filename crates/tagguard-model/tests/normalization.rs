use tagguard_model::{Event, FieldId, RequiredTagSpec, RequiredTags, Resource, TagName};
use serde_json::json;

fn names(tags: &RequiredTags) -> Vec<&str> {
    tags.iter().map(TagName::as_str).collect()
}

#[test]
fn delimited_string_matches_list_form() {
    let delimited = RequiredTagSpec::Delimited("a, b, c".into()).normalize();
    let list = RequiredTagSpec::List(vec!["a".into(), "b".into(), "c".into()]).normalize();

    assert_eq!(delimited, list);
    assert_eq!(names(&delimited), vec!["a", "b", "c"]);
}

#[test]
fn entries_are_trimmed_and_empties_dropped() {
    let tags = RequiredTags::parse_delimited("  VIP ,, Bilingual  , ");
    assert_eq!(names(&tags), vec!["VIP", "Bilingual"]);

    let tags = RequiredTagSpec::List(vec![" VIP".into(), "".into(), "   ".into()]).normalize();
    assert_eq!(names(&tags), vec!["VIP"]);
}

#[test]
fn order_and_duplicates_are_preserved() {
    let tags = RequiredTags::parse_delimited("b,a,b");
    assert_eq!(names(&tags), vec!["b", "a", "b"]);
    assert_eq!(tags.len(), 3);
}

#[test]
fn display_joins_with_comma_space() {
    let tags = RequiredTags::parse_delimited("VIP,Bilingual");
    assert_eq!(tags.display(), "VIP, Bilingual");
    assert_eq!(RequiredTags::default().display(), "");
}

#[test]
fn field_values_without_requirement_yield_none() {
    assert_eq!(RequiredTagSpec::from_value(&json!(null)), None);
    assert_eq!(RequiredTagSpec::from_value(&json!("")), None);
    assert_eq!(RequiredTagSpec::from_value(&json!(false)), None);
    assert_eq!(RequiredTagSpec::from_value(&json!({"a": 1})), None);
}

#[test]
fn empty_array_is_a_spec_with_no_entries() {
    let spec = RequiredTagSpec::from_value(&json!([])).unwrap();
    assert!(spec.normalize().is_empty());
}

#[test]
fn array_keeps_strings_and_numbers() {
    let spec = RequiredTagSpec::from_value(&json!(["VIP", 7, null, true])).unwrap();
    assert_eq!(names(&spec.normalize()), vec!["VIP", "7"]);
}

#[test]
fn spec_deserializes_from_either_shape() {
    let list: RequiredTagSpec = serde_json::from_value(json!(["a", "b"])).unwrap();
    let delimited: RequiredTagSpec = serde_json::from_value(json!("a,b")).unwrap();
    assert_eq!(list.normalize(), delimited.normalize());
}

#[test]
fn event_reads_required_tags_from_configured_field() {
    let event: Event = serde_json::from_value(json!({
        "title": "Consult",
        "resource": ["Dr. Smith"],
        "dbk-additionalField-03": "VIP, Bilingual"
    }))
    .unwrap();

    let field = FieldId::parse("dbk-additionalField-03").unwrap();
    let spec = event.required_tags(&field).unwrap();
    assert_eq!(names(&spec.normalize()), vec!["VIP", "Bilingual"]);
    assert_eq!(event.resources.len(), 1);

    let missing = FieldId::parse("not-there").unwrap();
    assert!(event.required_tags(&missing).is_none());
}

#[test]
fn event_change_detection_compares_all_fields() {
    let original: Event = serde_json::from_value(json!({
        "resource": ["Room A"],
        "title": "Standup"
    }))
    .unwrap();
    let mut edited = original.clone();
    assert!(!edited.differs_from(&original));

    edited.fields.insert("title".into(), json!("Retro"));
    assert!(edited.differs_from(&original));
}

#[test]
fn resource_tags_default_to_empty() {
    let resource: Resource = serde_json::from_value(json!({"name": "Projector"})).unwrap();
    assert!(resource.tags.is_empty());

    let resource: Resource = serde_json::from_value(json!({
        "name": "Dr. Smith",
        "tags": [{"name": "VIP"}, {"name": "VIP"}]
    }))
    .unwrap();
    assert_eq!(resource, Resource::new("Dr. Smith", ["VIP", "VIP"]));
}

#[test]
fn identifiers_reject_malformed_values() {
    assert!(TagName::parse("VIP").is_ok());
    assert!(TagName::parse("Spanish speaker").is_ok());
    assert!(TagName::parse(" VIP").is_err());
    assert!(TagName::parse("").is_err());
    assert!(FieldId::parse("1623856940411-2058994056").is_ok());
    assert!(FieldId::parse("bad field").is_err());
}

#[test]
fn null_resource_list_reads_as_empty() {
    let event: Event = serde_json::from_str(r#"{"resource": null, "f": "VIP"}"#).unwrap();
    assert!(event.resources.is_empty());

    let field = FieldId::parse("f").unwrap();
    assert_eq!(names(&event.required_tags(&field).unwrap().normalize()), vec!["VIP"]);
}

#[test]
fn null_tag_list_reads_as_empty() {
    let resource: Resource =
        serde_json::from_str(r#"{"name": "Dr. Smith", "tags": null}"#).unwrap();
    assert_eq!(resource, Resource::new("Dr. Smith", Vec::<&str>::new()));
}
