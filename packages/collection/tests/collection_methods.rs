use utilify_collection::{collect, Collection, Condition, Conditions, Error, Map, Value};

fn conditions<const N: usize>(entries: [(&str, Condition); N]) -> Conditions {
    entries
        .into_iter()
        .map(|(k, c)| (k.to_string(), c))
        .collect()
}

#[test]
fn undot_nests_dotted_keys() {
    let dotted = collect([
        ("entity", Value::from("Entity A")),
        ("entries.0.values.key_one", Value::from("value1")),
        ("entries.0.values.key_two", Value::from(10.5)),
        ("entries.1.values.key_one", Value::from("value2")),
        ("entries.1.values.key_two", Value::from("80")),
    ]);

    let json: serde_json::Value =
        serde_json::from_str(&dotted.undot().to_json_str()).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "entity": "Entity A",
            "entries": [
                {"values": {"key_one": "value1", "key_two": 10.5}},
                {"values": {"key_one": "value2", "key_two": "80"}},
            ],
        })
    );
}

#[test]
fn filter_by_key_pattern_without_matches() {
    let c = collect([("abc", 1), ("def", 2), ("ghi", 3)]);
    assert!(c.filter_by_key_pattern(r"/\d+/").unwrap().is_empty());
}

#[test]
fn filter_by_key_pattern_with_all_matching() {
    let c = collect([("100000", 123), ("200000", 456), ("300000", 789)]);
    assert_eq!(c.filter_by_key_pattern(r"/^\d+$/").unwrap(), c);
}

#[test]
fn filter_by_key_pattern_with_some_matching() {
    let c = collect([("100000", 123), ("200000", 456), ("abc000", 789)]);
    assert_eq!(
        c.filter_by_key_pattern(r"/^\d+/").unwrap(),
        collect([("100000", 123), ("200000", 456)])
    );
}

#[test]
fn filter_by_key_pattern_on_empty_collection() {
    let result = Collection::new().filter_by_key_pattern(r"/^\d+/").unwrap();
    assert!(result.is_empty());
}

#[test]
fn filter_by_key_pattern_propagates_invalid_pattern() {
    let result = collect([("100000", 123)]).filter_by_key_pattern("/[unclosed_bracket");
    assert!(matches!(result, Err(Error::InvalidPattern { .. })));
}

#[test]
fn conditions_of_true_keep_everything() {
    let attributes = collect([
        ("name", "John"),
        ("age", "30"),
        ("email", "john@example.com"),
    ]);
    let filters = conditions([
        ("name", Condition::from(true)),
        ("age", Condition::from(true)),
        ("email", Condition::from(true)),
    ]);

    let result = attributes.filter_attributes_by_conditions(&filters).unwrap();
    assert_eq!(result, attributes);
}

#[test]
fn conditions_with_patterns() {
    let attributes = collect([
        ("username", "user123"),
        ("password", "pass123"),
        ("email", "john@example.com"),
    ]);
    let filters = conditions([
        ("username", Condition::from(r"/^[a-zA-Z0-9]+$/")),
        ("password", Condition::from(r"/^pass\d+$/")),
    ]);

    let result = attributes.filter_attributes_by_conditions(&filters).unwrap();
    assert_eq!(
        result,
        collect([("username", "user123"), ("password", "pass123")])
    );
}

#[test]
fn conditions_with_predicates() {
    let attributes = collect([
        ("role", Value::from("admin")),
        ("status", Value::from("active")),
        ("age", Value::from(25)),
    ]);
    let filters = conditions([
        ("role", Condition::predicate(|v| v.as_str() == Some("admin"))),
        ("status", Condition::predicate(|v| v.as_str() == Some("active"))),
        (
            "age",
            Condition::predicate(|v| matches!(v, Value::Integer(n) if *n >= 18)),
        ),
    ]);

    let result = attributes.filter_attributes_by_conditions(&filters).unwrap();
    assert_eq!(result, attributes);
}

#[test]
fn conditions_for_missing_attributes_are_ignored() {
    let attributes = collect([("first_name", "John"), ("last_name", "Doe")]);
    let filters = conditions([
        ("first_name", Condition::Always),
        (
            "age",
            Condition::predicate(|v| matches!(v, Value::Integer(n) if *n >= 18)),
        ),
    ]);

    let result = attributes.filter_attributes_by_conditions(&filters).unwrap();
    assert_eq!(result, collect([("first_name", "John")]));
}

#[test]
fn reject_blanks_removes_blank_values() {
    let items = collect([
        ("name", Value::from("John")),
        ("email", Value::Null),
        ("age", Value::from(0)),
        ("description", Value::from("")),
        ("status", Value::from("active")),
        ("tags", Value::array()),
    ]);

    assert_eq!(
        items.reject_blanks(),
        collect([
            ("name", Value::from("John")),
            ("age", Value::from(0)),
            ("status", Value::from("active")),
        ])
    );
}

#[test]
fn reject_blanks_of_all_blank_values_is_empty() {
    let items = collect([
        ("name", Value::from("")),
        ("email", Value::Null),
        ("tags", Value::array()),
    ]);
    assert!(items.reject_blanks().is_empty());
}

#[test]
fn reject_blanks_keeps_string_zero() {
    let items = collect([
        ("price", Value::from("0")),
        ("quantity", Value::from(10)),
        ("notes", Value::Null),
        ("comments", Value::from("Great product")),
        ("discount", Value::from("")),
    ]);

    assert_eq!(
        items.reject_blanks(),
        collect([
            ("price", Value::from("0")),
            ("quantity", Value::from(10)),
            ("comments", Value::from("Great product")),
        ])
    );
}

#[test]
fn to_yaml_str_of_flat_collection() {
    let items = collect([("name", "John"), ("email", "john@example.com")]);
    let parsed: serde_yaml::Value = serde_yaml::from_str(&items.to_yaml_str()).unwrap();
    assert_eq!(parsed["name"].as_str(), Some("John"));
    assert_eq!(parsed["email"].as_str(), Some("john@example.com"));
}

#[test]
fn to_yaml_str_of_empty_collection() {
    let parsed: serde_yaml::Value =
        serde_yaml::from_str(&Collection::new().to_yaml_str()).unwrap();
    assert!(parsed.as_mapping().is_some_and(|m| m.is_empty()));
}

#[test]
fn to_json_str_matches_pretty_print() {
    let items = collect([
        ("name", Value::from("John Doe")),
        ("age", Value::from(30)),
        ("email", Value::from("john@example.com")),
    ]);

    assert_eq!(
        items.to_json_str(),
        "{\n    \"name\": \"John Doe\",\n    \"age\": 30,\n    \"email\": \"john@example.com\"\n}"
    );
}

#[test]
fn to_json_str_of_nested_values() {
    let mut preferences = Map::new();
    preferences.insert("newsletters".to_string(), Value::from(false));
    preferences.insert("notifications".to_string(), Value::from(true));

    let items = collect([
        ("name", Value::from("Jane")),
        ("age", Value::from(27)),
        ("is_verified", Value::from(true)),
        ("preferences", Value::Map(preferences)),
    ]);

    let parsed: serde_json::Value = serde_json::from_str(&items.to_json_str()).unwrap();
    assert_eq!(
        parsed,
        serde_json::json!({
            "name": "Jane",
            "age": 27,
            "is_verified": true,
            "preferences": {"newsletters": false, "notifications": true},
        })
    );
}

#[test]
fn to_json_str_of_empty_collection_is_an_object() {
    let json = Collection::new().to_json_str();
    assert_eq!(json, "{}");

    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(Value::from_json(parsed), Value::Map(Map::new()));
}

#[test]
fn to_json_str_degrades_to_empty_string() {
    let items = collect([("invalid", Value::Bytes(vec![0xB1, 0x31]))]);
    assert_eq!(items.to_json_str(), "");
    assert_eq!(items.to_yaml_str(), "");
}
