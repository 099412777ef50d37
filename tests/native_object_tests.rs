use chartjs_model::ChartError;
use chartjs_model::core::{NativeObject, NativeValue, ObjectType, PropertyKey};
use chrono::{TimeZone, Utc};

#[test]
fn getters_fall_back_to_defaults_on_missing_or_mistyped_values() {
    let mut native = NativeObject::new();
    native.set_value("label", "sales").expect("label");
    native.set_value("hidden", true).expect("hidden");

    assert_eq!(native.get_str("label", "none"), "sales");
    assert_eq!(native.get_f64("label", 7.5), 7.5);
    assert_eq!(native.get_i32("missing", 3), 3);
    assert!(native.get_bool("hidden", false));
    assert_eq!(native.type_of("missing"), ObjectType::Undefined);
}

#[test]
fn empty_key_cannot_be_written() {
    let mut native = NativeObject::new();
    let err = native.set_value("", 1.0).expect_err("empty key");
    assert!(matches!(err, ChartError::InvalidKey(_)));
    assert!(native.get("").is_none());
    assert!(!native.has(PropertyKey::new("")));
}

#[test]
fn value_or_array_stores_scalar_for_one_value() {
    let mut native = NativeObject::new();
    native
        .set_value_or_array("borderWidth", &[2.0])
        .expect("single");
    assert_eq!(native.type_of("borderWidth"), ObjectType::Number);
    assert_eq!(native.get_f64_value_or_array("borderWidth", 0.0), vec![2.0]);

    native
        .set_value_or_array("borderWidth", &[1.0, 2.0, 3.0])
        .expect("many");
    assert_eq!(native.type_of("borderWidth"), ObjectType::Array);
    assert_eq!(
        native.get_f64_value_or_array("borderWidth", 0.0),
        vec![1.0, 2.0, 3.0]
    );

    let empty: [f64; 0] = [];
    native
        .set_value_or_array("borderWidth", &empty)
        .expect("empty");
    assert!(!native.has("borderWidth"));
    assert_eq!(native.get_f64_value_or_array("borderWidth", 9.0), vec![9.0]);
}

#[test]
fn dates_are_stored_as_epoch_millis() {
    let mut native = NativeObject::new();
    let date = Utc.timestamp_millis_opt(1_600_000_000_123).single().expect("date");
    native.set_date("min", date).expect("date");
    assert_eq!(native.get_f64("min", 0.0), 1_600_000_000_123.0);
    assert_eq!(native.get_date("min"), Some(date));
}

#[test]
fn merge_is_deep_for_nested_objects() {
    let mut target = NativeObject::from_json_str(r#"{"plugins":{"legend":{"display":true}},"a":1}"#)
        .expect("target");
    let source = NativeObject::from_json_str(r#"{"plugins":{"title":{"text":"x"}},"a":2}"#)
        .expect("source");
    target.merge(&source);

    let plugins = target.get_object("plugins").expect("plugins");
    assert!(plugins.has_all(&["legend", "title"]));
    assert_eq!(target.get_i32("a", 0), 2);
}

#[test]
fn filtered_json_drops_internal_keys_at_any_depth() {
    let native = NativeObject::from_json_str(
        r#"{"_charbaId":3,"label":"a","nested":{"_charbaPointStyle":"image","pointStyle":"x"}}"#,
    )
    .expect("json");
    let json = native.to_filtered_json().expect("filtered");
    assert!(!json.contains("_charba"));
    assert!(json.contains(r#""label":"a""#));
    assert!(json.contains(r#""pointStyle":"x""#));
}

#[test]
fn integral_numbers_serialize_without_fraction() {
    let mut native = NativeObject::new();
    native.set_value("order", 2).expect("order");
    native.set_value("tension", 0.4).expect("tension");
    let value = native.to_value();
    assert_eq!(value["order"], serde_json::json!(2));
    assert_eq!(value["tension"], serde_json::json!(0.4));
}

#[test]
fn removing_keeps_insertion_order() {
    let mut native = NativeObject::new();
    for key in ["a", "b", "c"] {
        native.set_value(key, NativeValue::Null).expect("set");
    }
    assert!(native.remove_if_exists("b"));
    assert!(!native.remove_if_exists("b"));
    assert_eq!(native.keys().collect::<Vec<_>>(), vec!["a", "c"]);
}
