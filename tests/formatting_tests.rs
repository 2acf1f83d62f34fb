use openchurch_functions::email::format::{field_label, field_value, format_form_data};
use serde_json::{Value, json};

/// Tests for the form-data formatting that feeds the notification email
/// table.

#[test]
fn test_field_label_replaces_underscores_and_capitalizes() {
    assert_eq!(field_label("first_name"), "First Name");
    assert_eq!(field_label("email"), "Email");
    assert_eq!(field_label("how_did_you_hear"), "How Did You Hear");
}

#[test]
fn test_field_label_keeps_existing_casing_after_first_letter() {
    assert_eq!(field_label("church_URL"), "Church URL");
    assert_eq!(field_label("line_2"), "Line 2");
}

#[test]
fn test_field_value_scalars() {
    assert_eq!(field_value(&json!("Jane")), "Jane");
    assert_eq!(field_value(&json!(42)), "42");
    assert_eq!(field_value(&json!(true)), "true");
}

#[test]
fn test_field_value_joins_sequences_with_comma_space() {
    assert_eq!(field_value(&json!(["music", "tech"])), "music, tech");
    assert_eq!(field_value(&json!(["solo"])), "solo");
}

#[test]
fn test_field_value_substitutes_not_provided() {
    assert_eq!(field_value(&Value::Null), "Not provided");
    assert_eq!(field_value(&json!("")), "Not provided");
    assert_eq!(field_value(&json!([])), "Not provided");
}

#[test]
fn test_format_form_data_renders_one_row_per_field_in_input_order() {
    let data = json!({
        "first_name": "Jane",
        "interests": ["music", "tech"],
        "phone": "",
    });
    let rows = format_form_data(data.as_object().unwrap());

    assert!(rows.contains("First Name:"), "label row missing: {rows}");
    assert!(rows.contains("Jane"));
    assert!(rows.contains("Interests:"));
    assert!(rows.contains("music, tech"));
    assert!(rows.contains("Not provided"));

    let first = rows.find("First Name:").unwrap();
    let interests = rows.find("Interests:").unwrap();
    let phone = rows.find("Phone:").unwrap();
    assert!(
        first < interests && interests < phone,
        "rows must follow the input mapping's iteration order"
    );
}
