//! Form-data formatting: field keys become human-readable labels, values
//! become table cells.

use serde_json::{Map, Value};

pub const NOT_PROVIDED: &str = "Not provided";

const LABEL_CELL_STYLE: &str = "padding: 8px; border: 1px solid #ddd; font-weight: bold;";
const VALUE_CELL_STYLE: &str = "padding: 8px; border: 1px solid #ddd;";

/// Derives a display label from a snake_case field key: underscores become
/// spaces and the first letter of each word is upper-cased.
/// "first_name" -> "First Name".
#[must_use]
pub fn field_label(key: &str) -> String {
    let mut label = String::with_capacity(key.len());
    let mut at_word_start = true;
    for c in key.chars() {
        let c = if c == '_' { ' ' } else { c };
        if at_word_start && c.is_alphanumeric() {
            label.extend(c.to_uppercase());
        } else {
            label.push(c);
        }
        at_word_start = !c.is_alphanumeric();
    }
    label
}

/// Renders one field value for the email table. Sequences join with ", ";
/// null, empty strings, and empty sequences render as "Not provided".
#[must_use]
pub fn field_value(value: &Value) -> String {
    match value {
        Value::Array(items) if items.is_empty() => NOT_PROVIDED.to_string(),
        Value::Array(items) => items
            .iter()
            .map(scalar_text)
            .collect::<Vec<_>>()
            .join(", "),
        Value::Null => NOT_PROVIDED.to_string(),
        Value::String(s) if s.is_empty() => NOT_PROVIDED.to_string(),
        other => scalar_text(other),
    }
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// One `<tr>` per field, in the input mapping's iteration order.
#[must_use]
pub fn format_form_data(data: &Map<String, Value>) -> String {
    data.iter()
        .map(|(key, value)| {
            format!(
                "<tr><td style=\"{LABEL_CELL_STYLE}\">{}:</td><td style=\"{VALUE_CELL_STYLE}\">{}</td></tr>",
                field_label(key),
                field_value(value),
            )
        })
        .collect()
}
