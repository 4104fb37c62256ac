use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::error::FormError;

/// The current values of a form, keyed by field name.
///
/// A field that has no key here is "absent" and is handed to rules as `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldValues(Map<String, Value>);

impl FieldValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a bag from a JSON document, which must be an object.
    pub fn from_json(value: Value) -> Result<Self, FormError> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(FormError::NotAnObject(kind_of(&other))),
        }
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Set a field, returning the value it replaced.
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(field.into(), value.into())
    }

    pub fn remove(&mut self, field: &str) -> Option<Value> {
        self.0.remove(field)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for FieldValues {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Whether a field holds something a user actually entered.
///
/// Absent, `null`, `false`, `""` and `0` are not present. Everything else is.
pub fn is_present(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Number(n)) => n.as_f64().map_or(true, |f| f != 0.0),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

/// Length of a field value: characters for strings, elements for arrays.
/// Any other kind of value has no length.
pub fn value_length(value: Option<&Value>) -> Option<usize> {
    match value? {
        Value::String(s) => Some(s.chars().count()),
        Value::Array(items) => Some(items.len()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_presence() {
        assert!(!is_present(None));
        assert!(!is_present(Some(&json!(null))));
        assert!(!is_present(Some(&json!(""))));
        assert!(!is_present(Some(&json!(false))));
        assert!(!is_present(Some(&json!(0))));
        assert!(!is_present(Some(&json!(0.0))));

        assert!(is_present(Some(&json!("x"))));
        assert!(is_present(Some(&json!(" "))));
        assert!(is_present(Some(&json!(true))));
        assert!(is_present(Some(&json!(-1))));
        assert!(is_present(Some(&json!([]))));
        assert!(is_present(Some(&json!({}))));
    }

    #[test]
    fn test_value_length() {
        assert_eq!(value_length(Some(&json!("abcd"))), Some(4));
        assert_eq!(value_length(Some(&json!("héllo"))), Some(5));
        assert_eq!(value_length(Some(&json!([1, 2]))), Some(2));
        assert_eq!(value_length(Some(&json!(12345))), None);
        assert_eq!(value_length(Some(&json!(true))), None);
        assert_eq!(value_length(Some(&json!(null))), None);
        assert_eq!(value_length(None), None);
    }

    #[test]
    fn test_from_json() {
        let values = FieldValues::from_json(json!({ "email": "a@b.co", "remember": true })).unwrap();
        assert_eq!(values.len(), 2);
        assert_eq!(values.get("email"), Some(&json!("a@b.co")));
        assert_eq!(values.get("missing"), None);

        let err = FieldValues::from_json(json!(["email"])).unwrap_err();
        assert_eq!(err.to_string(), "form values must be a JSON object, got an array");
    }

    #[test]
    fn test_set_and_remove() {
        let mut values = FieldValues::new();
        assert!(values.is_empty());

        assert_eq!(values.set("name", "budi"), None);
        assert_eq!(values.set("name", "sari"), Some(json!("budi")));
        assert!(values.contains("name"));

        assert_eq!(values.remove("name"), Some(json!("sari")));
        assert!(!values.contains("name"));
    }

    #[test]
    fn test_collect_and_deserialize() {
        let values: FieldValues = [("password", "secret"), ("password_confirmation", "secret")]
            .into_iter()
            .collect();
        assert_eq!(values.get("password"), Some(&json!("secret")));

        let parsed: FieldValues = serde_json::from_str(r#"{"password":"secret","password_confirmation":"secret"}"#).unwrap();
        assert_eq!(parsed, values);
    }
}
