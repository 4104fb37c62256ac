use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use super::values::{is_present, value_length, FieldValues};

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\S+@\S+\.\S+$").expect("valid regex"));

/// One validation condition for a field.
///
/// `value` is the field's current value (`None` when the bag has no such
/// key) and `values` is the whole bag, for rules that compare fields.
/// `Err` carries the message shown to the user. An empty message counts
/// as a pass.
pub trait Rule: Send + Sync {
    fn check(&self, value: Option<&Value>, values: &FieldValues) -> Result<(), String>;
}

fn fail(message: &Option<String>, default: impl FnOnce() -> String) -> Result<(), String> {
    Err(message.clone().unwrap_or_else(default))
}

/// Rejects absent and empty values, see [`is_present`].
#[derive(Debug, Clone, Default)]
pub struct Required {
    message: Option<String>,
}

pub fn required() -> Required {
    Required::default()
}

impl Required {
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl Rule for Required {
    fn check(&self, value: Option<&Value>, _values: &FieldValues) -> Result<(), String> {
        if is_present(value) {
            return Ok(());
        }
        fail(&self.message, || "Required".to_string())
    }
}

/// Accepts strings shaped like `local@domain.tld` with no whitespace.
///
/// Only JSON strings are matched. Numbers, booleans, arrays and objects are
/// not converted to text first, so they always fail.
#[derive(Debug, Clone, Default)]
pub struct Email {
    message: Option<String>,
}

pub fn email() -> Email {
    Email::default()
}

impl Email {
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl Rule for Email {
    fn check(&self, value: Option<&Value>, _values: &FieldValues) -> Result<(), String> {
        match value {
            Some(Value::String(s)) if EMAIL_RE.is_match(s) => Ok(()),
            _ => fail(&self.message, || "Invalid email".to_string()),
        }
    }
}

/// Requires at least `min` characters (or array elements). Values without
/// a length, absent ones included, fail.
#[derive(Debug, Clone)]
pub struct MinLength {
    min: usize,
    message: Option<String>,
}

pub fn min_length(min: usize) -> MinLength {
    MinLength { min, message: None }
}

impl MinLength {
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl Rule for MinLength {
    fn check(&self, value: Option<&Value>, _values: &FieldValues) -> Result<(), String> {
        match value_length(value) {
            Some(len) if len >= self.min => Ok(()),
            _ => Err(self
                .message
                .clone()
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| format!("Minimum {} characters", self.min))),
        }
    }
}

/// Allows at most `max` characters. Values without a length pass; pair
/// with [`required`] when the field must be filled in.
#[derive(Debug, Clone)]
pub struct MaxLength {
    max: usize,
    message: Option<String>,
}

pub fn max_length(max: usize) -> MaxLength {
    MaxLength { max, message: None }
}

impl MaxLength {
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl Rule for MaxLength {
    fn check(&self, value: Option<&Value>, _values: &FieldValues) -> Result<(), String> {
        match value_length(value) {
            Some(len) if len > self.max => {
                fail(&self.message, || format!("Maximum {} characters", self.max))
            }
            _ => Ok(()),
        }
    }
}

/// ASCII letters and digits only. Absent and empty values pass.
#[derive(Debug, Clone, Default)]
pub struct Alphanumeric {
    message: Option<String>,
}

pub fn alphanumeric() -> Alphanumeric {
    Alphanumeric::default()
}

impl Alphanumeric {
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl Rule for Alphanumeric {
    fn check(&self, value: Option<&Value>, _values: &FieldValues) -> Result<(), String> {
        match value {
            None | Some(Value::Null) => Ok(()),
            Some(Value::String(s)) if s.chars().all(|c| c.is_ascii_alphanumeric()) => Ok(()),
            _ => fail(&self.message, || "Only letters and numbers".to_string()),
        }
    }
}

/// Requires the value to equal another field's current value.
///
/// A missing comparison field is treated as absent, so the rule passes only
/// when the checked value is absent too. Arrays and objects are equal when
/// their contents are equal; numbers compare by numeric value.
#[derive(Debug, Clone)]
pub struct SameAs {
    field: String,
    message: Option<String>,
}

pub fn same_as(field: impl Into<String>) -> SameAs {
    SameAs {
        field: field.into(),
        message: None,
    }
}

impl SameAs {
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl Rule for SameAs {
    fn check(&self, value: Option<&Value>, values: &FieldValues) -> Result<(), String> {
        if values_equal(value, values.get(&self.field)) {
            return Ok(());
        }
        fail(&self.message, || format!("Must match {}", self.field))
    }
}

fn values_equal(a: Option<&Value>, b: Option<&Value>) -> bool {
    match (a, b) {
        (Some(Value::Number(x)), Some(Value::Number(y))) => x.as_f64() == y.as_f64(),
        _ => a == b,
    }
}

/// Adapter turning a closure into a [`Rule`].
pub struct RuleFn<F>(F);

pub fn rule_fn<F>(f: F) -> RuleFn<F>
where
    F: Fn(Option<&Value>, &FieldValues) -> Result<(), String> + Send + Sync,
{
    RuleFn(f)
}

impl<F> Rule for RuleFn<F>
where
    F: Fn(Option<&Value>, &FieldValues) -> Result<(), String> + Send + Sync,
{
    fn check(&self, value: Option<&Value>, values: &FieldValues) -> Result<(), String> {
        (self.0)(value, values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn check(rule: &impl Rule, value: Value) -> Result<(), String> {
        rule.check(Some(&value), &FieldValues::new())
    }

    #[test]
    fn test_required() {
        assert_eq!(check(&required(), json!("")), Err("Required".to_string()));
        assert_eq!(check(&required(), json!("x")), Ok(()));
        assert_eq!(check(&required(), json!(false)), Err("Required".to_string()));
        assert_eq!(check(&required(), json!(true)), Ok(()));
        assert_eq!(
            required().check(None, &FieldValues::new()),
            Err("Required".to_string())
        );
        assert_eq!(
            check(&required().with_message("Email wajib diisi"), json!(null)),
            Err("Email wajib diisi".to_string())
        );
    }

    #[test]
    fn test_email() {
        assert_eq!(check(&email(), json!("a@b.co")), Ok(()));
        assert_eq!(check(&email(), json!("tubagus@example.com")), Ok(()));
        assert_eq!(check(&email(), json!("not-an-email")), Err("Invalid email".to_string()));
        assert!(check(&email(), json!("a b@c.d")).is_err());
        assert!(check(&email(), json!("a@b")).is_err());
        assert!(check(&email(), json!("")).is_err());
        assert!(check(&email(), json!(42)).is_err());
        assert!(check(&email(), json!(["a@b.co"])).is_err());
        assert!(email().check(None, &FieldValues::new()).is_err());
        assert_eq!(
            check(&email().with_message("Bad address"), json!("nope")),
            Err("Bad address".to_string())
        );
    }

    #[test]
    fn test_min_length() {
        assert_eq!(
            check(&min_length(5), json!("abcd")),
            Err("Minimum 5 characters".to_string())
        );
        assert_eq!(check(&min_length(5), json!("abcde")), Ok(()));
        assert_eq!(
            min_length(5).check(None, &FieldValues::new()),
            Err("Minimum 5 characters".to_string())
        );
        assert!(check(&min_length(1), json!(12345)).is_err());
        assert_eq!(check(&min_length(0), json!("")), Ok(()));
        assert_eq!(
            check(&min_length(8).with_message("Too short"), json!("abc")),
            Err("Too short".to_string())
        );
        assert_eq!(
            check(&min_length(5).with_message(""), json!("abc")),
            Err("Minimum 5 characters".to_string())
        );
    }

    #[test]
    fn test_max_length() {
        assert_eq!(check(&max_length(3), json!("abc")), Ok(()));
        assert_eq!(
            check(&max_length(3), json!("abcd")),
            Err("Maximum 3 characters".to_string())
        );
        assert_eq!(max_length(3).check(None, &FieldValues::new()), Ok(()));
    }

    #[test]
    fn test_alphanumeric() {
        assert_eq!(check(&alphanumeric(), json!("budi99")), Ok(()));
        assert_eq!(check(&alphanumeric(), json!("")), Ok(()));
        assert_eq!(
            check(&alphanumeric(), json!("tubagus_aldi")),
            Err("Only letters and numbers".to_string())
        );
        assert!(check(&alphanumeric(), json!(true)).is_err());
    }

    #[test]
    fn test_same_as() {
        let values: FieldValues = [("password", "secret")].into_iter().collect();
        let rule = same_as("password");

        assert_eq!(rule.check(Some(&json!("secret")), &values), Ok(()));
        assert_eq!(
            rule.check(Some(&json!("wrong")), &values),
            Err("Must match password".to_string())
        );

        let rule = rule.with_message("Passwords do not match");
        assert_eq!(
            rule.check(Some(&json!("wrong")), &values),
            Err("Passwords do not match".to_string())
        );
    }

    #[test]
    fn test_same_as_missing_field() {
        let rule = same_as("password");
        let empty = FieldValues::new();

        assert_eq!(rule.check(None, &empty), Ok(()));
        assert!(rule.check(Some(&json!("secret")), &empty).is_err());
    }

    #[test]
    fn test_same_as_compares_numbers_by_value() {
        let values: FieldValues = [("pin", json!(1234))].into_iter().collect();
        assert_eq!(same_as("pin").check(Some(&json!(1234.0)), &values), Ok(()));
        assert!(same_as("pin").check(Some(&json!("1234")), &values).is_err());
    }

    #[test]
    fn test_same_as_compares_lists_by_contents() {
        let values: FieldValues = [("tags", json!(["a"]))].into_iter().collect();
        assert_eq!(same_as("tags").check(Some(&json!(["a"])), &values), Ok(()));
        assert!(same_as("tags").check(Some(&json!(["a", "b"])), &values).is_err());
    }

    #[test]
    fn test_rule_fn() {
        let rule = rule_fn(|value, _| match value.and_then(Value::as_i64) {
            Some(n) if n >= 0 => Ok(()),
            _ => Err("Must not be negative".to_string()),
        });

        assert_eq!(check(&rule, json!(10)), Ok(()));
        assert_eq!(check(&rule, json!(-1)), Err("Must not be negative".to_string()));
    }
}
