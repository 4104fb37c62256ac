use std::fmt;

use indexmap::IndexMap;
use serde_json::Value;

use super::field_errors::{FieldErrors, FieldErrorsExt};
use super::rules::Rule;
use super::values::FieldValues;

/// The ordered rules for one field. The first failing rule wins.
#[derive(Default)]
pub struct RuleChain {
    rules: Vec<Box<dyn Rule>>,
}

impl RuleChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule to the end of the chain.
    pub fn then(mut self, rule: impl Rule + 'static) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Rule> {
        self.rules.iter().map(|rule| &**rule)
    }

    /// Run the chain against one value, stopping at the first failure.
    pub fn first_failure(&self, value: Option<&Value>, values: &FieldValues) -> Option<String> {
        self.iter().find_map(|rule| match rule.check(value, values) {
            Err(message) if !message.is_empty() => Some(message),
            _ => None,
        })
    }
}

impl fmt::Debug for RuleChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleChain").field("rules", &self.rules.len()).finish()
    }
}

/// Rule chains keyed by field name, in the order the fields were added.
#[derive(Debug, Default)]
pub struct RuleTable {
    fields: IndexMap<String, RuleChain>,
}

impl RuleTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field's rule chain. Adding a field a second time replaces its
    /// chain but keeps the field's original position.
    pub fn field(mut self, name: impl Into<String>, chain: RuleChain) -> Self {
        self.fields.insert(name.into(), chain);
        self
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn chain(&self, field: &str) -> Option<&RuleChain> {
        self.fields.get(field)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Check every field against `values` and collect the first failing
    /// message of each field.
    pub fn evaluate(&self, values: &FieldValues) -> FieldErrors {
        let mut errors = FieldErrors::new();
        for (field, chain) in &self.fields {
            if let Some(message) = chain.first_failure(values.get(field), values) {
                tracing::debug!(field = %field, message = %message, "field failed validation");
                errors.record(field, message);
            }
        }
        errors
    }
}
