use serde_json::Value;

use super::field_errors::{FieldErrors, FieldErrorsExt};
use super::rule_table::RuleTable;
use super::values::FieldValues;

/// Validates one form: its current values against a fixed rule table.
///
/// The error mapping is rebuilt from scratch by every [`validate`](Self::validate)
/// call and is empty until the first one.
#[derive(Debug)]
pub struct FormValidator {
    values: FieldValues,
    rules: RuleTable,
    errors: FieldErrors,
}

impl FormValidator {
    pub fn new(values: FieldValues, rules: RuleTable) -> Self {
        Self {
            values,
            rules,
            errors: FieldErrors::new(),
        }
    }

    /// Check every field in the rule table and replace the stored errors.
    ///
    /// Returns `true` when no field failed.
    pub fn validate(&mut self) -> bool {
        self.errors = self.rules.evaluate(&self.values);
        tracing::debug!(
            fields = self.rules.len(),
            failed = self.errors.len(),
            "form validated"
        );
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn has_error(&self, field: &str) -> bool {
        !self.errors.message(field).is_empty()
    }

    /// The message for `field`, or `""` when it has none.
    pub fn error(&self, field: &str) -> &str {
        self.errors.message(field)
    }

    pub fn values(&self) -> &FieldValues {
        &self.values
    }

    pub fn values_mut(&mut self) -> &mut FieldValues {
        &mut self.values
    }

    pub fn set_value(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.values.set(field, value);
    }

    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    /// Consume the validator, keeping the values the user entered.
    pub fn into_values(self) -> FieldValues {
        self.values
    }
}
