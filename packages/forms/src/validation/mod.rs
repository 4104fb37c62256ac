pub mod error;
pub mod field_errors;
pub mod form_validator;
pub mod rule_table;
pub mod rules;
pub mod values;

// Re-export common types and functions
pub use error::FormError;
pub use field_errors::{FieldErrors, FieldErrorsExt};
pub use form_validator::FormValidator;
pub use rule_table::{RuleChain, RuleTable};
pub use rules::{
    alphanumeric, email, max_length, min_length, required, rule_fn, same_as, Rule,
};
pub use values::{is_present, value_length, FieldValues};
