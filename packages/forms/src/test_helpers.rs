use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use serde_json::Value;

use crate::validation::rules::{rule_fn, Rule};
use crate::validation::values::FieldValues;

/// A rule that always fails with `message`.
pub fn failing_rule(message: &'static str) -> impl Rule {
    rule_fn(move |_, _| Err(message.to_string()))
}

/// A rule returning `outcome` that counts how often it was checked.
pub fn counting_rule(outcome: Result<(), String>) -> (impl Rule, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let rule = rule_fn(move |_: Option<&Value>, _: &FieldValues| {
        counter.fetch_add(1, Ordering::SeqCst);
        outcome.clone()
    });
    (rule, calls)
}

pub fn register_values(password: &str, confirmation: &str) -> FieldValues {
    [
        ("email", Value::from("tubagus@example.com")),
        ("password", Value::from(password)),
        ("password_confirmation", Value::from(confirmation)),
    ]
    .into_iter()
    .collect()
}
