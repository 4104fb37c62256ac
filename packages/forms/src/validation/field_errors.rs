use indexmap::IndexMap;

/// A mapping of field names to their single active error message.
///
/// Entries keep the order in which fields were checked.
pub type FieldErrors = IndexMap<String, String>;

// Helper trait for reading and building error mappings
pub trait FieldErrorsExt {
    /// Record a failure for a field. Empty messages are ignored.
    fn record(&mut self, field: &str, message: String);
    /// The message recorded for a field, or `""` when it has none.
    fn message(&self, field: &str) -> &str;
    /// Get a comma-separated list of all error messages
    fn to_string_list(&self) -> String;
}

impl FieldErrorsExt for FieldErrors {
    fn record(&mut self, field: &str, message: String) {
        if message.is_empty() {
            return;
        }
        self.insert(field.to_string(), message);
    }

    fn message(&self, field: &str) -> &str {
        self.get(field).map(String::as_str).unwrap_or("")
    }

    fn to_string_list(&self) -> String {
        self.values()
            .cloned()
            .collect::<Vec<String>>()
            .join(", ")
    }
}
