use forms::{FieldErrors, FieldErrorsExt, FieldValues};
use router::{RouteError, RouteTable};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::views::View;

/// A form submission read from stdin.
#[derive(Debug, Deserialize)]
pub struct Submission {
    pub path: String,
    #[serde(default)]
    pub fields: FieldValues,
}

#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub route: String,
    pub valid: bool,
    pub errors: FieldErrors,
}

#[derive(Debug, Error)]
pub enum CheckError {
    #[error(transparent)]
    Route(#[from] RouteError),
    #[error("the `{0}` page has no form to check")]
    NoForm(String),
}

/// Validate a submission against the form of the page it was posted from.
pub fn check(routes: &RouteTable<View>, submission: Submission) -> Result<CheckReport, CheckError> {
    let route = routes.resolve(&submission.path)?;
    let view = route.view();
    let mut form = view
        .form(submission.fields)
        .ok_or_else(|| CheckError::NoForm(route.name().to_string()))?;

    let valid = form.validate();
    if valid {
        tracing::info!(route = %route.name(), page = view.title(), "form is valid");
    } else {
        tracing::info!(
            route = %route.name(),
            page = view.title(),
            failed = form.errors().len(),
            errors = %form.errors().to_string_list(),
            "form is invalid"
        );
    }

    Ok(CheckReport {
        route: route.name().to_string(),
        valid,
        errors: form.errors().clone(),
    })
}
