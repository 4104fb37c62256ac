use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteError {
    #[error("a route is already registered for path `{0}`")]
    DuplicatePath(String),
    #[error("a route named `{0}` is already registered")]
    DuplicateName(String),
    #[error("no route matches `{0}`")]
    NotFound(String),
    #[error("no route is named `{0}`")]
    UnknownName(String),
    #[error("`{location}` is outside the base path `{base}`")]
    OutsideBase { location: String, base: String },
}
