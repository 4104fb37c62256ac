use forms::{
    alphanumeric, email, max_length, min_length, required, same_as, FieldValues, FormValidator,
    RuleChain, RuleTable,
};
use router::{Route, RouteError, RouteTable};

use crate::config::AppConfig;

const USERNAME_MIN_LENGTH: usize = 3;
const USERNAME_MAX_LENGTH: usize = 30;

type FormBuilder = Box<dyn Fn() -> RuleTable + Send + Sync>;

/// A page of the web client. Pages with a form know how to build its rules.
pub struct View {
    title: &'static str,
    form: Option<FormBuilder>,
}

impl View {
    fn page(title: &'static str) -> Self {
        View { title, form: None }
    }

    fn with_form(title: &'static str, form: impl Fn() -> RuleTable + Send + Sync + 'static) -> Self {
        View {
            title,
            form: Some(Box::new(form)),
        }
    }

    pub fn title(&self) -> &'static str {
        self.title
    }

    pub fn has_form(&self) -> bool {
        self.form.is_some()
    }

    /// A fresh validator for this page's form, or `None` if it has no form.
    pub fn form(&self, values: FieldValues) -> Option<FormValidator> {
        self.form.as_ref().map(|build| FormValidator::new(values, build()))
    }
}

impl std::fmt::Debug for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("View")
            .field("title", &self.title)
            .field("has_form", &self.has_form())
            .finish()
    }
}

pub fn login_rules() -> RuleTable {
    RuleTable::new()
        .field("email", RuleChain::new().then(required()).then(email()))
        .field("password", RuleChain::new().then(required()))
}

pub fn register_rules(password_min_length: usize) -> RuleTable {
    RuleTable::new()
        .field(
            "username",
            RuleChain::new()
                .then(required())
                .then(min_length(USERNAME_MIN_LENGTH))
                .then(max_length(USERNAME_MAX_LENGTH))
                .then(alphanumeric()),
        )
        .field("email", RuleChain::new().then(required()).then(email()))
        .field(
            "password",
            RuleChain::new()
                .then(required())
                .then(min_length(password_min_length)),
        )
        .field(
            "password_confirmation",
            RuleChain::new()
                .then(required())
                .then(same_as("password").with_message("Passwords do not match")),
        )
}

/// The client's route table. Login and register pages load on first use.
pub fn routes(config: &AppConfig) -> Result<RouteTable<View>, RouteError> {
    let password_min_length = config.password_min_length;

    let mut routes = RouteTable::new(&config.base_url);
    routes
        .add(Route::eager("/", "home", View::page("Dompet")))?
        .add(Route::eager("/dashboard", "dashboard", View::page("Dashboard")))?
        .add(Route::lazy("/login", "login", || {
            View::with_form("Masuk", login_rules)
        }))?
        .add(Route::lazy("/register", "register", move || {
            View::with_form("Daftar", move || register_rules(password_min_length))
        }))?;
    Ok(routes)
}
