use super::error::RouteError;
use super::route::Route;

/// The application's routes, mounted under a base path.
///
/// Lookups ignore query strings, fragments, a trailing slash and ASCII case.
#[derive(Debug)]
pub struct RouteTable<V> {
    base: String,
    routes: Vec<Route<V>>,
}

impl<V> RouteTable<V> {
    pub fn new(base: &str) -> Self {
        Self {
            base: normalize(base),
            routes: Vec::new(),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// Register a route. Paths and names must be unique; a rejected route
    /// leaves the table unchanged.
    pub fn add(&mut self, mut route: Route<V>) -> Result<&mut Self, RouteError> {
        let path = normalize(route.path());
        if self.routes.iter().any(|r| r.path().eq_ignore_ascii_case(&path)) {
            return Err(RouteError::DuplicatePath(path));
        }
        if self.routes.iter().any(|r| r.name() == route.name()) {
            return Err(RouteError::DuplicateName(route.name().to_string()));
        }
        route.set_path(path);
        self.routes.push(route);
        Ok(self)
    }

    /// Find the route for a location such as `/app/login?next=/dashboard`.
    pub fn resolve(&self, location: &str) -> Result<&Route<V>, RouteError> {
        let path = self.strip_base(&normalize(location))?;
        let route = self
            .routes
            .iter()
            .find(|r| r.path().eq_ignore_ascii_case(&path))
            .ok_or_else(|| RouteError::NotFound(location.to_string()))?;
        tracing::debug!(location, route = %route.name(), "route resolved");
        Ok(route)
    }

    pub fn by_name(&self, name: &str) -> Result<&Route<V>, RouteError> {
        self.routes
            .iter()
            .find(|r| r.name() == name)
            .ok_or_else(|| RouteError::UnknownName(name.to_string()))
    }

    /// The full location of a named route, base path included.
    pub fn href(&self, name: &str) -> Result<String, RouteError> {
        let route = self.by_name(name)?;
        Ok(match (self.base.as_str(), route.path()) {
            ("/", path) => path.to_string(),
            (base, "/") => base.to_string(),
            (base, path) => format!("{base}{path}"),
        })
    }

    pub fn routes(&self) -> impl Iterator<Item = &Route<V>> {
        self.routes.iter()
    }

    fn strip_base(&self, path: &str) -> Result<String, RouteError> {
        if self.base == "/" {
            return Ok(path.to_string());
        }
        let outside = || RouteError::OutsideBase {
            location: path.to_string(),
            base: self.base.clone(),
        };
        let head = path.get(..self.base.len()).ok_or_else(outside)?;
        if !head.eq_ignore_ascii_case(&self.base) {
            return Err(outside());
        }
        match &path[self.base.len()..] {
            "" => Ok("/".to_string()),
            rest if rest.starts_with('/') => Ok(rest.to_string()),
            _ => Err(outside()),
        }
    }
}

/// Drop any query or fragment, force a leading slash and drop a trailing one.
fn normalize(location: &str) -> String {
    let end = location.find(['?', '#']).unwrap_or(location.len());
    let trimmed = location[..end].trim().trim_end_matches('/');
    if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}
