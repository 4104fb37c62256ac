use std::fmt;
use std::sync::OnceLock;

/// A view that is built the first time it is needed.
pub struct LazyComponent<V> {
    cell: OnceLock<V>,
    loader: Box<dyn Fn() -> V + Send + Sync>,
}

impl<V> LazyComponent<V> {
    pub fn new(loader: impl Fn() -> V + Send + Sync + 'static) -> Self {
        Self {
            cell: OnceLock::new(),
            loader: Box::new(loader),
        }
    }

    /// Run the loader on first access and hand out the cached view after.
    pub fn get(&self) -> &V {
        self.cell.get_or_init(|| (self.loader)())
    }

    pub fn is_loaded(&self) -> bool {
        self.cell.get().is_some()
    }
}

impl<V: fmt::Debug> fmt::Debug for LazyComponent<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazyComponent")
            .field("view", &self.cell.get())
            .finish_non_exhaustive()
    }
}

#[derive(Debug)]
pub enum Component<V> {
    Eager(V),
    Lazy(LazyComponent<V>),
}

/// One entry of the route table: a path, a name and the view it shows.
#[derive(Debug)]
pub struct Route<V> {
    path: String,
    name: String,
    component: Component<V>,
}

impl<V> Route<V> {
    pub fn eager(path: impl Into<String>, name: impl Into<String>, view: V) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            component: Component::Eager(view),
        }
    }

    pub fn lazy(
        path: impl Into<String>,
        name: impl Into<String>,
        loader: impl Fn() -> V + Send + Sync + 'static,
    ) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            component: Component::Lazy(LazyComponent::new(loader)),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn component(&self) -> &Component<V> {
        &self.component
    }

    /// The route's view, loading it first if it is lazy.
    pub fn view(&self) -> &V {
        match &self.component {
            Component::Eager(view) => view,
            Component::Lazy(lazy) => {
                if !lazy.is_loaded() {
                    tracing::debug!(route = %self.name, "loading lazy view");
                }
                lazy.get()
            }
        }
    }

    pub fn is_loaded(&self) -> bool {
        match &self.component {
            Component::Eager(_) => true,
            Component::Lazy(lazy) => lazy.is_loaded(),
        }
    }

    pub(crate) fn set_path(&mut self, path: String) {
        self.path = path;
    }
}
