pub mod error;
pub mod route;
pub mod table;

pub use error::RouteError;
pub use route::{Component, LazyComponent, Route};
pub use table::RouteTable;
