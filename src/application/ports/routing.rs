// src/application/ports/routing.rs
use crate::application::error::ApplicationResult;

/// Resolves named routes to absolute URLs.
///
/// `params` are `(name, value)` pairs substituted into the route; static
/// routes receive an empty slice. Unknown route names are reported through
/// the returned error, never by panicking.
pub trait UrlGenerator: Send + Sync {
    /// # Errors
    ///
    /// Whatever the routing layer reports, typically
    /// [`ApplicationError::NotFound`](crate::application::error::ApplicationError::NotFound)
    /// for an unknown route or a missing parameter.
    fn route(&self, name: &str, params: &[(&str, &str)]) -> ApplicationResult<String>;
}
