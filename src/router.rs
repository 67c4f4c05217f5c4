//! Radix-tree request router.
//!
//! One tree for the whole service. Every route accepts every method and the
//! handler decides what each method means. O(path-length) lookup.

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use matchit::Router as MatchitRouter;

use crate::request::Request;
use crate::response::Response;

pub(crate) type BoxFuture = Pin<Box<dyn Future<Output = Response> + Send>>;

/// A route handler with its future type erased, shared across connections.
pub(crate) type BoxedHandler = Arc<dyn Fn(Request) -> BoxFuture + Send + Sync>;

/// The application router.
///
/// Build it once at startup and pass it to [`Server::serve`](crate::Server::serve).
/// Each registration returns `self` so calls chain naturally.
pub struct Router {
    routes: MatchitRouter<BoxedHandler>,
}

impl Router {
    pub fn new() -> Self {
        Self { routes: MatchitRouter::new() }
    }

    /// Register a handler for `path`. Path parameters use `{name}` syntax,
    /// catch-alls `{*name}`:
    ///
    /// ```rust
    /// # use projects_api::{Request, Response, Router, Status};
    /// # async fn list(_: Request) -> Response { Response::status(Status::Ok) }
    /// # async fn fetch(_: Request) -> Response { Response::status(Status::Ok) }
    /// Router::new()
    ///     .any("/projects",         list)
    ///     .any("/projects/{*id}",   fetch);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `path` is not a valid route or conflicts with one already
    /// registered. Routes are static; this is a programming error.
    pub fn any<F, Fut>(mut self, path: &str, handler: F) -> Self
    where
        F: Fn(Request) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Response> + Send + 'static,
    {
        let boxed: BoxedHandler = Arc::new(move |req: Request| Box::pin(handler(req)) as BoxFuture);
        self.routes
            .insert(path, boxed)
            .unwrap_or_else(|e| panic!("invalid route `{path}`: {e}"));
        self
    }

    pub(crate) fn lookup(&self, path: &str) -> Option<(BoxedHandler, HashMap<String, String>)> {
        let matched = self.routes.at(path).ok()?;
        let handler = Arc::clone(matched.value);
        let params = matched.params.iter()
            .map(|(k, v)| (k.to_owned(), v.to_owned()))
            .collect();
        Some((handler, params))
    }
}

impl Default for Router {
    fn default() -> Self { Self::new() }
}
