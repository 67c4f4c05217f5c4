//! # projects-api
//!
//! Tracks open source projects in memory and serves them over HTTP, next to
//! a password-gated admin page.
//!
//! | Method | Path | |
//! |---|---|---|
//! | GET | `/opensource/projects` | every project, JSON array |
//! | POST | `/opensource/projects` | create from `{name, open_issues, open_prs}` |
//! | GET | `/opensource/projects/{id}` | one project, JSON object |
//! | any | `/admin` | static page behind HTTP Basic auth |
//!
//! Nothing is persisted. The store starts with three seed projects and lives
//! as long as the process.
//!
//! ## Layout
//!
//! - The HTTP layer ([`Router`], [`Server`], [`Request`], [`Response`]) is a
//!   thin shell over hyper and a `matchit` radix tree.
//! - [`ProjectStore`] is a `HashMap` behind a single mutex, shared by every
//!   connection task through an `Arc`.
//! - [`ProjectHandlers`] and [`AdminPortal`] turn requests into store calls
//!   and responses; [`app::router`] binds them to paths.
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use projects_api::{AdminPortal, ProjectHandlers, ProjectStore, Server, app};
//!
//! #[tokio::main]
//! async fn main() {
//!     let store = Arc::new(ProjectStore::seeded(chrono::Utc::now()));
//!     let router = app::router(ProjectHandlers::new(store), AdminPortal::new("secret"));
//!
//!     Server::bind("0.0.0.0:8080".parse().unwrap()).serve(router).await.unwrap();
//! }
//! ```

mod error;
mod method;
mod request;
mod response;
mod router;
mod server;
mod status;

pub mod admin;
pub mod app;
pub mod config;
pub mod logging;
pub mod project;
pub mod projects;
pub mod store;

pub use admin::AdminPortal;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use method::Method;
pub use project::{CreateProject, Project};
pub use projects::ProjectHandlers;
pub use request::Request;
pub use response::{ContentType, Response, ResponseBuilder};
pub use router::Router;
pub use server::Server;
pub use status::Status;
pub use store::ProjectStore;
