//! HTTP handlers for `/opensource/projects`.
//!
//! | Method | Path | Result |
//! |---|---|---|
//! | GET | `/opensource/projects` | 200, JSON array of every project |
//! | POST | `/opensource/projects` | 200, empty body; project stored |
//! | other | `/opensource/projects` | 405, `Method not allowed` |
//! | any | `/opensource/projects/{id}` | 200 JSON project, 404, or 400 on a deeper path |

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info};

use crate::method::Method;
use crate::project::{CreateProject, Project};
use crate::request::Request;
use crate::response::Response;
use crate::status::Status;
use crate::store::ProjectStore;

/// The only media type `create` accepts, compared byte-for-byte.
pub const JSON_MEDIA_TYPE: &str = "application/json";

/// Route parameter holding everything after `/opensource/projects/`.
pub(crate) const ID_PARAM: &str = "id";

/// Project endpoints over a shared [`ProjectStore`].
#[derive(Clone)]
pub struct ProjectHandlers {
    store: Arc<ProjectStore>,
}

impl ProjectHandlers {
    pub fn new(store: Arc<ProjectStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &ProjectStore {
        &self.store
    }

    /// Entry point for the collection path: GET lists, POST creates.
    pub async fn collection(&self, req: Request) -> Response {
        match req.method() {
            Some(Method::Get) => self.list(),
            Some(Method::Post) => self.create(req).await,
            _ => Response::builder()
                .status(Status::MethodNotAllowed)
                .text("Method not allowed"),
        }
    }

    /// Serializes a snapshot of the store. The lock is released before
    /// serialization starts.
    pub fn list(&self) -> Response {
        let projects = self.store.all();
        match serde_json::to_vec(&projects) {
            Ok(bytes) => Response::json(bytes),
            Err(e) => internal_error(e),
        }
    }

    /// Stores a new project built from a JSON body.
    ///
    /// Gates, in order: body read (500), content type (415), JSON decode (400).
    /// Success is a bare 200.
    ///
    /// The id is the store size plus one at the moment of the request. Two
    /// creates racing between the size read and the insert get the same id,
    /// and the later insert replaces the earlier project.
    pub async fn create(&self, mut req: Request) -> Response {
        let body = match req.body_bytes().await {
            Ok(body) => body,
            Err(e) => return internal_error(e),
        };

        let content_type = req.header_lossy("content-type").unwrap_or_default();
        if content_type != JSON_MEDIA_TYPE {
            return Response::builder()
                .status(Status::UnsupportedMediaType)
                .text(format!("need content-type {JSON_MEDIA_TYPE}, but got {content_type}"));
        }

        let payload = match CreateProject::from_json(&body) {
            Ok(payload) => payload,
            Err(e) => {
                debug!("rejected create payload: {e}");
                return Response::builder().status(Status::BadRequest).text(e.to_string());
            }
        };

        let id = (self.store.len() + 1).to_string();
        let project = Project::from_request(id, payload, Utc::now());
        info!(id = %project.id, name = %project.name, "project created");
        self.store.insert(project);

        Response::status(Status::Ok)
    }

    /// Looks up the project named by the single path segment after the
    /// collection path.
    pub fn fetch(&self, req: &Request) -> Response {
        let Some(id) = req.param(ID_PARAM).filter(|id| !id.contains('/')) else {
            return Response::status(Status::BadRequest);
        };

        let Some(project) = self.store.get(id) else {
            return Response::status(Status::NotFound);
        };

        match serde_json::to_vec(&project) {
            Ok(bytes) => Response::json(bytes),
            Err(e) => internal_error(e),
        }
    }
}

fn internal_error(e: impl std::fmt::Display) -> Response {
    Response::builder()
        .status(Status::InternalServerError)
        .text(e.to_string())
}
