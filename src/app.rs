//! The service's route table.

use std::sync::Arc;

use crate::admin::AdminPortal;
use crate::projects::ProjectHandlers;
use crate::request::Request;
use crate::router::Router;

pub const COLLECTION_PATH: &str = "/opensource/projects";
pub const ITEM_PATH: &str = "/opensource/projects/{*id}";
pub const ADMIN_PATH: &str = "/admin";

/// Wires the project and admin handlers to their paths. All three accept any
/// method; the handlers decide what each method means.
pub fn router(projects: ProjectHandlers, admin: AdminPortal) -> Router {
    let projects = Arc::new(projects);
    let admin = Arc::new(admin);

    let collection = {
        let projects = Arc::clone(&projects);
        move |req: Request| {
            let projects = Arc::clone(&projects);
            async move { projects.collection(req).await }
        }
    };

    let item = move |req: Request| {
        let projects = Arc::clone(&projects);
        async move { projects.fetch(&req) }
    };

    let admin = move |req: Request| {
        let admin = Arc::clone(&admin);
        async move { admin.handle(&req) }
    };

    Router::new()
        .any(COLLECTION_PATH, collection)
        .any(ITEM_PATH, item)
        .any(ADMIN_PATH, admin)
}
