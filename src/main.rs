//! Run with:
//!   ADMIN_PASSWORD=secret RUST_LOG=info cargo run
//!
//! Try:
//!   curl http://localhost:8080/opensource/projects
//!   curl -X POST http://localhost:8080/opensource/projects \
//!        -H 'content-type: application/json' \
//!        -d '{"name":"X","open_issues":[],"open_prs":[]}'
//!   curl http://localhost:8080/opensource/projects/4
//!   curl -u admin:secret http://localhost:8080/admin

use std::process::ExitCode;
use std::sync::Arc;

use chrono::Utc;
use projects_api::{AdminPortal, Config, ProjectHandlers, ProjectStore, Server, app, logging};
use tracing::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    logging::init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("startup aborted: {e}");
            return ExitCode::FAILURE;
        }
    };
    info!(addr = %config.addr, "configuration loaded");

    let store = Arc::new(ProjectStore::seeded(Utc::now()));
    let router = app::router(
        ProjectHandlers::new(store),
        AdminPortal::new(config.admin_password),
    );

    if let Err(e) = Server::bind(config.addr).serve(router).await {
        error!("server error: {e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
