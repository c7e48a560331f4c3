//! Routes consumed by the browser app itself.
//!
//! - `GET /console/config`: the `ConsoleConfig` (external API base URL) the app
//!   uses for every `/person` and `/etl` request.

use actix_web::web::{get, scope};
use actix_web::Scope;

mod config;

const API_PATH: &str = "/console";

/// Configures and returns the Actix scope for console routes.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        // Route to fetch the runtime console configuration.
        .route("/config", get().to(config::process))
}
