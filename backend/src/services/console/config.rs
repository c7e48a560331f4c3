use actix_web::{web, HttpResponse, Responder};
use log::debug;

use common::ConsoleConfig;

/// Returns the console configuration registered as app data.
pub async fn process(config: web::Data<ConsoleConfig>) -> impl Responder {
    debug!("Serving console config (api_url = {})", config.api_url);
    HttpResponse::Ok().json(config.get_ref())
}
