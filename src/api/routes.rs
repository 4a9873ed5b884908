// src/api/routes.rs
use actix_web::{error, http::header::ContentType, web, HttpResponse};
use super::handlers;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    // Unparsable query parameters come back as plain text like every other response
    cfg.app_data(web::QueryConfig::default().error_handler(|err, _req| {
        log::warn!("Malformed query string: {}", err);
        let response = HttpResponse::BadRequest()
            .content_type(ContentType::plaintext())
            .body(err.to_string());
        error::InternalError::from_response(err, response).into()
    }));

    // Password generator
    cfg.service(
        web::resource("/generate")
            .route(web::get().to(handlers::generator::generate_password))
    );
}
