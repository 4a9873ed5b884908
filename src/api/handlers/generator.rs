// src/api/handlers/generator.rs

use actix_web::{http::header::ContentType, web, HttpResponse, Responder};
use crate::api::types::GenerateQuery;
use crate::core::config::Config;
use crate::generators::password::validate_length;
use crate::generators::PasswordGenerator;
use crate::models::GenerationOptions;
use log::{debug, error, warn};

/// Generate a password
///
/// Generates a random password of the requested length. Characters that are
/// easy to confuse (`< > i l o I 0 1`) never appear in the result. The
/// response body is the bare password as plain text.
#[utoipa::path(
    get,
    path = "/generate",
    tag = "Generator",
    params(GenerateQuery),
    responses(
        (status = 200, description = "Generated password", body = String, content_type = "text/plain"),
        (status = 400, description = "Invalid length", body = String, content_type = "text/plain"),
        (status = 500, description = "Random selection failed", body = String, content_type = "text/plain")
    )
)]
pub async fn generate_password(
    config: web::Data<Config>,
    query: web::Query<GenerateQuery>,
) -> impl Responder {
    let requested = query
        .length
        .unwrap_or_else(|| i64::try_from(config.default_password_length).unwrap_or(i64::MAX));

    let length = match validate_length(requested, config.max_password_length) {
        Ok(length) => length,
        Err(e) => {
            warn!("Rejected generation request: {}", e);
            return HttpResponse::BadRequest()
                .content_type(ContentType::plaintext())
                .body(e.to_string());
        }
    };

    let options = GenerationOptions::new(length, query.has_symbol.unwrap_or(false));

    // One RNG per request
    let mut generator = PasswordGenerator::from_entropy();

    match generator.generate_password(&options) {
        Ok(password) => {
            debug!(
                "Generated password (length={}, hasSymbol={})",
                options.length, options.has_symbol
            );
            HttpResponse::Ok()
                .content_type(ContentType::plaintext())
                .body(password)
        }
        Err(e) => {
            error!("Failed to generate password: {:?}", e);
            HttpResponse::InternalServerError()
                .content_type(ContentType::plaintext())
                .body(e.to_string())
        }
    }
}
