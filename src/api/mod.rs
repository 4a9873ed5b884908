// src/api/mod.rs
use actix_web::{middleware::Logger, web, App, HttpServer};
use actix_cors::Cors;
use crate::core::config::Config;
use crate::generators::password::SIMILAR_CHARACTERS;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use utoipa_redoc::{Redoc, Servable};

// This will hold our API documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::handlers::generator::generate_password
    ),
    tags(
        (name = "Generator", description = "Password generation endpoints")
    ),
    info(
        title = "passgen API",
        version = "0.1.0",
        description = "Random password generator without look-alike characters",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

pub async fn start_server(config: Config) -> std::io::Result<()> {
    let address = config.web_address.clone();
    let port = config.web_port;
    let docs_enabled = config.api_docs_enabled;

    log::info!("Starting passgen API server on {}:{}", address, port);
    log::debug!("Excluded characters: {:?}", SIMILAR_CHARACTERS.chars());
    if docs_enabled {
        log::info!("API documentation served at /swagger-ui/ and /redoc");
    }

    let config_data = web::Data::new(config);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET"])
            .max_age(3600);

        App::new()
            .wrap(cors)
            .wrap(Logger::default())
            .app_data(config_data.clone())
            .configure(|cfg| {
                if docs_enabled {
                    configure_docs(cfg);
                }
            })
            .configure(routes::configure_routes)
    })
    .bind((address.as_str(), port))?
    .run()
    .await
}

fn configure_docs(cfg: &mut web::ServiceConfig) {
    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}")
            .url("/api-docs/openapi.json", ApiDoc::openapi())
    )
    .service(Redoc::with_url("/redoc", ApiDoc::openapi()));
}

pub mod types;
pub mod routes;
pub mod handlers;
