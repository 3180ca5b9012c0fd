use axum::{routing::get, Router};
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::ephemeris::EphemerisClient;
use crate::geocode::Geocoder;

use super::api::epochs as epoch_handlers;
use super::api::feed as feed_handlers;
use super::api_doc::ApiDoc;
use super::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub ephemeris: Arc<EphemerisClient>,
    pub geocoder: Arc<Geocoder>,
}

impl AppState {
    pub fn from_config(config: &Config) -> std::io::Result<Self> {
        let ephemeris = EphemerisClient::new(
            config.upstream.url.clone(),
            Duration::from_secs(config.upstream.timeout_s),
        )
        .map_err(std::io::Error::other)?;

        let geocoder = Geocoder::new(
            config.geocode.url.clone(),
            config.geocode.zoom,
            config.geocode.language.clone(),
            Duration::from_secs(config.geocode.timeout_s),
        )
        .map_err(std::io::Error::other)?;

        Ok(Self {
            ephemeris: Arc::new(ephemeris),
            geocoder: Arc::new(geocoder),
        })
    }
}

pub fn build_app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Feed passthrough endpoints
        .route("/comment", get(feed_handlers::comment))
        .route("/header", get(feed_handlers::header))
        .route("/metadata", get(feed_handlers::metadata))
        // Trajectory endpoints
        .route("/epochs", get(epoch_handlers::list_epochs))
        .route("/epochs/{epoch}", get(epoch_handlers::get_epoch))
        .route("/epochs/{epoch}/speed", get(epoch_handlers::get_epoch_speed))
        .route(
            "/epochs/{epoch}/location",
            get(epoch_handlers::get_epoch_location),
        )
        .route("/now", get(epoch_handlers::now))
        // OpenAPI / Swagger
        .merge(SwaggerUi::new("/swagger-ui").url("/api-doc/openapi.json", ApiDoc::openapi()))
        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run_server(config: Config) -> std::io::Result<()> {
    let state = AppState::from_config(&config)?;
    let app = build_app(state);

    log::info!("Starting server on {}", config.web.bind);
    log::info!("Proxying trajectory feed at {}", config.upstream.url);

    let listener = tokio::net::TcpListener::bind(&config.web.bind).await?;
    axum::serve(listener, app).await
}
