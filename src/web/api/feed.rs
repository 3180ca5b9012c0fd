use axum::{extract::State, Json};

use crate::ephemeris::{OemHeader, OemMetadata};
use crate::web::api::error::ApiResult;
use crate::web::server::AppState;

#[utoipa::path(
    get,
    path = "/comment",
    responses(
        (status = 200, description = "Comment block from the upstream feed", body = Vec<String>),
        (status = 502, description = "Upstream feed unavailable", body = String)
    ),
    tag = "feed"
)]
pub async fn comment(State(state): State<AppState>) -> ApiResult<Json<Vec<String>>> {
    let document = state.ephemeris.fetch().await?;
    Ok(Json(document.comments().to_vec()))
}

#[utoipa::path(
    get,
    path = "/header",
    responses(
        (status = 200, description = "Upstream feed header block", body = OemHeader),
        (status = 502, description = "Upstream feed unavailable", body = String)
    ),
    tag = "feed"
)]
pub async fn header(State(state): State<AppState>) -> ApiResult<Json<OemHeader>> {
    let document = state.ephemeris.fetch().await?;
    Ok(Json(document.header().clone()))
}

#[utoipa::path(
    get,
    path = "/metadata",
    responses(
        (status = 200, description = "Upstream feed metadata block", body = OemMetadata),
        (status = 502, description = "Upstream feed unavailable", body = String)
    ),
    tag = "feed"
)]
pub async fn metadata(State(state): State<AppState>) -> ApiResult<Json<OemMetadata>> {
    let document = state.ephemeris.fetch().await?;
    Ok(Json(document.metadata().clone()))
}
