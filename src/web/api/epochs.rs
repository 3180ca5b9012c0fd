use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::ephemeris::StateVector;
use crate::trajectory::{closest_to, ground_track, parse_epoch, speed};
use crate::web::api::error::{ApiError, ApiResult};
use crate::web::server::AppState;

#[derive(Debug, Deserialize)]
pub struct EpochsQuery {
    pub limit: Option<String>,
    pub offset: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct EpochSpeedResponse {
    pub epoch: String,
    pub speed_km_s: f64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct EpochLocationResponse {
    pub epoch: String,
    pub latitude_deg: f64,
    pub longitude_deg: f64,
    pub altitude_km: f64,
    pub geolocation: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct NowResponse {
    pub epoch: String,
    pub epoch_timestamp: DateTime<Utc>,
    pub now_timestamp: DateTime<Utc>,
    pub speed_km_s: f64,
    pub latitude_deg: f64,
    pub longitude_deg: f64,
    pub altitude_km: f64,
    pub geolocation: String,
}

#[utoipa::path(
    get,
    path = "/epochs",
    params(
        ("limit" = Option<String>, Query, description = "Maximum number of state vectors to return (non-negative integer)"),
        ("offset" = Option<String>, Query, description = "Number of state vectors to skip (non-negative integer)")
    ),
    responses(
        (status = 200, description = "Slice of the state vector sequence", body = Vec<StateVector>),
        (status = 400, description = "Invalid limit or offset", body = String),
        (status = 502, description = "Upstream feed unavailable", body = String)
    ),
    tag = "epochs"
)]
pub async fn list_epochs(
    State(state): State<AppState>,
    Query(query): Query<EpochsQuery>,
) -> ApiResult<Json<Vec<StateVector>>> {
    let offset = parse_index(query.offset.as_deref())?.unwrap_or(0);
    let limit = parse_index(query.limit.as_deref())?;

    let document = state.ephemeris.fetch().await?;
    let vectors = document.state_vectors();
    // Default limit is everything past the offset; an offset past the
    // end yields an empty slice, not an error.
    let limit = limit.unwrap_or_else(|| vectors.len().saturating_sub(offset));

    let page: Vec<StateVector> = vectors.iter().skip(offset).take(limit).cloned().collect();
    Ok(Json(page))
}

fn parse_index(raw: Option<&str>) -> Result<Option<usize>, ApiError> {
    raw.map(|value| value.parse::<usize>().map_err(|_| ApiError::InvalidQuery))
        .transpose()
}

#[utoipa::path(
    get,
    path = "/epochs/{epoch}",
    params(("epoch" = String, Path, description = "Exact EPOCH timestamp string")),
    responses(
        (status = 200, description = "State vector for the epoch", body = StateVector),
        (status = 404, description = "Epoch not found", body = String),
        (status = 502, description = "Upstream feed unavailable", body = String)
    ),
    tag = "epochs"
)]
pub async fn get_epoch(
    State(state): State<AppState>,
    Path(epoch): Path<String>,
) -> ApiResult<Json<StateVector>> {
    let document = state.ephemeris.fetch().await?;
    let vector = find_epoch(document.state_vectors(), &epoch)?;
    Ok(Json(vector.clone()))
}

#[utoipa::path(
    get,
    path = "/epochs/{epoch}/speed",
    params(("epoch" = String, Path, description = "Exact EPOCH timestamp string")),
    responses(
        (status = 200, description = "Instantaneous speed for the epoch", body = EpochSpeedResponse),
        (status = 404, description = "Epoch not found", body = String),
        (status = 502, description = "Upstream feed unavailable", body = String)
    ),
    tag = "epochs"
)]
pub async fn get_epoch_speed(
    State(state): State<AppState>,
    Path(epoch): Path<String>,
) -> ApiResult<Json<EpochSpeedResponse>> {
    let document = state.ephemeris.fetch().await?;
    let vector = find_epoch(document.state_vectors(), &epoch)?;
    let [vx, vy, vz] = vector.velocity_km_s();

    Ok(Json(EpochSpeedResponse {
        epoch: vector.epoch.clone(),
        speed_km_s: speed(vx, vy, vz),
    }))
}

#[utoipa::path(
    get,
    path = "/epochs/{epoch}/location",
    params(("epoch" = String, Path, description = "Exact EPOCH timestamp string")),
    responses(
        (status = 200, description = "Sub-satellite point for the epoch", body = EpochLocationResponse),
        (status = 404, description = "Epoch not found", body = String),
        (status = 502, description = "Upstream feed or geocoding provider unavailable", body = String)
    ),
    tag = "epochs"
)]
pub async fn get_epoch_location(
    State(state): State<AppState>,
    Path(epoch): Path<String>,
) -> ApiResult<Json<EpochLocationResponse>> {
    let document = state.ephemeris.fetch().await?;
    let vector = find_epoch(document.state_vectors(), &epoch)?;
    let track = ground_track(vector)?;
    let place = state
        .geocoder
        .reverse(track.latitude_deg, track.longitude_deg)
        .await?;

    Ok(Json(EpochLocationResponse {
        epoch: vector.epoch.clone(),
        latitude_deg: track.latitude_deg,
        longitude_deg: track.longitude_deg,
        altitude_km: track.altitude_km,
        geolocation: place.to_string(),
    }))
}

#[utoipa::path(
    get,
    path = "/now",
    responses(
        (status = 200, description = "State nearest to the current time", body = NowResponse),
        (status = 502, description = "Upstream feed or geocoding provider unavailable", body = String)
    ),
    tag = "epochs"
)]
pub async fn now(State(state): State<AppState>) -> ApiResult<Json<NowResponse>> {
    let document = state.ephemeris.fetch().await?;
    let now = Utc::now();

    let vector = closest_to(document.state_vectors(), now)?;
    let [vx, vy, vz] = vector.velocity_km_s();
    let track = ground_track(vector)?;
    let place = state
        .geocoder
        .reverse(track.latitude_deg, track.longitude_deg)
        .await?;

    Ok(Json(NowResponse {
        epoch: vector.epoch.clone(),
        epoch_timestamp: parse_epoch(&vector.epoch)?,
        now_timestamp: now,
        speed_km_s: speed(vx, vy, vz),
        latitude_deg: track.latitude_deg,
        longitude_deg: track.longitude_deg,
        altitude_km: track.altitude_km,
        geolocation: place.to_string(),
    }))
}

fn find_epoch<'a>(vectors: &'a [StateVector], epoch: &str) -> Result<&'a StateVector, ApiError> {
    vectors
        .iter()
        .find(|vector| vector.epoch == epoch)
        .ok_or(ApiError::EpochNotFound)
}
