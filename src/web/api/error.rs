use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::ephemeris::EphemerisError;
use crate::geocode::GeocodeError;
use crate::trajectory::TrajectoryError;

pub const UNAVAILABLE_MSG: &str = "ISS data is unavailable right now. Try again later.";
pub const INVALID_QUERY_MSG: &str =
    "Invalid limit or offset parameter; must be a positive integer.";
pub const EPOCH_NOT_FOUND_MSG: &str = "Epoch not found.";

// Unified API error type. Errors leave the facade as plain text with a
// descriptive message; the taxonomy stays visible in the status code.
pub enum ApiError {
    Upstream(EphemerisError),
    EmptyTrajectory,
    MalformedEpoch(String),
    EpochNotFound,
    InvalidQuery,
    Geocode(GeocodeError),
}

impl From<EphemerisError> for ApiError {
    fn from(e: EphemerisError) -> Self {
        ApiError::Upstream(e)
    }
}

impl From<TrajectoryError> for ApiError {
    fn from(e: TrajectoryError) -> Self {
        match e {
            TrajectoryError::Format(raw) => ApiError::MalformedEpoch(raw),
            TrajectoryError::EmptyTrajectory => ApiError::EmptyTrajectory,
        }
    }
}

impl From<GeocodeError> for ApiError {
    fn from(e: GeocodeError) -> Self {
        ApiError::Geocode(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Upstream(e) => {
                log::warn!("upstream fetch failed: {e}");
                (StatusCode::BAD_GATEWAY, UNAVAILABLE_MSG).into_response()
            }
            ApiError::EmptyTrajectory => {
                log::warn!("upstream feed delivered an empty trajectory");
                (StatusCode::BAD_GATEWAY, UNAVAILABLE_MSG).into_response()
            }
            ApiError::MalformedEpoch(raw) => {
                log::warn!("upstream feed contains malformed epoch {raw:?}");
                (
                    StatusCode::BAD_GATEWAY,
                    format!("Upstream data contains a malformed epoch: {raw}"),
                )
                    .into_response()
            }
            ApiError::EpochNotFound => {
                (StatusCode::NOT_FOUND, EPOCH_NOT_FOUND_MSG).into_response()
            }
            ApiError::InvalidQuery => {
                (StatusCode::BAD_REQUEST, INVALID_QUERY_MSG).into_response()
            }
            ApiError::Geocode(e) => {
                log::warn!("reverse geocoding failed: {e}");
                (
                    StatusCode::BAD_GATEWAY,
                    format!("Geocoding provider error: {e}"),
                )
                    .into_response()
            }
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
