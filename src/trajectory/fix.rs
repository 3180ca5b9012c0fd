use chrono::{DateTime, Timelike, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use super::epoch::parse_epoch;
use super::error::TrajectoryError;
use crate::ephemeris::StateVector;

/// IUGG mean Earth radius.
pub const MEAN_EARTH_RADIUS_KM: f64 = 6371.0088;

const ROTATION_DEG_PER_HOUR: f64 = 15.0;
const FRAME_LON_OFFSET_DEG: f64 = 19.0;

/// Sub-satellite point derived from one state vector.
///
/// Spherical-Earth approximation in the inertial frame at the epoch's
/// time of day. Good enough for display, not for geodesy.
#[derive(Debug, Clone, Copy, Serialize, ToSchema)]
pub struct GroundTrack {
    pub latitude_deg: f64,
    pub longitude_deg: f64,
    pub altitude_km: f64,
}

/// Instantaneous speed as the Euclidean norm of the velocity vector.
pub fn speed(vx: f64, vy: f64, vz: f64) -> f64 {
    (vx * vx + vy * vy + vz * vz).sqrt()
}

/// Finds the state vector whose epoch is nearest to `now`.
///
/// Linear scan; on equal distance the earlier entry wins. An empty
/// trajectory is an error, as is any unparseable epoch in the scan.
pub fn closest_to<'a>(
    vectors: &'a [StateVector],
    now: DateTime<Utc>,
) -> Result<&'a StateVector, TrajectoryError> {
    let mut best: Option<(&StateVector, i64)> = None;

    for vector in vectors {
        let at = parse_epoch(&vector.epoch)?;
        let offset_ms = (now - at).num_milliseconds().abs();
        match best {
            Some((_, best_ms)) if offset_ms >= best_ms => {}
            _ => best = Some((vector, offset_ms)),
        }
    }

    best.map(|(vector, _)| vector)
        .ok_or(TrajectoryError::EmptyTrajectory)
}

/// Converts a state vector to latitude, longitude and altitude.
pub fn ground_track(vector: &StateVector) -> Result<GroundTrack, TrajectoryError> {
    let at = parse_epoch(&vector.epoch)?;
    let [x, y, z] = vector.position_km();

    let latitude = z.atan2((x * x + y * y).sqrt()).to_degrees();
    let altitude = (x * x + y * y + z * z).sqrt() - MEAN_EARTH_RADIUS_KM;

    // Earth's rotation since local noon at the epoch, plus the empirical
    // offset between the orbital frame and the prime meridian.
    let spin_deg =
        (at.hour() as f64 - 12.0 + at.minute() as f64 / 60.0) * ROTATION_DEG_PER_HOUR;
    let longitude = wrap_longitude(y.atan2(x).to_degrees() - spin_deg + FRAME_LON_OFFSET_DEG);

    Ok(GroundTrack {
        latitude_deg: latitude,
        longitude_deg: longitude,
        altitude_km: altitude,
    })
}

/// Wraps a longitude in degrees into [-180, 180).
pub fn wrap_longitude(deg: f64) -> f64 {
    (deg + 180.0).rem_euclid(360.0) - 180.0
}
