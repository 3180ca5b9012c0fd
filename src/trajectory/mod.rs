mod epoch;
mod error;
mod fix;

pub use epoch::parse_epoch;
pub use error::TrajectoryError;
pub use fix::{closest_to, ground_track, speed, wrap_longitude, GroundTrack, MEAN_EARTH_RADIUS_KM};
