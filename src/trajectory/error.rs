use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrajectoryError {
    #[error("malformed epoch timestamp {0:?}")]
    Format(String),
    #[error("trajectory contains no state vectors")]
    EmptyTrajectory,
}
