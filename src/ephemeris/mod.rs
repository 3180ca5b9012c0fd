mod client;
mod error;
mod oem;

pub use client::EphemerisClient;
pub use error::EphemerisError;
pub use oem::{OemDocument, OemHeader, OemMetadata, StateVector, VectorComponent};
