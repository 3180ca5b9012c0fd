use std::fmt;
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

const USER_AGENT: &str = concat!("iss-tracker/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Error)]
pub enum GeocodeError {
    #[error("geocoding request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("geocoding provider returned HTTP {0}")]
    Status(u16),
}

/// A reverse-geocoding result: either a provider display name, or the
/// open-water sentinel when the provider has no match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeoPlace {
    Named(String),
    OpenOcean,
}

impl fmt::Display for GeoPlace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeoPlace::Named(name) => f.write_str(name),
            GeoPlace::OpenOcean => f.write_str("Over the ocean"),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ReverseResponse {
    display_name: Option<String>,
    // Nominatim reports "unable to geocode" as an error field in a 200 body.
    error: Option<serde_json::Value>,
}

/// Nominatim-style reverse geocoding client.
pub struct Geocoder {
    http: reqwest::Client,
    url: String,
    zoom: u8,
    language: String,
}

impl Geocoder {
    pub fn new(
        url: String,
        zoom: u8,
        language: String,
        timeout: Duration,
    ) -> Result<Self, GeocodeError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self {
            http,
            url,
            zoom,
            language,
        })
    }

    /// Looks up the place under a (lat, lon) pair.
    ///
    /// A provider-side failure is an error; "no match" (open water,
    /// poles) is a successful `GeoPlace::OpenOcean`.
    pub async fn reverse(&self, latitude: f64, longitude: f64) -> Result<GeoPlace, GeocodeError> {
        let endpoint = format!("{}/reverse", self.url.trim_end_matches('/'));
        let response = self
            .http
            .get(&endpoint)
            .query(&[
                ("format", "jsonv2".to_string()),
                ("lat", latitude.to_string()),
                ("lon", longitude.to_string()),
                ("zoom", self.zoom.to_string()),
                ("accept-language", self.language.clone()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(GeocodeError::Status(response.status().as_u16()));
        }

        let body: ReverseResponse = response.json().await?;
        if body.error.is_some() {
            log::debug!("no geocoding match for ({latitude}, {longitude})");
            return Ok(GeoPlace::OpenOcean);
        }
        Ok(match body.display_name {
            Some(name) => GeoPlace::Named(name),
            None => GeoPlace::OpenOcean,
        })
    }
}
