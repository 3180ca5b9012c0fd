use std::time::Duration;

use super::error::EphemerisError;
use super::oem::OemDocument;

const USER_AGENT: &str = concat!("iss-tracker/", env!("CARGO_PKG_VERSION"));

/// Fetches the OEM trajectory feed. Stateless: every call re-fetches,
/// nothing is cached between requests.
pub struct EphemerisClient {
    http: reqwest::Client,
    url: String,
}

impl EphemerisClient {
    pub fn new(url: String, timeout: Duration) -> Result<Self, EphemerisError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { http, url })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Perform one GET against the feed and parse the body.
    pub async fn fetch(&self) -> Result<OemDocument, EphemerisError> {
        log::debug!("fetching ephemeris from {}", self.url);

        let response = self.http.get(&self.url).send().await?;
        if !response.status().is_success() {
            return Err(EphemerisError::Status(response.status().as_u16()));
        }

        let body = response.text().await?;
        let document: OemDocument = quick_xml::de::from_str(&body)?;
        log::debug!(
            "parsed OEM document with {} state vectors",
            document.state_vectors().len()
        );
        Ok(document)
    }
}
