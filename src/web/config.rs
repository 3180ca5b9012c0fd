use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub web: WebConfig,
    pub upstream: UpstreamConfig,
    pub geocode: GeocodeConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WebConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamConfig {
    /// Endpoint serving the OEM trajectory XML.
    #[serde(default = "default_upstream_url")]
    pub url: String,
    #[serde(default = "default_timeout_s")]
    pub timeout_s: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeocodeConfig {
    #[serde(default = "default_geocode_url")]
    pub url: String,
    /// Nominatim zoom level; 15 resolves to neighborhood granularity.
    #[serde(default = "default_zoom")]
    pub zoom: u8,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default = "default_timeout_s")]
    pub timeout_s: u64,
}

fn default_bind() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_upstream_url() -> String {
    "https://nasa-public-data.s3.amazonaws.com/iss-coords/current/ISS_OEM/ISS.OEM_J2K_EPH.xml"
        .to_string()
}

fn default_geocode_url() -> String {
    "https://nominatim.openstreetmap.org".to_string()
}

fn default_zoom() -> u8 {
    15
}

fn default_language() -> String {
    "en".to_string()
}

fn default_timeout_s() -> u64 {
    10
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            url: default_upstream_url(),
            timeout_s: default_timeout_s(),
        }
    }
}

impl Default for GeocodeConfig {
    fn default() -> Self {
        Self {
            url: default_geocode_url(),
            zoom: default_zoom(),
            language: default_language(),
            timeout_s: default_timeout_s(),
        }
    }
}

impl Config {
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config: Config = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config.web.bind, "0.0.0.0:8080");
        assert_eq!(config.geocode.zoom, 15);
        assert_eq!(config.geocode.language, "en");
        assert!(config.upstream.url.contains("ISS_OEM"));
    }

    #[test]
    fn sections_override_independently() {
        let config: Config = serde_yaml::from_str(
            "upstream:\n  url: http://localhost:9999/feed.xml\nweb:\n  bind: 127.0.0.1:3000\n",
        )
        .unwrap();
        assert_eq!(config.upstream.url, "http://localhost:9999/feed.xml");
        assert_eq!(config.web.bind, "127.0.0.1:3000");
        // Untouched sections keep their defaults.
        assert_eq!(config.upstream.timeout_s, 10);
        assert_eq!(config.geocode.zoom, 15);
    }
}
