use thiserror::Error;

#[derive(Debug, Error)]
pub enum EphemerisError {
    #[error("upstream request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("upstream returned HTTP {0}")]
    Status(u16),
    #[error("malformed OEM document: {0}")]
    Xml(#[from] quick_xml::DeError),
}
