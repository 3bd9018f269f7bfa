//! Public IP lookup against a remote HTTP endpoint.
//!
//! One blocking GET, one JSON decode, two printed lines. No retries and no
//! timeout; the tool runs to completion or reports the first failure.

use serde::Deserialize;

/// The endpoint queried for the caller's public IP details.
pub const LOOKUP_ENDPOINT: &str = "https://api.myip.com";

/// Errors that can occur during an IP lookup.
#[derive(Debug)]
pub enum LookupError {
    /// The HTTP request failed or returned a non-success status.
    RequestFailed { url: String, source: reqwest::Error },
    /// The response body could not be decoded as the expected JSON object.
    DecodeFailed { source: reqwest::Error },
}

impl std::fmt::Display for LookupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RequestFailed { url, source } => {
                write!(f, "Failed to fetch {}: {}", url, source)
            }
            Self::DecodeFailed { source } => {
                write!(f, "Failed to decode lookup response: {}", source)
            }
        }
    }
}

impl std::error::Error for LookupError {}

/// Result type for IP lookup operations.
pub type LookupResult<T> = Result<T, LookupError>;

/// The caller's public IP address and country, as reported by the endpoint.
///
/// The endpoint serves lowercase field names; the aliases keep the decoder
/// tolerant of the capitalized spelling some mirrors use.
#[derive(Debug, Clone, Deserialize)]
pub struct IpInfo {
    #[serde(alias = "IP")]
    pub ip: String,
    #[serde(alias = "Country")]
    pub country: String,
}

impl std::fmt::Display for IpInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "IP: {}\nCountry: {}", self.ip, self.country)
    }
}

impl IpInfo {
    /// Prints the lookup report to standard output.
    pub fn show(&self) {
        println!("{}", self);
    }
}

/// Fetches the caller's IP details from the given URL.
///
/// # Errors
///
/// Returns `LookupError::RequestFailed` when the request cannot be sent or
/// the server answers with a non-success status, and
/// `LookupError::DecodeFailed` when the body is not the expected JSON.
pub fn fetch(url: &str) -> LookupResult<IpInfo> {
    let response = reqwest::blocking::get(url)
        .and_then(|r| r.error_for_status())
        .map_err(|e| LookupError::RequestFailed {
            url: url.to_string(),
            source: e,
        })?;

    response
        .json()
        .map_err(|e| LookupError::DecodeFailed { source: e })
}
