/// Synchronous client for the **REST Countries API (v3.1)**.
///
/// This module wraps the list endpoints (`/all`, `/name/{name}`,
/// `/region/{region}`) with the restricted field projection the browsing UI
/// needs, plus a wider projection for the single-country detail lookup.
///
/// ### Notes
/// - Each call issues exactly one request: no retries, no caching. Failures
///   are surfaced verbatim to the caller as [`ApiError`].
/// - Responses are plain JSON arrays of country objects; decoding happens
///   against the permissive raw shapes in [`crate::models`].
///
/// Typical usage:
/// ```no_run
/// # use restcountries_rs::Client;
/// let client = Client::default();
/// let raw = client.by_region("europe")?;
/// # Ok::<(), restcountries_rs::ApiError>(())
/// ```
use crate::models::{RawCountry, RawCountryDetails};
use log::debug;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};
use reqwest::StatusCode;
use reqwest::blocking::Client as HttpClient;
use reqwest::redirect::Policy;
use serde::de::DeserializeOwned;
use std::time::Duration;
use thiserror::Error;

/// Field projection for list queries. Keeps payloads small; nothing outside
/// this set is ever requested for browsing.
pub const LIST_FIELDS: &str = "name,population,region,capital,flags";

/// Wider projection for the single-country detail lookup.
pub const DETAIL_FIELDS: &str =
    "name,population,region,subregion,capital,tld,currencies,languages,borders,flags";

/// Errors surfaced by the remote country source.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never completed (DNS, connect, TLS, timeout).
    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),
    /// The server answered with a non-success status.
    #[error("request failed with HTTP {status}")]
    Status { status: StatusCode },
    /// The body was not the expected JSON shape.
    #[error("failed to decode response body: {0}")]
    Decode(#[source] reqwest::Error),
}

#[derive(Debug, Clone)]
pub struct Client {
    pub base_url: String,
    http: HttpClient,
}

impl Default for Client {
    fn default() -> Self {
        Self::with_base_url("https://restcountries.com/v3.1")
    }
}

// Allow -, _, . unescaped in path segments (common in search terms)
const SAFE: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.');

fn enc(part: &str) -> String {
    percent_encoding::utf8_percent_encode(part.trim(), SAFE).to_string()
}

impl Client {
    /// Build a client against an alternate API root. Tests point this at a
    /// local address; everything else wants [`Client::default`].
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(30)) // total request timeout
            .connect_timeout(Duration::from_secs(10)) // connect timeout
            .redirect(Policy::limited(5)) // cap redirects
            .user_agent(concat!("restcountries_rs/", env!("CARGO_PKG_VERSION"))) // set user agent
            .build()
            .expect("reqwest client build");
        Self {
            base_url: base_url.into(),
            http,
        }
    }

    /// Fetch the full country list with the restricted field projection.
    pub fn all(&self) -> Result<Vec<RawCountry>, ApiError> {
        let url = format!("{}/all?fields={}", self.base_url, LIST_FIELDS);
        self.get_json(&url)
    }

    /// Fetch countries whose name matches `name` (the API matches partially,
    /// so "mar" also returns San Marino and the Marshall Islands).
    pub fn by_name(&self, name: &str) -> Result<Vec<RawCountry>, ApiError> {
        let url = format!("{}/name/{}?fields={}", self.base_url, enc(name), LIST_FIELDS);
        self.get_json(&url)
    }

    /// Fetch every country in `region` (e.g. "europe", "oceania").
    pub fn by_region(&self, region: &str) -> Result<Vec<RawCountry>, ApiError> {
        let url = format!(
            "{}/region/{}?fields={}",
            self.base_url,
            enc(region),
            LIST_FIELDS
        );
        self.get_json(&url)
    }

    /// Name lookup with the wider detail projection. Backs the store's
    /// slug-based detail resolution.
    pub fn find_by_name(&self, name: &str) -> Result<Vec<RawCountryDetails>, ApiError> {
        let url = format!(
            "{}/name/{}?fields={}",
            self.base_url,
            enc(name),
            DETAIL_FIELDS
        );
        self.get_json(&url)
    }

    fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        debug!("GET {url}");
        let resp = self.http.get(url).send().map_err(ApiError::Transport)?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ApiError::Status { status });
        }
        resp.json::<T>().map_err(ApiError::Decode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_terms_are_percent_encoded() {
        assert_eq!(enc("san marino"), "san%20marino");
        assert_eq!(enc(" france "), "france");
        assert_eq!(enc("cte-divoire"), "cte-divoire");
    }
}
