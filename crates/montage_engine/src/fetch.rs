use std::time::Duration;

use thiserror::Error;

/// Timeouts applied to every network call the pipeline makes. One policy
/// for catalog, series, and cover requests alike.
#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(10),
        }
    }
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid url: {0}")]
    InvalidUrl(String),
    #[error("http status {0}")]
    HttpStatus(u16),
    #[error("timeout")]
    Timeout,
    #[error("network error: {0}")]
    Network(String),
}

pub fn build_client(settings: &FetchSettings) -> Result<reqwest::Client, FetchError> {
    reqwest::Client::builder()
        .connect_timeout(settings.connect_timeout)
        .timeout(settings.request_timeout)
        .build()
        .map_err(|err| FetchError::Network(err.to_string()))
}

/// GET `url` (with optional query parameters) and return the body bytes.
/// Non-2xx statuses are errors.
pub async fn fetch_bytes(
    client: &reqwest::Client,
    url: &str,
    query: &[(&str, &str)],
) -> Result<Vec<u8>, FetchError> {
    let parsed =
        reqwest::Url::parse(url).map_err(|err| FetchError::InvalidUrl(err.to_string()))?;
    let mut request = client.get(parsed);
    if !query.is_empty() {
        request = request.query(query);
    }
    let response = request.send().await.map_err(map_reqwest_error)?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::HttpStatus(status.as_u16()));
    }

    let bytes = response.bytes().await.map_err(map_reqwest_error)?;
    Ok(bytes.to_vec())
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::Timeout;
    }
    FetchError::Network(err.to_string())
}
