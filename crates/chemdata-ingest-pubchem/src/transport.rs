use crate::config::PubChemConfig;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use serde_json::Value;
use std::time::Duration;
use url::Url;

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("http status {status} from {url}")]
    Status { url: String, status: u16 },

    #[error("invalid JSON from {url}: {message}")]
    Decode { url: String, message: String },

    #[error("failed to build http client: {0}")]
    Client(String),
}

/// Blocking JSON GET. The seam between the resolver and the network.
pub trait Transport {
    fn get_json(&self, url: &Url) -> Result<Value, FetchError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn get_json(&self, url: &Url) -> Result<Value, FetchError> {
        (**self).get_json(url)
    }
}

/// reqwest-backed transport with a fixed per-request timeout.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(config: &PubChemConfig) -> Result<Self, FetchError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&config.user_agent)
                .unwrap_or_else(|_| HeaderValue::from_static("chemdata")),
        );
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| FetchError::Client(e.to_string()))?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn get_json(&self, url: &Url) -> Result<Value, FetchError> {
        tracing::debug!(url = %url, "GET");
        let resp = self
            .client
            .get(url.clone())
            .send()
            .map_err(|source| FetchError::Request {
                url: url.to_string(),
                source,
            })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        resp.json::<Value>().map_err(|e| FetchError::Decode {
            url: url.to_string(),
            message: e.to_string(),
        })
    }
}
