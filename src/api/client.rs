use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;
use url::Url;

use super::types::{Course, ErrorBody, FileRequest, StatusResponse, Topic};
use crate::core::config::{self, ClientConfig};
use crate::core::error::AppResult;

/// Failures of a single backend call
#[derive(Error, Debug)]
pub enum ApiError {
    /// Request never got a response (connection refused, timeout, DNS)
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    /// Backend answered with a non-2xx status
    #[error("HTTP {status}: {}", .detail.as_deref().unwrap_or("no detail"))]
    Status {
        status: StatusCode,
        detail: Option<String>,
    },

    /// Response body could not be decoded
    #[error("failed to decode response: {0}")]
    Decode(String),

    /// Endpoint URL could not be built from the base URL
    #[error("invalid endpoint URL: {0}")]
    Url(#[from] url::ParseError),
}

impl ApiError {
    /// Text shown to the user for an HTTP failure: the backend `detail`
    /// when present, otherwise the status reason.
    pub fn user_detail(&self) -> Option<String> {
        match self {
            ApiError::Status { status, detail } => Some(detail.clone().unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .map(str::to_string)
                    .unwrap_or_else(|| status.as_str().to_string())
            })),
            _ => None,
        }
    }
}

/// Backend capability used by the view controller
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// `GET /courses`
    async fn courses(&self) -> Result<Vec<Course>, ApiError>;

    /// `GET /topics/{course_id}`
    async fn topics(&self, course_id: i64) -> Result<Vec<Topic>, ApiError>;

    /// `POST /request_file`. `init_data` is the raw signed Telegram init
    /// data when the host has one.
    async fn request_file(&self, req: &FileRequest, init_data: Option<&str>) -> Result<StatusResponse, ApiError>;
}

/// `reqwest` implementation of [`CatalogApi`]
#[derive(Debug, Clone)]
pub struct HttpCatalogApi {
    client: Client,
    base: Url,
}

impl HttpCatalogApi {
    /// Creates a client for `config.api_url` with the configured timeout.
    pub fn new(config: &ClientConfig) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(config.http_timeout)
            .build()
            .map_err(ApiError::Network)?;
        Self::with_client(client, &config.api_url)
    }

    /// Uses an existing `reqwest::Client`.
    pub fn with_client(client: Client, api_url: &str) -> AppResult<Self> {
        // Url::join drops the last segment unless the base ends with '/'
        let mut base = Url::parse(api_url)?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Ok(Self { client, base })
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        Ok(self.base.join(path)?)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.endpoint(path)?;
        log::debug!("GET {}", url);
        let response = self.client.get(url).send().await.map_err(ApiError::Network)?;
        decode(response).await
    }
}

/// Maps a response to `T` or to [`ApiError::Status`] carrying the backend detail.
async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    let status = response.status();
    let bytes = response.bytes().await.map_err(ApiError::Network)?;

    if !status.is_success() {
        let detail = serde_json::from_slice::<ErrorBody>(&bytes)
            .ok()
            .map(|body| body.detail_text());
        return Err(ApiError::Status { status, detail });
    }

    serde_json::from_slice(&bytes).map_err(|e| ApiError::Decode(e.to_string()))
}

#[async_trait]
impl CatalogApi for HttpCatalogApi {
    async fn courses(&self) -> Result<Vec<Course>, ApiError> {
        self.get_json("courses").await
    }

    async fn topics(&self, course_id: i64) -> Result<Vec<Topic>, ApiError> {
        self.get_json(&format!("topics/{}", course_id)).await
    }

    async fn request_file(&self, req: &FileRequest, init_data: Option<&str>) -> Result<StatusResponse, ApiError> {
        let url = self.endpoint("request_file")?;
        log::debug!("POST {} (file_id: {})", url, req.file_id);

        let mut builder = self.client.post(url).json(req);
        if let Some(init_data) = init_data {
            builder = builder.header(config::http::INIT_DATA_HEADER, init_data);
        }

        let response = builder.send().await.map_err(ApiError::Network)?;
        let status = response.status();
        match decode::<StatusResponse>(response).await {
            // Any 2xx counts as delivered, whatever the body looks like
            Err(ApiError::Decode(e)) if status.is_success() => {
                log::debug!("request_file: ignoring undecodable success body: {}", e);
                Ok(StatusResponse::default())
            }
            other => other,
        }
    }
}
