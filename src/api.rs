// API client module: contains a small blocking HTTP client that talks to
// the PlantNet identification service. It is intentionally small and
// synchronous; the tool sends exactly one request per run.

use std::fs::File;
use std::path::{Path, PathBuf};

use reqwest::blocking::{multipart, Client};
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Value;

use crate::config::{Config, ORGAN, REQUEST_TIMEOUT};

/// Everything that can go wrong between "we have an image path" and "we
/// have a parsed JSON document". The caller decides which variants are
/// reported with a friendly message and which simply propagate.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("failed to open image {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("request to identification service failed")]
    Transport(#[from] reqwest::Error),
    #[error("identification service returned status {status}")]
    Status { status: StatusCode, body: ErrorBody },
    #[error("identification service returned a 200 response that is not JSON")]
    Body(#[source] serde_json::Error),
}

/// Body of a non-200 response. The service normally answers with a JSON
/// error document, but proxies and load balancers in front of it can
/// return plain text, so both branches are kept explicit.
#[derive(Debug)]
pub enum ErrorBody {
    Json(Value),
    Text(String),
}

impl ErrorBody {
    pub fn from_text(text: String) -> Self {
        match serde_json::from_str::<Value>(&text) {
            Ok(value) => ErrorBody::Json(value),
            Err(_) => ErrorBody::Text(text),
        }
    }

    /// Render for the diagnostic dump: pretty JSON when the body parsed,
    /// the raw text otherwise.
    pub fn render(&self) -> String {
        match self {
            ErrorBody::Json(value) => crate::report::pretty(value),
            ErrorBody::Text(text) => text.clone(),
        }
    }
}

/// Typed shape of a successful identification response. Only the fields
/// the tool reads are declared; the raw document is dumped separately.
#[derive(Debug, Deserialize)]
pub struct IdentifyResponse {
    /// Candidates ranked by the service, best match first. A missing
    /// field decodes as an empty list and is treated as "no match".
    #[serde(default)]
    pub results: Vec<PlantMatch>,
}

#[derive(Debug, Deserialize)]
pub struct PlantMatch {
    pub species: Species,
    /// Confidence in [0, 1].
    pub score: f64,
}

#[derive(Debug, Deserialize)]
pub struct Species {
    #[serde(rename = "scientificNameWithoutAuthor")]
    pub scientific_name_without_author: String,
}

impl IdentifyResponse {
    /// Decode the raw document into the typed shape. Kept separate from
    /// `identify` so the full JSON can be printed before a shape
    /// mismatch aborts the run.
    pub fn from_value(value: &Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value.clone())
    }
}

/// Blocking client for the identification endpoint. Holds the reqwest
/// client, the endpoint URL and the API key.
#[derive(Clone)]
pub struct PlantClient {
    client: Client,
    api_url: String,
    api_key: String,
}

impl PlantClient {
    /// Build a client for the given endpoint and key, with the fixed
    /// request timeout applied.
    pub fn new(api_url: &str, api_key: &str) -> Result<Self, ApiError> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(PlantClient {
            client,
            api_url: api_url.to_string(),
            api_key: api_key.to_string(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, ApiError> {
        Self::new(&config.api_url, &config.api_key)
    }

    /// Upload the image and return the raw JSON document of a 200
    /// response. The API key travels as a query parameter; the body is
    /// multipart with an `organs` field and the image under `images`.
    ///
    /// The file handle is owned by the multipart part and dropped once
    /// the request body has been sent, whatever the outcome.
    pub fn identify(&self, image_path: &Path) -> Result<Value, ApiError> {
        let file = File::open(image_path).map_err(|source| ApiError::Io {
            path: image_path.to_path_buf(),
            source,
        })?;
        let file_name = image_path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("image.jpg")
            .to_string();

        let part = multipart::Part::reader(file)
            .file_name(file_name)
            .mime_str("image/jpeg")?;
        let form = multipart::Form::new()
            .text("organs", ORGAN)
            .part("images", part);

        let response = self
            .client
            .post(&self.api_url)
            .query(&[("api-key", self.api_key.as_str())])
            .multipart(form)
            .send()?;

        let status = response.status();
        let text = response.text()?;
        if status != StatusCode::OK {
            return Err(ApiError::Status {
                status,
                body: ErrorBody::from_text(text),
            });
        }
        serde_json::from_str(&text).map_err(ApiError::Body)
    }
}
