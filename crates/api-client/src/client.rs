//! Main animation client implementation

use crate::config::ClientConfig;
use crate::error::{GenerationError, GenerationResult};
use crate::request::LivePortraitRequest;
use liveloop_image::NormalizedImage;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE, USER_AGENT};
use reqwest::Client;
use std::sync::Arc;
use tracing::{debug, instrument, warn};
use uuid::Uuid;

/// Request correlation ID header
const X_REQUEST_ID: &str = "X-Request-ID";

/// API key header for Segmind
const API_KEY_HEADER: &str = "x-api-key";

/// Fallback message when the service gives us nothing usable
const GENERIC_FAILURE: &str = "Failed to generate video";

/// Coarse progress phases of one generation request.
///
/// Advisory labels only: phases strictly advance and never branch, and
/// only the terminal success or failure changes actual state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum GenerationPhase {
    /// Packaging the portrait payload
    Preparing,
    /// Request submitted, waiting on the service
    Generating,
    /// Binary video received
    Complete,
}

impl GenerationPhase {
    /// User-facing label for this phase.
    pub fn label(&self) -> &'static str {
        match self {
            GenerationPhase::Preparing => "Preparing image...",
            GenerationPhase::Generating => "Generating video...",
            GenerationPhase::Complete => "Processing complete!",
        }
    }
}

/// Client for the LivePortrait animation service.
///
/// Stateless between calls; sequencing of requests (one per user
/// action) is the caller's responsibility.
#[derive(Clone)]
pub struct PortraitClient {
    inner: Client,
    config: Arc<ClientConfig>,
}

impl PortraitClient {
    /// Create a new client with configuration from the environment
    pub fn new() -> GenerationResult<Self> {
        Self::with_config(ClientConfig::from_env())
    }

    /// Create a new client with specific configuration
    pub fn with_config(config: ClientConfig) -> GenerationResult<Self> {
        config.validate()?;

        let mut default_headers = HeaderMap::new();
        default_headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        default_headers.insert(
            USER_AGENT,
            HeaderValue::from_static("liveloop-api-client/0.3"),
        );

        let inner = Client::builder()
            .timeout(config.timeout)
            .default_headers(default_headers)
            .build()
            .map_err(GenerationError::Request)?;

        Ok(Self {
            inner,
            config: Arc::new(config),
        })
    }

    /// Get the current configuration
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Animate a validated portrait, returning the raw MP4 bytes.
    ///
    /// Emits [`GenerationPhase`] notifications in order on `on_phase`.
    /// Exactly one outbound request, no retry; a missing credential
    /// fails before any network I/O.
    #[instrument(skip(self, portrait, on_phase), fields(request_id))]
    pub async fn generate(
        &self,
        portrait: &NormalizedImage,
        mut on_phase: impl FnMut(GenerationPhase),
    ) -> GenerationResult<Vec<u8>> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(GenerationError::MissingCredential)?;

        on_phase(GenerationPhase::Preparing);
        let body = LivePortraitRequest::new(portrait.raw_base64().to_string());

        let request_id = Uuid::new_v4().to_string();
        tracing::Span::current().record("request_id", request_id.as_str());

        on_phase(GenerationPhase::Generating);
        debug!(url = %self.config.api_url, "submitting generation request");

        let response = self
            .inner
            .post(&self.config.api_url)
            .header(API_KEY_HEADER, api_key)
            .header(X_REQUEST_ID, &request_id)
            .json(&body)
            .send()
            .await
            .map_err(|e| self.map_transport(e))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "generation request rejected");
            return Err(GenerationError::api_response(
                status.as_u16(),
                error_message(&text),
            ));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| self.map_transport(e))?;

        if bytes.is_empty() {
            return Err(GenerationError::MalformedResponse(
                "empty response body".into(),
            ));
        }
        if looks_like_json(&bytes) {
            return Err(GenerationError::MalformedResponse(
                "expected binary video, got JSON".into(),
            ));
        }

        debug!(bytes = bytes.len(), "received video payload");
        on_phase(GenerationPhase::Complete);

        // Return the payload untouched; its internal structure is the
        // service's business, not ours.
        Ok(bytes.to_vec())
    }

    fn map_transport(&self, e: reqwest::Error) -> GenerationError {
        if e.is_timeout() {
            GenerationError::Timeout(self.config.timeout)
        } else {
            GenerationError::Request(e)
        }
    }
}

/// Pick the most specific failure message available: server-supplied
/// `error` field, then raw body text, then a generic fallback.
fn error_message(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(msg) = value.get("error").and_then(|e| e.as_str()) {
            return msg.to_string();
        }
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        GENERIC_FAILURE.to_string()
    } else {
        trimmed.to_string()
    }
}

/// A success body that parses as a JSON value is not a video.
fn looks_like_json(bytes: &[u8]) -> bool {
    matches!(bytes.first(), Some(b'{') | Some(b'['))
        && serde_json::from_slice::<serde_json::Value>(bytes).is_ok()
}
