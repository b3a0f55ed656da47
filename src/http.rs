use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{
    api::PlayerApi,
    config::ClientConfig,
    error::{RequestError, Result},
    types::{DirectoryListing, ParentDirectory, PlaybackStatus},
};

const API_PREFIX: &str = "/player/api";

/// HTTP-backed player API
///
/// Issues plain GET requests against `{base_url}/player/api/*` and treats
/// any non-2xx status as a failure carrying the response body.
#[derive(Clone)]
pub struct HttpPlayerApi {
    client: Client,
    base_url: String,
}

impl HttpPlayerApi {
    /// Create a new client for the player at `base_url`
    ///
    /// # Arguments
    /// * `base_url` - Scheme, host and optional port, e.g. `http://192.168.1.20`
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .user_agent("sdplayer-browser/0.1")
            .build()
            .unwrap_or_else(|_| Client::new());

        Self::with_client(client, base_url)
    }

    /// Create a client with a caller-supplied reqwest `Client`
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Build a client from validated configuration
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        config.validate()?;

        let mut builder = Client::builder().user_agent("sdplayer-browser/0.1");
        if let Some(ms) = config.request_timeout_ms {
            builder = builder.timeout(Duration::from_millis(ms));
        }
        let client = builder.build()?;

        Ok(Self::with_client(client, config.base_url.clone()))
    }

    fn list_url(&self, dir: &str) -> String {
        format!("{}{}/list?dir={}", self.base_url, API_PREFIX, urlencoding::encode(dir))
    }

    fn play_url(&self, file: &str) -> String {
        format!("{}{}/play?file={}", self.base_url, API_PREFIX, urlencoding::encode(file))
    }

    fn stop_url(&self) -> String {
        format!("{}{}/stop", self.base_url, API_PREFIX)
    }

    fn up_url(&self, dir: &str) -> String {
        format!("{}{}/up?dir={}", self.base_url, API_PREFIX, urlencoding::encode(dir))
    }

    fn status_url(&self) -> String {
        format!("{}{}/status", self.base_url, API_PREFIX)
    }

    /// GET `url` and return the body text of a 2xx response
    async fn get_text(&self, url: &str) -> Result<String> {
        debug!(%url, "GET");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(RequestError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(body)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let body = self.get_text(url).await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl PlayerApi for HttpPlayerApi {
    async fn list(&self, dir: &str) -> Result<DirectoryListing> {
        self.get_json(&self.list_url(dir)).await
    }

    async fn play(&self, file: &str) -> Result<()> {
        self.get_text(&self.play_url(file)).await.map(|_| ())
    }

    async fn stop(&self) -> Result<()> {
        self.get_text(&self.stop_url()).await.map(|_| ())
    }

    async fn up(&self, dir: &str) -> Result<ParentDirectory> {
        self.get_json(&self.up_url(dir)).await
    }

    async fn status(&self) -> Result<PlaybackStatus> {
        self.get_json(&self.status_url()).await
    }

    fn identifier(&self) -> String {
        format!("http-player://{}", self.base_url)
    }
}
