//! `reqwest` transport for the game server.

use noventa::config::MOVE_QUERY_PARAM;
use noventa::{ApiError, GameApi, GameConfig};

pub struct HttpGameApi {
    client: reqwest::Client,
    config: GameConfig,
}

impl HttpGameApi {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: GameConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}

#[async_trait::async_trait(?Send)]
impl GameApi for HttpGameApi {
    async fn fetch_board(&self) -> Result<String, ApiError> {
        let request = self.client.get(self.config.board_url());
        read_text(request).await
    }

    async fn submit(&self, jugada: &str) -> Result<String, ApiError> {
        let request = self
            .client
            .get(self.config.move_url())
            .query(&[(MOVE_QUERY_PARAM, jugada)]);
        read_text(request).await
    }
}

async fn read_text(request: reqwest::RequestBuilder) -> Result<String, ApiError> {
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Request(e.to_string()))?;
    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::Status(status.as_u16()));
    }
    response.text().await.map_err(|e| ApiError::Body(e.to_string()))
}
