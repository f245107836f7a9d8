//! HTTP gateway over the `/foods` collection resource
//!
//! - `GET    {base}/foods`       -> JSON array
//! - `POST   {base}/foods`       -> created plate
//! - `PUT    {base}/foods/{id}`  -> body ignored
//! - `DELETE {base}/foods/{id}`  -> body ignored

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

use super::RemoteGateway;
use crate::config::ApiConfig;
use crate::error::{GatewayError, GatewayResult};
use crate::model::{CreateBody, FoodId, FoodPlate, NewFoodPlate};

const COLLECTION: &str = "foods";

/// Longest error body kept in `GatewayError::Http`
const MAX_ERROR_BODY: usize = 512;

/// reqwest-backed [`RemoteGateway`]
#[derive(Clone, Debug)]
pub struct HttpGateway {
    client: Client,
    base_url: String,
}

impl HttpGateway {
    /// Build the gateway and its connection pool from `config`
    pub fn new(config: &ApiConfig) -> GatewayResult<Self> {
        let base_url = config.base_url.trim().trim_end_matches('/').to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(GatewayError::InvalidUrl(config.base_url.clone()));
        }

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers(headers)
            .build()
            .map_err(|e| GatewayError::Transport(format!("HTTP client setup failed: {}", e)))?;

        log::debug!("HTTP gateway ready for {}", base_url);

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self) -> String {
        format!("{}/{}", self.base_url, COLLECTION)
    }

    fn item_url(&self, id: FoodId) -> String {
        format!("{}/{}/{}", self.base_url, COLLECTION, id)
    }

    /// Turn non-2xx responses into `GatewayError::Http`
    async fn check(response: Response) -> GatewayResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let mut body = response.text().await.unwrap_or_default();
        if body.len() > MAX_ERROR_BODY {
            let mut cut = MAX_ERROR_BODY;
            while !body.is_char_boundary(cut) {
                cut -= 1;
            }
            body.truncate(cut);
        }
        Err(GatewayError::Http { status: status.as_u16(), body })
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> GatewayResult<T> {
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(GatewayError::from)
    }
}

#[async_trait]
impl RemoteGateway for HttpGateway {
    async fn list(&self) -> GatewayResult<Vec<FoodPlate>> {
        let url = self.collection_url();
        log::debug!("GET {}", url);

        let response = Self::check(self.client.get(&url).send().await?).await?;
        Self::decode(response).await
    }

    async fn create(&self, food: &NewFoodPlate) -> GatewayResult<FoodPlate> {
        let url = self.collection_url();
        log::debug!("POST {}", url);

        let response =
            Self::check(self.client.post(&url).json(&CreateBody::from(food)).send().await?).await?;
        Self::decode(response).await
    }

    async fn update(&self, id: FoodId, food: &FoodPlate) -> GatewayResult<()> {
        let url = self.item_url(id);
        log::debug!("PUT {}", url);

        Self::check(self.client.put(&url).json(food).send().await?).await?;
        Ok(())
    }

    async fn delete_by_id(&self, id: FoodId) -> GatewayResult<()> {
        let url = self.item_url(id);
        log::debug!("DELETE {}", url);

        Self::check(self.client.delete(&url).send().await?).await?;
        Ok(())
    }
}
