use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde::Deserialize;

use crate::error::{VoyageError, VoyageResult};
use crate::models::{Continents, Countries};

/// HTTP client for the travel catalog API. The two fetches are
/// independent; callers decide whether to await them together.
#[derive(Clone)]
pub struct CatalogClient {
    client: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    pub fn new(base_url: String) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .expect("Failed to create HTTP client");

        Self { client, base_url }
    }

    async fn get<T: for<'de> Deserialize<'de>>(&self, path: &str) -> VoyageResult<T> {
        let url = format!("{}/{}", self.base_url.trim_end_matches('/'), path);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(VoyageError::ApiError(format!(
                "HTTP {} from {}",
                response.status(),
                url
            )));
        }

        Ok(response.json().await?)
    }

    /// Fetch the continent catalog: code -> display name.
    pub async fn fetch_continents(&self) -> VoyageResult<Continents> {
        self.get("continents").await
    }

    /// Fetch the country catalog: code -> { name, continent }.
    pub async fn fetch_countries(&self) -> VoyageResult<Countries> {
        self.get("countries").await
    }
}
