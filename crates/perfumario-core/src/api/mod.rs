//! Catalog API client.
//!
//! The remote service exposes REST resources for perfumes and brands.
//! [`CatalogApi`] is the seam used by the inventory service, and
//! [`HttpCatalogApi`] is the reqwest-backed implementation.

use reqwest::{header, Method};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::config::ApiConfig;
use crate::error::{Error, Result};
use crate::models::{Brand, Gender, NewBrand, NewPerfume, Perfume, PerfumeUpdate};
use crate::util::compact_text;

/// Remote catalog operations (async)
#[allow(async_fn_in_trait)]
pub trait CatalogApi {
    async fn list_perfumes(&self) -> Result<Vec<Perfume>>;

    async fn search_perfumes(&self, query: &str) -> Result<Vec<Perfume>>;

    async fn perfumes_by_gender(&self, gender: Gender) -> Result<Vec<Perfume>>;

    async fn perfumes_by_brand(&self, brand_id: &str) -> Result<Vec<Perfume>>;

    async fn get_perfume(&self, id: &str) -> Result<Perfume>;

    async fn create_perfume(&self, perfume: &NewPerfume) -> Result<Perfume>;

    async fn update_perfume(&self, id: &str, update: &PerfumeUpdate) -> Result<Perfume>;

    async fn delete_perfume(&self, id: &str) -> Result<()>;

    async fn list_brands(&self) -> Result<Vec<Brand>>;

    async fn create_brand(&self, brand: &NewBrand) -> Result<Brand>;

    async fn delete_brand(&self, id: &str) -> Result<()>;
}

/// HTTP client for the Perfumario REST API.
#[derive(Debug, Clone)]
pub struct HttpCatalogApi {
    config: ApiConfig,
    client: reqwest::Client,
}

impl HttpCatalogApi {
    pub fn new(config: ApiConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self { config, client })
    }

    /// Returns the base URL this client was configured with.
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    async fn get_json<T: DeserializeOwned>(&self, url: String) -> Result<T> {
        let response = self
            .send(Method::GET, &url, None, self.config.retries)
            .await?;
        Ok(response.json::<T>().await?)
    }

    async fn write_json<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        url: String,
        body: &B,
    ) -> Result<T> {
        let body = serde_json::to_value(body)?;
        let response = self
            .send(method, &url, Some(&body), self.config.mutation_retries)
            .await?;
        Ok(response.json::<T>().await?)
    }

    async fn delete(&self, url: String) -> Result<()> {
        self.send(Method::DELETE, &url, None, self.config.mutation_retries)
            .await?;
        Ok(())
    }

    async fn send(
        &self,
        method: Method,
        url: &str,
        body: Option<&serde_json::Value>,
        retries: u32,
    ) -> Result<reqwest::Response> {
        let mut attempt = 0;
        loop {
            match self.send_once(method.clone(), url, body).await {
                Ok(response) => return Ok(response),
                Err(error) if attempt < retries && error.is_transient() => {
                    attempt += 1;
                    tracing::warn!(%method, url, attempt, "Request failed, retrying: {error}");
                    tokio::time::sleep(self.config.retry_delay).await;
                }
                Err(error) => return Err(error),
            }
        }
    }

    async fn send_once(
        &self,
        method: Method,
        url: &str,
        body: Option<&serde_json::Value>,
    ) -> Result<reqwest::Response> {
        tracing::debug!(%method, url, "Sending catalog request");
        let mut request = self
            .client
            .request(method, url)
            .header(header::ACCEPT, "application/json");
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(Error::Api {
            status: status.as_u16(),
            message: api_error_message(&body),
        })
    }
}

impl CatalogApi for HttpCatalogApi {
    async fn list_perfumes(&self) -> Result<Vec<Perfume>> {
        self.get_json(self.config.endpoints().perfumes()).await
    }

    async fn search_perfumes(&self, query: &str) -> Result<Vec<Perfume>> {
        self.get_json(self.config.endpoints().perfume_search(query))
            .await
    }

    async fn perfumes_by_gender(&self, gender: Gender) -> Result<Vec<Perfume>> {
        self.get_json(self.config.endpoints().perfumes_by_gender(gender))
            .await
    }

    async fn perfumes_by_brand(&self, brand_id: &str) -> Result<Vec<Perfume>> {
        self.get_json(self.config.endpoints().perfumes_by_brand(brand_id))
            .await
    }

    async fn get_perfume(&self, id: &str) -> Result<Perfume> {
        match self.get_json(self.config.endpoints().perfume(id)).await {
            Err(Error::Api { status: 404, .. }) => Err(Error::NotFound(format!("perfume {id}"))),
            other => other,
        }
    }

    async fn create_perfume(&self, perfume: &NewPerfume) -> Result<Perfume> {
        self.write_json(Method::POST, self.config.endpoints().perfumes(), perfume)
            .await
    }

    async fn update_perfume(&self, id: &str, update: &PerfumeUpdate) -> Result<Perfume> {
        self.write_json(Method::PATCH, self.config.endpoints().perfume(id), update)
            .await
    }

    async fn delete_perfume(&self, id: &str) -> Result<()> {
        self.delete(self.config.endpoints().perfume(id)).await
    }

    async fn list_brands(&self) -> Result<Vec<Brand>> {
        self.get_json(self.config.endpoints().brands()).await
    }

    async fn create_brand(&self, brand: &NewBrand) -> Result<Brand> {
        self.write_json(Method::POST, self.config.endpoints().brands(), brand)
            .await
    }

    async fn delete_brand(&self, id: &str) -> Result<()> {
        self.delete(self.config.endpoints().brand(id)).await
    }
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// Prefer the API's JSON `message`; fall back to a compact body excerpt.
fn api_error_message(body: &str) -> String {
    if let Ok(ApiErrorBody {
        message: Some(message),
    }) = serde_json::from_str::<ApiErrorBody>(body)
    {
        if !message.trim().is_empty() {
            return message.trim().to_string();
        }
    }

    let excerpt = compact_text(body);
    if excerpt.is_empty() {
        "request failed".to_string()
    } else {
        excerpt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_message_prefers_json_message() {
        assert_eq!(
            api_error_message(r#"{"message":"Brand name already exists"}"#),
            "Brand name already exists"
        );
    }

    #[test]
    fn api_error_message_falls_back_to_body() {
        assert_eq!(api_error_message("Bad Gateway"), "Bad Gateway");
        assert_eq!(api_error_message(r#"{"error":"x"}"#), r#"{"error":"x"}"#);
        assert_eq!(api_error_message("   "), "request failed");
    }

    #[test]
    fn client_keeps_configured_base_url() {
        let config = ApiConfig::with_base_url("https://api.example.com/").unwrap();
        let api = HttpCatalogApi::new(config).unwrap();
        assert_eq!(api.base_url(), "https://api.example.com");
    }
}
