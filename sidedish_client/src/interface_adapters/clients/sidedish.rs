use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use url::Url;

use super::{ClientBuildError, endpoint, fetch, parse_base_url};
use crate::domain::{ApiResult, MenuCategory, MenuDetail, MenuSummary, SidedishRepository};
use crate::interface_adapters::protocol::{MenuDetailEnvelope, MenuListEnvelope};
use crate::use_cases::map_response;

// Thin reqwest client for the menu backend.
#[derive(Clone)]
pub struct SidedishClient {
    http: Client,
    base_url: Url,
}

impl SidedishClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ClientBuildError> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: parse_base_url(base_url)?,
        })
    }
}

#[async_trait]
impl SidedishRepository for SidedishClient {
    #[tracing::instrument(name = "load_menu", skip_all, fields(category = %category))]
    async fn load_menu(&self, category: MenuCategory) -> ApiResult<Vec<MenuSummary>> {
        let url = endpoint(&self.base_url, &[category.as_path()])?;
        let raw = fetch(self.http.get(url)).await;
        let status = raw.status;

        let result = map_response::<MenuListEnvelope>(raw);
        match &result {
            Ok(menu) => tracing::debug!(status, items = menu.len(), "menu loaded"),
            Err(err) => tracing::warn!(status, error = %err, "menu request failed"),
        }
        result
    }

    #[tracing::instrument(name = "load_detail", skip_all, fields(hash = %hash))]
    async fn load_detail(&self, hash: &str) -> ApiResult<MenuDetail> {
        let url = endpoint(&self.base_url, &["detail", hash])?;
        let raw = fetch(self.http.get(url)).await;
        let status = raw.status;

        let result = map_response::<MenuDetailEnvelope>(raw);
        if let Err(err) = &result {
            tracing::warn!(status, error = %err, "detail request failed");
        }
        result
    }
}
