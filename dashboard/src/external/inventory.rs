//! Inventory service client
//!
//! Consumes the three endpoints the dashboard needs: the product list, the
//! demand spike simulation and the reorder report.

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use shared::{
    validate_product, validate_products, validate_report, Product, ReorderReport,
    SimulatedOverlay, SimulationRequest,
};

use crate::error::{DashboardError, DashboardResult};

/// Operations the dashboard consumes from the inventory service
#[allow(async_fn_in_trait)]
pub trait InventoryApi {
    /// `GET /products`, in server order
    async fn fetch_products(&self) -> DashboardResult<Vec<Product>>;

    /// `POST /simulate`
    async fn simulate(&self, request: &SimulationRequest) -> DashboardResult<SimulatedOverlay>;

    /// `GET /reorder-report`
    async fn fetch_reorder_report(&self) -> DashboardResult<ReorderReport>;
}

/// HTTP client for the inventory service
#[derive(Clone)]
pub struct InventoryClient {
    client: Client,
    base_url: String,
}

impl InventoryClient {
    /// Create a new InventoryClient for the given base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> DashboardResult<T> {
        let response = self
            .client
            .get(self.url(path))
            .send()
            .await
            .map_err(|e| DashboardError::Transport(format!("GET {}: {}", path, e)))?;

        Self::parse_response(path, response).await
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> DashboardResult<T>
    where
        B: serde::Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(|e| DashboardError::Transport(format!("POST {}: {}", path, e)))?;

        Self::parse_response(path, response).await
    }

    async fn parse_response<T: DeserializeOwned>(
        path: &str,
        response: Response,
    ) -> DashboardResult<T> {
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(DashboardError::UnexpectedStatus {
                status: status.as_u16(),
                body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| DashboardError::Transport(format!("{}: reading body: {}", path, e)))?;

        serde_json::from_str(&body)
            .map_err(|e| DashboardError::MalformedResponse(format!("{}: {}", path, e)))
    }
}

impl InventoryApi for InventoryClient {
    async fn fetch_products(&self) -> DashboardResult<Vec<Product>> {
        let products: Vec<Product> = self.get_json("/products").await?;
        validate_products(&products)?;
        tracing::debug!(count = products.len(), "Fetched products");
        Ok(products)
    }

    async fn simulate(&self, request: &SimulationRequest) -> DashboardResult<SimulatedOverlay> {
        let overlay: SimulatedOverlay = self.post_json("/simulate", request).await?;
        validate_product(overlay.record())?;
        tracing::debug!(product_id = %request.product_id, "Received simulated overlay");
        Ok(overlay)
    }

    async fn fetch_reorder_report(&self) -> DashboardResult<ReorderReport> {
        let report: ReorderReport = self.get_json("/reorder-report").await?;
        validate_report(&report)?;
        tracing::debug!(total_items = report.total_items, "Fetched reorder report");
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash() {
        let client = InventoryClient::new("http://localhost:5000/");
        assert_eq!(client.base_url(), "http://localhost:5000");
        assert_eq!(client.url("/products"), "http://localhost:5000/products");
    }
}
