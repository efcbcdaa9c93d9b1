use async_trait::async_trait;
use thiserror::Error;

use crate::common::models::{ListPayload, Order, OrderAck, Product};

pub const LIST_PRODUCTS: &str = "get-products";
pub const ADD_PRODUCT: &str = "add-product";
pub const CREATE_ORDER: &str = "create-order";
pub const LIST_ORDERS: &str = "get-orders";

#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a readable response.
    #[error("network error: {0}")]
    Network(String),

    #[error("malformed response: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("invalid endpoint url: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl ApiError {
    pub fn is_network(&self) -> bool {
        matches!(self, ApiError::Network(_))
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Network(err.to_string())
    }
}

/// The storefront API. Status codes are not interpreted: the body decides.
#[async_trait]
pub trait StoreApi: Send + Sync {
    async fn list_products(&self) -> Result<ListPayload<Product>, ApiError>;

    /// Posts one product. The response body is not inspected.
    async fn add_product(&self, product: &Product) -> Result<(), ApiError>;

    async fn create_order(&self, order: &Order) -> Result<OrderAck, ApiError>;

    async fn list_orders(&self) -> Result<ListPayload<Order>, ApiError>;
}
