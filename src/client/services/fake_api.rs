use async_trait::async_trait;
use serde::de::Error as _;
use serde_json::{json, Value};
use tokio::sync::Mutex;

use crate::client::services::api::{
    ApiError, StoreApi, ADD_PRODUCT, CREATE_ORDER, LIST_ORDERS, LIST_PRODUCTS,
};
use crate::common::models::{ListPayload, Order, OrderAck, Product};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FakeFailure {
    Network,
    Malformed,
}

impl From<FakeFailure> for ApiError {
    fn from(failure: FakeFailure) -> Self {
        match failure {
            FakeFailure::Network => ApiError::Network("connection refused".to_string()),
            FakeFailure::Malformed => ApiError::Malformed(serde_json::Error::custom("expected value")),
        }
    }
}

/// In-memory `StoreApi` that answers with canned payloads and records every call.
pub struct FakeStoreApi {
    pub products: Mutex<Result<ListPayload<Product>, FakeFailure>>,
    pub orders: Mutex<Result<ListPayload<Order>, FakeFailure>>,
    pub order_reply: Mutex<Result<Value, FakeFailure>>,
    /// Zero-based index of the add-product call that fails at the transport level.
    pub fail_add_at: Option<usize>,
    pub added: Mutex<Vec<Product>>,
    pub submitted: Mutex<Vec<Order>>,
    pub calls: Mutex<Vec<String>>,
}

impl Default for FakeStoreApi {
    fn default() -> Self {
        Self {
            products: Mutex::new(Ok(ListPayload::Items(Vec::new()))),
            orders: Mutex::new(Ok(ListPayload::Items(Vec::new()))),
            order_reply: Mutex::new(Ok(json!({ "success": true }))),
            fail_add_at: None,
            added: Mutex::new(Vec::new()),
            submitted: Mutex::new(Vec::new()),
            calls: Mutex::new(Vec::new()),
        }
    }
}

impl FakeStoreApi {
    pub fn with_products(mut self, products: Result<ListPayload<Product>, FakeFailure>) -> Self {
        self.products = Mutex::new(products);
        self
    }

    pub fn with_orders(mut self, orders: Result<ListPayload<Order>, FakeFailure>) -> Self {
        self.orders = Mutex::new(orders);
        self
    }

    pub fn with_order_reply(mut self, reply: Result<Value, FakeFailure>) -> Self {
        self.order_reply = Mutex::new(reply);
        self
    }

    pub fn failing_add_at(mut self, index: usize) -> Self {
        self.fail_add_at = Some(index);
        self
    }

    async fn record(&self, method: &str, endpoint: &str) {
        self.calls.lock().await.push(format!("{method} {endpoint}"));
    }
}

#[async_trait]
impl StoreApi for FakeStoreApi {
    async fn list_products(&self) -> Result<ListPayload<Product>, ApiError> {
        self.record("GET", LIST_PRODUCTS).await;
        self.products.lock().await.clone().map_err(ApiError::from)
    }

    async fn add_product(&self, product: &Product) -> Result<(), ApiError> {
        self.record("POST", ADD_PRODUCT).await;
        let mut added = self.added.lock().await;
        if self.fail_add_at == Some(added.len()) {
            return Err(FakeFailure::Network.into());
        }
        added.push(product.clone());
        Ok(())
    }

    async fn create_order(&self, order: &Order) -> Result<OrderAck, ApiError> {
        self.record("POST", CREATE_ORDER).await;
        self.submitted.lock().await.push(order.clone());
        let reply = self.order_reply.lock().await.clone()?;
        Ok(OrderAck::from_value(&reply))
    }

    async fn list_orders(&self) -> Result<ListPayload<Order>, ApiError> {
        self.record("GET", LIST_ORDERS).await;
        self.orders.lock().await.clone().map_err(ApiError::from)
    }
}
