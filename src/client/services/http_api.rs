use async_trait::async_trait;
use log::debug;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::client::services::api::{
    ApiError, StoreApi, ADD_PRODUCT, CREATE_ORDER, LIST_ORDERS, LIST_PRODUCTS,
};
use crate::common::config::ClientConfig;
use crate::common::models::{ListPayload, Order, OrderAck, Product};

/// `StoreApi` over HTTP. Cloning shares the underlying connection pool.
#[derive(Debug, Clone)]
pub struct HttpStoreApi {
    client: Client,
    config: ClientConfig,
}

impl HttpStoreApi {
    pub fn new(config: ClientConfig) -> Self {
        Self { client: Client::new(), config }
    }

    async fn get_value(&self, endpoint: &str) -> Result<Value, ApiError> {
        let url = self.config.endpoint_url(endpoint)?;
        debug!("GET {url}");
        let body = self.client.get(url).send().await?.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn post_json<B: serde::Serialize + ?Sized>(&self, endpoint: &str, body: &B) -> Result<Response, ApiError> {
        let url = self.config.endpoint_url(endpoint)?;
        debug!("POST {url}");
        // .json() sets Content-Type: application/json
        Ok(self.client.post(url).json(body).send().await?)
    }

    async fn get_list<T: DeserializeOwned>(&self, endpoint: &str) -> Result<ListPayload<T>, ApiError> {
        let value = self.get_value(endpoint).await?;
        Ok(ListPayload::from_value(value)?)
    }
}

#[async_trait]
impl StoreApi for HttpStoreApi {
    async fn list_products(&self) -> Result<ListPayload<Product>, ApiError> {
        self.get_list(LIST_PRODUCTS).await
    }

    async fn add_product(&self, product: &Product) -> Result<(), ApiError> {
        // The reply body is never read; headers arriving is enough.
        self.post_json(ADD_PRODUCT, product).await.map(|_| ())
    }

    async fn create_order(&self, order: &Order) -> Result<OrderAck, ApiError> {
        let body = self.post_json(CREATE_ORDER, order).await?.text().await?;
        let value: Value = serde_json::from_str(&body)?;
        Ok(OrderAck::from_value(&value))
    }

    async fn list_orders(&self) -> Result<ListPayload<Order>, ApiError> {
        self.get_list(LIST_ORDERS).await
    }
}
