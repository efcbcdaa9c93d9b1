use chrono::Utc;
use log::error;

use crate::client::services::api::StoreApi;
use crate::common::models::{
    Notice, Order, OrderForm, ORDER_NETWORK_ERROR, ORDER_PLACED, ORDER_REJECTED,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Placed,
    Rejected,
    NetworkError,
}

impl SubmitOutcome {
    pub fn notice(self) -> Notice {
        match self {
            SubmitOutcome::Placed => Notice::success(ORDER_PLACED),
            SubmitOutcome::Rejected => Notice::error(ORDER_REJECTED),
            SubmitOutcome::NetworkError => Notice::error(ORDER_NETWORK_ERROR),
        }
    }

    /// Only a placed order resets the form.
    pub fn clears_form(self) -> bool {
        self == SubmitOutcome::Placed
    }
}

/// Builds a pending order stamped now and posts it.
///
/// Only a decoded JSON reply can reject the order. A reply that fails to
/// decode counts as a failed exchange, the same as a dropped connection.
pub async fn submit_order(api: &dyn StoreApi, form: &OrderForm) -> SubmitOutcome {
    let order = Order::from_form(form, Utc::now());
    match api.create_order(&order).await {
        Ok(ack) if ack.accepted => SubmitOutcome::Placed,
        Ok(_) => SubmitOutcome::Rejected,
        Err(e) => {
            error!("Error: {e}");
            SubmitOutcome::NetworkError
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::services::fake_api::{FakeFailure, FakeStoreApi};
    use crate::common::models::{Category, OrderStatus};
    use serde_json::json;

    fn form() -> OrderForm {
        OrderForm {
            customer_name: "Ada".into(),
            customer_email: "ada@example.com".into(),
            product_category: "animation".into(),
            product_details: "30s intro".into(),
            budget: "400".into(),
            deadline: "2025-02-01".into(),
        }
    }

    #[tokio::test]
    async fn success_true_places_the_order() {
        let api = FakeStoreApi::default();
        let outcome = submit_order(&api, &form()).await;
        assert_eq!(outcome, SubmitOutcome::Placed);
        assert!(outcome.clears_form());

        let submitted = api.submitted.lock().await;
        assert_eq!(submitted.len(), 1);
        assert_eq!(submitted[0].status, OrderStatus::Pending);
        assert_eq!(submitted[0].product_category, Category::Animation);
        assert_eq!(submitted[0].deadline.as_deref(), Some("2025-02-01"));
        assert!(submitted[0].order_date.ends_with('Z'));
    }

    #[tokio::test]
    async fn other_shapes_are_rejected() {
        for reply in [
            Ok(json!({"success": false})),
            Ok(json!({"success": 0})),
            Ok(json!({"message": "saved"})),
        ] {
            let api = FakeStoreApi::default().with_order_reply(reply);
            let outcome = submit_order(&api, &form()).await;
            assert_eq!(outcome, SubmitOutcome::Rejected);
            assert!(!outcome.clears_form());
        }
    }

    #[tokio::test]
    async fn transport_failure_is_a_network_error() {
        let api = FakeStoreApi::default().with_order_reply(Err(FakeFailure::Network));
        assert_eq!(submit_order(&api, &form()).await, SubmitOutcome::NetworkError);
    }

    #[tokio::test]
    async fn undecodable_reply_is_a_network_error() {
        let api = FakeStoreApi::default().with_order_reply(Err(FakeFailure::Malformed));
        let outcome = submit_order(&api, &form()).await;
        assert_eq!(outcome, SubmitOutcome::NetworkError);
        assert!(!outcome.clears_form());
    }

    #[tokio::test]
    async fn truthy_success_places_the_order() {
        let api = FakeStoreApi::default().with_order_reply(Ok(json!({"success": 1})));
        assert_eq!(submit_order(&api, &form()).await, SubmitOutcome::Placed);
    }

    #[test]
    fn outcome_texts_are_distinct() {
        let texts = [
            SubmitOutcome::Placed.notice().text,
            SubmitOutcome::Rejected.notice().text,
            SubmitOutcome::NetworkError.notice().text,
        ];
        assert_ne!(texts[0], texts[1]);
        assert_ne!(texts[1], texts[2]);
        assert_ne!(texts[0], texts[2]);
    }
}
