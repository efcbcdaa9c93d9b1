use log::error;

use crate::client::services::api::StoreApi;
use crate::common::models::{ListPayload, Listing, Order, OrderStats};

/// Result of one order-list load. `stats` is only present when entries were rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct OrdersReport {
    pub listing: Listing<Order>,
    pub stats: Option<OrderStats>,
}

pub async fn load_orders(api: &dyn StoreApi) -> OrdersReport {
    let listing = match api.list_orders().await {
        Ok(ListPayload::Items(orders)) => Listing::from_items(orders),
        Ok(ListPayload::Rejected(reason)) => {
            error!("Error loading orders: server reported {reason}");
            Listing::Failed
        }
        Err(e) => {
            error!("Error loading orders: {e}");
            Listing::Failed
        }
    };
    let stats = match &listing {
        Listing::Loaded(orders) => Some(OrderStats::from_orders(orders)),
        _ => None,
    };
    OrdersReport { listing, stats }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::services::fake_api::{FakeFailure, FakeStoreApi};
    use crate::common::models::OrderStatus;

    fn orders(statuses: &[&str]) -> Vec<Order> {
        statuses
            .iter()
            .map(|s| Order {
                status: OrderStatus::from(s.to_string()),
                ..Order::default()
            })
            .collect()
    }

    #[tokio::test]
    async fn loaded_orders_come_with_stats() {
        let api = FakeStoreApi::default().with_orders(Ok(ListPayload::Items(orders(&[
            "pending",
            "completed",
            "pending",
            "shipped",
        ]))));
        let report = load_orders(&api).await;
        assert_eq!(report.listing.items().len(), 4);
        assert_eq!(report.stats, Some(OrderStats { total: 4, pending: 2, completed: 1 }));
    }

    #[tokio::test]
    async fn empty_list_has_no_stats() {
        let report = load_orders(&FakeStoreApi::default()).await;
        assert_eq!(report, OrdersReport { listing: Listing::Empty, stats: None });
    }

    #[tokio::test]
    async fn failures_have_no_stats() {
        for reply in [Ok(ListPayload::Rejected("x".into())), Err(FakeFailure::Network)] {
            let report = load_orders(&FakeStoreApi::default().with_orders(reply)).await;
            assert_eq!(report.listing, Listing::Failed);
            assert_eq!(report.stats, None);
        }
    }
}
