use log::error;

use crate::client::services::api::StoreApi;
use crate::common::models::{CategoryFilter, ListPayload, Listing, Product};

/// Keeps the products of the selected category, preserving order.
pub fn filter_products(products: Vec<Product>, filter: &CategoryFilter) -> Vec<Product> {
    products.into_iter().filter(|p| filter.matches(&p.category)).collect()
}

/// Fetches the full catalog and filters it client-side.
pub async fn load_products(api: &dyn StoreApi, filter: &CategoryFilter) -> Listing<Product> {
    match api.list_products().await {
        Ok(ListPayload::Items(products)) => Listing::from_items(filter_products(products, filter)),
        Ok(ListPayload::Rejected(reason)) => {
            error!("Error loading products: server reported {reason}");
            Listing::Failed
        }
        Err(e) => {
            error!("Error loading products: {e}");
            Listing::Failed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::services::fake_api::{FakeFailure, FakeStoreApi};
    use crate::common::models::Category;

    fn catalog() -> Vec<Product> {
        vec![
            Product::new("Logo", "d", Category::Design, 150),
            Product::new("Site", "d", Category::Software, 800),
            Product::new("UI", "d", Category::Design, 300),
            Product::new("Jingle", "d", Category::Other("music".into()), 90),
        ]
    }

    #[test]
    fn filter_keeps_exact_subset_in_order() {
        let design = filter_products(catalog(), &CategoryFilter::parse("design"));
        let names: Vec<_> = design.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Logo", "UI"]);
        assert_eq!(filter_products(catalog(), &CategoryFilter::All).len(), 4);
        assert_eq!(filter_products(catalog(), &CategoryFilter::parse("music")).len(), 1);
    }

    #[tokio::test]
    async fn loads_and_filters() {
        let api = FakeStoreApi::default().with_products(Ok(ListPayload::Items(catalog())));
        let listing = load_products(&api, &CategoryFilter::parse("software")).await;
        assert_eq!(listing.items().len(), 1);
        assert_eq!(api.calls.lock().await.as_slice(), ["GET get-products"]);
    }

    #[tokio::test]
    async fn empty_subset_is_empty_not_failed() {
        let api = FakeStoreApi::default().with_products(Ok(ListPayload::Items(catalog())));
        let listing = load_products(&api, &CategoryFilter::parse("animation")).await;
        assert_eq!(listing, Listing::Empty);

        let api = FakeStoreApi::default();
        assert_eq!(load_products(&api, &CategoryFilter::All).await, Listing::Empty);
    }

    #[tokio::test]
    async fn error_payload_network_and_garbage_all_fail_alike() {
        for reply in [
            Ok(ListPayload::Rejected("db down".into())),
            Err(FakeFailure::Network),
            Err(FakeFailure::Malformed),
        ] {
            let api = FakeStoreApi::default().with_products(reply);
            assert_eq!(load_products(&api, &CategoryFilter::All).await, Listing::Failed);
        }
    }
}
