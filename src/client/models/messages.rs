use crate::client::services::admin_service::OrdersReport;
use crate::client::services::order_service::SubmitOutcome;
use crate::client::services::seeder::SeedOutcome;
use crate::common::models::{Category, CategoryFilter, Listing, Product};

#[derive(Debug, Clone)]
pub enum Message {
    NoOp,
    // Navigation
    OpenCatalog,
    OpenCustomOrder,
    OpenAdmin,
    // Catalog
    FilterSelected(CategoryFilter),
    ProductsLoaded { generation: u64, listing: Listing<Product> },
    // Custom order form
    CustomerNameChanged(String),
    CustomerEmailChanged(String),
    ProductCategorySelected(Category),
    ProductDetailsChanged(String),
    BudgetChanged(String),
    DeadlineChanged(String),
    SubmitOrder,
    OrderSubmitted(SubmitOutcome),
    // Admin
    ReloadOrders,
    OrdersLoaded { generation: u64, report: OrdersReport },
    SeedSamples,
    SamplesSeeded(SeedOutcome),
    DismissSeedNotice,
}
