use log::debug;

use crate::client::models::messages::Message;
use crate::client::services::seeder::SeedOutcome;
use crate::common::models::{
    CategoryFilter, Listing, Notice, Order, OrderForm, OrderStats, Product,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppState {
    #[default]
    Catalog,
    CustomOrder,
    Admin,
}

/// Network work the state asks the app to run. Results come back as `Message`s.
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    LoadProducts { generation: u64, filter: CategoryFilter },
    SubmitOrder(OrderForm),
    LoadOrders { generation: u64 },
    SeedSamples,
}

#[derive(Debug, Clone, Default)]
pub struct ShopAppState {
    pub app_state: AppState,
    pub active_filter: CategoryFilter,
    /// `None` until the first load finishes.
    pub products: Option<Listing<Product>>,
    pub products_loading: bool,
    products_generation: u64,
    pub order_form: OrderForm,
    /// Stays up until the next submission resolves.
    pub order_notice: Option<Notice>,
    pub submitting: bool,
    pub orders: Option<Listing<Order>>,
    pub orders_loading: bool,
    orders_generation: u64,
    pub stats: OrderStats,
    pub seeding: bool,
    pub seed_notice: Option<Notice>,
}

impl ShopAppState {
    /// The catalog opens on all products.
    pub fn startup(&mut self) -> Request {
        self.request_products()
    }

    fn request_products(&mut self) -> Request {
        self.products_generation += 1;
        self.products_loading = true;
        Request::LoadProducts {
            generation: self.products_generation,
            filter: self.active_filter.clone(),
        }
    }

    fn request_orders(&mut self) -> Request {
        self.orders_generation += 1;
        self.orders_loading = true;
        Request::LoadOrders { generation: self.orders_generation }
    }

    pub fn update(&mut self, message: Message) -> Option<Request> {
        match message {
            Message::NoOp => None,
            Message::OpenCatalog => {
                self.app_state = AppState::Catalog;
                Some(self.request_products())
            }
            Message::OpenCustomOrder => {
                self.app_state = AppState::CustomOrder;
                None
            }
            Message::OpenAdmin => {
                self.app_state = AppState::Admin;
                Some(self.request_orders())
            }
            Message::FilterSelected(filter) => {
                self.active_filter = filter;
                Some(self.request_products())
            }
            Message::ProductsLoaded { generation, listing } => {
                if generation < self.products_generation {
                    debug!("dropping stale product list #{generation}");
                    return None;
                }
                self.products_loading = false;
                self.products = Some(listing);
                None
            }
            Message::CustomerNameChanged(value) => {
                self.order_form.customer_name = value;
                None
            }
            Message::CustomerEmailChanged(value) => {
                self.order_form.customer_email = value;
                None
            }
            Message::ProductCategorySelected(category) => {
                self.order_form.product_category = category.to_string();
                None
            }
            Message::ProductDetailsChanged(value) => {
                self.order_form.product_details = value;
                None
            }
            Message::BudgetChanged(value) => {
                self.order_form.budget = value;
                None
            }
            Message::DeadlineChanged(value) => {
                self.order_form.deadline = value;
                None
            }
            Message::SubmitOrder if self.submitting => {
                debug!("order already in flight, ignoring submit");
                None
            }
            Message::SubmitOrder => {
                self.submitting = true;
                Some(Request::SubmitOrder(self.order_form.clone()))
            }
            Message::OrderSubmitted(outcome) => {
                self.submitting = false;
                self.order_notice = Some(outcome.notice());
                if outcome.clears_form() {
                    self.order_form = OrderForm::default();
                }
                None
            }
            Message::ReloadOrders => Some(self.request_orders()),
            Message::OrdersLoaded { generation, report } => {
                if generation < self.orders_generation {
                    debug!("dropping stale order list #{generation}");
                    return None;
                }
                self.orders_loading = false;
                self.orders = Some(report.listing);
                if let Some(stats) = report.stats {
                    self.stats = stats;
                }
                None
            }
            Message::SeedSamples => {
                self.seeding = true;
                self.seed_notice = None;
                Some(Request::SeedSamples)
            }
            Message::SamplesSeeded(outcome) => {
                self.seeding = false;
                self.seed_notice = Some(outcome.notice());
                match outcome {
                    SeedOutcome::Seeded => Some(self.request_products()),
                    SeedOutcome::Failed => None,
                }
            }
            Message::DismissSeedNotice => {
                self.seed_notice = None;
                None
            }
        }
    }
}
