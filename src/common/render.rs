//! HTML fragments for the storefront page regions.
//!
//! Every interpolated value goes through maud, which escapes text and
//! attribute values, so server-supplied strings never become markup.

use maud::{html, Markup};

use crate::common::models::{
    CategoryFilter, Listing, Notice, Order, OrderStats, Product, ORDERS_EMPTY, ORDERS_ERROR,
    PRODUCTS_EMPTY, PRODUCTS_ERROR,
};

pub const PRODUCTS_LIST_ID: &str = "productsList";
pub const ORDER_MESSAGE_ID: &str = "orderMessage";
pub const ORDERS_LIST_ID: &str = "ordersList";
pub const TOTAL_ORDERS_ID: &str = "totalOrders";
pub const PENDING_ORDERS_ID: &str = "pendingOrders";
pub const COMPLETED_ORDERS_ID: &str = "completedOrders";

/// Wraps a fragment in the element the page addresses it by.
pub fn region(id: &str, inner: Markup) -> Markup {
    html! {
        div id=(id) { (inner) }
    }
}

fn message(notice: &Notice) -> Markup {
    html! {
        div class=(notice.css_class()) { (notice.text) }
    }
}

pub fn product_card(product: &Product) -> Markup {
    html! {
        div class="product-card" data-category=(product.category.as_str()) {
            h4 { (product.name) }
            p { (product.description) }
            div class="product-price" { (product.price_label()) }
            div class="product-category" { (product.category.as_str()) }
        }
    }
}

pub fn products_list(listing: &Listing<Product>) -> Markup {
    match listing {
        Listing::Failed => message(&Notice::error(PRODUCTS_ERROR)),
        Listing::Empty => message(&Notice::info(PRODUCTS_EMPTY)),
        Listing::Loaded(products) => html! {
            @for product in products {
                (product_card(product))
            }
        },
    }
}

pub fn order_item(order: &Order) -> Markup {
    let status = order.status.as_str();
    html! {
        div class="order-item" {
            div class="order-header" {
                h4 { (order.customer_name) " - " (order.product_category.as_str()) }
                span class=(format!("order-status status-{status}")) { (status) }
            }
            p { strong { "Email:" } " " (order.customer_email) }
            p { strong { "Budget:" } " " (order.budget) }
            p { strong { "Deadline:" } " " (order.deadline_label()) }
            p { strong { "Details:" } " " (order.product_details) }
            p { strong { "Order Date:" } " " (order.order_date_label()) }
        }
    }
}

pub fn orders_list(listing: &Listing<Order>) -> Markup {
    match listing {
        Listing::Failed => message(&Notice::error(ORDERS_ERROR)),
        Listing::Empty => message(&Notice::info(ORDERS_EMPTY)),
        Listing::Loaded(orders) => html! {
            @for order in orders {
                (order_item(order))
            }
        },
    }
}

pub fn order_stats(stats: &OrderStats) -> Markup {
    html! {
        span id=(TOTAL_ORDERS_ID) { (stats.total) }
        span id=(PENDING_ORDERS_ID) { (stats.pending) }
        span id=(COMPLETED_ORDERS_ID) { (stats.completed) }
    }
}

/// The order form's message element, styled by outcome.
pub fn order_message(notice: &Notice) -> Markup {
    html! {
        div id=(ORDER_MESSAGE_ID) class=(notice.css_class()) style="display: block" {
            (notice.text)
        }
    }
}

pub fn filter_buttons(active: &CategoryFilter) -> Markup {
    html! {
        @for choice in CategoryFilter::choices() {
            @let class = if &choice == active { "filter-btn active" } else { "filter-btn" };
            button class=(class) data-category=(choice.as_str()) { (choice.as_str()) }
        }
    }
}
