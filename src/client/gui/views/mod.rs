pub mod admin;
pub mod catalog;
pub mod custom_order;
