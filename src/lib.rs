pub mod common;
pub mod client;
