pub mod admin_service;
pub mod api;
pub mod catalog_service;
pub mod fake_api;
pub mod http_api;
pub mod order_service;
pub mod seeder;
