use std::sync::Arc;

use iced::{Application, Command, Element, Theme};

use crate::client::models::app_state::{AppState, Request, ShopAppState};
use crate::client::models::messages::Message;
use crate::client::services::api::StoreApi;
use crate::client::services::http_api::HttpStoreApi;
use crate::client::services::{admin_service, catalog_service, order_service, seeder};
use crate::common::config::ClientConfig;

pub struct ShopApp {
    pub state: ShopAppState,
    pub api: Arc<dyn StoreApi>,
}

impl ShopApp {
    /// Runs one request off the UI thread and feeds its result back as a message.
    fn perform(&self, request: Request) -> Command<Message> {
        let api = self.api.clone();
        match request {
            Request::LoadProducts { generation, filter } => Command::perform(
                async move { catalog_service::load_products(api.as_ref(), &filter).await },
                move |listing| Message::ProductsLoaded { generation, listing },
            ),
            Request::SubmitOrder(form) => Command::perform(
                async move { order_service::submit_order(api.as_ref(), &form).await },
                Message::OrderSubmitted,
            ),
            Request::LoadOrders { generation } => Command::perform(
                async move { admin_service::load_orders(api.as_ref()).await },
                move |report| Message::OrdersLoaded { generation, report },
            ),
            Request::SeedSamples => Command::perform(
                async move { seeder::seed_sample_products(api.as_ref()).await },
                Message::SamplesSeeded,
            ),
        }
    }
}

impl Application for ShopApp {
    type Message = Message;
    type Theme = Theme;
    type Executor = iced::executor::Default;
    type Flags = ClientConfig;

    fn new(config: ClientConfig) -> (Self, Command<Message>) {
        log::info!("Using storefront API at {}", config.api_base_url);
        let mut app = ShopApp {
            state: ShopAppState::default(),
            api: Arc::new(HttpStoreApi::new(config)),
        };
        let request = app.state.startup();
        let cmd = app.perform(request);
        (app, cmd)
    }

    fn title(&self) -> String {
        "Bottega".to_string()
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        match self.state.update(message) {
            Some(request) => self.perform(request),
            None => Command::none(),
        }
    }

    fn view(&self) -> Element<Message> {
        match self.state.app_state {
            AppState::Catalog => crate::client::gui::views::catalog::view(&self.state),
            AppState::CustomOrder => crate::client::gui::views::custom_order::view(&self.state),
            AppState::Admin => crate::client::gui::views::admin::view(&self.state),
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }
}
