use bottega::client::gui::app::ShopApp;
use bottega::common::config::ClientConfig;
use iced::Application;

fn main() -> anyhow::Result<()> {
    // .env is optional; ClientConfig reads it
    let config = ClientConfig::from_env()?;
    config.init_logging();
    ShopApp::run(iced::Settings::with_flags(config))?;
    Ok(())
}
