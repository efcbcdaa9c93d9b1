use std::env;

use anyhow::Context;
use url::Url;

const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000/api";
const DEFAULT_ENDPOINT_EXT: &str = ".php";

#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Always ends with `/` so endpoint names join underneath it.
    pub api_base_url: Url,
    pub endpoint_ext: String,
    pub log_level: String,
}

impl ClientConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let base = env::var("BOTTEGA_API_BASE_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());
        let ext = env::var("BOTTEGA_ENDPOINT_EXT").unwrap_or_else(|_| DEFAULT_ENDPOINT_EXT.to_string());
        let mut config = Self::new(&base, &ext)?;
        config.log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
        Ok(config)
    }

    pub fn new(api_base_url: &str, endpoint_ext: &str) -> anyhow::Result<Self> {
        let mut url = Url::parse(api_base_url)
            .with_context(|| format!("invalid BOTTEGA_API_BASE_URL: {api_base_url}"))?;
        if url.cannot_be_a_base() {
            anyhow::bail!("BOTTEGA_API_BASE_URL cannot be used as a base: {api_base_url}");
        }
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        Ok(Self {
            api_base_url: url,
            endpoint_ext: endpoint_ext.to_string(),
            log_level: "info".to_string(),
        })
    }

    /// `get-products` becomes `<base>/get-products.php` with the default extension.
    pub fn endpoint_url(&self, endpoint: &str) -> Result<Url, url::ParseError> {
        self.api_base_url.join(&format!("{}{}", endpoint, self.endpoint_ext))
    }

    /// Installs env_logger at `LOG_LEVEL` unless RUST_LOG says otherwise.
    pub fn init_logging(&self) {
        let env = env_logger::Env::default().default_filter_or(self.log_level.as_str());
        let _ = env_logger::Builder::from_env(env).try_init();
    }
}
