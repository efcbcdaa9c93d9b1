use log::{error, info};

use crate::client::services::api::StoreApi;
use crate::common::models::{Category, Notice, Product, SEED_DONE, SEED_FAILED};

/// Demo catalog, posted in this order.
pub fn sample_products() -> Vec<Product> {
    vec![
        Product::new(
            "Logo Design Package",
            "Professional logo design with 3 concepts and source files",
            Category::Design,
            150,
        ),
        Product::new(
            "Website Development",
            "Custom responsive website with CMS integration",
            Category::Software,
            800,
        ),
        Product::new(
            "UI/UX Design",
            "User interface and experience design for web/mobile apps",
            Category::Design,
            300,
        ),
        Product::new(
            "Mobile App Development",
            "Cross-platform mobile application development",
            Category::Software,
            1200,
        ),
        Product::new(
            "Tech Consultation",
            "1-hour technology consultation session",
            Category::Service,
            50,
        ),
        Product::new(
            "2D Animation Video",
            "60-second 2D animated explainer video",
            Category::Animation,
            500,
        ),
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    Seeded,
    Failed,
}

impl SeedOutcome {
    pub fn notice(self) -> Notice {
        match self {
            SeedOutcome::Seeded => Notice::success(SEED_DONE),
            SeedOutcome::Failed => Notice::error(SEED_FAILED),
        }
    }
}

/// Posts the samples one after another. The first transport failure stops the
/// batch; products already posted stay on the server.
pub async fn seed_sample_products(api: &dyn StoreApi) -> SeedOutcome {
    for product in sample_products() {
        if let Err(e) = api.add_product(&product).await {
            error!("Error adding sample products: {e}");
            return SeedOutcome::Failed;
        }
    }
    info!("Seeded sample products");
    SeedOutcome::Seeded
}
