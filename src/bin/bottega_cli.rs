use std::process::ExitCode;

use bottega::client::services::admin_service::load_orders;
use bottega::client::services::catalog_service::load_products;
use bottega::client::services::http_api::HttpStoreApi;
use bottega::client::services::order_service::{submit_order, SubmitOutcome};
use bottega::client::services::seeder::{seed_sample_products, SeedOutcome};
use bottega::common::config::ClientConfig;
use bottega::common::models::{
    CategoryFilter, Listing, OrderForm, ORDERS_EMPTY, ORDERS_ERROR, PRODUCTS_EMPTY, PRODUCTS_ERROR,
};
use bottega::common::render;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "bottega-cli", about = "Storefront client: catalog, custom orders and admin")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the catalog, optionally narrowed to one category
    Products {
        #[arg(long, default_value = "all")]
        category: String,
        /// Print the productsList fragment instead of text
        #[arg(long)]
        html: bool,
    },
    /// List every order with total/pending/completed counts
    Orders {
        #[arg(long)]
        html: bool,
    },
    /// Place a custom order
    Order {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        category: String,
        #[arg(long)]
        details: String,
        #[arg(long)]
        budget: String,
        #[arg(long, default_value = "")]
        deadline: String,
        #[arg(long)]
        html: bool,
    },
    /// Post the six demo products
    Seed,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let config = ClientConfig::from_env()?;
    config.init_logging();
    let api = HttpStoreApi::new(config);

    let ok = match cli.command {
        Command::Products { category, html } => {
            let filter = CategoryFilter::parse(&category);
            let listing = load_products(&api, &filter).await;
            if html {
                println!("{}", render::filter_buttons(&filter).into_string());
                println!("{}", render::region(render::PRODUCTS_LIST_ID, render::products_list(&listing)).into_string());
            } else {
                match &listing {
                    Listing::Failed => println!("{PRODUCTS_ERROR}"),
                    Listing::Empty => println!("{PRODUCTS_EMPTY}"),
                    Listing::Loaded(products) => {
                        for p in products {
                            println!("{} [{}] {}", p.name, p.category, p.price_label());
                            println!("    {}", p.description);
                        }
                    }
                }
            }
            listing != Listing::Failed
        }
        Command::Orders { html } => {
            let report = load_orders(&api).await;
            if html {
                if let Some(stats) = &report.stats {
                    println!("{}", render::order_stats(stats).into_string());
                }
                println!("{}", render::region(render::ORDERS_LIST_ID, render::orders_list(&report.listing)).into_string());
            } else {
                match &report.listing {
                    Listing::Failed => println!("{ORDERS_ERROR}"),
                    Listing::Empty => println!("{ORDERS_EMPTY}"),
                    Listing::Loaded(orders) => {
                        for o in orders {
                            println!("{} - {} [{}]", o.customer_name, o.product_category, o.status);
                            println!("    Email: {}", o.customer_email);
                            println!("    Budget: {}", o.budget);
                            println!("    Deadline: {}", o.deadline_label());
                            println!("    Details: {}", o.product_details);
                            println!("    Order Date: {}", o.order_date_label());
                        }
                    }
                }
                if let Some(stats) = &report.stats {
                    println!("Total: {}  Pending: {}  Completed: {}", stats.total, stats.pending, stats.completed);
                }
            }
            report.listing != Listing::Failed
        }
        Command::Order { name, email, category, details, budget, deadline, html } => {
            let form = OrderForm {
                customer_name: name,
                customer_email: email,
                product_category: category,
                product_details: details,
                budget,
                deadline,
            };
            let outcome = submit_order(&api, &form).await;
            if html {
                println!("{}", render::order_message(&outcome.notice()).into_string());
            } else {
                println!("{}", outcome.notice().text);
            }
            outcome == SubmitOutcome::Placed
        }
        Command::Seed => {
            let outcome = seed_sample_products(&api).await;
            println!("{}", outcome.notice().text);
            outcome == SeedOutcome::Seeded
        }
    };

    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
