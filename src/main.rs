use clap::Parser;
use hotelscrape::api;
use hotelscrape::config::cli::Args;
use hotelscrape::config::{Command, Config};
use hotelscrape::error::Result;
use hotelscrape::infrastructure::{HttpBrowser, SqliteStore};
use hotelscrape::services::{HotelService, ScrapingService};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(args.log_level.as_str()));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = Config::from_args(args)?;
    let store = Arc::new(SqliteStore::connect(&config.args.database_url).await?);
    let scraping = ScrapingService::new(
        HttpBrowser::new(config.http_client.clone()),
        config.scraper_config.clone(),
    );
    let service = HotelService::new(scraping, store);

    match &config.args.command {
        Command::Serve { bind } => api::serve(service, *bind).await?,
        Command::Scrape { hotel_name, save } => {
            let hotel = if *save {
                service.scrape_and_save(hotel_name).await?
            } else {
                service.scrape(hotel_name).await?
            };
            println!("{}", serde_json::to_string_pretty(&hotel)?);
        }
        Command::List => {
            let hotels = service.list_basic().await?;
            info!("Found {} hotels", hotels.len());
            println!("{}", serde_json::to_string_pretty(&hotels)?);
        }
        Command::Get { id } => {
            let hotel = service.get(*id).await?;
            println!("{}", serde_json::to_string_pretty(&hotel)?);
        }
    }

    Ok(())
}
