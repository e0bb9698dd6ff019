use crate::config::ScraperConfig;
use crate::domain::{BrowsablePage, BrowserSession, HotelField, HotelRecord, PageElement};
use crate::error::{HotelError, Result};
use crate::services::{extract_fields, normalize_search_name, parse_score};
use reqwest::Url;
use std::collections::HashMap;
use tracing::{debug, error, info, warn};

pub struct ScrapingService<B> {
    browser: B,
    config: ScraperConfig,
}

impl<B: BrowserSession> ScrapingService<B> {
    pub fn new(browser: B, config: ScraperConfig) -> Self {
        info!("Created new Scraping service for {}", config.search_url);
        Self { browser, config }
    }

    pub async fn scrape_hotel(&self, raw_name: &str) -> Result<HotelRecord> {
        scrape_hotel(raw_name, &self.browser, &self.config).await
    }
}

/// Searches the site for `raw_name`, follows the first result and reads the
/// hotel off its detail page. The page is closed on every exit path.
pub async fn scrape_hotel<B>(
    raw_name: &str,
    browser: &B,
    config: &ScraperConfig,
) -> Result<HotelRecord>
where
    B: BrowserSession + ?Sized,
{
    let query = normalize_search_name(raw_name)?;
    let search_url = format!("{}{}", config.search_url, query);
    debug!("Scraping URL: {}", search_url);

    let mut page = browser.open_page().await?;
    let outcome = scrape_page(&mut page, &search_url, &query, config).await;

    if let Err(e) = page.close().await {
        warn!("Failed to close page for {}: {}", search_url, e);
    }

    match &outcome {
        Ok(hotel) => info!("Hotel information: {:?}", hotel),
        Err(e) => error!("Scraping {:?} failed: {}", raw_name, e),
    }
    outcome
}

async fn scrape_page<P: BrowsablePage>(
    page: &mut P,
    search_url: &str,
    query: &str,
    config: &ScraperConfig,
) -> Result<HotelRecord> {
    let timeout = config.navigation_timeout();
    page.goto(search_url, timeout).await?;

    let link = page
        .query_selector(&config.result_link_selector)
        .await?
        .ok_or_else(|| HotelError::NoResult {
            query: query.to_string(),
        })?;

    debug!("Getting href attribute");
    let href = link
        .attribute("href")
        .await?
        .filter(|href| !href.trim().is_empty())
        .ok_or_else(|| {
            HotelError::MalformedResult(
                "the selected property does not have an href attribute".to_string(),
            )
        })?;

    let detail_url = resolve_link(search_url, &href)?;
    debug!("Scraping URL: {}", detail_url);
    page.goto(&detail_url, timeout).await?;

    let values = extract_fields(&*page, config.fields.locators()).await?;
    assemble(values, &detail_url)
}

/// Result links may be relative to the search page.
fn resolve_link(search_url: &str, href: &str) -> Result<String> {
    Url::parse(search_url)
        .and_then(|base| base.join(href))
        .map(|url| url.to_string())
        .map_err(|e| HotelError::MalformedResult(format!("cannot resolve link {href:?}: {e}")))
}

fn assemble(
    mut values: HashMap<HotelField, Option<String>>,
    detail_url: &str,
) -> Result<HotelRecord> {
    let review_text = values
        .remove(&HotelField::Review)
        .flatten()
        .ok_or_else(|| HotelError::ReviewUnavailable {
            url: detail_url.to_string(),
        })?;

    // "Puntuación: 8,5" -> "8,5"
    let token = review_text.split_whitespace().last().unwrap_or_default();
    let review = parse_score(token)?;

    // An empty name is as good as a missing one; other fields keep empty text.
    let mut text = |field: HotelField| match values.remove(&field).flatten() {
        Some(value) if field != HotelField::Name || !value.trim().is_empty() => value,
        _ => {
            let placeholder = field.placeholder().unwrap_or_default();
            warn!("Missing {} on {}, using {:?}", field.as_str(), detail_url, placeholder);
            placeholder.to_string()
        }
    };

    Ok(HotelRecord::new(
        text(HotelField::Name),
        text(HotelField::Address),
        text(HotelField::Description),
        review,
    ))
}
