#![allow(dead_code)]

use async_trait::async_trait;
use hotelscrape::domain::{BrowsablePage, BrowserSession};
use hotelscrape::error::{HotelError, Result};
use hotelscrape::infrastructure::{NodeSnapshot, SqliteStore};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tempfile::TempDir;

pub const SEARCH_URL: &str = "https://www.booking.com/searchresults.es.html?ss=hotel+arts";
pub const DETAIL_URL: &str = "https://www.booking.com/hotel/es/arts-barcelona.es.html";

#[derive(Debug, Default)]
pub struct SiteLog {
    pub navigations: Vec<String>,
    pub timeouts: Vec<Duration>,
    pub opened: usize,
    pub closed: usize,
}

/// Fake browser serving fixed HTML per URL. Unknown URLs fail like an
/// unreachable host.
#[derive(Clone, Default)]
pub struct StaticSite {
    pages: HashMap<String, String>,
    log: Arc<Mutex<SiteLog>>,
}

impl StaticSite {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, url: &str, html: impl Into<String>) -> Self {
        self.pages.insert(url.to_string(), html.into());
        self
    }

    pub fn navigations(&self) -> Vec<String> {
        self.log.lock().unwrap().navigations.clone()
    }

    pub fn timeouts(&self) -> Vec<Duration> {
        self.log.lock().unwrap().timeouts.clone()
    }

    pub fn opened(&self) -> usize {
        self.log.lock().unwrap().opened
    }

    pub fn closed(&self) -> usize {
        self.log.lock().unwrap().closed
    }
}

pub struct StaticPage {
    pages: HashMap<String, String>,
    log: Arc<Mutex<SiteLog>>,
    current: Option<String>,
}

#[async_trait]
impl BrowserSession for StaticSite {
    type Page = StaticPage;

    async fn open_page(&self) -> Result<StaticPage> {
        self.log.lock().unwrap().opened += 1;
        Ok(StaticPage {
            pages: self.pages.clone(),
            log: self.log.clone(),
            current: None,
        })
    }
}

#[async_trait]
impl BrowsablePage for StaticPage {
    type Element = NodeSnapshot;

    async fn goto(&mut self, url: &str, timeout: Duration) -> Result<()> {
        {
            let mut log = self.log.lock().unwrap();
            log.navigations.push(url.to_string());
            log.timeouts.push(timeout);
        }
        match self.pages.get(url) {
            Some(html) => {
                self.current = Some(html.clone());
                Ok(())
            }
            None => Err(HotelError::Transport {
                url: url.to_string(),
                reason: "net::ERR_NAME_NOT_RESOLVED".to_string(),
            }),
        }
    }

    async fn query_selector(&self, selector: &str) -> Result<Option<NodeSnapshot>> {
        let html = self.current.as_deref().unwrap_or_default();
        NodeSnapshot::first_match(html, selector)
    }

    async fn close(&mut self) -> Result<()> {
        self.log.lock().unwrap().closed += 1;
        self.current = None;
        Ok(())
    }
}

/// Search results with one property card; `href` of `None` drops the attribute.
pub fn results_page(href: Option<&str>) -> String {
    let anchor = match href {
        Some(href) => format!(r#"<a href="{href}">Hotel Arts Barcelona</a>"#),
        None => r#"<a data-testid="title-link">Hotel Arts Barcelona</a>"#.to_string(),
    };
    format!(
        r#"<html><body>
        <div data-testid="property-card-container"><div><div>{anchor}</div></div></div>
        <div data-testid="property-card-container"><div><div><a href="https://www.booking.com/hotel/es/other.es.html">Other</a></div></div></div>
        </body></html>"#
    )
}

pub fn empty_results_page() -> String {
    r#"<html><body><h1>No properties found</h1></body></html>"#.to_string()
}

/// Detail page laid out the way the default selectors expect. Any `None`
/// field leaves its element out entirely.
pub fn detail_page(
    name: Option<&str>,
    address: Option<&str>,
    description: Option<&str>,
    review: Option<&str>,
) -> String {
    let name = name
        .map(|n| format!(r#"<div id="hp_hotel_name"><div><h2>{n}</h2></div></div>"#))
        .unwrap_or_default();
    let address = address
        .map(|a| format!(r#"<div><div><span class="f419a93f12"><div>{a}</div></span></div></div>"#))
        .unwrap_or_default();
    let description = description
        .map(|d| format!(r#"<p class="a53cbfa6de b3efd73f69">{d}</p>"#))
        .unwrap_or_default();
    let review = review
        .map(|r| format!(r#"<div data-testid="review-score-right-component"><div>{r}</div></div>"#))
        .unwrap_or_default();

    format!(
        r#"<html><body>
        {name}
        <div id="wrap-hotelpage-top">
          <div>Genius</div>
          <div>5 estrellas</div>
          <div>Compartir</div>
          <div>{address}</div>
        </div>
        <div id="basiclayout">
          <div class="hotelchars">
            <div class="page-section hp--desc_highlights js-k2-hp--block">
              <div>
                <div class="bui-grid__column bui-grid__column-8 k2-hp--description">
                  <div class="hp-description">
                    <div class="hp_desc_main_content">
                      <div><div>{description}</div></div>
                    </div>
                  </div>
                </div>
              </div>
            </div>
          </div>
        </div>
        {review}
        </body></html>"#
    )
}

pub fn full_detail_page() -> String {
    detail_page(
        Some("Hotel Arts Barcelona"),
        Some("Carrer de la Marina, 19-21, Ciutat Vella, 08005 Barcelona"),
        Some("Hotel frente al mar con vistas al Mediterráneo."),
        Some("Puntuación: 8,7"),
    )
}

pub fn hotel_arts_site() -> StaticSite {
    StaticSite::new()
        .with_page(SEARCH_URL, results_page(Some(DETAIL_URL)))
        .with_page(DETAIL_URL, full_detail_page())
}

pub async fn temp_store() -> (SqliteStore, TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite://{}", dir.path().join("hotels.db").display());
    (SqliteStore::connect(&url).await.unwrap(), dir)
}
