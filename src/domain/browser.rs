//! Capabilities the scraper needs from a browser engine.
//!
//! The orchestrator only ever navigates, looks up the first element for a
//! CSS locator and reads an attribute or the text of that element. Anything
//! able to do that (a headless browser, a plain HTTP fetcher, a static
//! fixture in tests) can drive the pipeline.

use crate::error::Result;
use async_trait::async_trait;
use std::time::Duration;

#[async_trait]
pub trait BrowserSession: Send + Sync {
    type Page: BrowsablePage;

    async fn open_page(&self) -> Result<Self::Page>;
}

#[async_trait]
pub trait BrowsablePage: Send + Sync {
    type Element: PageElement;

    /// Loads `url`, failing with `HotelError::Transport` if it does not
    /// complete within `timeout`.
    async fn goto(&mut self, url: &str, timeout: Duration) -> Result<()>;

    /// First element matching `selector`, or `None`.
    async fn query_selector(&self, selector: &str) -> Result<Option<Self::Element>>;

    async fn close(&mut self) -> Result<()>;
}

#[async_trait]
pub trait PageElement: Send + Sync {
    async fn attribute(&self, name: &str) -> Result<Option<String>>;

    async fn text_content(&self) -> Result<Option<String>>;
}
