use crate::domain::{BrowsablePage, BrowserSession, PageElement};
use crate::error::{HotelError, Result};
use async_trait::async_trait;
use reqwest::Client;
use scraper::{Html, Selector};
use std::collections::HashMap;
use std::time::Duration;
use tracing::debug;

/// Browser engine backed by plain HTTP fetches. Each navigation is one GET;
/// locators are evaluated against the fetched document with `scraper`.
#[derive(Clone)]
pub struct HttpBrowser {
    client: Client,
}

impl HttpBrowser {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl BrowserSession for HttpBrowser {
    type Page = HttpPage;

    async fn open_page(&self) -> Result<HttpPage> {
        Ok(HttpPage {
            client: self.client.clone(),
            url: None,
            document: None,
            closed: false,
        })
    }
}

pub struct HttpPage {
    client: Client,
    url: Option<String>,
    document: Option<String>,
    closed: bool,
}

impl HttpPage {
    /// Final URL of the last navigation, after redirects.
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }
}

#[async_trait]
impl BrowsablePage for HttpPage {
    type Element = NodeSnapshot;

    async fn goto(&mut self, url: &str, timeout: Duration) -> Result<()> {
        if self.closed {
            return Err(HotelError::transport(url, "page is closed"));
        }

        debug!("GET {} (timeout {:?})", url, timeout);
        let response = self
            .client
            .get(url)
            .timeout(timeout)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|e| HotelError::transport(url, e))?;

        let final_url = response.url().to_string();
        let body = response
            .text()
            .await
            .map_err(|e| HotelError::transport(url, e))?;

        debug!("Loaded {} ({} bytes)", final_url, body.len());
        self.url = Some(final_url);
        self.document = Some(body);
        Ok(())
    }

    async fn query_selector(&self, selector: &str) -> Result<Option<NodeSnapshot>> {
        match &self.document {
            Some(html) if !self.closed => NodeSnapshot::first_match(html, selector),
            _ => Err(HotelError::transport(
                self.url.as_deref().unwrap_or("about:blank"),
                "no document loaded",
            )),
        }
    }

    async fn close(&mut self) -> Result<()> {
        self.closed = true;
        self.document = None;
        Ok(())
    }
}

/// Owned copy of a matched element: its text and attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeSnapshot {
    text: String,
    attributes: HashMap<String, String>,
}

impl NodeSnapshot {
    /// Parses `html` and snapshots the first element matching `css`.
    pub fn first_match(html: &str, css: &str) -> Result<Option<Self>> {
        let selector =
            Selector::parse(css).map_err(|e| HotelError::Selector(format!("{css}: {e}")))?;
        let document = Html::parse_document(html);

        Ok(document.select(&selector).next().map(|element| Self {
            text: element.text().collect(),
            attributes: element
                .value()
                .attrs()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect(),
        }))
    }
}

#[async_trait]
impl PageElement for NodeSnapshot {
    async fn attribute(&self, name: &str) -> Result<Option<String>> {
        Ok(self.attributes.get(name).cloned())
    }

    async fn text_content(&self) -> Result<Option<String>> {
        Ok(Some(self.text.clone()))
    }
}
