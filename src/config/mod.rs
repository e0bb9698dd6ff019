use crate::config::cli::Args;
use crate::domain::HotelField;
use crate::error::{HotelError, Result};
use reqwest::Client;
use scraper::Selector;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};

pub mod cli;

pub use cli::Command;

const BOOKING_SEARCH_URL: &str = "https://www.booking.com/searchresults.es.html?ss=";
const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Markup contract of the target site. Kept as data so a site redesign
/// only needs a new `scraper_config.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScraperConfig {
    /// Search-results endpoint; the normalized hotel name is appended verbatim.
    pub search_url: String,
    /// First anchor inside the first property card.
    pub result_link_selector: String,
    pub fields: FieldSelectors,
    pub navigation_timeout_secs: u64,
    pub user_agent: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldSelectors {
    pub name: String,
    pub address: String,
    pub description: String,
    pub review: String,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            search_url: BOOKING_SEARCH_URL.to_string(),
            result_link_selector: r#"div[data-testid="property-card-container"] div div a"#
                .to_string(),
            fields: FieldSelectors::default(),
            navigation_timeout_secs: 60,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl Default for FieldSelectors {
    fn default() -> Self {
        Self {
            name: r#"div[id="hp_hotel_name"] div h2"#.to_string(),
            address: "#wrap-hotelpage-top > div:nth-child(4) > div > div > span.f419a93f12 > div"
                .to_string(),
            description: "#basiclayout > div.hotelchars > div.page-section.hp--desc_highlights.js-k2-hp--block > div > div.bui-grid__column.bui-grid__column-8.k2-hp--description > div.hp-description > div.hp_desc_main_content > div > div > p.a53cbfa6de.b3efd73f69"
                .to_string(),
            review: r#"div[data-testid="review-score-right-component"] div"#.to_string(),
        }
    }
}

impl FieldSelectors {
    pub fn locators(&self) -> [(HotelField, &str); 4] {
        [
            (HotelField::Name, self.name.as_str()),
            (HotelField::Address, self.address.as_str()),
            (HotelField::Description, self.description.as_str()),
            (HotelField::Review, self.review.as_str()),
        ]
    }
}

impl ScraperConfig {
    /// Reads the config file, falling back to the built-in booking.com
    /// contract when the file does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        let config: Self = if path.exists() {
            debug!("Loading scraper config from {}", path.display());
            serde_json::from_str(&std::fs::read_to_string(path)?)?
        } else {
            info!(
                "No scraper config at {}, using built-in defaults",
                path.display()
            );
            Self::default()
        };

        config.validate()?;
        Ok(config)
    }

    /// Fails with `HotelError::Selector` on the first locator that is not valid CSS.
    pub fn validate(&self) -> Result<()> {
        let locators = std::iter::once(self.result_link_selector.as_str())
            .chain(self.fields.locators().into_iter().map(|(_, css)| css));

        for css in locators {
            Selector::parse(css)
                .map_err(|e| HotelError::Selector(format!("{css}: {e}")))?;
        }

        if self.navigation_timeout_secs == 0 {
            return Err(HotelError::Config(
                "navigation_timeout_secs must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }

    pub fn navigation_timeout(&self) -> Duration {
        Duration::from_secs(self.navigation_timeout_secs)
    }
}

pub struct Config {
    pub args: Args,
    pub scraper_config: ScraperConfig,
    pub http_client: Client,
}

impl Config {
    pub fn from_args(args: Args) -> Result<Self> {
        let scraper_config = ScraperConfig::load(&args.config_file)?;

        let http_client = Client::builder()
            .user_agent(scraper_config.user_agent.as_str())
            .build()
            .map_err(HotelError::Client)?;

        Ok(Self {
            args,
            scraper_config,
            http_client,
        })
    }
}
