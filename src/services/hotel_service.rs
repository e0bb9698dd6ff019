use crate::domain::{BrowserSession, HotelRecord, HotelStore, HotelSummary};
use crate::error::{HotelError, Result};
use crate::services::ScrapingService;
use std::sync::Arc;
use tracing::{debug, info};

pub struct HotelService<B> {
    scraping: ScrapingService<B>,
    store: Arc<dyn HotelStore>,
}

impl<B: BrowserSession> HotelService<B> {
    pub fn new(scraping: ScrapingService<B>, store: Arc<dyn HotelStore + 'static>) -> Self {
        Self { scraping, store }
    }

    pub async fn scrape(&self, hotel_name: &str) -> Result<HotelRecord> {
        self.scraping.scrape_hotel(hotel_name).await
    }

    /// Scrapes first and only then touches the store, so a failed scrape
    /// writes nothing and no connection is held while pages load.
    pub async fn scrape_and_save(&self, hotel_name: &str) -> Result<HotelRecord> {
        let hotel = self.scrape(hotel_name).await?;
        debug!("Saving hotel data");
        self.save(hotel).await
    }

    pub async fn save(&self, hotel: HotelRecord) -> Result<HotelRecord> {
        if hotel.name.trim().is_empty() {
            return Err(HotelError::InvalidInput(
                "hotel name must not be empty".to_string(),
            ));
        }

        let saved = self
            .store
            .create_hotel(&HotelRecord { id: None, ..hotel })
            .await?;
        info!("Hotel data saved successfully: {:?}", saved);
        Ok(saved)
    }

    pub async fn list_basic(&self) -> Result<Vec<HotelSummary>> {
        self.store.list_hotels_basic().await
    }

    pub async fn get(&self, id: i64) -> Result<HotelRecord> {
        self.store
            .get_hotel_by_id(id)
            .await?
            .ok_or(HotelError::HotelNotFound(id))
    }
}
