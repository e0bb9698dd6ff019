use super::{HotelRecord, HotelSummary};
use crate::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait HotelStore: Send + Sync {
    /// Inserts `hotel` and returns it with the id assigned by the store.
    async fn create_hotel(&self, hotel: &HotelRecord) -> Result<HotelRecord>;
    /// Name and review of every stored hotel; empty when there are none.
    async fn list_hotels_basic(&self) -> Result<Vec<HotelSummary>>;
    async fn get_hotel_by_id(&self, id: i64) -> Result<Option<HotelRecord>>;
}
