pub(crate) mod browser;
mod hotel;
pub(crate) mod storage;

pub use browser::{BrowsablePage, BrowserSession, PageElement};
pub use hotel::{HotelField, HotelRecord, HotelSummary};
pub use storage::HotelStore;
