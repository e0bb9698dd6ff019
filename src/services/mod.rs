mod extract;
mod hotel_service;
mod normalize;
mod score;
mod scraping;

pub use extract::extract_fields;
pub use hotel_service::HotelService;
pub use normalize::normalize_search_name;
pub use score::parse_score;
pub use scraping::{scrape_hotel, ScrapingService};
