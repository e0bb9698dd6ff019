use crate::domain::{BrowserSession, HotelRecord};
use crate::error::HotelError;
use crate::services::HotelService;
use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use tracing::debug;

type Service<B> = web::Data<HotelService<B>>;

#[derive(Debug, Deserialize)]
pub struct ScrapeQuery {
    pub hotel_name: Option<String>,
}

impl ScrapeQuery {
    /// A missing parameter is treated like an empty one.
    fn hotel_name(&self) -> &str {
        self.hotel_name.as_deref().unwrap_or_default()
    }
}

#[derive(Serialize)]
struct SavedHotel {
    message: &'static str,
    hotel: HotelRecord,
}

impl SavedHotel {
    fn new(hotel: HotelRecord) -> Self {
        Self {
            message: "Hotel data saved successfully",
            hotel,
        }
    }
}

pub async fn home() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({"message": "Welcome to booking API"}))
}

pub async fn scrape<B: BrowserSession + 'static>(
    service: Service<B>,
    query: web::Query<ScrapeQuery>,
) -> Result<HttpResponse, HotelError> {
    debug!("Scrape requested for {:?}", query.hotel_name);
    let hotel = service.scrape(query.hotel_name()).await?;
    Ok(HttpResponse::Ok().json(hotel))
}

pub async fn scrape_and_save<B: BrowserSession + 'static>(
    service: Service<B>,
    query: web::Query<ScrapeQuery>,
) -> Result<HttpResponse, HotelError> {
    let hotel = service.scrape_and_save(query.hotel_name()).await?;
    Ok(HttpResponse::Created().json(SavedHotel::new(hotel)))
}

pub async fn save<B: BrowserSession + 'static>(
    service: Service<B>,
    body: web::Json<HotelRecord>,
) -> Result<HttpResponse, HotelError> {
    let hotel = service.save(body.into_inner()).await?;
    Ok(HttpResponse::Created().json(SavedHotel::new(hotel)))
}

pub async fn list_hotels<B: BrowserSession + 'static>(
    service: Service<B>,
) -> Result<HttpResponse, HotelError> {
    Ok(HttpResponse::Ok().json(service.list_basic().await?))
}

pub async fn get_hotel<B: BrowserSession + 'static>(
    service: Service<B>,
    path: web::Path<i64>,
) -> Result<HttpResponse, HotelError> {
    let hotel = service.get(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(hotel))
}
