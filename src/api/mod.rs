mod error;
mod handlers;

use crate::domain::BrowserSession;
use crate::services::HotelService;
use actix_web::{middleware, web, App, HttpServer};
use std::net::SocketAddr;
use tracing::info;

pub use handlers::ScrapeQuery;

/// Registers every route. The `HotelService<B>` must be supplied as app data.
pub fn routes<B: BrowserSession + 'static>(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(handlers::home)).service(
        web::scope("/api/hotels")
            .route("", web::get().to(handlers::list_hotels::<B>))
            .route("", web::post().to(handlers::save::<B>))
            .route("/scrape", web::get().to(handlers::scrape::<B>))
            .route("/post", web::post().to(handlers::scrape_and_save::<B>))
            .route("/save", web::post().to(handlers::save::<B>))
            .route("/{id}", web::get().to(handlers::get_hotel::<B>)),
    );
}

pub async fn serve<B: BrowserSession + 'static>(
    service: HotelService<B>,
    bind: SocketAddr,
) -> std::io::Result<()> {
    let service = web::Data::new(service);

    info!("Starting server at http://{}", bind);
    HttpServer::new(move || {
        App::new()
            .app_data(service.clone())
            .wrap(middleware::Logger::default())
            .configure(routes::<B>)
    })
    .bind(bind)?
    .run()
    .await
}
