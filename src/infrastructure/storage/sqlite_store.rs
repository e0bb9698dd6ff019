use crate::domain::{HotelRecord, HotelStore, HotelSummary};
use crate::error::Result;
use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use tracing::{debug, error, info};

#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Opens (creating if needed) the database at `database_url` and applies
    /// pending migrations.
    pub async fn connect(database_url: &str) -> Result<Self> {
        info!("Connecting to database {}", database_url);
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        sqlx::migrate!("./migrations").run(&pool).await?;
        debug!("Migrations applied");

        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl HotelStore for SqliteStore {
    async fn create_hotel(&self, hotel: &HotelRecord) -> Result<HotelRecord> {
        debug!("Creating new hotel record for: {}", hotel.name);

        // Dropping the transaction on any error below rolls the insert back.
        let mut tx = self.pool.begin().await?;

        let saved = sqlx::query_as::<_, HotelRecord>(
            r#"
            INSERT INTO hotels (name, address, description, review)
            VALUES (?, ?, ?, ?)
            RETURNING id, name, address, description, review
            "#,
        )
        .bind(&hotel.name)
        .bind(&hotel.address)
        .bind(&hotel.description)
        .bind(hotel.review)
        .fetch_one(&mut *tx)
        .await
        .inspect_err(|e| error!("An error occurred while creating hotel {}: {}", hotel.name, e))?;

        tx.commit().await?;

        debug!("Hotel {} created with id {:?}", saved.name, saved.id);
        Ok(saved)
    }

    async fn list_hotels_basic(&self) -> Result<Vec<HotelSummary>> {
        let hotels =
            sqlx::query_as::<_, HotelSummary>("SELECT name, review FROM hotels ORDER BY id")
                .fetch_all(&self.pool)
                .await?;

        debug!("Found {} hotels", hotels.len());
        Ok(hotels)
    }

    async fn get_hotel_by_id(&self, id: i64) -> Result<Option<HotelRecord>> {
        let hotel = sqlx::query_as::<_, HotelRecord>(
            "SELECT id, name, address, description, review FROM hotels WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(hotel)
    }
}
