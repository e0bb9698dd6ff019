use serde::{Deserialize, Serialize};

/// A scraped or stored hotel. `id` is only ever set by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct HotelRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub address: String,
    pub description: String,
    pub review: f64,
}

impl HotelRecord {
    pub fn new(name: String, address: String, description: String, review: f64) -> Self {
        Self {
            id: None,
            name,
            address,
            description,
            review,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct HotelSummary {
    pub name: String,
    pub review: f64,
}

/// Fields read from a hotel detail page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HotelField {
    Name,
    Address,
    Description,
    Review,
}

impl HotelField {
    /// Sentinel used when the element is missing. The review has none:
    /// it feeds a required numeric column.
    pub fn placeholder(self) -> Option<&'static str> {
        match self {
            HotelField::Name => Some("Unknown Name"),
            HotelField::Address => Some("Unknown Address"),
            HotelField::Description => Some("Unknown Description"),
            HotelField::Review => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            HotelField::Name => "name",
            HotelField::Address => "address",
            HotelField::Description => "description",
            HotelField::Review => "review",
        }
    }
}
