use crate::error::{HotelError, Result};

/// Turns free text into the search fragment appended to the search URL:
/// lower-cased, with every space replaced by `+`. Runs of spaces are kept
/// as runs of `+`; nothing else is touched.
pub fn normalize_search_name(raw: &str) -> Result<String> {
    if raw.is_empty() {
        return Err(HotelError::InvalidInput(
            "hotel name must not be empty".to_string(),
        ));
    }

    Ok(raw.replace(' ', "+").to_lowercase())
}
