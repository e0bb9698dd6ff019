use crate::error::{HotelError, Result};
use tracing::error;

/// Parses a review score written with a decimal comma ("8,5") or as a
/// plain number ("9"). Only the first comma is translated.
pub fn parse_score(token: &str) -> Result<f64> {
    let candidate = token.trim().replacen(',', ".", 1);

    match candidate.parse::<f64>() {
        Ok(score) if score.is_finite() => Ok(score),
        _ => {
            error!("Invalid number format: {:?}", token);
            Err(HotelError::InvalidNumberFormat(token.to_string()))
        }
    }
}
