//! Base64 data URL encoding and decoding

use base64::{engine::general_purpose::STANDARD, Engine};
use crate::error::{AppError, Result};

/// MIME subtype of generated artwork
pub const SVG_FORMAT: &str = "svg+xml";

/// Wrap binary image data as `data:image/<format>;base64,<payload>`
pub fn encode(data: &[u8], format: &str) -> String {
    format!("data:image/{};base64,{}", format, STANDARD.encode(data))
}

/// Decode the payload of a data URL (or a bare base64 string)
pub fn decode(data_url: &str) -> Result<Vec<u8>> {
    let payload = match data_url.split_once(',') {
        Some((_, payload)) => payload,
        None => data_url,
    };

    STANDARD
        .decode(payload.trim())
        .map_err(|e| AppError::Validation(format!("Invalid base64 data: {}", e)))
}

/// Get the image format from a data URL prefix
pub fn format_of(data_url: &str) -> Option<&str> {
    let rest = data_url.strip_prefix("data:image/")?;
    let end = rest.find(';')?;
    Some(&rest[..end])
}
