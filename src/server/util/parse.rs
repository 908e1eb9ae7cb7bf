use crate::server::error::AppError;

/// Parses a Discord snowflake ID supplied by the client.
///
/// Route parameters and form fields arrive as strings; anything that is not a
/// `u64` is rejected before it reaches Discord or the database.
///
/// # Arguments
/// - `value` - The string to parse
///
/// # Returns
/// - `Ok(u64)` - Successfully parsed ID
/// - `Err(AppError::BadRequest)` - The value is not a valid unsigned integer
pub fn parse_u64_from_string(value: &str) -> Result<u64, AppError> {
    value
        .trim()
        .parse::<u64>()
        .map_err(|e| AppError::BadRequest(format!("Invalid ID '{}': {}", value, e)))
}
