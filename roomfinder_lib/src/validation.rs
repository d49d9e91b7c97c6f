use roomfinder_api::types::BookingStatus;

use crate::error::RoomFinderError;

pub const MAX_SEARCH_LENGTH: usize = 100;
pub const MAX_MESSAGE_LENGTH: usize = 2000;

/// Upper bound accepted by the fee calculator and withdrawal forms.
pub const MAX_AMOUNT: f64 = 1_000_000.0;

/// Strip ASCII control characters (0x00-0x1F except space 0x20), trim
/// whitespace, and enforce a byte-length limit.
pub fn sanitize_text(input: &str, max_len: usize) -> Result<String, RoomFinderError> {
    if input.len() > max_len {
        return Err(RoomFinderError::InvalidInput(format!(
            "input exceeds maximum length of {} bytes",
            max_len
        )));
    }
    let sanitized: String = input
        .chars()
        .filter(|c| !c.is_ascii_control() || *c == ' ')
        .collect::<String>()
        .trim()
        .to_string();
    if sanitized.is_empty() {
        return Err(RoomFinderError::InvalidInput(
            "input is empty after sanitization".to_string(),
        ));
    }
    Ok(sanitized)
}

/// Validate a search string: enforce length, strip control chars, trim.
pub fn validate_search(input: &str) -> Result<String, RoomFinderError> {
    sanitize_text(input, MAX_SEARCH_LENGTH)
}

/// Validate free-form message text (enquiry replies, review responses,
/// support tickets).
pub fn validate_message(input: &str) -> Result<String, RoomFinderError> {
    sanitize_text(input, MAX_MESSAGE_LENGTH)
}

/// Validate a booking status filter, case-insensitive.
pub fn validate_booking_status(input: &str) -> Result<BookingStatus, RoomFinderError> {
    match input.trim().to_lowercase().as_str() {
        "pending" => Ok(BookingStatus::Pending),
        "confirmed" => Ok(BookingStatus::Confirmed),
        "cancelled" | "canceled" => Ok(BookingStatus::Cancelled),
        "completed" => Ok(BookingStatus::Completed),
        _ => Err(RoomFinderError::InvalidInput(format!(
            "unknown booking status '{}'. Valid values: pending, confirmed, cancelled, completed",
            input
        ))),
    }
}

/// Validate a monetary amount: finite, positive, below the platform cap.
pub fn validate_amount(amount: f64) -> Result<(), RoomFinderError> {
    if !amount.is_finite() {
        return Err(RoomFinderError::InvalidInput(
            "amount must be a number".to_string(),
        ));
    }
    if amount <= 0.0 {
        return Err(RoomFinderError::InvalidInput(
            "amount must be greater than zero".to_string(),
        ));
    }
    if amount > MAX_AMOUNT {
        return Err(RoomFinderError::InvalidInput(format!(
            "amount exceeds the maximum of {}",
            MAX_AMOUNT
        )));
    }
    Ok(())
}

/// Validate a currency code: three ASCII letters, normalized to
/// uppercase.
pub fn validate_currency(input: &str) -> Result<String, RoomFinderError> {
    let trimmed = input.trim();
    if trimmed.len() == 3 && trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
        Ok(trimmed.to_uppercase())
    } else {
        Err(RoomFinderError::InvalidInput(format!(
            "invalid currency code '{}'. Expected a 3-letter code like USD or EUR",
            input
        )))
    }
}
