//! Donation entry rules: amount parsing, identifiers and receipt numbers.
use uuid::Uuid;

pub const MAX_DONATION_AMOUNT: f64 = 10_000_000.0;

/// Donor name printed on receipts when no donor is selected
pub const ANONYMOUS_DONOR: &str = "Anonymous";

/// Generate an ID for a donation recorded during the session.
/// Format: `donation::<uuid v4>`
pub fn generate_donation_id() -> String {
    format!("donation::{}", Uuid::new_v4())
}

/// Receipt number from the last six digits of an epoch-millis timestamp.
/// Example: 1700000123456 -> `REC-123456`
pub fn generate_receipt_number(now_millis: u64) -> String {
    format!("REC-{:06}", now_millis % 1_000_000)
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DonationValidationError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Amount must be positive")]
    AmountNotPositive,
    #[error("Amount cannot exceed 10,000,000")]
    AmountTooLarge,
    #[error("Donation type is required")]
    MissingType,
    #[error("Donation purpose is required")]
    MissingPurpose,
    #[error("Payment method is required")]
    MissingPaymentMethod,
    #[error("Invalid donation date: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),
    #[error("Donor not found: {0}")]
    UnknownDonor(String),
}

/// Parse the amount typed into the donation form.
///
/// Grouping commas, surrounding whitespace and a leading rupee sign are
/// tolerated ("₹ 5,000" parses as 5000).
pub fn parse_amount(input: &str) -> Result<f64, DonationValidationError> {
    let cleaned: String = input
        .trim()
        .trim_start_matches('₹')
        .chars()
        .filter(|c| *c != ',' && !c.is_whitespace())
        .collect();

    if cleaned.is_empty() {
        return Err(DonationValidationError::InvalidAmount(input.to_string()));
    }

    let amount: f64 = cleaned
        .parse()
        .map_err(|_| DonationValidationError::InvalidAmount(input.to_string()))?;

    if !amount.is_finite() {
        return Err(DonationValidationError::InvalidAmount(input.to_string()));
    }
    if amount <= 0.0 {
        return Err(DonationValidationError::AmountNotPositive);
    }
    if amount > MAX_DONATION_AMOUNT {
        return Err(DonationValidationError::AmountTooLarge);
    }
    Ok(amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_receipt_number_uses_last_six_digits() {
        assert_eq!(generate_receipt_number(1_700_000_123_456), "REC-123456");
        assert_eq!(generate_receipt_number(1_700_000_000_042), "REC-000042");
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("5000"), Ok(5000.0));
        assert_eq!(parse_amount(" ₹ 5,000.50 "), Ok(5000.5));
        assert_eq!(
            parse_amount("five"),
            Err(DonationValidationError::InvalidAmount("five".to_string()))
        );
        assert_eq!(
            parse_amount(""),
            Err(DonationValidationError::InvalidAmount(String::new()))
        );
        assert_eq!(parse_amount("0"), Err(DonationValidationError::AmountNotPositive));
        assert_eq!(parse_amount("-10"), Err(DonationValidationError::AmountNotPositive));
        assert_eq!(
            parse_amount("10000001"),
            Err(DonationValidationError::AmountTooLarge)
        );
        assert!(parse_amount("NaN").is_err());
    }
}
