//! Donor identity and validation rules.
use uuid::Uuid;

pub const MAX_NAME_LENGTH: usize = 100;

/// Generate an ID for a donor created during the session.
/// Format: `donor::<uuid v4>`
pub fn generate_donor_id() -> String {
    format!("donor::{}", Uuid::new_v4())
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DonorValidationError {
    #[error("Donor name cannot be empty")]
    EmptyName,
    #[error("Donor name cannot exceed 100 characters")]
    NameTooLong,
    #[error("Invalid email address: {0}")]
    InvalidEmail(String),
    #[error("Phone number cannot be empty")]
    EmptyPhone,
}

pub fn validate_name(name: &str) -> Result<(), DonorValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(DonorValidationError::EmptyName);
    }
    if trimmed.chars().count() > MAX_NAME_LENGTH {
        return Err(DonorValidationError::NameTooLong);
    }
    Ok(())
}

/// Email is optional; when given it must contain an `@`
pub fn validate_email(email: &str) -> Result<(), DonorValidationError> {
    let trimmed = email.trim();
    if trimmed.is_empty() || trimmed.contains('@') {
        Ok(())
    } else {
        Err(DonorValidationError::InvalidEmail(trimmed.to_string()))
    }
}

pub fn validate_phone(phone: &str) -> Result<(), DonorValidationError> {
    if phone.trim().is_empty() {
        return Err(DonorValidationError::EmptyPhone);
    }
    Ok(())
}
