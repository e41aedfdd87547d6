pub mod date_range;
pub mod donation;
pub mod donor;

pub use date_range::{DateRange, DateRangeError};
pub use donation::DonationValidationError;
pub use donor::DonorValidationError;
