//! # CSV Data Source
//!
//! Loads donors and donation records from CSV files so the session store can
//! start from real office data instead of the sample set.
//!
//! ## File Structure
//!
//! ```text
//! data/
//! ├── donors.csv       id,name,email,phone,address,total_donations,last_donation
//! └── donations.csv    id,donor_id,donor_name,amount,date,type,payment_method,purpose,receipt_number
//! ```
//!
//! Payment methods and purposes may be written either as codes
//! (`creditCard`) or as display labels (`Credit Card`).

pub mod connection;

#[cfg(test)]
pub mod test_utils;

pub use connection::CsvDataSource;
