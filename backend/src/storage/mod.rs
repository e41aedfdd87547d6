//! # Storage Module
//!
//! Record sources for donors and donation records.
//!
//! - **memory**: the session store every service reads from, seeded with the
//!   temple's sample data by default
//! - **csv**: a read-only data source that loads `donors.csv` and
//!   `donations.csv` from a data directory into the session store
//! - **traits**: the repository abstraction the domain layer depends on

pub mod csv;
pub mod memory;
pub mod traits;

pub use self::csv::CsvDataSource;
pub use self::memory::MemoryConnection;
pub use self::traits::*;
