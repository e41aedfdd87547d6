//! # Temple Donations Backend
//!
//! Data core of the temple donation office: donor records, donation entry
//! with receipts, donor and payment reports, and CSV export. Everything runs
//! synchronously against a session store that starts from the built-in
//! sample data or from CSV files in a data directory.

use anyhow::Result;
use tracing::info;

pub mod config;
pub mod domain;
pub mod storage;

pub use config::AppConfig;
pub use storage::{Connection, CsvDataSource, MemoryConnection};

use domain::{DonationService, DonorService, ExportService, ReceiptService, ReportService};

/// Every service of the backend, sharing one connection
pub struct Backend<C: Connection> {
    pub connection: C,
    pub donor_service: DonorService<C>,
    pub donation_service: DonationService<C>,
    pub receipt_service: ReceiptService,
    pub report_service: ReportService<C>,
    pub export_service: ExportService,
}

impl<C: Connection> Backend<C> {
    pub fn new(connection: C, config: &AppConfig) -> Self {
        Self {
            donor_service: DonorService::new(&connection),
            donation_service: DonationService::new(&connection),
            receipt_service: ReceiptService::new(config.language),
            report_service: ReportService::new(&connection),
            export_service: ExportService::new(),
            connection,
        }
    }
}

/// Build the backend over an in-memory store filled from the configured data
/// directory, or from the sample data when none is configured.
pub fn initialize_backend(config: &AppConfig) -> Result<Backend<MemoryConnection>> {
    let connection = match &config.data_directory {
        Some(dir) => {
            info!("Loading donors and donations from {:?}", dir);
            CsvDataSource::new(dir).load_into_memory()?
        }
        None => {
            info!("No data directory configured, starting from sample data");
            MemoryConnection::with_seed_data()
        }
    };
    Ok(Backend::new(connection, config))
}
