use anyhow::{Context, Result};
use csv::Reader;
use serde::{Deserialize, Serialize};
use shared::{DonationPurpose, DonationRecord, Donor, PaymentMethod};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::storage::memory::MemoryConnection;

pub const DONORS_FILE: &str = "donors.csv";
pub const DONATIONS_FILE: &str = "donations.csv";

/// One line of `donors.csv`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct DonorRow {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub total_donations: f64,
    pub last_donation: String,
}

impl From<DonorRow> for Donor {
    fn from(row: DonorRow) -> Self {
        Donor {
            id: row.id,
            name: row.name,
            email: row.email,
            phone: row.phone,
            address: row.address,
            total_donations: row.total_donations,
            last_donation: row.last_donation,
        }
    }
}

impl From<&Donor> for DonorRow {
    fn from(donor: &Donor) -> Self {
        DonorRow {
            id: donor.id.clone(),
            name: donor.name.clone(),
            email: donor.email.clone(),
            phone: donor.phone.clone(),
            address: donor.address.clone(),
            total_donations: donor.total_donations,
            last_donation: donor.last_donation.clone(),
        }
    }
}

/// One line of `donations.csv`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct DonationRow {
    pub id: String,
    pub donor_id: String,
    pub donor_name: String,
    pub amount: f64,
    pub date: String,
    #[serde(rename = "type")]
    pub donation_type: String,
    pub payment_method: PaymentMethod,
    pub purpose: DonationPurpose,
    pub receipt_number: String,
}

impl From<DonationRow> for DonationRecord {
    fn from(row: DonationRow) -> Self {
        DonationRecord {
            id: row.id,
            donor_id: row.donor_id,
            donor_name: row.donor_name,
            amount: row.amount,
            date: row.date,
            donation_type: row.donation_type,
            payment_method: row.payment_method,
            purpose: row.purpose,
            receipt_number: row.receipt_number,
        }
    }
}

impl From<&DonationRecord> for DonationRow {
    fn from(record: &DonationRecord) -> Self {
        DonationRow {
            id: record.id.clone(),
            donor_id: record.donor_id.clone(),
            donor_name: record.donor_name.clone(),
            amount: record.amount,
            date: record.date.clone(),
            donation_type: record.donation_type.clone(),
            payment_method: record.payment_method,
            purpose: record.purpose,
            receipt_number: record.receipt_number.clone(),
        }
    }
}

/// Read-only CSV source for donors and donation records.
///
/// Expects `donors.csv` and `donations.csv` in one data directory. A missing
/// file is read as an empty collection.
#[derive(Debug, Clone)]
pub struct CsvDataSource {
    base_directory: PathBuf,
}

impl CsvDataSource {
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Self {
        Self {
            base_directory: base_directory.as_ref().to_path_buf(),
        }
    }

    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    pub fn donors_file_path(&self) -> PathBuf {
        self.base_directory.join(DONORS_FILE)
    }

    pub fn donations_file_path(&self) -> PathBuf {
        self.base_directory.join(DONATIONS_FILE)
    }

    pub fn load_donors(&self) -> Result<Vec<Donor>> {
        let rows: Vec<DonorRow> = read_rows(&self.donors_file_path())?;
        Ok(rows.into_iter().map(Donor::from).collect())
    }

    pub fn load_donations(&self) -> Result<Vec<DonationRecord>> {
        let rows: Vec<DonationRow> = read_rows(&self.donations_file_path())?;
        Ok(rows.into_iter().map(DonationRecord::from).collect())
    }

    /// Load both files into a fresh session store
    pub fn load_into_memory(&self) -> Result<MemoryConnection> {
        let donors = self.load_donors()?;
        let donations = self.load_donations()?;
        info!(
            "Loaded {} donors and {} donations from {}",
            donors.len(),
            donations.len(),
            self.base_directory.display()
        );
        Ok(MemoryConnection::from_records(donors, donations))
    }
}

fn read_rows<T>(path: &Path) -> Result<Vec<T>>
where
    T: for<'de> Deserialize<'de>,
{
    if !path.exists() {
        warn!("Data file not found, treating as empty: {}", path.display());
        return Ok(Vec::new());
    }

    let mut reader = Reader::from_path(path)
        .with_context(|| format!("Failed to open {}", path.display()))?;

    let mut rows = Vec::new();
    for (index, result) in reader.deserialize().enumerate() {
        // +2: header line plus 1-based numbering
        let row: T = result.with_context(|| {
            format!("Invalid record on line {} of {}", index + 2, path.display())
        })?;
        rows.push(row);
    }
    Ok(rows)
}
