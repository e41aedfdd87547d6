//! Test utilities for CSV fixtures
//!
//! The temporary directory is removed when the environment is dropped, even
//! if the test panics.
use anyhow::Result;
use csv::Writer;
use shared::{DonationRecord, Donor};
use std::path::PathBuf;
use tempfile::TempDir;

use super::connection::{CsvDataSource, DonationRow, DonorRow};

pub struct TestEnvironment {
    /// Kept alive until drop
    _temp_dir: TempDir,
    pub source: CsvDataSource,
    pub base_path: PathBuf,
}

impl TestEnvironment {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let base_path = temp_dir.path().to_path_buf();
        let source = CsvDataSource::new(&base_path);

        Ok(TestEnvironment {
            _temp_dir: temp_dir,
            source,
            base_path,
        })
    }

    pub fn write_donors(&self, donors: &[Donor]) -> Result<()> {
        let mut writer = Writer::from_path(self.source.donors_file_path())?;
        for donor in donors {
            writer.serialize(DonorRow::from(donor))?;
        }
        writer.flush()?;
        Ok(())
    }

    pub fn write_donations(&self, donations: &[DonationRecord]) -> Result<()> {
        let mut writer = Writer::from_path(self.source.donations_file_path())?;
        for donation in donations {
            writer.serialize(DonationRow::from(donation))?;
        }
        writer.flush()?;
        Ok(())
    }
}
