//! # In-Memory Record Store
//!
//! Session-scoped storage backing every service. The collections are fixed
//! when the store is created; repositories only read them, so handles can be
//! shared between views without locking.

pub mod seed;

use anyhow::Result;
use shared::{DonationRecord, Donor};
use std::sync::Arc;
use tracing::debug;

use crate::storage::traits::{Connection, DonationStorage, DonorStorage};

/// Shared handle to the session's donors and donation records
#[derive(Clone, Default)]
pub struct MemoryConnection {
    donors: Arc<Vec<Donor>>,
    donations: Arc<Vec<DonationRecord>>,
}

impl MemoryConnection {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the temple's sample data
    pub fn with_seed_data() -> Self {
        Self::from_records(seed::seed_donors(), seed::seed_donations())
    }

    /// Create a store from records supplied by another data source
    pub fn from_records(donors: Vec<Donor>, donations: Vec<DonationRecord>) -> Self {
        debug!(
            "Creating in-memory store with {} donors and {} donations",
            donors.len(),
            donations.len()
        );
        Self {
            donors: Arc::new(donors),
            donations: Arc::new(donations),
        }
    }
}

impl Connection for MemoryConnection {
    type DonorRepository = MemoryDonorRepository;
    type DonationRepository = MemoryDonationRepository;

    fn create_donor_repository(&self) -> Self::DonorRepository {
        MemoryDonorRepository {
            donors: Arc::clone(&self.donors),
        }
    }

    fn create_donation_repository(&self) -> Self::DonationRepository {
        MemoryDonationRepository {
            donations: Arc::clone(&self.donations),
        }
    }
}

#[derive(Clone)]
pub struct MemoryDonorRepository {
    donors: Arc<Vec<Donor>>,
}

impl DonorStorage for MemoryDonorRepository {
    fn get_donor(&self, donor_id: &str) -> Result<Option<Donor>> {
        Ok(self.donors.iter().find(|d| d.id == donor_id).cloned())
    }

    fn list_donors(&self) -> Result<Vec<Donor>> {
        Ok(self.donors.to_vec())
    }
}

#[derive(Clone)]
pub struct MemoryDonationRepository {
    donations: Arc<Vec<DonationRecord>>,
}

impl DonationStorage for MemoryDonationRepository {
    fn list_donations(&self) -> Result<Vec<DonationRecord>> {
        Ok(self.donations.to_vec())
    }

    fn list_donations_for_donor(&self, donor_id: &str) -> Result<Vec<DonationRecord>> {
        Ok(self
            .donations
            .iter()
            .filter(|d| d.donor_id == donor_id)
            .cloned()
            .collect())
    }
}
