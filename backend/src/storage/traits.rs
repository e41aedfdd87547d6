//! # Storage Traits
//!
//! This module defines the storage abstraction traits that allow different
//! record sources to be used interchangeably in the domain layer.

use anyhow::Result;
use shared::{DonationRecord, Donor};

/// Trait defining the interface for donor storage operations
///
/// The domain layer only talks to donors through this trait, so the seeded
/// in-memory store can later be replaced by a real data source without
/// touching the reporting logic. Records are read-only for the session.
pub trait DonorStorage: Send + Sync {
    /// Retrieve a specific donor by ID
    fn get_donor(&self, donor_id: &str) -> Result<Option<Donor>>;

    /// List all donors in insertion order
    fn list_donors(&self) -> Result<Vec<Donor>>;
}

/// Trait defining the interface for donation record storage operations
pub trait DonationStorage: Send + Sync {
    /// List all donation records in insertion order
    fn list_donations(&self) -> Result<Vec<DonationRecord>>;

    /// List the donation records referencing a donor
    fn list_donations_for_donor(&self, donor_id: &str) -> Result<Vec<DonationRecord>>;
}

/// Trait defining the interface for storage connections
///
/// A connection hands out repositories that share the same underlying
/// record set.
pub trait Connection: Send + Sync + Clone {
    /// The type of DonorStorage this connection creates
    type DonorRepository: DonorStorage;

    /// The type of DonationStorage this connection creates
    type DonationRepository: DonationStorage;

    fn create_donor_repository(&self) -> Self::DonorRepository;

    fn create_donation_repository(&self) -> Self::DonationRepository;
}
