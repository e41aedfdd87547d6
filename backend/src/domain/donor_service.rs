use anyhow::{anyhow, Result};
use shared::{DeleteDonorResponse, Donor, DonorDetailsResponse, DonorListResponse, DonorResponse};
use tracing::{info, warn};

use crate::domain::commands::donors::{CreateDonorCommand, ListDonorsQuery, UpdateDonorCommand};
use crate::domain::filters;
use crate::domain::models::donor::{generate_donor_id, validate_email, validate_name, validate_phone};
use crate::storage::traits::{Connection, DonationStorage, DonorStorage};

/// Service for managing the temple's donors
pub struct DonorService<C: Connection> {
    donor_repository: C::DonorRepository,
    donation_repository: C::DonationRepository,
}

impl<C: Connection> DonorService<C> {
    pub fn new(connection: &C) -> Self {
        Self {
            donor_repository: connection.create_donor_repository(),
            donation_repository: connection.create_donation_repository(),
        }
    }

    /// List donors matching the search term, in store order
    pub fn list_donors(&self, query: ListDonorsQuery) -> Result<DonorListResponse> {
        let donors = self.donor_repository.list_donors()?;
        let donors = filters::search_donors(&donors, &query.search);
        info!("Listing donors: search={:?}, found {}", query.search, donors.len());
        Ok(DonorListResponse { donors })
    }

    pub fn get_donor(&self, donor_id: &str) -> Result<Option<Donor>> {
        let donor = self.donor_repository.get_donor(donor_id)?;
        if donor.is_none() {
            warn!("Donor not found: {}", donor_id);
        }
        Ok(donor)
    }

    /// A donor with every donation recorded against them
    pub fn get_donor_details(&self, donor_id: &str) -> Result<DonorDetailsResponse> {
        let donor = self
            .donor_repository
            .get_donor(donor_id)?
            .ok_or_else(|| anyhow!("Donor not found: {}", donor_id))?;
        let donations = self.donation_repository.list_donations_for_donor(donor_id)?;
        Ok(DonorDetailsResponse { donor, donations })
    }

    /// Validate a new donor and return the record it would become. The
    /// store is read-only for the session, so nothing is saved.
    pub fn create_donor(&self, command: CreateDonorCommand) -> Result<DonorResponse> {
        info!("Creating donor: name={}", command.name);

        validate_name(&command.name)?;
        validate_email(&command.email)?;
        validate_phone(&command.phone)?;

        let donor = Donor {
            id: generate_donor_id(),
            name: command.name.trim().to_string(),
            email: command.email.trim().to_string(),
            phone: command.phone.trim().to_string(),
            address: command.address.trim().to_string(),
            total_donations: 0.0,
            // No donation yet; never matches a date filter
            last_donation: String::new(),
        };
        info!("Built donor: {} with ID: {}", donor.name, donor.id);

        Ok(DonorResponse {
            success_message: format!("New donor {} has been added", donor.name),
            donor,
        })
    }

    /// Apply the changes to a copy of the stored donor and return it
    pub fn update_donor(&self, donor_id: &str, command: UpdateDonorCommand) -> Result<DonorResponse> {
        info!("Updating donor: {}", donor_id);

        let mut donor = self
            .donor_repository
            .get_donor(donor_id)?
            .ok_or_else(|| anyhow!("Donor not found: {}", donor_id))?;

        if let Some(name) = command.name {
            validate_name(&name)?;
            donor.name = name.trim().to_string();
        }
        if let Some(email) = command.email {
            validate_email(&email)?;
            donor.email = email.trim().to_string();
        }
        if let Some(phone) = command.phone {
            validate_phone(&phone)?;
            donor.phone = phone.trim().to_string();
        }
        if let Some(address) = command.address {
            donor.address = address.trim().to_string();
        }

        Ok(DonorResponse {
            success_message: format!("Donor {} has been updated", donor.name),
            donor,
        })
    }

    /// Confirm a donor exists and report the deletion. The donor and their
    /// donation records stay in the store.
    pub fn delete_donor(&self, donor_id: &str) -> Result<DeleteDonorResponse> {
        info!("Deleting donor: {}", donor_id);

        if self.donor_repository.get_donor(donor_id)?.is_none() {
            warn!("Donor not found: {}", donor_id);
            return Err(anyhow!("Donor not found: {}", donor_id));
        }

        Ok(DeleteDonorResponse {
            donor_id: donor_id.to_string(),
            success_message: format!("Donor with ID {} has been deleted", donor_id),
        })
    }
}
