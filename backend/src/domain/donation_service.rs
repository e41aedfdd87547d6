//! Donation entry: validating the donation form, building the donation record
//! and issuing the receipt.
//!
//! The record store is read-only for the session. Recording a donation hands
//! the new record back to the caller instead of saving it, so reports keep
//! showing the loaded data.
use anyhow::Result;
use chrono::{DateTime, Utc};
use shared::{
    parse_iso_date, DonationReceipt, DonationRecord, RecordDonationResponse, ISO_DATE_FORMAT,
};
use tracing::{debug, info};

use crate::domain::commands::donations::RecordDonationCommand;
use crate::domain::models::donation::{
    generate_donation_id, generate_receipt_number, parse_amount, DonationValidationError,
    ANONYMOUS_DONOR,
};
use crate::domain::receipt_service::format_rupees;
use crate::storage::traits::{Connection, DonationStorage, DonorStorage};

pub struct DonationService<C: Connection> {
    donor_repository: C::DonorRepository,
    donation_repository: C::DonationRepository,
}

impl<C: Connection> DonationService<C> {
    pub fn new(connection: &C) -> Self {
        Self {
            donor_repository: connection.create_donor_repository(),
            donation_repository: connection.create_donation_repository(),
        }
    }

    pub fn list_donations(&self) -> Result<Vec<DonationRecord>> {
        self.donation_repository.list_donations()
    }

    pub fn record_donation(&self, command: RecordDonationCommand) -> Result<RecordDonationResponse> {
        self.record_donation_at(command, Utc::now())
    }

    /// Validate the donation form as of `now`, which stamps the receipt number and is
    /// the default donation date.
    pub fn record_donation_at(
        &self,
        command: RecordDonationCommand,
        now: DateTime<Utc>,
    ) -> Result<RecordDonationResponse> {
        let donation_type = command.donation_type.trim();
        if donation_type.is_empty() {
            return Err(DonationValidationError::MissingType.into());
        }
        let purpose = command.purpose.ok_or(DonationValidationError::MissingPurpose)?;
        let payment_method = command
            .payment_method
            .ok_or(DonationValidationError::MissingPaymentMethod)?;
        let amount = parse_amount(&command.amount)?;

        let date = match command.date.as_deref().map(str::trim) {
            None | Some("") => now.date_naive(),
            Some(raw) => parse_iso_date(raw)
                .ok_or_else(|| DonationValidationError::InvalidDate(raw.to_string()))?,
        };

        let donor = match command.donor_id.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(donor_id) => Some(
                self.donor_repository
                    .get_donor(donor_id)?
                    .ok_or_else(|| DonationValidationError::UnknownDonor(donor_id.to_string()))?,
            ),
        };
        let donor_name = donor
            .as_ref()
            .map_or_else(|| ANONYMOUS_DONOR.to_string(), |d| d.name.clone());

        let now_millis = u64::try_from(now.timestamp_millis()).unwrap_or_default();
        let record = DonationRecord {
            id: generate_donation_id(),
            donor_id: donor.as_ref().map(|d| d.id.clone()).unwrap_or_default(),
            donor_name: donor_name.clone(),
            amount,
            date: date.format(ISO_DATE_FORMAT).to_string(),
            donation_type: donation_type.to_string(),
            payment_method,
            purpose,
            receipt_number: generate_receipt_number(now_millis),
        };

        if let Some(notes) = command.notes.as_deref().filter(|n| !n.trim().is_empty()) {
            debug!("Donation {} notes: {}", record.id, notes);
        }

        info!(
            "Recorded donation {} of {} from {} (receipt {})",
            record.id, amount, donor_name, record.receipt_number
        );

        let receipt = DonationReceipt {
            receipt_number: record.receipt_number.clone(),
            donor_name: donor_name.clone(),
            amount,
            date: record.date.clone(),
            purpose,
            payment_method,
            donation_type: record.donation_type.clone(),
        };

        Ok(RecordDonationResponse {
            success_message: format!(
                "Donation of ₹{} from {} has been recorded",
                format_rupees(amount),
                donor_name
            ),
            donation: record,
            receipt,
        })
    }
}
