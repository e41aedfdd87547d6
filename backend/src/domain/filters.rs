//! Filter and sort layer for the donor and payment reports.
//!
//! Every function borrows its input and returns a new vector; the source
//! collection is never reordered or modified.

use shared::{DonationRecord, Donor, DonorSortOrder, PaymentMethodFilter};
use std::cmp::Ordering;

use crate::domain::models::DateRange;

/// Search predicate of the donor list: name or email contain the term
/// ignoring case, or the phone number contains it verbatim.
pub fn matches_search(donor: &Donor, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    donor.name.to_lowercase().contains(&needle)
        || donor.email.to_lowercase().contains(&needle)
        || donor.phone.contains(term)
}

pub fn search_donors(donors: &[Donor], term: &str) -> Vec<Donor> {
    donors
        .iter()
        .filter(|donor| matches_search(donor, term))
        .cloned()
        .collect()
}

/// Donors whose `last_donation` falls inside `range`
pub fn filter_donors_by_last_donation(donors: &[Donor], range: &DateRange) -> Vec<Donor> {
    donors
        .iter()
        .filter(|donor| range.contains_iso(&donor.last_donation))
        .cloned()
        .collect()
}

/// Filter of the payment report
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DonationFilter {
    pub range: DateRange,
    pub payment_method: PaymentMethodFilter,
}

impl DonationFilter {
    pub fn matches(&self, record: &DonationRecord) -> bool {
        self.range.contains_iso(&record.date) && self.payment_method.matches(record.payment_method)
    }
}

pub fn filter_donations(records: &[DonationRecord], filter: &DonationFilter) -> Vec<DonationRecord> {
    records
        .iter()
        .filter(|record| filter.matches(record))
        .cloned()
        .collect()
}

/// Collation used for donor names: case-insensitive first, then a
/// case-sensitive tie-break so the order is total.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Return a sorted copy of `donors`. The sort is stable, so donors with
/// equal keys keep their relative order.
pub fn sort_donors(donors: &[Donor], order: DonorSortOrder) -> Vec<Donor> {
    let mut sorted = donors.to_vec();
    match order {
        DonorSortOrder::Name => sorted.sort_by(|a, b| compare_names(&a.name, &b.name)),
        DonorSortOrder::TotalDonations => {
            sorted.sort_by(|a, b| b.total_donations.total_cmp(&a.total_donations))
        }
        // Unparseable dates sort last
        DonorSortOrder::LastDonation => {
            sorted.sort_by(|a, b| b.last_donation_date().cmp(&a.last_donation_date()))
        }
    }
    sorted
}
