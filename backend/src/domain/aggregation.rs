//! Aggregation engine for the reporting dashboards.
//!
//! Pure functions over donation records: monthly chart buckets, the donation
//! type distribution and summary statistics. Nothing here touches storage;
//! callers pass in whatever slice of records they want aggregated.

use chrono::Datelike;
use shared::{DashboardSummary, DonationRecord, Donor, MonthlyTotal, SummaryStatistics, TypeTotal};
use std::collections::HashMap;
use tracing::warn;

pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Total donated per calendar month, January through December.
///
/// Always returns twelve entries, zero months included. The year is ignored,
/// so March 2023 and March 2024 share one bucket. Records with an
/// unparseable date are left out.
pub fn monthly_totals(records: &[DonationRecord]) -> Vec<MonthlyTotal> {
    let mut buckets = [0.0_f64; 12];

    for record in records {
        match record.donation_date() {
            Some(date) => buckets[date.month0() as usize] += record.amount,
            None => warn!(
                "Skipping donation {} in monthly totals: unparseable date '{}'",
                record.id, record.date
            ),
        }
    }

    MONTH_LABELS
        .iter()
        .zip(buckets)
        .map(|(label, total_amount)| MonthlyTotal {
            month_label: label.to_string(),
            total_amount,
        })
        .collect()
}

/// Total donated per donation type, in the order each type first appears.
pub fn type_distribution(records: &[DonationRecord]) -> Vec<TypeTotal> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut totals: Vec<TypeTotal> = Vec::new();

    for record in records {
        match positions.get(record.donation_type.as_str()) {
            Some(&index) => totals[index].total_amount += record.amount,
            None => {
                positions.insert(record.donation_type.as_str(), totals.len());
                totals.push(TypeTotal {
                    donation_type: record.donation_type.clone(),
                    total_amount: record.amount,
                });
            }
        }
    }

    totals
}

/// Count, total and average of the given records. The average is zero for
/// an empty slice.
pub fn summary_statistics(records: &[DonationRecord]) -> SummaryStatistics {
    let count = records.len();
    let total_amount: f64 = records.iter().map(|r| r.amount).sum();

    SummaryStatistics {
        count,
        total_amount,
        average_amount: average(total_amount, count),
    }
}

/// Home dashboard figures: number of donors and donation totals
pub fn dashboard_summary(donors: &[Donor], donations: &[DonationRecord]) -> DashboardSummary {
    let stats = summary_statistics(donations);
    DashboardSummary {
        total_donors: donors.len(),
        total_donation_amount: stats.total_amount,
        average_donation: stats.average_amount,
    }
}

fn average(total: f64, count: usize) -> f64 {
    if count == 0 {
        0.0
    } else {
        total / count as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::seed::{seed_donations, seed_donors};
    use shared::{DonationPurpose, PaymentMethod};

    fn record(id: &str, amount: f64, date: &str, donation_type: &str) -> DonationRecord {
        DonationRecord {
            id: id.to_string(),
            donor_id: "d1".to_string(),
            donor_name: "Rajesh Sharma".to_string(),
            amount,
            date: date.to_string(),
            donation_type: donation_type.to_string(),
            payment_method: PaymentMethod::Cash,
            purpose: DonationPurpose::GeneralDonation,
            receipt_number: format!("REC-{}", id),
        }
    }

    fn total(records: &[DonationRecord]) -> f64 {
        records.iter().map(|r| r.amount).sum()
    }

    #[test]
    fn test_monthly_totals_two_records() {
        let records = vec![
            record("a", 5000.0, "2023-05-15", "Temple Maintenance"),
            record("b", 8000.0, "2023-03-30", "Education"),
        ];

        let months = monthly_totals(&records);

        assert_eq!(months.len(), 12);
        for (index, month) in months.iter().enumerate() {
            assert_eq!(month.month_label, MONTH_LABELS[index]);
            let expected = match month.month_label.as_str() {
                "Mar" => 8000.0,
                "May" => 5000.0,
                _ => 0.0,
            };
            assert_eq!(month.total_amount, expected, "month {}", month.month_label);
        }
    }

    #[test]
    fn test_monthly_totals_empty_input_has_twelve_zero_buckets() {
        let months = monthly_totals(&[]);
        assert_eq!(months.len(), 12);
        assert!(months.iter().all(|m| m.total_amount == 0.0));
    }

    #[test]
    fn test_monthly_totals_collapse_years() {
        let records = vec![
            record("a", 100.0, "2022-03-01", "Pooja"),
            record("b", 250.0, "2024-03-31", "Pooja"),
        ];
        let months = monthly_totals(&records);
        assert_eq!(months[2].total_amount, 350.0);
    }

    #[test]
    fn test_monthly_totals_conserve_seed_total() {
        let records = seed_donations();
        let months = monthly_totals(&records);
        let bucketed: f64 = months.iter().map(|m| m.total_amount).sum();
        assert_eq!(bucketed, total(&records));
        assert_eq!(months[1].total_amount, 20000.0); // Feb
        assert_eq!(months[7].total_amount, 15000.0); // Aug
    }

    #[test]
    fn test_monthly_totals_skip_unparseable_dates() {
        let records = vec![
            record("a", 100.0, "2023-01-05", "Pooja"),
            record("b", 999.0, "sometime", "Pooja"),
        ];
        let months = monthly_totals(&records);
        let bucketed: f64 = months.iter().map(|m| m.total_amount).sum();
        assert_eq!(bucketed, 100.0);
    }

    #[test]
    fn test_type_distribution_first_seen_order() {
        let records = vec![
            record("a", 100.0, "2023-01-05", "Pooja"),
            record("b", 200.0, "2023-01-06", "Charity"),
            record("c", 300.0, "2023-01-07", "Pooja"),
            record("d", 50.0, "2023-01-08", "pooja"),
        ];

        let distribution = type_distribution(&records);

        let types: Vec<&str> = distribution.iter().map(|t| t.donation_type.as_str()).collect();
        assert_eq!(types, vec!["Pooja", "Charity", "pooja"]);
        assert_eq!(distribution[0].total_amount, 400.0);
        assert_eq!(distribution[1].total_amount, 200.0);
        assert_eq!(distribution[2].total_amount, 50.0);
    }

    #[test]
    fn test_type_distribution_conserves_total() {
        let records = seed_donations();
        let distribution = type_distribution(&records);
        let grouped: f64 = distribution.iter().map(|t| t.total_amount).sum();
        assert_eq!(grouped, total(&records));
        assert_eq!(distribution.len(), 7);
        assert_eq!(distribution[0].donation_type, "Temple Maintenance");
        assert!(type_distribution(&[]).is_empty());
    }

    #[test]
    fn test_summary_statistics_empty() {
        let stats = summary_statistics(&[]);
        assert_eq!(
            stats,
            SummaryStatistics {
                count: 0,
                total_amount: 0.0,
                average_amount: 0.0
            }
        );
    }

    #[test]
    fn test_summary_statistics_seed() {
        let stats = summary_statistics(&seed_donations());
        assert_eq!(stats.count, 7);
        assert_eq!(stats.total_amount, 68500.0);
        assert!((stats.average_amount - 9785.714285714286).abs() < 1e-9);
        assert!((stats.total_amount - stats.count as f64 * stats.average_amount).abs() < 1e-6);
    }

    #[test]
    fn test_summary_statistics_total_matches_average() {
        let records = vec![
            record("a", 0.1, "2023-01-05", "Pooja"),
            record("b", 0.2, "2023-01-06", "Pooja"),
            record("c", 1234.56, "2023-01-07", "Pooja"),
        ];
        let stats = summary_statistics(&records);
        assert!((stats.total_amount - stats.count as f64 * stats.average_amount).abs() < 1e-9);
    }

    #[test]
    fn test_dashboard_summary() {
        let summary = dashboard_summary(&seed_donors(), &seed_donations());
        assert_eq!(summary.total_donors, 5);
        assert_eq!(summary.total_donation_amount, 68500.0);

        let empty = dashboard_summary(&[], &[]);
        assert_eq!(empty.average_donation, 0.0);
    }
}
