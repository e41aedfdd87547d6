use anyhow::Result;
use shared::{DashboardSummary, DonorReportResponse, PaymentReportResponse};
use tracing::info;

use crate::domain::aggregation;
use crate::domain::commands::reports::{DonorReportQuery, PaymentReportQuery};
use crate::domain::filters;
use crate::storage::traits::{Connection, DonationStorage, DonorStorage};

/// Assembles the donor report, the payment report and the dashboard figures
/// from the current contents of the store.
pub struct ReportService<C: Connection> {
    donor_repository: C::DonorRepository,
    donation_repository: C::DonationRepository,
}

impl<C: Connection> ReportService<C> {
    pub fn new(connection: &C) -> Self {
        Self {
            donor_repository: connection.create_donor_repository(),
            donation_repository: connection.create_donation_repository(),
        }
    }

    /// Search, then restrict by last donation date, then sort
    pub fn donor_report(&self, query: DonorReportQuery) -> Result<DonorReportResponse> {
        let donors = self.donor_repository.list_donors()?;

        let matching = filters::search_donors(&donors, &query.search);
        let in_range = filters::filter_donors_by_last_donation(&matching, &query.last_donation);
        let sorted = filters::sort_donors(&in_range, query.sort_by);

        let total_donations: f64 = sorted.iter().map(|d| d.total_donations).sum();
        let average_donation = if sorted.is_empty() {
            0.0
        } else {
            (total_donations / sorted.len() as f64).round()
        };
        info!(
            "Donor report: {} of {} donors (sort {:?})",
            sorted.len(),
            donors.len(),
            query.sort_by
        );

        Ok(DonorReportResponse {
            total_donors: sorted.len(),
            total_donations,
            average_donation,
            donors: sorted,
        })
    }

    /// Charts cover every record; the table and summary cover the filtered set
    pub fn payment_report(&self, query: PaymentReportQuery) -> Result<PaymentReportResponse> {
        let records = self.donation_repository.list_donations()?;

        let monthly_totals = aggregation::monthly_totals(&records);
        let type_distribution = aggregation::type_distribution(&records);
        let donations = filters::filter_donations(&records, &query.filter);
        let summary = aggregation::summary_statistics(&donations);

        info!(
            "Payment report: {} of {} donations, total {}",
            summary.count,
            records.len(),
            summary.total_amount
        );

        Ok(PaymentReportResponse {
            monthly_totals,
            type_distribution,
            donations,
            summary,
        })
    }

    pub fn dashboard_summary(&self) -> Result<DashboardSummary> {
        let donors = self.donor_repository.list_donors()?;
        let donations = self.donation_repository.list_donations()?;
        Ok(aggregation::dashboard_summary(&donors, &donations))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::filters::DonationFilter;
    use crate::domain::models::DateRange;
    use crate::storage::memory::MemoryConnection;
    use chrono::NaiveDate;
    use shared::{DonorSortOrder, PaymentMethod, PaymentMethodFilter};

    fn setup_test() -> ReportService<MemoryConnection> {
        ReportService::new(&MemoryConnection::with_seed_data())
    }

    fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, d)
    }

    #[test]
    fn test_default_donor_report() {
        let report = setup_test().donor_report(DonorReportQuery::default()).unwrap();

        assert_eq!(report.total_donors, 5);
        assert_eq!(report.total_donations, 165000.0);
        assert_eq!(report.average_donation, 33000.0);
        assert_eq!(report.donors[0].name, "Amit Singh");
    }

    #[test]
    fn test_donor_report_combines_filters() {
        let query = DonorReportQuery {
            search: "example.com".to_string(),
            last_donation: DateRange::new(date(2023, 5, 1), date(2023, 12, 31)),
            sort_by: DonorSortOrder::TotalDonations,
        };
        let report = setup_test().donor_report(query).unwrap();

        let names: Vec<&str> = report.donors.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Vikram Mehta", "Sunita Desai", "Rajesh Sharma", "Priya Patel"]
        );
        assert_eq!(report.total_donations, 115000.0);
        assert_eq!(report.average_donation, 28750.0);
    }

    #[test]
    fn test_donor_report_average_is_rounded() {
        let query = DonorReportQuery {
            last_donation: DateRange::new(date(2023, 5, 1), date(2023, 7, 31)),
            ..Default::default()
        };
        let report = setup_test().donor_report(query).unwrap();

        // Rajesh 25000, Priya 15000, Sunita 30000
        assert_eq!(report.total_donors, 3);
        assert_eq!(report.total_donations, 70000.0);
        assert_eq!(report.average_donation, 23333.0);
    }

    #[test]
    fn test_donor_report_with_no_match() {
        let query = DonorReportQuery {
            search: "nobody".to_string(),
            ..Default::default()
        };
        let report = setup_test().donor_report(query).unwrap();
        assert_eq!(report.total_donors, 0);
        assert_eq!(report.total_donations, 0.0);
        assert_eq!(report.average_donation, 0.0);
    }

    #[test]
    fn test_unfiltered_payment_report_summary() {
        let report = setup_test().payment_report(PaymentReportQuery::default()).unwrap();

        assert_eq!(report.summary.count, 7);
        assert_eq!(report.summary.total_amount, 68500.0);
        assert!((report.summary.average_amount - 9785.71).abs() < 0.01);
        assert_eq!(report.monthly_totals.len(), 12);
        assert_eq!(report.type_distribution.len(), 7);
    }

    #[test]
    fn test_payment_report_charts_ignore_filter() {
        let query = PaymentReportQuery {
            filter: DonationFilter {
                range: DateRange::unbounded(),
                payment_method: PaymentMethodFilter::Method(PaymentMethod::Cash),
            },
        };
        let report = setup_test().payment_report(query).unwrap();

        assert_eq!(report.summary.count, 2);
        assert_eq!(report.summary.total_amount, 11000.0);
        assert_eq!(report.summary.average_amount, 5500.0);

        let chart_total: f64 = report.monthly_totals.iter().map(|m| m.total_amount).sum();
        assert_eq!(chart_total, 68500.0);
        let distribution_total: f64 = report.type_distribution.iter().map(|t| t.total_amount).sum();
        assert_eq!(distribution_total, 68500.0);
    }

    #[test]
    fn test_payment_report_with_empty_result() {
        let query = PaymentReportQuery {
            filter: DonationFilter {
                range: DateRange::new(date(2024, 1, 1), None),
                payment_method: PaymentMethodFilter::All,
            },
        };
        let report = setup_test().payment_report(query).unwrap();

        assert!(report.donations.is_empty());
        assert_eq!(report.summary.count, 0);
        assert_eq!(report.summary.average_amount, 0.0);
    }

    #[test]
    fn test_dashboard_summary() {
        let summary = setup_test().dashboard_summary().unwrap();
        assert_eq!(summary.total_donors, 5);
        assert_eq!(summary.total_donation_amount, 68500.0);
        assert!((summary.average_donation - 9785.714).abs() < 0.001);
    }
}
