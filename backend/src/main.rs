use anyhow::Result;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use temple_donations::domain::commands::reports::PaymentReportQuery;
use temple_donations::domain::labels::{label, LabelKey};
use temple_donations::{initialize_backend, AppConfig};

fn main() -> Result<()> {
    let config = AppConfig::load()?;

    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("Starting temple donations backend");
    let backend = initialize_backend(&config)?;
    let language = config.language;

    let dashboard = backend.report_service.dashboard_summary()?;
    info!(
        "{}: {}, {}: ₹{:.2}, {}: ₹{:.2}",
        label(LabelKey::TotalDonors, language),
        dashboard.total_donors,
        label(LabelKey::TotalDonations, language),
        dashboard.total_donation_amount,
        label(LabelKey::AverageDonation, language),
        dashboard.average_donation
    );

    let report = backend
        .report_service
        .payment_report(PaymentReportQuery::default())?;
    for month in &report.monthly_totals {
        info!("{}: ₹{:.2}", month.month_label, month.total_amount);
    }
    for entry in &report.type_distribution {
        info!("{}: ₹{:.2}", entry.donation_type, entry.total_amount);
    }
    debug!("Payment report: {}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
