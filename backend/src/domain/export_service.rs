//! CSV export of the donor and payment reports, plus the PDF actions of the
//! donor list, donor details and report screens.
//!
//! The service works on responses that were already assembled by the other
//! services, so an export always matches what the office sees on screen.
//! PDF generation is simulated: each PDF action returns a [`PdfExportOutcome`]
//! carrying the message the caller should show.

use anyhow::{anyhow, Result};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{error, info};

use shared::{
    DonorDetailsResponse, DonorListResponse, DonorReportResponse, ExportDataResponse,
    ExportToPathResponse, PaymentReportResponse,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PdfDocument {
    DonorList,
    DonorDetails,
    DonorReport,
    PaymentReport,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PdfExportOutcome {
    pub document: PdfDocument,
    /// Donors or donations the document would list
    pub row_count: usize,
    pub message: String,
}

fn pdf_outcome(document: PdfDocument, row_count: usize, message: String) -> PdfExportOutcome {
    info!("{} ({} rows)", message, row_count);
    PdfExportOutcome {
        document,
        row_count,
        message,
    }
}

const DONOR_REPORT_HEADER: [&str; 6] = [
    "name",
    "email",
    "phone",
    "address",
    "total_donations",
    "last_donation",
];

const PAYMENT_REPORT_HEADER: [&str; 7] = [
    "receipt_number",
    "date",
    "donor_name",
    "type",
    "payment_method",
    "purpose",
    "amount",
];

fn dated_filename(prefix: &str, date: NaiveDate) -> String {
    format!("{}_{}.csv", prefix, date.format("%Y%m%d"))
}

fn finish(writer: csv::Writer<Vec<u8>>) -> Result<String> {
    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow!("Failed to flush CSV output: {}", e))?;
    Ok(String::from_utf8(bytes)?)
}

#[derive(Debug, Clone, Default)]
pub struct ExportService;

impl ExportService {
    pub fn new() -> Self {
        Self
    }

    pub fn export_donor_report_csv(&self, report: &DonorReportResponse) -> Result<ExportDataResponse> {
        self.export_donor_report_csv_on(report, Utc::now().date_naive())
    }

    /// Export the donor report, naming the file after `date`
    pub fn export_donor_report_csv_on(
        &self,
        report: &DonorReportResponse,
        date: NaiveDate,
    ) -> Result<ExportDataResponse> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(DONOR_REPORT_HEADER)?;
        for donor in &report.donors {
            writer.write_record([
                donor.name.as_str(),
                donor.email.as_str(),
                donor.phone.as_str(),
                donor.address.as_str(),
                &format!("{:.2}", donor.total_donations),
                donor.last_donation.as_str(),
            ])?;
        }

        let response = ExportDataResponse {
            csv_content: finish(writer)?,
            filename: dated_filename("donor_report", date),
            row_count: report.donors.len(),
        };
        info!(
            "Exported donor report: {} rows ({} bytes) as {}",
            response.row_count,
            response.csv_content.len(),
            response.filename
        );
        Ok(response)
    }

    pub fn export_payment_report_csv(
        &self,
        report: &PaymentReportResponse,
    ) -> Result<ExportDataResponse> {
        self.export_payment_report_csv_on(report, Utc::now().date_naive())
    }

    /// Export the filtered donations of the payment report, naming the file
    /// after `date`
    pub fn export_payment_report_csv_on(
        &self,
        report: &PaymentReportResponse,
        date: NaiveDate,
    ) -> Result<ExportDataResponse> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(PAYMENT_REPORT_HEADER)?;
        for record in &report.donations {
            writer.write_record([
                record.receipt_number.as_str(),
                record.date.as_str(),
                record.donor_name.as_str(),
                record.donation_type.as_str(),
                record.payment_method.label(),
                record.purpose.label(),
                &format!("{:.2}", record.amount),
            ])?;
        }

        let response = ExportDataResponse {
            csv_content: finish(writer)?,
            filename: dated_filename("payment_report", date),
            row_count: report.donations.len(),
        };
        info!(
            "Exported payment report: {} rows ({} bytes) as {}",
            response.row_count,
            response.csv_content.len(),
            response.filename
        );
        Ok(response)
    }

    pub fn export_donor_list_pdf(&self, list: &DonorListResponse) -> PdfExportOutcome {
        pdf_outcome(
            PdfDocument::DonorList,
            list.donors.len(),
            "Donor list exported to PDF".to_string(),
        )
    }

    pub fn download_donor_details_pdf(&self, details: &DonorDetailsResponse) -> PdfExportOutcome {
        pdf_outcome(
            PdfDocument::DonorDetails,
            details.donations.len(),
            format!("Donor details for {} downloaded as PDF", details.donor.name),
        )
    }

    pub fn export_donor_report_pdf(&self, report: &DonorReportResponse) -> PdfExportOutcome {
        pdf_outcome(
            PdfDocument::DonorReport,
            report.donors.len(),
            "Donor reports exported to PDF".to_string(),
        )
    }

    pub fn export_payment_report_pdf(&self, report: &PaymentReportResponse) -> PdfExportOutcome {
        pdf_outcome(
            PdfDocument::PaymentReport,
            report.donations.len(),
            "Payment reports exported to PDF".to_string(),
        )
    }

    /// Write an export into `directory`, creating it if needed.
    ///
    /// File system failures are reported through `success: false` and the
    /// message, not as an error.
    pub fn export_to_path(
        &self,
        export: &ExportDataResponse,
        directory: &Path,
    ) -> ExportToPathResponse {
        if let Err(e) = fs::create_dir_all(directory) {
            error!("Failed to create export directory {:?}: {}", directory, e);
            return ExportToPathResponse {
                success: false,
                message: format!("Failed to create export directory: {}", e),
                file_path: directory.to_string_lossy().to_string(),
                row_count: 0,
            };
        }

        let file_path = directory.join(&export.filename);
        let file_path_str = file_path.to_string_lossy().to_string();
        match fs::write(&file_path, &export.csv_content) {
            Ok(()) => {
                info!("Exported {} rows to {}", export.row_count, file_path_str);
                ExportToPathResponse {
                    success: true,
                    message: format!("File exported successfully to: {}", file_path_str),
                    file_path: file_path_str,
                    row_count: export.row_count,
                }
            }
            Err(e) => {
                error!("Failed to write export file {:?}: {}", file_path, e);
                ExportToPathResponse {
                    success: false,
                    message: format!("Failed to write export file: {}", e),
                    file_path: file_path_str,
                    row_count: 0,
                }
            }
        }
    }
}
