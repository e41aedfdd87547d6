//! # Domain Module
//!
//! Business logic of the temple donation office: donor records, donation
//! entry with receipts, and the reports built on top of them.
//!
//! ## Module Organization
//!
//! - **aggregation**: Monthly totals, type distribution and summary figures
//! - **filters**: Donor search, date range filters and donor sorting
//! - **labels**: English and Hindi display labels
//! - **donor_service**: Donor CRUD and validation
//! - **donation_service**: Donation entry and receipt numbering
//! - **receipt_service**: Receipt rendering, simulated download and print
//! - **report_service**: Donor report, payment report and dashboard figures
//! - **export_service**: CSV export of the reports and simulated PDF export
//!
//! ## Business Rules
//!
//! - Donor names are required and at most 100 characters long
//! - Donation amounts are positive and at most ₹10,000,000
//! - A donation without a selected donor is recorded as "Anonymous"
//! - Date bounds are inclusive; a missing bound imposes no constraint
//! - Report charts cover every donation, the summary only the filtered ones
//! - Donor and donation entry validate and return the new record; the loaded
//!   records are never changed during a session
//!
//! Aggregation and filtering are pure functions over borrowed slices. The
//! services read through the storage traits and work with any `Connection`.

pub mod aggregation;
pub mod commands;
pub mod donation_service;
pub mod donor_service;
pub mod export_service;
pub mod filters;
pub mod labels;
pub mod models;
pub mod receipt_service;
pub mod report_service;

pub use donation_service::DonationService;
pub use donor_service::DonorService;
pub use export_service::{ExportService, PdfDocument, PdfExportOutcome};
pub use filters::DonationFilter;
pub use receipt_service::{ReceiptAction, ReceiptOutcome, ReceiptService};
pub use report_service::ReportService;
