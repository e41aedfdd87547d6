//! Donation receipts: plain-text rendering in the display language and the
//! download/print actions of the receipt screen.
//!
//! Download and print are simulated. They return a [`ReceiptOutcome`] with
//! the message the caller should show; notifying the user is the caller's job.

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use shared::{parse_iso_date, DonationReceipt, Language};
use tracing::info;

use crate::domain::labels::{label, payment_method_label, purpose_label, LabelKey};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReceiptAction {
    Download,
    Print,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptOutcome {
    pub receipt_number: String,
    pub action: ReceiptAction,
    pub message: String,
}

/// Format an amount the way receipts show it: thousands separated by commas,
/// paise only when the amount is fractional.
pub fn format_rupees(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let abs = amount.abs();
    let mut whole = abs.trunc() as u64;
    let mut paise = ((abs - abs.trunc()) * 100.0).round() as u64;
    if paise == 100 {
        whole += 1;
        paise = 0;
    }

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if paise > 0 {
        format!("{}{}.{:02}", sign, grouped, paise)
    } else {
        format!("{}{}", sign, grouped)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ReceiptService {
    language: Language,
}

impl ReceiptService {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn render_text(&self, receipt: &DonationReceipt) -> String {
        self.render_text_in(receipt, self.language)
    }

    pub fn render_text_in(&self, receipt: &DonationReceipt, language: Language) -> String {
        let date = parse_iso_date(&receipt.date)
            .map(|d| d.format("%B %-d, %Y").to_string())
            .unwrap_or_else(|| receipt.date.clone());

        let rows = [
            (LabelKey::ReceiptNumber, receipt.receipt_number.clone()),
            (LabelKey::Date, date),
            (LabelKey::DonorName, receipt.donor_name.clone()),
            (LabelKey::DonationType, receipt.donation_type.clone()),
            (
                LabelKey::Purpose,
                purpose_label(receipt.purpose, language).to_string(),
            ),
            (
                LabelKey::PaymentMethod,
                payment_method_label(receipt.payment_method, language).to_string(),
            ),
            (LabelKey::Amount, format!("₹{}", format_rupees(receipt.amount))),
        ];

        let mut text = String::new();
        text.push_str(label(LabelKey::DonationReceipt, language));
        text.push('\n');
        text.push_str(label(LabelKey::TempleTitle, language));
        text.push('\n');
        for (key, value) in rows {
            text.push_str(&format!("{}: {}\n", label(key, language), value));
        }
        text.push_str(label(LabelKey::ThankYou, language));
        text.push('\n');
        text
    }

    pub fn download(&self, receipt: &DonationReceipt) -> Result<ReceiptOutcome> {
        self.outcome(receipt, ReceiptAction::Download)
    }

    pub fn print(&self, receipt: &DonationReceipt) -> Result<ReceiptOutcome> {
        self.outcome(receipt, ReceiptAction::Print)
    }

    fn outcome(&self, receipt: &DonationReceipt, action: ReceiptAction) -> Result<ReceiptOutcome> {
        if receipt.receipt_number.trim().is_empty() {
            return Err(anyhow!("Receipt has no receipt number"));
        }
        let message = match action {
            ReceiptAction::Download => {
                format!("Receipt {} downloaded as PDF", receipt.receipt_number)
            }
            ReceiptAction::Print => format!("Receipt {} sent to printer", receipt.receipt_number),
        };
        info!("{}", message);
        Ok(ReceiptOutcome {
            receipt_number: receipt.receipt_number.clone(),
            action,
            message,
        })
    }
}
