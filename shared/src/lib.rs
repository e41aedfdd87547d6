use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// ISO 8601 calendar date format used by every date field in the DTOs.
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse an ISO 8601 calendar date ("2023-05-15").
///
/// Full RFC 3339 timestamps are accepted too; only their date part is kept.
pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, ISO_DATE_FORMAT) {
        return Some(date);
    }
    chrono::DateTime::parse_from_rfc3339(trimmed)
        .ok()
        .map(|dt| dt.date_naive())
}

/// A person or family who donates to the temple.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Donor {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    /// Running total maintained alongside the donor, not recomputed from records
    pub total_donations: f64,
    /// Date of the most recent donation (ISO 8601)
    pub last_donation: String,
}

impl Donor {
    /// Parsed `last_donation`, or `None` when the stored string is malformed
    pub fn last_donation_date(&self) -> Option<NaiveDate> {
        parse_iso_date(&self.last_donation)
    }
}

/// A single donation as recorded at the counter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonationRecord {
    pub id: String,
    /// Weak reference to a `Donor::id`
    pub donor_id: String,
    /// Donor name copied at the time the donation was recorded
    pub donor_name: String,
    pub amount: f64,
    /// Donation date (ISO 8601)
    pub date: String,
    /// Free-text classification such as "Pooja" or "Construction"
    #[serde(rename = "type")]
    pub donation_type: String,
    pub payment_method: PaymentMethod,
    pub purpose: DonationPurpose,
    pub receipt_number: String,
}

impl DonationRecord {
    pub fn donation_date(&self) -> Option<NaiveDate> {
        parse_iso_date(&self.date)
    }
}

/// How a donation was paid.
///
/// Codes are the camelCase identifiers used by the form; the display labels
/// are accepted as aliases because older records store the label instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[serde(rename = "cash", alias = "Cash")]
    Cash,
    #[serde(rename = "creditCard", alias = "Credit Card")]
    CreditCard,
    #[serde(rename = "upi", alias = "UPI")]
    Upi,
    #[serde(rename = "netBanking", alias = "Net Banking")]
    NetBanking,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 4] = [
        PaymentMethod::Cash,
        PaymentMethod::CreditCard,
        PaymentMethod::Upi,
        PaymentMethod::NetBanking,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "cash",
            PaymentMethod::CreditCard => "creditCard",
            PaymentMethod::Upi => "upi",
            PaymentMethod::NetBanking => "netBanking",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "Cash",
            PaymentMethod::CreditCard => "Credit Card",
            PaymentMethod::Upi => "UPI",
            PaymentMethod::NetBanking => "Net Banking",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PaymentMethod {
    type Err = String;

    /// Accepts either the code ("creditCard") or the label ("Credit Card")
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        PaymentMethod::ALL
            .into_iter()
            .find(|method| {
                method.code().eq_ignore_ascii_case(trimmed)
                    || method.label().eq_ignore_ascii_case(trimmed)
            })
            .ok_or_else(|| format!("Invalid payment method: {}", s))
    }
}

/// Purpose a donation is earmarked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DonationPurpose {
    #[serde(rename = "generalDonation", alias = "General Donation")]
    GeneralDonation,
    #[serde(rename = "festivalCelebration", alias = "Festival Celebration")]
    FestivalCelebration,
    #[serde(rename = "templeExpansion", alias = "Temple Expansion")]
    TempleExpansion,
    #[serde(rename = "foodDistribution", alias = "Food Distribution")]
    FoodDistribution,
    #[serde(rename = "diwaliFestival", alias = "Diwali Celebration")]
    DiwaliFestival,
    #[serde(rename = "schoolSupport", alias = "School Support")]
    SchoolSupport,
    #[serde(rename = "medicalCamp", alias = "Medical Camp")]
    MedicalCamp,
}

impl DonationPurpose {
    pub const ALL: [DonationPurpose; 7] = [
        DonationPurpose::GeneralDonation,
        DonationPurpose::FestivalCelebration,
        DonationPurpose::TempleExpansion,
        DonationPurpose::FoodDistribution,
        DonationPurpose::DiwaliFestival,
        DonationPurpose::SchoolSupport,
        DonationPurpose::MedicalCamp,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            DonationPurpose::GeneralDonation => "generalDonation",
            DonationPurpose::FestivalCelebration => "festivalCelebration",
            DonationPurpose::TempleExpansion => "templeExpansion",
            DonationPurpose::FoodDistribution => "foodDistribution",
            DonationPurpose::DiwaliFestival => "diwaliFestival",
            DonationPurpose::SchoolSupport => "schoolSupport",
            DonationPurpose::MedicalCamp => "medicalCamp",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DonationPurpose::GeneralDonation => "General Donation",
            DonationPurpose::FestivalCelebration => "Festival Celebration",
            DonationPurpose::TempleExpansion => "Temple Expansion",
            DonationPurpose::FoodDistribution => "Food Distribution",
            DonationPurpose::DiwaliFestival => "Diwali Celebration",
            DonationPurpose::SchoolSupport => "School Support",
            DonationPurpose::MedicalCamp => "Medical Camp",
        }
    }
}

impl fmt::Display for DonationPurpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DonationPurpose {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        DonationPurpose::ALL
            .into_iter()
            .find(|purpose| {
                purpose.code().eq_ignore_ascii_case(trimmed)
                    || purpose.label().eq_ignore_ascii_case(trimmed)
            })
            .ok_or_else(|| format!("Invalid donation purpose: {}", s))
    }
}

/// Donation types offered by the donation form. Records keep `type` as free
/// text, so this list is a suggestion, not a constraint.
pub const DONATION_TYPES: [&str; 7] = [
    "Temple Maintenance",
    "Pooja",
    "Construction",
    "Charity",
    "Religious Event",
    "Education",
    "Healthcare",
];

/// Payment method selector of the payment report.
///
/// Serialized as the selector value: `"all"` or a payment method code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PaymentMethodFilter {
    #[default]
    All,
    Method(PaymentMethod),
}

impl PaymentMethodFilter {
    pub fn matches(&self, method: PaymentMethod) -> bool {
        match self {
            PaymentMethodFilter::All => true,
            PaymentMethodFilter::Method(selected) => *selected == method,
        }
    }
}

impl FromStr for PaymentMethodFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(PaymentMethodFilter::All)
        } else {
            s.parse().map(PaymentMethodFilter::Method)
        }
    }
}

impl TryFrom<String> for PaymentMethodFilter {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PaymentMethodFilter> for String {
    fn from(filter: PaymentMethodFilter) -> Self {
        match filter {
            PaymentMethodFilter::All => "all".to_string(),
            PaymentMethodFilter::Method(method) => method.code().to_string(),
        }
    }
}

/// Sort orders offered by the donor report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DonorSortOrder {
    /// Ascending by name
    #[default]
    Name,
    /// Largest `total_donations` first
    TotalDonations,
    /// Most recent `last_donation` first
    LastDonation,
}

impl FromStr for DonorSortOrder {
    type Err = String;

    /// Accepts the selector values of the report form ("name", "amount", "recent")
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "name" => Ok(DonorSortOrder::Name),
            "amount" | "totaldonations" => Ok(DonorSortOrder::TotalDonations),
            "recent" | "lastdonation" => Ok(DonorSortOrder::LastDonation),
            _ => Err(format!("Invalid sort order: {}", s)),
        }
    }
}

/// One bar of the monthly donations chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyTotal {
    pub month_label: String,
    pub total_amount: f64,
}

/// One slice of the donation type pie chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeTotal {
    #[serde(rename = "type")]
    pub donation_type: String,
    pub total_amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryStatistics {
    pub count: usize,
    pub total_amount: f64,
    /// Zero when `count` is zero
    pub average_amount: f64,
}

/// Figures shown on the home dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_donors: usize,
    pub total_donation_amount: f64,
    pub average_donation: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDonorRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDonorRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonorResponse {
    pub donor: Donor,
    pub success_message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonorListResponse {
    pub donors: Vec<Donor>,
}

/// A donor together with the donations recorded against them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonorDetailsResponse {
    pub donor: Donor,
    pub donations: Vec<DonationRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteDonorResponse {
    pub donor_id: String,
    pub success_message: String,
}

/// Raw donation form input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordDonationRequest {
    /// Selected donor, `None` for an anonymous donation
    pub donor_id: Option<String>,
    /// Amount as typed into the form
    pub amount: String,
    /// Donation date (ISO 8601), today when omitted
    pub date: Option<String>,
    #[serde(rename = "type")]
    pub donation_type: String,
    pub payment_method: Option<PaymentMethod>,
    pub purpose: Option<DonationPurpose>,
    pub notes: Option<String>,
}

/// Receipt handed to the donor after a donation is recorded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonationReceipt {
    pub receipt_number: String,
    pub donor_name: String,
    pub amount: f64,
    pub date: String,
    pub purpose: DonationPurpose,
    pub payment_method: PaymentMethod,
    #[serde(rename = "type")]
    pub donation_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordDonationResponse {
    /// The record the donation form produced
    pub donation: DonationRecord,
    pub receipt: DonationReceipt,
    pub success_message: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonorReportRequest {
    pub search: String,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub sort_by: DonorSortOrder,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonorReportResponse {
    pub donors: Vec<Donor>,
    pub total_donors: usize,
    /// Sum of `total_donations` over the listed donors
    pub total_donations: f64,
    /// Rounded mean of `total_donations`, zero when no donor is listed
    pub average_donation: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentReportRequest {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub payment_method: PaymentMethodFilter,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentReportResponse {
    pub monthly_totals: Vec<MonthlyTotal>,
    pub type_distribution: Vec<TypeTotal>,
    pub donations: Vec<DonationRecord>,
    pub summary: SummaryStatistics,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDataResponse {
    pub csv_content: String,
    pub filename: String,
    pub row_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportToPathResponse {
    pub success: bool,
    pub message: String,
    pub file_path: String,
    pub row_count: usize,
}

/// Display language of labels and receipts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "hi")]
    Hindi,
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Language::English),
            "hi" | "hindi" => Ok(Language::Hindi),
            _ => Err(format!("Unsupported language: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_iso_date() {
        assert_eq!(
            parse_iso_date("2023-05-15"),
            NaiveDate::from_ymd_opt(2023, 5, 15)
        );
        assert_eq!(
            parse_iso_date("2023-05-15T10:00:00+05:30"),
            NaiveDate::from_ymd_opt(2023, 5, 15)
        );
        assert_eq!(parse_iso_date("15/05/2023"), None);
        assert_eq!(parse_iso_date(""), None);
    }

    #[test]
    fn test_payment_method_accepts_codes_and_labels() {
        assert_eq!("creditCard".parse::<PaymentMethod>(), Ok(PaymentMethod::CreditCard));
        assert_eq!("Credit Card".parse::<PaymentMethod>(), Ok(PaymentMethod::CreditCard));
        assert_eq!("UPI".parse::<PaymentMethod>(), Ok(PaymentMethod::Upi));
        assert!("cheque".parse::<PaymentMethod>().is_err());
    }

    #[test]
    fn test_payment_method_serde_aliases() {
        let from_label: PaymentMethod = serde_json::from_str("\"Net Banking\"").unwrap();
        let from_code: PaymentMethod = serde_json::from_str("\"netBanking\"").unwrap();
        assert_eq!(from_label, PaymentMethod::NetBanking);
        assert_eq!(from_code, PaymentMethod::NetBanking);
        assert_eq!(serde_json::to_string(&from_label).unwrap(), "\"netBanking\"");
    }

    #[test]
    fn test_purpose_labels() {
        assert_eq!(DonationPurpose::DiwaliFestival.label(), "Diwali Celebration");
        assert_eq!(
            "Diwali Celebration".parse::<DonationPurpose>(),
            Ok(DonationPurpose::DiwaliFestival)
        );
    }

    #[test]
    fn test_payment_method_filter() {
        assert_eq!("all".parse::<PaymentMethodFilter>(), Ok(PaymentMethodFilter::All));
        let upi: PaymentMethodFilter = "upi".parse().unwrap();
        assert!(upi.matches(PaymentMethod::Upi));
        assert!(!upi.matches(PaymentMethod::Cash));
        assert!(PaymentMethodFilter::All.matches(PaymentMethod::Cash));
    }

    #[test]
    fn test_payment_method_filter_uses_selector_values() {
        assert_eq!(serde_json::to_string(&PaymentMethodFilter::All).unwrap(), "\"all\"");
        assert_eq!(
            serde_json::to_string(&PaymentMethodFilter::Method(PaymentMethod::CreditCard)).unwrap(),
            "\"creditCard\""
        );

        let request: PaymentReportRequest =
            serde_json::from_str(r#"{"startDate":null,"endDate":null,"paymentMethod":"upi"}"#)
                .unwrap();
        assert_eq!(
            request.payment_method,
            PaymentMethodFilter::Method(PaymentMethod::Upi)
        );
        let all: PaymentMethodFilter = serde_json::from_str("\"all\"").unwrap();
        assert_eq!(all, PaymentMethodFilter::All);
        assert!(serde_json::from_str::<PaymentMethodFilter>("\"cheque\"").is_err());
    }

    #[test]
    fn test_sort_order_from_form_values() {
        assert_eq!("name".parse::<DonorSortOrder>(), Ok(DonorSortOrder::Name));
        assert_eq!("amount".parse::<DonorSortOrder>(), Ok(DonorSortOrder::TotalDonations));
        assert_eq!("recent".parse::<DonorSortOrder>(), Ok(DonorSortOrder::LastDonation));
        assert!("oldest".parse::<DonorSortOrder>().is_err());
    }

    #[test]
    fn test_donation_record_json_shape() {
        let record = DonationRecord {
            id: "don1".to_string(),
            donor_id: "d1".to_string(),
            donor_name: "Rajesh Sharma".to_string(),
            amount: 5000.0,
            date: "2023-05-15".to_string(),
            donation_type: "Temple Maintenance".to_string(),
            payment_method: PaymentMethod::Upi,
            purpose: DonationPurpose::GeneralDonation,
            receipt_number: "REC-2023-001".to_string(),
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["donorId"], "d1");
        assert_eq!(json["type"], "Temple Maintenance");
        assert_eq!(json["paymentMethod"], "upi");
        assert_eq!(json["receiptNumber"], "REC-2023-001");
    }
}
