//! Display labels in English and Hindi.
//!
//! Every key is an enum variant and every language arm is an exhaustive
//! match, so a missing translation is a compile error instead of a raw key
//! showing up on screen.

use shared::{DonationPurpose, Language, PaymentMethod};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LabelKey {
    TempleTitle,
    DonorList,
    Name,
    Email,
    Phone,
    Address,
    DonationAmount,
    DonationDate,
    DonorName,
    DonationType,
    Amount,
    PaymentMethod,
    Purpose,
    Date,
    DonationReceipt,
    ReceiptNumber,
    ThankYou,
    DonorReports,
    PaymentReports,
    StartDate,
    EndDate,
    Summary,
    TotalDonors,
    TotalDonations,
    AverageDonation,
    Cash,
    CreditCard,
    Upi,
    NetBanking,
}

pub fn label(key: LabelKey, language: Language) -> &'static str {
    match language {
        Language::English => english(key),
        Language::Hindi => hindi(key),
    }
}

fn english(key: LabelKey) -> &'static str {
    match key {
        LabelKey::TempleTitle => "Dutt Mandir",
        LabelKey::DonorList => "Donor List",
        LabelKey::Name => "Name",
        LabelKey::Email => "Email",
        LabelKey::Phone => "Phone",
        LabelKey::Address => "Address",
        LabelKey::DonationAmount => "Donation Amount",
        LabelKey::DonationDate => "Donation Date",
        LabelKey::DonorName => "Donor Name",
        LabelKey::DonationType => "Donation Type",
        LabelKey::Amount => "Amount",
        LabelKey::PaymentMethod => "Payment Method",
        LabelKey::Purpose => "Purpose",
        LabelKey::Date => "Date",
        LabelKey::DonationReceipt => "Donation Receipt",
        LabelKey::ReceiptNumber => "Receipt Number",
        LabelKey::ThankYou => "Thank you for your donation",
        LabelKey::DonorReports => "Donor Reports",
        LabelKey::PaymentReports => "Payment Reports",
        LabelKey::StartDate => "Start Date",
        LabelKey::EndDate => "End Date",
        LabelKey::Summary => "Summary",
        LabelKey::TotalDonors => "Total Donors",
        LabelKey::TotalDonations => "Total Donations",
        LabelKey::AverageDonation => "Average Donation",
        LabelKey::Cash => "Cash",
        LabelKey::CreditCard => "Credit Card",
        LabelKey::Upi => "UPI",
        LabelKey::NetBanking => "Net Banking",
    }
}

fn hindi(key: LabelKey) -> &'static str {
    match key {
        LabelKey::TempleTitle => "दत्त मंदिर",
        LabelKey::DonorList => "दाता सूची",
        LabelKey::Name => "नाम",
        LabelKey::Email => "ईमेल",
        LabelKey::Phone => "फोन",
        LabelKey::Address => "पता",
        LabelKey::DonationAmount => "दान राशि",
        LabelKey::DonationDate => "दान तिथि",
        LabelKey::DonorName => "दाता का नाम",
        LabelKey::DonationType => "दान प्रकार",
        LabelKey::Amount => "राशि",
        LabelKey::PaymentMethod => "भुगतान विधि",
        LabelKey::Purpose => "उद्देश्य",
        LabelKey::Date => "तारीख",
        LabelKey::DonationReceipt => "दान रसीद",
        LabelKey::ReceiptNumber => "रसीद नंबर",
        LabelKey::ThankYou => "आपके दान के लिए धन्यवाद",
        LabelKey::DonorReports => "दाता रिपोर्ट",
        LabelKey::PaymentReports => "भुगतान रिपोर्ट",
        LabelKey::StartDate => "प्रारंभ तिथि",
        LabelKey::EndDate => "समाप्ति तिथि",
        LabelKey::Summary => "सारांश",
        LabelKey::TotalDonors => "कुल दाता",
        LabelKey::TotalDonations => "कुल दान",
        LabelKey::AverageDonation => "औसत दान",
        LabelKey::Cash => "नकद",
        LabelKey::CreditCard => "क्रेडिट कार्ड",
        LabelKey::Upi => "यूपीआई",
        LabelKey::NetBanking => "नेट बैंकिंग",
    }
}

pub fn payment_method_label(method: PaymentMethod, language: Language) -> &'static str {
    let key = match method {
        PaymentMethod::Cash => LabelKey::Cash,
        PaymentMethod::CreditCard => LabelKey::CreditCard,
        PaymentMethod::Upi => LabelKey::Upi,
        PaymentMethod::NetBanking => LabelKey::NetBanking,
    };
    label(key, language)
}

/// Purposes have no Hindi translation yet; the English label is used for
/// both languages.
pub fn purpose_label(purpose: DonationPurpose, _language: Language) -> &'static str {
    purpose.label()
}
