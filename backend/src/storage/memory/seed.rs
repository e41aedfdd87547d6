//! Sample donors and donations the temple office starts every session with.

use shared::{DonationPurpose, DonationRecord, Donor, PaymentMethod};

fn donor(
    id: &str,
    name: &str,
    email: &str,
    phone: &str,
    address: &str,
    total_donations: f64,
    last_donation: &str,
) -> Donor {
    Donor {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        address: address.to_string(),
        total_donations,
        last_donation: last_donation.to_string(),
    }
}

#[allow(clippy::too_many_arguments)]
fn donation(
    id: &str,
    donor_id: &str,
    donor_name: &str,
    amount: f64,
    date: &str,
    donation_type: &str,
    payment_method: PaymentMethod,
    purpose: DonationPurpose,
    receipt_number: &str,
) -> DonationRecord {
    DonationRecord {
        id: id.to_string(),
        donor_id: donor_id.to_string(),
        donor_name: donor_name.to_string(),
        amount,
        date: date.to_string(),
        donation_type: donation_type.to_string(),
        payment_method,
        purpose,
        receipt_number: receipt_number.to_string(),
    }
}

pub fn seed_donors() -> Vec<Donor> {
    vec![
        donor(
            "d1",
            "Rajesh Sharma",
            "rajesh.sharma@example.com",
            "+91 9876543210",
            "123 Krishna Lane, Mumbai, MH 400001",
            25000.0,
            "2023-05-15",
        ),
        donor(
            "d2",
            "Priya Patel",
            "priya.patel@example.com",
            "+91 8765432109",
            "456 Ganesh Road, Delhi, DL 110001",
            15000.0,
            "2023-06-22",
        ),
        donor(
            "d3",
            "Amit Singh",
            "amit.singh@example.com",
            "+91 7654321098",
            "789 Shiva Street, Bangalore, KA 560001",
            50000.0,
            "2023-04-10",
        ),
        donor(
            "d4",
            "Sunita Desai",
            "sunita.desai@example.com",
            "+91 6543210987",
            "101 Lakshmi Avenue, Chennai, TN 600001",
            30000.0,
            "2023-07-05",
        ),
        donor(
            "d5",
            "Vikram Mehta",
            "vikram.mehta@example.com",
            "+91 5432109876",
            "202 Durga Lane, Kolkata, WB 700001",
            45000.0,
            "2023-08-18",
        ),
    ]
}

pub fn seed_donations() -> Vec<DonationRecord> {
    vec![
        donation(
            "don1",
            "d1",
            "Rajesh Sharma",
            5000.0,
            "2023-05-15",
            "Temple Maintenance",
            PaymentMethod::Upi,
            DonationPurpose::GeneralDonation,
            "REC-2023-001",
        ),
        donation(
            "don2",
            "d2",
            "Priya Patel",
            3000.0,
            "2023-06-22",
            "Pooja",
            PaymentMethod::Cash,
            DonationPurpose::FestivalCelebration,
            "REC-2023-002",
        ),
        donation(
            "don3",
            "d3",
            "Amit Singh",
            10000.0,
            "2023-04-10",
            "Construction",
            PaymentMethod::CreditCard,
            DonationPurpose::TempleExpansion,
            "REC-2023-003",
        ),
        donation(
            "don4",
            "d4",
            "Sunita Desai",
            7500.0,
            "2023-07-05",
            "Charity",
            PaymentMethod::NetBanking,
            DonationPurpose::FoodDistribution,
            "REC-2023-004",
        ),
        donation(
            "don5",
            "d5",
            "Vikram Mehta",
            15000.0,
            "2023-08-18",
            "Religious Event",
            PaymentMethod::Upi,
            DonationPurpose::DiwaliFestival,
            "REC-2023-005",
        ),
        donation(
            "don6",
            "d1",
            "Rajesh Sharma",
            8000.0,
            "2023-03-30",
            "Education",
            PaymentMethod::Cash,
            DonationPurpose::SchoolSupport,
            "REC-2023-006",
        ),
        donation(
            "don7",
            "d3",
            "Amit Singh",
            20000.0,
            "2023-02-15",
            "Healthcare",
            PaymentMethod::CreditCard,
            DonationPurpose::MedicalCamp,
            "REC-2023-007",
        ),
    ]
}
