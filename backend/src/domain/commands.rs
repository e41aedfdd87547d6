//! Domain-level command and query types
//! These structs are used by services inside the domain layer. Callers map
//! the public DTOs defined in the `shared` crate to these internal types;
//! the `From`/`TryFrom` impls below do that mapping and validate date input
//! at the boundary.

pub mod donors {
    use shared::{CreateDonorRequest, UpdateDonorRequest};

    /// Query parameters for listing donors.
    #[derive(Debug, Clone, Default)]
    pub struct ListDonorsQuery {
        pub search: String,
    }

    /// Input for creating a new donor.
    #[derive(Debug, Clone)]
    pub struct CreateDonorCommand {
        pub name: String,
        pub email: String,
        pub phone: String,
        pub address: String,
    }

    impl From<CreateDonorRequest> for CreateDonorCommand {
        fn from(request: CreateDonorRequest) -> Self {
            Self {
                name: request.name,
                email: request.email,
                phone: request.phone,
                address: request.address,
            }
        }
    }

    /// Input for updating a donor; `None` leaves a field unchanged.
    #[derive(Debug, Clone, Default)]
    pub struct UpdateDonorCommand {
        pub name: Option<String>,
        pub email: Option<String>,
        pub phone: Option<String>,
        pub address: Option<String>,
    }

    impl From<UpdateDonorRequest> for UpdateDonorCommand {
        fn from(request: UpdateDonorRequest) -> Self {
            Self {
                name: request.name,
                email: request.email,
                phone: request.phone,
                address: request.address,
            }
        }
    }
}

pub mod donations {
    use shared::{DonationPurpose, PaymentMethod, RecordDonationRequest};

    /// Input for recording a donation from the donation form.
    #[derive(Debug, Clone)]
    pub struct RecordDonationCommand {
        pub donor_id: Option<String>,
        pub amount: String,
        pub date: Option<String>,
        pub donation_type: String,
        pub payment_method: Option<PaymentMethod>,
        pub purpose: Option<DonationPurpose>,
        pub notes: Option<String>,
    }

    impl From<RecordDonationRequest> for RecordDonationCommand {
        fn from(request: RecordDonationRequest) -> Self {
            Self {
                donor_id: request.donor_id,
                amount: request.amount,
                date: request.date,
                donation_type: request.donation_type,
                payment_method: request.payment_method,
                purpose: request.purpose,
                notes: request.notes,
            }
        }
    }
}

pub mod reports {
    use shared::{DonorReportRequest, DonorSortOrder, PaymentReportRequest};

    use crate::domain::filters::DonationFilter;
    use crate::domain::models::{DateRange, DateRangeError};

    /// Filters and ordering of the donor report.
    /// The default is the form's reset state: no search, no dates, by name.
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct DonorReportQuery {
        pub search: String,
        pub last_donation: DateRange,
        pub sort_by: DonorSortOrder,
    }

    impl TryFrom<DonorReportRequest> for DonorReportQuery {
        type Error = DateRangeError;

        fn try_from(request: DonorReportRequest) -> Result<Self, Self::Error> {
            Ok(Self {
                last_donation: DateRange::parse(
                    request.start_date.as_deref(),
                    request.end_date.as_deref(),
                )?,
                search: request.search,
                sort_by: request.sort_by,
            })
        }
    }

    /// Filters of the payment report.
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct PaymentReportQuery {
        pub filter: DonationFilter,
    }

    impl TryFrom<PaymentReportRequest> for PaymentReportQuery {
        type Error = DateRangeError;

        fn try_from(request: PaymentReportRequest) -> Result<Self, Self::Error> {
            Ok(Self {
                filter: DonationFilter {
                    range: DateRange::parse(
                        request.start_date.as_deref(),
                        request.end_date.as_deref(),
                    )?,
                    payment_method: request.payment_method,
                },
            })
        }
    }
}
