// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Record identifier is empty.
    MissingId,
    /// Shipment has no delivery block.
    MissingDelivery,
    /// Client name is empty.
    InvalidClientName,
    /// A date field is not a valid `YYYY-MM-DD` calendar date.
    InvalidDate {
        /// The field that failed to parse.
        field: &'static str,
        /// The offending value.
        value: String,
    },
    /// A time field is not a valid `HH:MM` slot on the delivery grid.
    InvalidTime {
        /// The field that failed to parse.
        field: &'static str,
        /// The offending value.
        value: String,
    },
    /// Delivery window start is not strictly before its end.
    InvalidDeliveryWindow {
        /// Window start.
        start: String,
        /// Window end.
        end: String,
    },
    /// A required branch field is empty.
    MissingBranch {
        /// The empty field.
        field: &'static str,
    },
    /// A branch is not part of the configured catalog.
    InvalidBranch {
        /// The field holding the branch.
        field: &'static str,
        /// The unknown branch.
        branch: String,
    },
    /// Transfer origin and destination are the same branch.
    SameBranchTransfer {
        /// The repeated branch.
        branch: String,
    },
    /// Stored or submitted payload cannot be read as a record.
    MalformedRecord {
        /// Why decoding failed.
        reason: String,
    },
    /// Timezone name is not in the tz database.
    InvalidTimezone(String),
    /// A view criterion token is not recognised.
    InvalidCriterion {
        /// The criterion name.
        field: &'static str,
        /// The offending token.
        value: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingId => write!(f, "Record id is required"),
            Self::MissingDelivery => write!(f, "Shipment delivery details are required"),
            Self::InvalidClientName => write!(f, "Client name is required"),
            Self::InvalidDate { field, value } => {
                write!(f, "Invalid date for {field}: '{value}' (expected YYYY-MM-DD)")
            }
            Self::InvalidTime { field, value } => {
                write!(
                    f,
                    "Invalid time for {field}: '{value}' (expected HH:MM between 08:00 and 19:00 in 30 minute steps)"
                )
            }
            Self::InvalidDeliveryWindow { start, end } => {
                write!(
                    f,
                    "Delivery window start {start} must be before its end {end}"
                )
            }
            Self::MissingBranch { field } => write!(f, "Branch is required for {field}"),
            Self::InvalidBranch { field, branch } => {
                write!(f, "Unknown branch '{branch}' for {field}")
            }
            Self::SameBranchTransfer { branch } => {
                write!(
                    f,
                    "Transfer origin and destination must differ (both are '{branch}')"
                )
            }
            Self::MalformedRecord { reason } => write!(f, "Malformed record: {reason}"),
            Self::InvalidTimezone(name) => write!(f, "Unknown timezone: {name}"),
            Self::InvalidCriterion { field, value } => {
                write!(f, "Invalid value '{value}' for view criterion {field}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
