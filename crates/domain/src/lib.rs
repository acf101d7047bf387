// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod classification;
mod clock;
mod criteria;
mod error;
mod pipeline;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use classification::{
    Classification, RecordStatus, classify, is_complete, is_overdue, is_overdue_shipment,
    is_overdue_transfer, is_visible_in_main_view, pending_transfer_alert, requires_transfer,
};
pub use clock::{DATE_FORMAT, DEFAULT_TIMEZONE, TIME_FORMAT, local_now, parse_date, parse_timezone};
pub use criteria::{
    BranchFilter, DashboardBucket, DateScope, KindFilter, StatusFilter, ViewCriteria,
};
pub use error::DomainError;
pub use pipeline::{Counters, View, apply, compute_counters, matches};
pub use types::{
    Client, Delivery, Goods, Record, RecordKind, Shipment, TRANSFER_TAG, Transfer, TransferTag,
};
pub use validation::{delivery_time_slots, validate_record, validate_shipment, validate_transfer};

// Re-exported so dependents name the same clock types.
pub use chrono::{NaiveDate, NaiveDateTime};
pub use chrono_tz::Tz;
