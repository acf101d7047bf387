// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Status classification for shipments and transfers.
//!
//! All predicates are pure and total: a record with missing or malformed
//! fields resolves to the non-alarming answer instead of an error.

use crate::clock::{parse_date, parse_time};
use crate::types::{Record, Shipment, Transfer};
use chrono::{NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// Derived status of a record, used for badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordStatus {
    /// Still open and on schedule.
    Pending,
    /// Shipment delivered with no outstanding transfer step.
    Complete,
    /// Past its window (shipment) or date (transfer) without completion.
    Overdue,
    /// Shipment delivered but goods not yet moved between branches.
    AwaitingTransfer,
}

impl RecordStatus {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Complete => "complete",
            Self::Overdue => "overdue",
            Self::AwaitingTransfer => "awaiting_transfer",
        }
    }
}

impl std::fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Every derived fact about a record at a given instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub status: RecordStatus,
    pub overdue: bool,
    pub requires_transfer: bool,
    pub complete: bool,
    pub visible_in_main_view: bool,
    pub pending_transfer_alert: bool,
}

/// End of the shipment's delivery window as a local timestamp.
pub(crate) fn window_deadline(shipment: &Shipment) -> Option<NaiveDateTime> {
    let delivery = shipment.delivery.as_ref()?;
    let date = parse_date(&delivery.date)?;
    let time = parse_time(&delivery.window_end)?;
    Some(date.and_time(time))
}

/// Transfer date anchored at noon, used for ordering.
pub(crate) fn transfer_anchor(transfer: &Transfer) -> Option<NaiveDateTime> {
    let date = parse_date(&transfer.date)?;
    Some(date.and_time(NaiveTime::from_hms_opt(12, 0, 0)?))
}

/// A shipment is overdue when its delivery window has closed and it has not
/// been delivered.
#[must_use]
pub fn is_overdue_shipment(shipment: &Shipment, now: NaiveDateTime) -> bool {
    if shipment.delivered {
        return false;
    }
    window_deadline(shipment).is_some_and(|deadline| deadline < now)
}

/// A transfer is overdue when its date is before today. Time of day is
/// ignored.
#[must_use]
pub fn is_overdue_transfer(transfer: &Transfer, now: NaiveDateTime) -> bool {
    parse_date(&transfer.date).is_some_and(|date| date < now.date())
}

/// Whether the shipment is dispatched from a branch other than the one that
/// billed it. Shipments without delivery details never require a transfer.
#[must_use]
pub fn requires_transfer(shipment: &Shipment) -> bool {
    shipment
        .delivery
        .as_ref()
        .is_some_and(|d| d.origin_branch != d.billing_branch)
}

/// Whether the record belongs in the "complete" bucket.
///
/// Transfers never do, regardless of their own `completed` flag.
#[must_use]
pub fn is_complete(record: &Record) -> bool {
    match record {
        Record::Transfer(_) => false,
        Record::Shipment(s) => {
            s.delivery.is_some()
                && s.delivered
                && (!requires_transfer(s) || s.goods_transferred)
        }
    }
}

/// Whether the record shows on the main (pending) view.
#[must_use]
pub fn is_visible_in_main_view(record: &Record) -> bool {
    match record {
        Record::Transfer(_) => true,
        Record::Shipment(s) => {
            if s.delivery.is_none() {
                false
            } else if !s.delivered {
                true
            } else {
                requires_transfer(s) && !s.goods_transferred
            }
        }
    }
}

/// Delivered shipment whose goods still have to move between branches.
#[must_use]
pub fn pending_transfer_alert(shipment: &Shipment) -> bool {
    shipment.delivered && requires_transfer(shipment) && !shipment.goods_transferred
}

#[must_use]
pub fn is_overdue(record: &Record, now: NaiveDateTime) -> bool {
    match record {
        Record::Shipment(s) => is_overdue_shipment(s, now),
        Record::Transfer(t) => is_overdue_transfer(t, now),
    }
}

/// Computes every derived fact for a record.
///
/// Status precedence is overdue, then awaiting transfer, then complete,
/// then pending.
#[must_use]
pub fn classify(record: &Record, now: NaiveDateTime) -> Classification {
    let overdue = is_overdue(record, now);
    let complete = is_complete(record);
    let (requires, alert) = record.as_shipment().map_or((false, false), |s| {
        (requires_transfer(s), pending_transfer_alert(s))
    });

    let status = if overdue {
        RecordStatus::Overdue
    } else if alert {
        RecordStatus::AwaitingTransfer
    } else if complete {
        RecordStatus::Complete
    } else {
        RecordStatus::Pending
    };

    Classification {
        status,
        overdue,
        requires_transfer: requires,
        complete,
        visible_in_main_view: is_visible_in_main_view(record),
        pending_transfer_alert: alert,
    }
}
