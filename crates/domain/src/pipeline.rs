// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Filter and sort pipeline behind the dashboard.

use crate::classification::{
    is_complete, is_overdue, is_visible_in_main_view, pending_transfer_alert, transfer_anchor,
    window_deadline,
};
use crate::clock::parse_date;
use crate::criteria::{DashboardBucket, DateScope, StatusFilter, ViewCriteria};
use crate::types::Record;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Dashboard counters, always computed over the full record set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counters {
    /// Total number of records. Every record counts here whatever its
    /// actual status, matching what the dashboard has always shown.
    pub pending: usize,
    pub overdue: usize,
    pub transfer_pending: usize,
}

/// Filtered, ordered records plus counters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct View {
    pub records: Vec<Record>,
    pub counters: Counters,
}

/// Computes the dashboard counters.
#[must_use]
pub fn compute_counters(records: &[Record], now: NaiveDateTime) -> Counters {
    Counters {
        pending: records.len(),
        overdue: records.iter().filter(|r| is_overdue(r, now)).count(),
        transfer_pending: records
            .iter()
            .filter_map(Record::as_shipment)
            .filter(|s| pending_transfer_alert(s))
            .count(),
    }
}

/// Whether a record passes every criterion.
#[must_use]
pub fn matches(record: &Record, criteria: &ViewCriteria, now: NaiveDateTime) -> bool {
    let status_ok = match criteria.effective_status() {
        StatusFilter::Pending => is_visible_in_main_view(record),
        StatusFilter::Complete => is_complete(record),
        StatusFilter::All => true,
    };
    if !status_ok {
        return false;
    }

    if !criteria.kind.matches(record.kind()) || !criteria.branch.matches(record.branch()) {
        return false;
    }

    if criteria.date_scope == DateScope::Today
        && parse_date(record.relevant_date()) != Some(now.date())
    {
        return false;
    }

    let bucket_ok = match criteria.bucket {
        DashboardBucket::All => true,
        DashboardBucket::Overdue => is_overdue(record, now),
        DashboardBucket::TransferPending => {
            record.as_shipment().is_some_and(pending_transfer_alert)
        }
    };
    if !bucket_ok {
        return false;
    }

    criteria.effective_client_query().is_none_or(|query| {
        record
            .as_shipment()
            .is_some_and(|s| s.client.name.to_lowercase().contains(&query))
    })
}

/// Ordering key: shipments first by window end, then transfers by date.
/// Records without a usable date sort as the epoch.
fn sort_key(record: &Record) -> (u8, NaiveDateTime) {
    match record {
        Record::Shipment(s) => (0, window_deadline(s).unwrap_or_default()),
        Record::Transfer(t) => (1, transfer_anchor(t).unwrap_or_default()),
    }
}

/// Filters and orders `records` for display.
///
/// Sorting is stable, so records with equal keys keep their store order.
#[must_use]
pub fn apply(records: &[Record], criteria: &ViewCriteria, now: NaiveDateTime) -> View {
    let counters = compute_counters(records, now);
    let mut selected: Vec<Record> = records
        .iter()
        .filter(|r| matches(r, criteria, now))
        .cloned()
        .collect();
    selected.sort_by_key(sort_key);

    View {
        records: selected,
        counters,
    }
}
