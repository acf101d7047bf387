// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::clock::{TIME_FORMAT, parse_date, parse_time};
use crate::error::DomainError;
use crate::types::{Record, Shipment, Transfer};
use chrono::{NaiveTime, Timelike};

/// First delivery slot of the day, in hours.
const FIRST_SLOT_HOUR: u32 = 8;
/// Last delivery slot of the day, in hours. The grid ends exactly here.
const LAST_SLOT_HOUR: u32 = 19;
const SLOT_MINUTES: u32 = 30;

/// Delivery time slots offered by the forms: 08:00 to 19:00 in 30 minute
/// steps.
#[must_use]
pub fn delivery_time_slots() -> Vec<String> {
    (FIRST_SLOT_HOUR * 60..=LAST_SLOT_HOUR * 60)
        .filter(|minutes| minutes % SLOT_MINUTES == 0)
        .map(|minutes| format!("{:02}:{:02}", minutes / 60, minutes % 60))
        .collect()
}

fn is_on_slot_grid(time: NaiveTime) -> bool {
    let minutes = time.hour() * 60 + time.minute();
    time.second() == 0
        && (FIRST_SLOT_HOUR * 60..=LAST_SLOT_HOUR * 60).contains(&minutes)
        && minutes % SLOT_MINUTES == 0
}

fn validate_slot(field: &'static str, value: &str) -> Result<NaiveTime, DomainError> {
    parse_time(value)
        .filter(|t| t.format(TIME_FORMAT).to_string() == value && is_on_slot_grid(*t))
        .ok_or_else(|| DomainError::InvalidTime {
            field,
            value: value.to_string(),
        })
}

fn validate_date(field: &'static str, value: &str) -> Result<(), DomainError> {
    parse_date(value).map(|_| ()).ok_or_else(|| DomainError::InvalidDate {
        field,
        value: value.to_string(),
    })
}

fn validate_branch(field: &'static str, branch: &str, catalog: &[String]) -> Result<(), DomainError> {
    if branch.trim().is_empty() {
        return Err(DomainError::MissingBranch { field });
    }
    if !catalog.is_empty() && !catalog.iter().any(|b| b == branch) {
        return Err(DomainError::InvalidBranch {
            field,
            branch: branch.to_string(),
        });
    }
    Ok(())
}

/// Validates a shipment before it is saved.
///
/// # Errors
///
/// Returns an error if:
/// - The delivery block is missing
/// - The delivery date is not `YYYY-MM-DD`
/// - Either window time is off the delivery grid, or start is not before end
/// - A branch is empty or outside a non-empty `catalog`
/// - The client name is empty
pub fn validate_shipment(shipment: &Shipment, catalog: &[String]) -> Result<(), DomainError> {
    let Some(delivery) = shipment.delivery.as_ref() else {
        return Err(DomainError::MissingDelivery);
    };

    validate_date("delivery date", &delivery.date)?;
    let start = validate_slot("window start", &delivery.window_start)?;
    let end = validate_slot("window end", &delivery.window_end)?;
    if start >= end {
        return Err(DomainError::InvalidDeliveryWindow {
            start: delivery.window_start.clone(),
            end: delivery.window_end.clone(),
        });
    }

    validate_branch("origin branch", &delivery.origin_branch, catalog)?;
    validate_branch("billing branch", &delivery.billing_branch, catalog)?;

    if shipment.client.name.trim().is_empty() {
        return Err(DomainError::InvalidClientName);
    }

    Ok(())
}

/// Validates a transfer before it is saved.
///
/// # Errors
///
/// Returns an error if the date is not `YYYY-MM-DD`, a branch is empty or
/// outside a non-empty `catalog`, or both branches are the same.
pub fn validate_transfer(transfer: &Transfer, catalog: &[String]) -> Result<(), DomainError> {
    validate_date("transfer date", &transfer.date)?;
    validate_branch("source branch", &transfer.from_branch, catalog)?;
    validate_branch("destination branch", &transfer.to_branch, catalog)?;

    if transfer.from_branch == transfer.to_branch {
        return Err(DomainError::SameBranchTransfer {
            branch: transfer.from_branch.clone(),
        });
    }

    Ok(())
}

/// Validates any record before it is saved.
///
/// An empty `catalog` accepts any non-empty branch name.
///
/// # Errors
///
/// Returns [`DomainError::MissingId`] for a blank id, otherwise whatever
/// the variant validator reports.
pub fn validate_record(record: &Record, catalog: &[String]) -> Result<(), DomainError> {
    if record.id().trim().is_empty() {
        return Err(DomainError::MissingId);
    }

    match record {
        Record::Shipment(s) => validate_shipment(s, catalog),
        Record::Transfer(t) => validate_transfer(t, catalog),
    }
}
