// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions.
//!
//! Each handler takes the persistence adapter and already-decoded inputs,
//! and returns a response DTO or an [`ApiError`]. Transport concerns live
//! in the server crate.

use envios_domain::{
    BranchFilter, DashboardBucket, DateScope, DomainError, KindFilter, NaiveDateTime, Record,
    StatusFilter, ViewCriteria, apply, classify, delivery_time_slots, validate_record,
};
use envios_persistence::{Persistence, SaveOutcome};
use std::str::FromStr;
use tracing::{error, info};

use crate::error::{ApiError, translate_domain_error, translate_persistence_error};
use crate::format::format_date_with_weekday;
use crate::request_response::{
    DeleteRecordResponse, FormOptionsResponse, HealthResponse, SaveRecordResponse, ViewItem,
    ViewQuery, ViewResponse,
};

/// Loads every record from the store.
///
/// A store failure is logged and yields an empty list so the dashboard
/// keeps rendering.
pub fn load_records(persistence: &mut Persistence) -> Vec<Record> {
    match persistence.list_records() {
        Ok(records) => records,
        Err(e) => {
            error!(error = %e, "Failed to load records, serving an empty list");
            Vec::new()
        }
    }
}

/// Builds the dashboard view for `criteria` at local time `now`.
///
/// Counters are computed over every stored record, not just the filtered
/// ones.
pub fn get_view(
    persistence: &mut Persistence,
    criteria: &ViewCriteria,
    now: NaiveDateTime,
) -> ViewResponse {
    let records: Vec<Record> = load_records(persistence);
    let view = apply(&records, criteria, now);

    let items: Vec<ViewItem> = view
        .records
        .into_iter()
        .map(|record| ViewItem {
            classification: classify(&record, now),
            display_date: format_date_with_weekday(record.relevant_date()),
            record,
        })
        .collect();

    ViewResponse {
        items,
        counters: view.counters,
    }
}

/// Retrieves a single record.
///
/// # Errors
///
/// Returns `ResourceNotFound` if no record has this id, or `Internal` if the
/// store fails.
pub fn get_record(persistence: &mut Persistence, id: &str) -> Result<Record, ApiError> {
    persistence
        .get_record(id)
        .map_err(translate_persistence_error)?
        .ok_or_else(|| not_found(id))
}

/// Decodes a submitted JSON payload into a record.
///
/// # Errors
///
/// Returns `InvalidInput` if the payload is not a JSON object.
pub fn decode_record(payload: serde_json::Value) -> Result<Record, ApiError> {
    Record::from_value(payload).map_err(translate_domain_error)
}

/// Validates and saves a record, replacing any record with the same id.
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `record` - The full record to store
/// * `catalog` - Known branches; empty accepts any branch name
///
/// # Errors
///
/// Returns an error if:
/// - The record fails validation (nothing is written)
/// - The store write fails
pub fn save_record(
    persistence: &mut Persistence,
    record: &Record,
    catalog: &[String],
) -> Result<SaveRecordResponse, ApiError> {
    validate_record(record, catalog).map_err(translate_domain_error)?;

    let outcome: SaveOutcome = persistence
        .save_record(record)
        .map_err(translate_persistence_error)?;

    info!(
        id = record.id(),
        kind = %record.kind(),
        created = outcome.is_created(),
        "Saved record"
    );

    Ok(SaveRecordResponse {
        ok: true,
        id: record.id().to_string(),
        created: outcome.is_created(),
    })
}

/// Deletes a record.
///
/// # Errors
///
/// Returns `ResourceNotFound` if no record has this id, or `Internal` if the
/// store fails.
pub fn delete_record(
    persistence: &mut Persistence,
    id: &str,
) -> Result<DeleteRecordResponse, ApiError> {
    let deleted: bool = persistence
        .delete_record(id)
        .map_err(translate_persistence_error)?;

    if !deleted {
        return Err(not_found(id));
    }

    info!(id, "Deleted record");
    Ok(DeleteRecordResponse { ok: true })
}

/// Branches and delivery time slots for the forms.
#[must_use]
pub fn form_options(catalog: &[String]) -> FormOptionsResponse {
    FormOptionsResponse {
        branches: catalog.to_vec(),
        time_slots: delivery_time_slots(),
    }
}

/// Reports the backend and whether it answers queries.
pub fn health(persistence: &mut Persistence) -> HealthResponse {
    let database_ok: bool = match persistence.check_connection() {
        Ok(()) => true,
        Err(e) => {
            error!(error = %e, "Health check failed");
            false
        }
    };

    HealthResponse {
        backend: persistence.backend_name().to_string(),
        database_ok,
    }
}

/// Parses query-string criteria, filling absent fields with the dashboard
/// defaults.
///
/// # Errors
///
/// Returns `InvalidInput` naming the first unrecognised criterion.
pub fn parse_view_criteria(query: &ViewQuery) -> Result<ViewCriteria, ApiError> {
    Ok(ViewCriteria {
        status: parse_or_default::<StatusFilter>(query.status.as_deref())?,
        kind: parse_or_default::<KindFilter>(query.kind.as_deref())?,
        branch: parse_or_default::<BranchFilter>(query.branch.as_deref())?,
        date_scope: parse_or_default::<DateScope>(query.date.as_deref())?,
        bucket: parse_or_default::<DashboardBucket>(query.bucket.as_deref())?,
        client_name_query: query.q.clone(),
    })
}

fn parse_or_default<T>(token: Option<&str>) -> Result<T, ApiError>
where
    T: FromStr<Err = DomainError> + Default,
{
    match token {
        None => Ok(T::default()),
        Some(token) => token.parse::<T>().map_err(translate_domain_error),
    }
}

fn not_found(id: &str) -> ApiError {
    ApiError::ResourceNotFound {
        resource_type: String::from("Record"),
        message: format!("No record with id '{id}'"),
    }
}
