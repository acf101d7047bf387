// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Conversion between records and stored rows.
//!
//! The key column owns the id, so it is removed from the JSON blob on write
//! and put back on read.

use envios_domain::Record;
use serde_json::Value;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::data_models::ItemRow;
use crate::error::PersistenceError;

/// Builds the row stored for `record`, stamped with the current UTC time.
///
/// # Errors
///
/// Returns an error if the record cannot be serialized.
pub fn encode_record(record: &Record) -> Result<ItemRow, PersistenceError> {
    let mut value: Value = serde_json::to_value(record)?;
    if let Value::Object(map) = &mut value {
        map.remove("id");
    }

    Ok(ItemRow {
        id: record.id().to_string(),
        data: serde_json::to_string(&value)?,
        updated_at: utc_timestamp()?,
    })
}

/// Rebuilds a record from a stored row.
///
/// # Errors
///
/// Returns [`PersistenceError::MalformedRow`] if the blob is not valid JSON
/// or not a JSON object.
pub fn decode_row(id: &str, data: &str) -> Result<Record, PersistenceError> {
    let malformed = |reason: String| PersistenceError::MalformedRow {
        id: id.to_string(),
        reason,
    };

    let mut value: Value = serde_json::from_str(data).map_err(|e| malformed(e.to_string()))?;
    let Value::Object(map) = &mut value else {
        return Err(malformed(String::from("stored data is not a JSON object")));
    };
    map.insert(String::from("id"), Value::String(id.to_string()));

    Record::from_value(value).map_err(|e| malformed(e.to_string()))
}

fn utc_timestamp() -> Result<String, PersistenceError> {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .map_err(|e| PersistenceError::SerializationError(e.to_string()))
}
