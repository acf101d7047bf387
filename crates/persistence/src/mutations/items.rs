// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Item mutations.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::info;

use crate::data_models::{ItemRow, SaveOutcome};
use crate::diesel_schema::items;
use crate::error::PersistenceError;

backend_fn! {
/// Inserts `row`, or replaces the stored data of an existing row with the
/// same id.
///
/// The stored blob is replaced wholesale; nothing is merged.
///
/// # Errors
///
/// Returns an error if the database write fails.
pub fn upsert_item(conn: &mut _, row: &ItemRow) -> Result<SaveOutcome, PersistenceError> {
    conn.transaction::<SaveOutcome, PersistenceError, _>(|conn| {
        let exists: bool = diesel::select(diesel::dsl::exists(
            items::table.filter(items::id.eq(&row.id)),
        ))
        .get_result(conn)?;

        if exists {
            diesel::update(items::table.filter(items::id.eq(&row.id)))
                .set((
                    items::data.eq(&row.data),
                    items::updated_at.eq(&row.updated_at),
                ))
                .execute(conn)?;
            info!(id = %row.id, "Replaced stored item");
            Ok(SaveOutcome::Updated)
        } else {
            diesel::insert_into(items::table).values(row).execute(conn)?;
            info!(id = %row.id, "Inserted stored item");
            Ok(SaveOutcome::Created)
        }
    })
}
}

backend_fn! {
/// Deletes the row with this id.
///
/// Returns `true` if a row was removed, `false` if none existed.
///
/// # Errors
///
/// Returns an error if the database write fails.
pub fn delete_item(conn: &mut _, id: &str) -> Result<bool, PersistenceError> {
    let rows_affected: usize = diesel::delete(items::table.filter(items::id.eq(id))).execute(conn)?;

    info!(id, rows_affected, "Deleted stored item");
    Ok(rows_affected > 0)
}
}
