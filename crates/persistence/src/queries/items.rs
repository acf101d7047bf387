// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Item queries.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::debug;

use crate::data_models::ItemRow;
use crate::diesel_schema::items;
use crate::error::PersistenceError;

backend_fn! {
/// Loads every stored row, ordered by id.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_items(conn: &mut _) -> Result<Vec<ItemRow>, PersistenceError> {
    let rows: Vec<ItemRow> = items::table
        .order(items::id.asc())
        .select(ItemRow::as_select())
        .load(conn)?;

    debug!(count = rows.len(), "Loaded stored items");
    Ok(rows)
}
}

backend_fn! {
/// Loads a single row by id.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if no row has this id.
pub fn get_item(conn: &mut _, id: &str) -> Result<Option<ItemRow>, PersistenceError> {
    debug!(id, "Looking up stored item");

    let row: Option<ItemRow> = items::table
        .filter(items::id.eq(id))
        .select(ItemRow::as_select())
        .first(conn)
        .optional()?;

    Ok(row)
}
}
