// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Database backend-specific code.
//!
//! This module isolates backend-specific initialization, migration,
//! and helper functions that cannot be expressed in backend-agnostic
//! Diesel DSL.
//!
//! ## Backend Support
//!
//! - `sqlite` — `SQLite` backend (default for development and testing)
//! - `mysql` — MySQL/MariaDB backend (validated via opt-in tests)
//!
//! Item queries and mutations live in `queries/` and `mutations/` and must
//! work across all supported backends.

pub mod mysql;
pub mod sqlite;

use diesel::dsl::sql;
use diesel::sql_types::Integer;
use diesel::{Connection, MysqlConnection, RunQueryDsl, SqliteConnection};

use crate::error::PersistenceError;

/// Trait for backend-specific operations.
///
/// Implemented for both `SqliteConnection` and `MysqlConnection` so the
/// adapter can report on whichever backend it holds.
pub trait PersistenceBackend: Connection {
    /// Short name of the backend, for health reporting.
    fn backend_name(&self) -> &'static str;

    /// Runs a trivial round-trip query.
    ///
    /// # Errors
    ///
    /// Returns an error if the database does not answer.
    fn check_connection(&mut self) -> Result<(), PersistenceError>;
}

impl PersistenceBackend for SqliteConnection {
    fn backend_name(&self) -> &'static str {
        "sqlite"
    }

    fn check_connection(&mut self) -> Result<(), PersistenceError> {
        diesel::select(sql::<Integer>("1"))
            .get_result::<i32>(self)
            .map(|_| ())
            .map_err(|e| PersistenceError::QueryFailed(e.to_string()))
    }
}

impl PersistenceBackend for MysqlConnection {
    fn backend_name(&self) -> &'static str {
        "mysql"
    }

    fn check_connection(&mut self) -> Result<(), PersistenceError> {
        diesel::select(sql::<Integer>("1"))
            .get_result::<i32>(self)
            .map(|_| ())
            .map_err(|e| PersistenceError::QueryFailed(e.to_string()))
    }
}
