// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Backend-agnostic mutations.
//!
//! Every mutation is written once in Diesel DSL and generated per backend
//! by `backend_fn!`.

pub mod items;

pub use items::{delete_item_mysql, delete_item_sqlite, upsert_item_mysql, upsert_item_sqlite};
