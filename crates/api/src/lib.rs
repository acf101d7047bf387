// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary for shipment and transfer tracking.
//!
//! Handlers here sit between the transport and the domain: they decode and
//! validate input, call the record store, and shape responses. Errors from
//! lower layers are translated into [`ApiError`] explicitly.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod error;
mod format;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use error::{ApiError, translate_domain_error, translate_persistence_error};
pub use format::format_date_with_weekday;
pub use handlers::{
    decode_record, delete_record, form_options, get_record, get_view, health, load_records,
    parse_view_criteria, save_record,
};
pub use request_response::{
    DeleteRecordResponse, FormOptionsResponse, HealthResponse, SaveRecordResponse, ViewItem,
    ViewQuery, ViewResponse,
};
