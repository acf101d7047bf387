// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use envios_domain::{Classification, Counters, Record};
use serde::{Deserialize, Serialize};

/// Raw view criteria as received in a query string.
///
/// Absent fields take the dashboard defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewQuery {
    pub status: Option<String>,
    pub kind: Option<String>,
    pub branch: Option<String>,
    pub date: Option<String>,
    pub bucket: Option<String>,
    /// Client name search.
    pub q: Option<String>,
}

/// One record of the view together with its derived badges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewItem {
    pub record: Record,
    pub classification: Classification,
    /// Relevant date rendered as `"Miércoles, 10/01/2024"`; empty when the
    /// record has no usable date.
    pub display_date: String,
}

/// API response for the dashboard view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewResponse {
    pub items: Vec<ViewItem>,
    pub counters: Counters,
}

/// API response for a successful save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveRecordResponse {
    pub ok: bool,
    /// The saved record's id.
    pub id: String,
    /// Whether the save created a new record rather than replacing one.
    pub created: bool,
}

/// API response for a successful delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteRecordResponse {
    pub ok: bool,
}

/// Choices offered by the create/edit forms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormOptionsResponse {
    pub branches: Vec<String>,
    pub time_slots: Vec<String>,
}

/// API response for the health check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Backend name (`sqlite` or `mysql`).
    pub backend: String,
    /// Whether the database answered a round-trip query.
    pub database_ok: bool,
}
