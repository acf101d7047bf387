// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Display formatting for dates shown on cards.

use chrono::{Datelike, NaiveDate, Weekday};
use envios_domain::parse_date;

/// Renders an ISO date as `DD/MM/YYYY`. Malformed input renders as an
/// empty string.
#[must_use]
pub fn format_ddmmyyyy(iso: &str) -> String {
    parse_date(iso).map_or_else(String::new, |date| date.format("%d/%m/%Y").to_string())
}

/// Renders an ISO date with its Spanish weekday, e.g.
/// `"Miércoles, 10/01/2024"`. Malformed input renders as an empty string.
#[must_use]
pub fn format_date_with_weekday(iso: &str) -> String {
    parse_date(iso).map_or_else(String::new, |date| {
        format!("{}, {}", spanish_weekday(date), format_ddmmyyyy(iso))
    })
}

fn spanish_weekday(date: NaiveDate) -> &'static str {
    match date.weekday() {
        Weekday::Mon => "Lunes",
        Weekday::Tue => "Martes",
        Weekday::Wed => "Miércoles",
        Weekday::Thu => "Jueves",
        Weekday::Fri => "Viernes",
        Weekday::Sat => "Sábado",
        Weekday::Sun => "Domingo",
    }
}
