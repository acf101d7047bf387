// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::format::{format_date_with_weekday, format_ddmmyyyy};

#[test]
fn test_format_ddmmyyyy() {
    assert_eq!(format_ddmmyyyy("2024-01-10"), "10/01/2024");
    assert_eq!(format_ddmmyyyy("2023-12-31"), "31/12/2023");
}

#[test]
fn test_format_with_spanish_weekday() {
    assert_eq!(format_date_with_weekday("2024-01-10"), "Miércoles, 10/01/2024");
    assert_eq!(format_date_with_weekday("2024-01-13"), "Sábado, 13/01/2024");
    assert_eq!(format_date_with_weekday("2024-01-14"), "Domingo, 14/01/2024");
}

#[test]
fn test_malformed_dates_render_empty() {
    assert_eq!(format_ddmmyyyy(""), "");
    assert_eq!(format_ddmmyyyy("10/01/2024"), "");
    assert_eq!(format_date_with_weekday("2024-02-30"), "");
}
