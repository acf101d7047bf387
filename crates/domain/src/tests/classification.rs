// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{at, delivered, shipment, transfer};
use crate::{
    Record, RecordStatus, Shipment, classify, is_complete, is_overdue, is_overdue_shipment,
    is_overdue_transfer, is_visible_in_main_view, pending_transfer_alert, requires_transfer,
};

#[test]
fn test_undelivered_cross_branch_shipment_after_window_is_overdue() {
    let s = shipment("s1", "2024-01-10", "12:00", "A", "B");
    let now = at("2024-01-11", "00:00");

    assert!(is_overdue_shipment(&s, now));
    assert!(is_visible_in_main_view(&Record::Shipment(s.clone())));
    assert!(requires_transfer(&s));
}

#[test]
fn test_delivered_and_transferred_shipment_is_complete() {
    let s = delivered(shipment("s1", "2024-01-10", "12:00", "A", "B"), true);

    assert!(is_complete(&Record::Shipment(s.clone())));
    assert!(!pending_transfer_alert(&s));
    assert!(!is_overdue_shipment(&s, at("2024-02-01", "00:00")));
}

#[test]
fn test_undelivered_shipments_are_always_visible() {
    for (date, end) in [("2000-01-01", "08:00"), ("2099-12-31", "19:00"), ("", "")] {
        let s = shipment("s", date, end, "A", "B");
        assert!(is_visible_in_main_view(&Record::Shipment(s)));
    }
}

#[test]
fn test_same_branch_delivered_shipment_is_complete_regardless_of_transfer_flag() {
    for goods_transferred in [false, true] {
        let s = delivered(shipment("s", "2024-01-10", "12:00", "A", "A"), goods_transferred);
        assert!(!requires_transfer(&s));
        assert!(is_complete(&Record::Shipment(s.clone())));
        assert!(!pending_transfer_alert(&s));
        assert!(!is_visible_in_main_view(&Record::Shipment(s)));
    }
}

#[test]
fn test_delivered_cross_branch_shipment_without_transfer_stays_visible() {
    let s = delivered(shipment("s", "2024-01-10", "12:00", "A", "B"), false);
    let record = Record::Shipment(s.clone());

    assert!(pending_transfer_alert(&s));
    assert!(is_visible_in_main_view(&record));
    assert!(!is_complete(&record));
}

#[test]
fn test_transfers_are_never_complete() {
    let mut t = transfer("t", "2024-01-01", "A", "B");
    assert!(!is_complete(&Record::Transfer(t.clone())));

    t.completed = true;
    let record = Record::Transfer(t);
    assert!(!is_complete(&record));
    assert!(is_visible_in_main_view(&record));
}

#[test]
fn test_transfer_overdue_compares_calendar_dates_only() {
    let today = transfer("t", "2024-01-05", "A", "B");
    let yesterday = transfer("t", "2024-01-04", "A", "B");

    assert!(!is_overdue_transfer(&today, at("2024-01-05", "19:00")));
    assert!(is_overdue_transfer(&yesterday, at("2024-01-05", "00:00")));
    assert!(is_overdue_transfer(&yesterday, at("2024-01-05", "23:30")));
}

#[test]
fn test_old_transfer_is_overdue() {
    let t = transfer("t", "2024-01-01", "A", "B");
    assert!(is_overdue_transfer(&t, at("2024-01-05", "09:00")));
    assert!(is_overdue(&Record::Transfer(t), at("2024-01-05", "09:00")));
}

#[test]
fn test_partial_records_resolve_to_safe_defaults() {
    let bare = Shipment {
        id: String::from("bare"),
        ..Shipment::default()
    };
    let record = Record::Shipment(bare.clone());
    let now = at("2024-01-05", "09:00");

    assert!(!is_overdue_shipment(&bare, now));
    assert!(!requires_transfer(&bare));
    assert!(!is_complete(&record));
    assert!(!is_visible_in_main_view(&record));
    assert!(!pending_transfer_alert(&bare));

    let undated = transfer("t", "", "A", "B");
    assert!(!is_overdue_transfer(&undated, now));
}

#[test]
fn test_shipment_with_missing_window_end_is_not_overdue() {
    let s = shipment("s", "2024-01-01", "", "A", "B");
    assert!(!is_overdue_shipment(&s, at("2024-06-01", "00:00")));
}

#[test]
fn test_window_end_with_seconds_is_read_for_overdue() {
    let s = shipment("s", "2024-01-10", "12:00:00", "A", "B");
    assert!(is_overdue_shipment(&s, at("2024-01-10", "13:00")));
    assert!(!is_overdue_shipment(&s, at("2024-01-10", "11:00")));
}

#[test]
fn test_delivered_string_flag_is_not_overdue() {
    let value = serde_json::json!({
        "id": "s",
        "envio": {"fecha": "2024-01-10", "horaHasta": "12:00", "sucursalEnvia": "A", "sucursalFactura": "A"},
        "entregado": "true"
    });
    let record = Record::from_value(value).unwrap();
    assert!(!is_overdue(&record, at("2024-01-11", "00:00")));
}

#[test]
fn test_classify_status_precedence() {
    let now = at("2024-01-11", "10:00");

    let late = Record::Shipment(shipment("s", "2024-01-10", "12:00", "A", "B"));
    assert_eq!(classify(&late, now).status, RecordStatus::Overdue);

    let awaiting = Record::Shipment(delivered(
        shipment("s", "2024-01-10", "12:00", "A", "B"),
        false,
    ));
    let facts = classify(&awaiting, now);
    assert_eq!(facts.status, RecordStatus::AwaitingTransfer);
    assert!(facts.pending_transfer_alert);
    assert!(facts.requires_transfer);
    assert!(!facts.overdue);

    let done = Record::Shipment(delivered(
        shipment("s", "2024-01-10", "12:00", "A", "B"),
        true,
    ));
    assert_eq!(classify(&done, now).status, RecordStatus::Complete);

    let upcoming = Record::Shipment(shipment("s", "2024-01-11", "18:00", "A", "A"));
    let facts = classify(&upcoming, now);
    assert_eq!(facts.status, RecordStatus::Pending);
    assert!(facts.visible_in_main_view);
}

#[test]
fn test_classify_transfer() {
    let now = at("2024-01-05", "10:00");

    let late = Record::Transfer(transfer("t", "2024-01-01", "A", "B"));
    let facts = classify(&late, now);
    assert_eq!(facts.status, RecordStatus::Overdue);
    assert!(!facts.requires_transfer);
    assert!(!facts.complete);

    let current = Record::Transfer(transfer("t", "2024-01-05", "A", "B"));
    assert_eq!(classify(&current, now).status, RecordStatus::Pending);
}

#[test]
fn test_record_status_serializes_snake_case() {
    assert_eq!(
        serde_json::to_string(&RecordStatus::AwaitingTransfer).unwrap(),
        "\"awaiting_transfer\""
    );
    assert_eq!(RecordStatus::Overdue.to_string(), "overdue");
}
