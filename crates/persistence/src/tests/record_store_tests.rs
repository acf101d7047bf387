// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::prelude::*;

use super::{create_test_shipment, create_test_transfer};
use crate::diesel_schema::items;
use crate::{BackendConnection, Persistence, SaveOutcome};
use envios_domain::Record;

fn insert_raw_row(persistence: &mut Persistence, id: &str, data: &str) {
    let BackendConnection::Sqlite(conn) = &mut persistence.conn else {
        panic!("raw inserts are only used against SQLite");
    };
    diesel::insert_into(items::table)
        .values((
            items::id.eq(id),
            items::data.eq(data),
            items::updated_at.eq("2024-01-01T00:00:00Z"),
        ))
        .execute(conn)
        .unwrap();
}

#[test]
fn test_new_store_is_empty_and_healthy() {
    let mut persistence = Persistence::new_in_memory().unwrap();

    assert_eq!(persistence.backend_name(), "sqlite");
    assert!(persistence.check_connection().is_ok());
    assert!(persistence.list_records().unwrap().is_empty());
}

#[test]
fn test_in_memory_stores_are_isolated() {
    let mut first = Persistence::new_in_memory().unwrap();
    let mut second = Persistence::new_in_memory().unwrap();

    first.save_record(&create_test_shipment("only-here")).unwrap();

    assert_eq!(first.list_records().unwrap().len(), 1);
    assert!(second.list_records().unwrap().is_empty());
}

#[test]
fn test_save_then_get_round_trips() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let shipment = create_test_shipment("env-1");

    let outcome = persistence.save_record(&shipment).unwrap();
    assert_eq!(outcome, SaveOutcome::Created);
    assert!(outcome.is_created());

    let loaded = persistence.get_record("env-1").unwrap();
    assert_eq!(loaded, Some(shipment));
}

#[test]
fn test_save_replaces_whole_record() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let mut shipment = create_test_shipment("env-1");
    persistence.save_record(&shipment).unwrap();

    if let Record::Shipment(s) = &mut shipment {
        s.delivered = true;
        s.client.phone = None;
    }
    let outcome = persistence.save_record(&shipment).unwrap();
    assert_eq!(outcome, SaveOutcome::Updated);

    let records = persistence.list_records().unwrap();
    assert_eq!(records, vec![shipment]);
}

#[test]
fn test_list_orders_by_id() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    persistence.save_record(&create_test_transfer("c")).unwrap();
    persistence.save_record(&create_test_shipment("a")).unwrap();
    persistence.save_record(&create_test_transfer("b")).unwrap();

    let ids: Vec<String> = persistence
        .list_records()
        .unwrap()
        .iter()
        .map(|r| r.id().to_string())
        .collect();
    assert_eq!(ids, vec!["a", "b", "c"]);
}

#[test]
fn test_list_skips_malformed_rows() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    persistence.save_record(&create_test_shipment("good")).unwrap();
    insert_raw_row(&mut persistence, "broken-json", "{oops");
    insert_raw_row(&mut persistence, "array", "[]");
    insert_raw_row(&mut persistence, "", "{}");

    let records = persistence.list_records().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records.first().map(Record::id), Some("good"));

    assert_eq!(persistence.get_record("broken-json").unwrap(), None);
}

#[test]
fn test_partial_rows_still_load() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    insert_raw_row(&mut persistence, "partial", r#"{"cliente": {"nombre": "Sin envío"}}"#);

    let record = persistence.get_record("partial").unwrap().unwrap();
    let shipment = record.as_shipment().unwrap();
    assert!(shipment.delivery.is_none());
    assert_eq!(shipment.client.name, "Sin envío");
}

#[test]
fn test_delete_reports_whether_record_existed() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    persistence.save_record(&create_test_transfer("tr-1")).unwrap();

    assert!(persistence.delete_record("tr-1").unwrap());
    assert!(!persistence.delete_record("tr-1").unwrap());
    assert_eq!(persistence.get_record("tr-1").unwrap(), None);
}

#[test]
fn test_get_missing_record_is_none() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    assert_eq!(persistence.get_record("nope").unwrap(), None);
}

#[test]
fn test_missing_table_fails_reads_but_not_health() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    persistence.save_record(&create_test_shipment("s-1")).unwrap();

    persistence.drop_items_table().unwrap();

    assert!(persistence.list_records().is_err());
    assert!(persistence.get_record("s-1").is_err());
    assert!(persistence.check_connection().is_ok());
}
