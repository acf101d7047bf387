// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use envios_domain::{Client, Delivery, Record, Shipment, Transfer};
use envios_persistence::Persistence;

pub fn create_test_persistence() -> Persistence {
    Persistence::new_in_memory().expect("Failed to create in-memory persistence")
}

pub fn catalog() -> Vec<String> {
    vec![String::from("Guaymallén"), String::from("Maipú")]
}

pub fn at(date: &str, time: &str) -> NaiveDateTime {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .unwrap()
        .and_time(NaiveTime::parse_from_str(time, "%H:%M").unwrap())
}

pub fn shipment(id: &str, date: &str, window_end: &str, origin: &str, billing: &str) -> Shipment {
    Shipment {
        id: id.to_string(),
        delivery: Some(Delivery {
            date: date.to_string(),
            window_start: String::from("08:00"),
            window_end: window_end.to_string(),
            origin_branch: origin.to_string(),
            billing_branch: billing.to_string(),
        }),
        client: Client {
            name: format!("Cliente {id}"),
            ..Client::default()
        },
        ..Shipment::default()
    }
}

pub fn transfer(id: &str, date: &str, from: &str, to: &str) -> Transfer {
    Transfer {
        id: id.to_string(),
        date: date.to_string(),
        from_branch: from.to_string(),
        to_branch: to.to_string(),
        comment: String::from("Reponer stock"),
        ..Transfer::default()
    }
}

pub fn seed(persistence: &mut Persistence, records: &[Record]) {
    for record in records {
        persistence.save_record(record).unwrap();
    }
}
