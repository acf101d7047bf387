// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod record_store_tests;

use envios_domain::{Client, Delivery, Record, Shipment, Transfer};

pub fn create_test_shipment(id: &str) -> Record {
    Record::Shipment(Shipment {
        id: id.to_string(),
        delivery: Some(Delivery {
            date: String::from("2024-01-10"),
            window_start: String::from("09:00"),
            window_end: String::from("12:00"),
            origin_branch: String::from("Guaymallén"),
            billing_branch: String::from("Maipú"),
        }),
        client: Client {
            name: String::from("Ana Pérez"),
            phone: Some(String::from("261 555 0101")),
            ..Client::default()
        },
        ..Shipment::default()
    })
}

pub fn create_test_transfer(id: &str) -> Record {
    Record::Transfer(Transfer {
        id: id.to_string(),
        date: String::from("2024-01-11"),
        from_branch: String::from("Maipú"),
        to_branch: String::from("Guaymallén"),
        comment: String::from("Reponer látex blanco"),
        ..Transfer::default()
    })
}
