// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Client, Delivery, NaiveDate, NaiveDateTime, Record, Shipment, Transfer};

pub fn at(date: &str, time: &str) -> NaiveDateTime {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .unwrap()
        .and_time(chrono::NaiveTime::parse_from_str(time, "%H:%M").unwrap())
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
            name: format!("Client {id}"),
            ..Client::default()
        },
        ..Shipment::default()
    }
}

pub fn delivered(mut shipment: Shipment, goods_transferred: bool) -> Shipment {
    shipment.delivered = true;
    shipment.goods_transferred = goods_transferred;
    shipment
}

pub fn transfer(id: &str, date: &str, from: &str, to: &str) -> Transfer {
    Transfer {
        id: id.to_string(),
        date: date.to_string(),
        from_branch: from.to_string(),
        to_branch: to.to_string(),
        ..Transfer::default()
    }
}

pub fn ids(records: &[Record]) -> Vec<&str> {
    records.iter().map(Record::id).collect()
}
