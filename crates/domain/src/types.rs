// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Tag value carried by every transfer record.
pub const TRANSFER_TAG: &str = "transferencia";

/// Discriminates the two record variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    /// Home-delivery shipment.
    Shipment,
    /// Inter-branch stock transfer.
    Transfer,
}

impl RecordKind {
    /// Determines the variant of a raw stored payload.
    ///
    /// A payload is a transfer when it carries the `tipo: "transferencia"`
    /// tag. Older payloads written before the tag existed are recognised by
    /// shape instead: both `sucursalDesde` and `sucursalHasta` are strings
    /// and there is no `envio` key. Everything else is a shipment.
    #[must_use]
    pub fn detect(value: &Value) -> Self {
        if value.get("tipo").and_then(Value::as_str) == Some(TRANSFER_TAG) {
            return Self::Transfer;
        }

        let is_string = |key: &str| value.get(key).is_some_and(Value::is_string);
        if is_string("sucursalDesde") && is_string("sucursalHasta") && value.get("envio").is_none()
        {
            Self::Transfer
        } else {
            Self::Shipment
        }
    }

    /// Returns the lowercase name of this kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Shipment => "shipment",
            Self::Transfer => "transfer",
        }
    }
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Delivery schedule and branches for a shipment.
///
/// Dates are ISO `YYYY-MM-DD` and times are `HH:MM`, both kept as the raw
/// strings the form submitted so partial records still round-trip.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delivery {
    /// Delivery date.
    #[serde(rename = "fecha", default, deserialize_with = "lenient_string")]
    pub date: String,
    /// Start of the delivery window.
    #[serde(rename = "horaDesde", default, deserialize_with = "lenient_string")]
    pub window_start: String,
    /// End of the delivery window.
    #[serde(rename = "horaHasta", default, deserialize_with = "lenient_string")]
    pub window_end: String,
    /// Branch that dispatches the goods.
    #[serde(rename = "sucursalEnvia", default, deserialize_with = "lenient_string")]
    pub origin_branch: String,
    /// Branch that billed the sale.
    #[serde(
        rename = "sucursalFactura",
        default,
        deserialize_with = "lenient_string"
    )]
    pub billing_branch: String,
}

/// The customer receiving a shipment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    #[serde(rename = "nombre", default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(
        rename = "telefono",
        default,
        deserialize_with = "lenient_opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub phone: Option<String>,
    #[serde(
        rename = "direccion",
        default,
        deserialize_with = "lenient_opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub address: Option<String>,
    #[serde(
        rename = "urlMapa",
        default,
        deserialize_with = "lenient_opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub map_url: Option<String>,
    #[serde(
        rename = "referencia",
        default,
        deserialize_with = "lenient_opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub note: Option<String>,
}

/// Goods attached to a shipment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goods {
    #[serde(
        rename = "metodoPago",
        default,
        deserialize_with = "lenient_opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub payment_method: Option<String>,
    /// Base64 encoded invoice or delivery note.
    #[serde(
        rename = "pdfBase64",
        default,
        deserialize_with = "lenient_opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub document_base64: Option<String>,
    #[serde(
        rename = "pdfNombre",
        default,
        deserialize_with = "lenient_opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub document_name: Option<String>,
}

/// A home-delivery shipment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shipment {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: String,
    /// Delivery details; absent on incomplete records.
    #[serde(
        rename = "envio",
        default,
        deserialize_with = "lenient_object",
        skip_serializing_if = "Option::is_none"
    )]
    pub delivery: Option<Delivery>,
    #[serde(rename = "cliente", default, deserialize_with = "lenient_object_or_default")]
    pub client: Client,
    #[serde(
        rename = "mercaderia",
        default,
        deserialize_with = "lenient_object",
        skip_serializing_if = "Option::is_none"
    )]
    pub goods: Option<Goods>,
    #[serde(
        rename = "comentarios",
        default,
        deserialize_with = "lenient_opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub comments: Option<String>,
    /// Set once the goods reached the client.
    #[serde(rename = "entregado", default, deserialize_with = "lenient_bool")]
    pub delivered: bool,
    /// Set once the goods were moved between origin and billing branch.
    #[serde(
        rename = "mercaderiaTransferida",
        default,
        deserialize_with = "lenient_bool"
    )]
    pub goods_transferred: bool,
    /// Creation time in milliseconds since the Unix epoch.
    #[serde(
        rename = "createdAt",
        default,
        deserialize_with = "lenient_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<i64>,
}

impl Shipment {
    /// Returns the delivery date, or an empty string when unscheduled.
    #[must_use]
    pub fn delivery_date(&self) -> &str {
        self.delivery.as_ref().map_or("", |d| d.date.as_str())
    }
}

/// Literal `tipo` tag written on every transfer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransferTag;

impl Serialize for TransferTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(TRANSFER_TAG)
    }
}

/// An inter-branch stock transfer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transfer {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(rename = "tipo", default, skip_deserializing)]
    pub tag: TransferTag,
    #[serde(rename = "fecha", default, deserialize_with = "lenient_string")]
    pub date: String,
    #[serde(rename = "sucursalDesde", default, deserialize_with = "lenient_string")]
    pub from_branch: String,
    #[serde(rename = "sucursalHasta", default, deserialize_with = "lenient_string")]
    pub to_branch: String,
    #[serde(rename = "comentarios", default, deserialize_with = "lenient_string")]
    pub comment: String,
    /// Line items moved; older records kept their description here.
    #[serde(
        rename = "detalle",
        default,
        deserialize_with = "lenient_opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub detail: Option<String>,
    #[serde(
        rename = "pdfBase64",
        default,
        deserialize_with = "lenient_opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub document_base64: Option<String>,
    #[serde(
        rename = "pdfNombre",
        default,
        deserialize_with = "lenient_opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub document_name: Option<String>,
    #[serde(rename = "completada", default, deserialize_with = "lenient_bool")]
    pub completed: bool,
    #[serde(
        rename = "createdAt",
        default,
        deserialize_with = "lenient_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<i64>,
}

impl Transfer {
    /// Text shown for the transfer: the comment, or the detail when the
    /// comment is blank.
    #[must_use]
    pub fn description(&self) -> &str {
        if self.comment.trim().is_empty() {
            self.detail.as_deref().unwrap_or_default()
        } else {
            &self.comment
        }
    }
}

/// A stored record: either a shipment or a transfer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Record {
    Shipment(Shipment),
    Transfer(Transfer),
}

impl Record {
    /// Decodes a record from a JSON payload.
    ///
    /// Missing or `null` fields fall back to empty values so partial records
    /// still load.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::MalformedRecord`] when the payload is not a
    /// JSON object.
    pub fn from_value(value: Value) -> Result<Self, DomainError> {
        if !value.is_object() {
            return Err(DomainError::MalformedRecord {
                reason: format!("expected a JSON object, found {}", json_type_name(&value)),
            });
        }

        let malformed = |e: serde_json::Error| DomainError::MalformedRecord {
            reason: e.to_string(),
        };
        match RecordKind::detect(&value) {
            RecordKind::Transfer => serde_json::from_value(value)
                .map(Self::Transfer)
                .map_err(malformed),
            RecordKind::Shipment => serde_json::from_value(value)
                .map(Self::Shipment)
                .map_err(malformed),
        }
    }

    /// Encodes this record as its JSON payload.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::MalformedRecord`] if serialization fails.
    pub fn to_value(&self) -> Result<Value, DomainError> {
        serde_json::to_value(self).map_err(|e| DomainError::MalformedRecord {
            reason: e.to_string(),
        })
    }

    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Shipment(s) => &s.id,
            Self::Transfer(t) => &t.id,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> RecordKind {
        match self {
            Self::Shipment(_) => RecordKind::Shipment,
            Self::Transfer(_) => RecordKind::Transfer,
        }
    }

    /// The date the record is scheduled for: the delivery date of a
    /// shipment or the transfer date.
    #[must_use]
    pub fn relevant_date(&self) -> &str {
        match self {
            Self::Shipment(s) => s.delivery_date(),
            Self::Transfer(t) => &t.date,
        }
    }

    /// The branch used for branch filtering: the shipment's origin branch
    /// or the transfer's source branch.
    #[must_use]
    pub fn branch(&self) -> &str {
        match self {
            Self::Shipment(s) => s.delivery.as_ref().map_or("", |d| d.origin_branch.as_str()),
            Self::Transfer(t) => &t.from_branch,
        }
    }

    #[must_use]
    pub const fn as_shipment(&self) -> Option<&Shipment> {
        match self {
            Self::Shipment(s) => Some(s),
            Self::Transfer(_) => None,
        }
    }

    #[must_use]
    pub const fn as_transfer(&self) -> Option<&Transfer> {
        match self {
            Self::Transfer(t) => Some(t),
            Self::Shipment(_) => None,
        }
    }
}

impl From<Shipment> for Record {
    fn from(shipment: Shipment) -> Self {
        Self::Shipment(shipment)
    }
}

impl From<Transfer> for Record {
    fn from(transfer: Transfer) -> Self {
        Self::Transfer(transfer)
    }
}

impl<'de> Deserialize<'de> for Record {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::from_value(value).map_err(D::Error::custom)
    }
}

const fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    })
}

fn lenient_opt_string<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    })
}

// Older clients sometimes stored flags as `"true"` or `1`.
fn lenient_bool<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Bool(flag) => flag,
        Value::String(text) => text.trim().eq_ignore_ascii_case("true"),
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        _ => false,
    })
}

fn lenient_timestamp<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<i64>, D::Error> {
    Ok(Value::deserialize(deserializer)?.as_i64())
}

// Non-object values decode as absent rather than failing the whole record.
fn lenient_object<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    if !value.is_object() {
        return Ok(None);
    }
    serde_json::from_value(value).map(Some).map_err(D::Error::custom)
}

fn lenient_object_or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    lenient_object(deserializer).map(Option::unwrap_or_default)
}
