//! Shipping address accessor.
//!
//! Pulls `payload.order.shipping_address` out of an untyped envelope payload.
//! Only `zipcode` is inspected by the validation rule; the other fields are
//! passed through as untyped JSON.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

use crate::types::{Error, Result};

/// A zipcode as it arrives on the wire: usually a string, sometimes a number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Zipcode {
    Text(String),
    Number(serde_json::Number),
}

impl fmt::Display for Zipcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Zipcode::Text(s) => f.write_str(s),
            Zipcode::Number(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for Zipcode {
    fn from(s: &str) -> Self {
        Zipcode::Text(s.to_string())
    }
}

/// Shipping address taken from an order payload.
///
/// `zipcode` is the only typed field. Everything else (`firstname`, `city`,
/// `state`, `phone`, ...) is kept as the caller sent it, whatever its JSON
/// shape.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ShippingAddress {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zipcode: Option<Zipcode>,

    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl ShippingAddress {
    pub fn with_zipcode(zipcode: impl Into<Zipcode>) -> Self {
        Self {
            zipcode: Some(zipcode.into()),
            ..Self::default()
        }
    }

    /// A pass-through field, exactly as received.
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Extract the address from an envelope payload.
    ///
    /// Fails with [`Error::MalformedInput`] naming the first missing or
    /// mistyped key along `order.shipping_address`.
    pub fn from_payload(payload: &Map<String, Value>) -> Result<Self> {
        let order = object_field(payload, "order", "payload.order")?;
        let address = object_field(order, "shipping_address", "payload.order.shipping_address")?;

        serde_json::from_value(Value::Object(address.clone())).map_err(|e| {
            Error::malformed(format!("invalid payload.order.shipping_address: {}", e))
        })
    }
}

fn object_field<'a>(
    map: &'a Map<String, Value>,
    key: &str,
    path: &str,
) -> Result<&'a Map<String, Value>> {
    match map.get(key) {
        Some(Value::Object(inner)) => Ok(inner),
        Some(_) => Err(Error::malformed(format!("{} must be an object", path))),
        None => Err(Error::malformed(format!("missing required field: {}", path))),
    }
}
