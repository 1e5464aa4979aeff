use alloy_primitives::hex;
use serde::Serialize;
use serde_json::{json, Map, Value};

use crate::error::{Error, Result};
use crate::types::{ModifyOrderWire, OrderWire, PlaceOrderAction, RsvSignature};

/// A struct that can be flattened into a signing payload
///
/// Implementations list their wire fields explicitly.
pub trait Signable {
    fn signing_fields(&self) -> Result<Vec<(&'static str, Value)>>;
}

/// Serialize one field value, reporting failures as [`Error::Serialization`]
fn field_value<T: Serialize + ?Sized>(name: &str, value: &T) -> Result<Value> {
    serde_json::to_value(value)
        .map_err(|e| Error::Serialization(format!("field {}: {}", name, e)))
}

fn has_null(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Array(items) => items.iter().any(has_null),
        Value::Object(fields) => fields.values().any(has_null),
        _ => false,
    }
}

/// Flatten a signable struct into a key/value map
///
/// # Errors
/// [`Error::Serialization`] when a field name repeats or a value has no JSON
/// representation (e.g. a non-finite float).
pub fn struct_to_map<T: Signable + ?Sized>(strct: &T) -> Result<Map<String, Value>> {
    let mut map = Map::new();
    for (name, value) in strct.signing_fields()? {
        if has_null(&value) {
            return Err(Error::Serialization(format!(
                "field {} has no JSON representation",
                name
            )));
        }
        if map.insert(name.to_string(), value).is_some() {
            return Err(Error::Serialization(format!("duplicate field {}", name)));
        }
    }
    Ok(map)
}

/// Pack signature components into their wire form
pub fn to_typed_sig(r: [u8; 32], s: [u8; 32], v: u8) -> RsvSignature {
    RsvSignature {
        r: hex::encode_prefixed(r),
        s: hex::encode_prefixed(s),
        v,
    }
}

impl Signable for OrderWire {
    fn signing_fields(&self) -> Result<Vec<(&'static str, Value)>> {
        let mut fields = vec![
            ("a", json!(self.asset)),
            ("b", json!(self.is_buy)),
            ("p", json!(self.limit_px)),
            ("s", json!(self.size_px)),
            ("r", json!(self.reduce_only)),
            ("t", field_value("t", &self.order_type)?),
        ];
        if let Some(cloid) = &self.cloid {
            fields.push(("c", json!(cloid.as_str())));
        }
        Ok(fields)
    }
}

impl Signable for ModifyOrderWire {
    fn signing_fields(&self) -> Result<Vec<(&'static str, Value)>> {
        Ok(vec![
            ("oid", json!(self.oid)),
            ("order", Value::Object(struct_to_map(&self.order)?)),
        ])
    }
}

impl Signable for PlaceOrderAction {
    fn signing_fields(&self) -> Result<Vec<(&'static str, Value)>> {
        let orders = self
            .orders
            .iter()
            .map(|order| struct_to_map(order).map(Value::Object))
            .collect::<Result<Vec<_>>>()?;
        Ok(vec![
            ("type", json!(self.action_type)),
            ("orders", Value::Array(orders)),
            ("grouping", field_value("grouping", &self.grouping)?),
        ])
    }
}
