//! Layered configuration merge
//!
//! Every builder step in the recipe is a merge of one layer over another.
//! The policy is fixed:
//! - Objects: deep-merge by key
//! - Arrays: REPLACE (overlay wins entirely)
//! - Scalars and null: overlay wins
//!
//! Array concatenation (build steps, volume mounts) is never implicit; the
//! recipe steps that need it push onto the resolved lists explicitly.

use crate::{Error, Result};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;

/// Deep merge two JSON values, `overlay` taking precedence.
pub fn deep_merge(base: Value, overlay: Value) -> Value {
    match (base, overlay) {
        (Value::Object(mut base_map), Value::Object(overlay_map)) => {
            for (key, overlay_value) in overlay_map {
                let merged = match base_map.remove(&key) {
                    Some(base_value) => deep_merge(base_value, overlay_value),
                    None => overlay_value,
                };
                base_map.insert(key, merged);
            }
            Value::Object(base_map)
        }
        (_, overlay) => overlay,
    }
}

/// Merge layers in order; the first is the base, the last has highest precedence.
pub fn merge_layers(layers: impl IntoIterator<Item = Value>) -> Value {
    layers
        .into_iter()
        .fold(Value::Object(Default::default()), deep_merge)
}

/// Typed merge: serialize both sides, deep-merge, and read the result back.
///
/// Fields a type skips when unset (`None`, empty maps) never override the
/// base, which lets a partially filled struct act as an overlay.
pub fn layer<T>(what: &'static str, base: &T, overlay: &T) -> Result<T>
where
    T: Serialize + DeserializeOwned,
{
    let to_value = |v: &T| {
        serde_json::to_value(v).map_err(|source| Error::InvalidLayer { what, source })
    };
    let merged = deep_merge(to_value(base)?, to_value(overlay)?);
    serde_json::from_value(merged).map_err(|source| Error::InvalidLayer { what, source })
}
