//! Layering of metadata files.
//!
//! `package.local.yml` is applied on top of `package.yml`:
//!
//! - Mappings merge key by key, recursively
//! - Sequences (e.g. `classifiers`) are replaced wholesale
//! - A `null` in the overlay removes the key, restoring the built-in default
//! - Any other overlay value replaces the base value

use serde_yaml::{Mapping, Value};

/// Apply `overlay` on top of `base`.
pub fn deep_merge(base: &Value, overlay: &Value) -> Value {
    let (Value::Mapping(base_map), Value::Mapping(overlay_map)) = (base, overlay) else {
        return overlay.clone();
    };

    let mut merged = base_map.clone();
    for (key, value) in overlay_map {
        if value.is_null() {
            merged.remove(key);
            continue;
        }
        let next = match base_map.get(key) {
            Some(existing) => deep_merge(existing, value),
            None => value.clone(),
        };
        merged.insert(key.clone(), next);
    }
    Value::Mapping(merged)
}

/// Fold layers in order; later layers win.
pub fn merge_layers(layers: &[Value]) -> Value {
    layers
        .iter()
        .fold(Value::Mapping(Mapping::new()), |acc, layer| {
            deep_merge(&acc, layer)
        })
}
