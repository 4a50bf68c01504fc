//! JSON merge helper for layered configuration.

use serde_json::Value;

/// Merge overlay values into the base, recursing into objects.
///
/// Non-object values, `null` included, replace whatever the base held.
pub(super) fn merge_json_values(base: &mut Value, overlay: &Value) {
    match (base, overlay) {
        (Value::Object(base_map), Value::Object(overlay_map)) => {
            for (key, value) in overlay_map {
                match base_map.get_mut(key) {
                    Some(existing) => merge_json_values(existing, value),
                    None => {
                        base_map.insert(key.clone(), value.clone());
                    }
                }
            }
        }
        (base_slot, overlay_value) => {
            *base_slot = overlay_value.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::merge_json_values;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn overlay_keeps_sibling_keys() {
        let mut base = json!({ "provider": { "kind": "openai", "model": "a" } });
        merge_json_values(&mut base, &json!({ "provider": { "model": "b" } }));
        assert_eq!(base, json!({ "provider": { "kind": "openai", "model": "b" } }));
    }
}
