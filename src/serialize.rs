//! [`LookupTable`] → YAML table document.

use serde_json::{Map, Value, json};

use crate::error::SerializeError;
use crate::table::LookupTable;

/// Serialize a table to the nested YAML form read by [`parse_table`](crate::parse::parse_table).
///
/// `edition` is emitted first, then `codes` in key order.
pub fn serialize_table(table: &LookupTable) -> Result<String, SerializeError> {
    let mut codes = Map::new();
    for (key, code) in table.entries() {
        let segments = key.segments();
        let Some((leaf, branches)) = segments.split_last() else {
            continue;
        };
        let mut node = &mut codes;
        for segment in branches {
            let child = node
                .entry(segment.to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            node = child.as_object_mut().ok_or_else(|| SerializeError {
                message: format!("segment {} is both a code and a branch", segment),
            })?;
        }
        node.insert(leaf.to_string(), Value::String(code.to_string()));
    }

    let edition = serde_json::to_value(table.edition()).map_err(|e| SerializeError {
        message: format!("failed to convert edition to JSON value: {}", e),
    })?;
    let doc = json!({ "edition": edition, "codes": codes });

    serde_saphyr::to_string(&doc).map_err(|e| SerializeError {
        message: format!("failed to serialize to YAML: {}", e),
    })
}
