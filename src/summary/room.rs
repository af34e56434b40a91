use std::collections::BTreeMap;

use serde_json::Value;

use super::{field_or, fmt_value};
use crate::util::basename;

const INSTANCE_LAYER_TYPE: &str = "GMInstanceLayer";

/// Formats a parsed room `.yy` document as an ASCII connector tree.
///
/// Never fails: absent fields fall back to their documented defaults, so a
/// half-written room file still produces a readable report.
pub fn summarize_room(doc: &Value) -> String {
    let mut lines = Vec::new();
    let empty = Vec::new();

    let name = doc
        .get("name")
        .and_then(Value::as_str)
        .unwrap_or("Unknown Room");
    lines.push(name.to_string());

    let layers = doc
        .get("layers")
        .and_then(Value::as_array)
        .unwrap_or(&empty);

    // Properties is the last root branch, so its presence decides whether the
    // Layers branch is the final sibling.
    let has_properties = doc.get("roomSettings").is_some()
        || doc.get("viewSettings").is_some()
        || doc.get("isPersistent").is_some()
        || doc.get("creationCodeFile").is_some();

    let layers_connector = if has_properties { "├──" } else { "└──" };
    lines.push(format!("{layers_connector} Layers ({})", layers.len()));

    let layer_cont = if has_properties { "│   " } else { "    " };
    for (i, layer) in layers.iter().enumerate() {
        let last_layer = i + 1 == layers.len();
        let connector = if last_layer { "└──" } else { "├──" };

        let layer_name = layer
            .get("name")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| format!("Unnamed Layer {i}"));
        // Newer exports tag layers with __type, older ones with modelName.
        let layer_type = layer
            .get("__type")
            .and_then(Value::as_str)
            .or_else(|| layer.get("modelName").and_then(Value::as_str))
            .unwrap_or("Unknown");
        let shown_type = layer_type.strip_prefix("GM").unwrap_or(layer_type);
        lines.push(format!("{layer_cont}{connector} {layer_name} [{shown_type}]"));

        if layer_type == INSTANCE_LAYER_TYPE {
            render_instances(&mut lines, layer, layer_cont, last_layer, &empty);
        }
    }

    if has_properties {
        lines.push("└── Properties".to_string());
        let items = property_items(doc);
        for (k, item) in items.iter().enumerate() {
            let connector = if k + 1 == items.len() { "└──" } else { "├──" };
            lines.push(format!("    {connector} {item}"));
        }
    }

    lines.join("\n")
}

/// Appends the Instances sub-branch for one instance layer. Instances are
/// grouped by referenced object name and listed alphabetically; the section
/// is omitted entirely when the layer has no instances.
fn render_instances(
    lines: &mut Vec<String>,
    layer: &Value,
    layer_cont: &str,
    last_layer: bool,
    empty: &Vec<Value>,
) {
    let instances = layer
        .get("instances")
        .and_then(Value::as_array)
        .unwrap_or(empty);
    if instances.is_empty() {
        return;
    }

    let inst_cont = format!("{layer_cont}{}", if last_layer { "    " } else { "│   " });
    lines.push(format!("{inst_cont}└── Instances ({})", instances.len()));

    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for inst in instances {
        let obj_name = inst
            .get("objId")
            .and_then(|o| o.get("name"))
            .and_then(Value::as_str)
            .unwrap_or("UnknownObject");
        *counts.entry(obj_name).or_insert(0) += 1;
    }

    let obj_cont = format!("{inst_cont}    ");
    let total = counts.len();
    for (j, (obj_name, count)) in counts.iter().enumerate() {
        let connector = if j + 1 == total { "└──" } else { "├──" };
        let count_str = if *count > 1 {
            format!(" (x{count})")
        } else {
            String::new()
        };
        lines.push(format!("{obj_cont}{connector} {obj_name}{count_str}"));
    }
}

/// Builds the Properties leaf lines: dimensions, effective speed,
/// persistence, and the creation code file when one is set.
fn property_items(doc: &Value) -> Vec<String> {
    let empty = Vec::new();
    let room_settings = doc.get("roomSettings");
    let setting = |key: &str, default: &str| -> String {
        room_settings
            .and_then(|rs| rs.get(key))
            .map(fmt_value)
            .unwrap_or_else(|| default.to_string())
    };

    let mut speed = setting("Speed", "30");
    // The first enabled, non-inherited view overrides the room speed.
    let views = doc.get("views").and_then(Value::as_array).unwrap_or(&empty);
    if let Some(view) = views.iter().find(|v| {
        v.get("inherit").and_then(Value::as_bool) == Some(false)
            && v.get("visible").and_then(Value::as_bool) == Some(true)
    }) {
        if let Some(v) = view.get("physicsWorldSpeed") {
            speed = fmt_value(v);
        } else if let Some(v) = view.get("speed") {
            speed = fmt_value(v);
        }
    }

    let mut items = vec![
        format!("Width: {}", setting("Width", "?")),
        format!("Height: {}", setting("Height", "?")),
        format!("Speed: {speed}"),
        format!("Persistent: {}", field_or(doc, "isPersistent", "False")),
    ];

    let creation_code = doc
        .get("creationCodeFile")
        .and_then(Value::as_str)
        .unwrap_or("");
    if !creation_code.is_empty() {
        items.push(format!("Creation Code: {}", basename(creation_code)));
    }

    items
}
