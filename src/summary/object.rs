use serde_json::Value;

use super::{field_or, fmt_value, ref_name};

/// Formats a parsed object `.yy` document as a flat, section-headed report.
/// Never fails: every field falls back to its documented default.
pub fn summarize_object(doc: &Value) -> String {
    let mut lines = Vec::new();

    let name = doc
        .get("name")
        .and_then(Value::as_str)
        .unwrap_or("Unknown Object");
    lines.push(format!("Object: {name}"));
    lines.push("=".repeat(name.len() + 8));

    lines.push(String::new());
    lines.push("[Properties]".to_string());
    lines.push(format!("  Sprite: {}", ref_name(doc, "spriteId", "None")));
    lines.push(format!(
        "  Mask: {}",
        ref_name(doc, "spriteMaskId", "Same as Sprite")
    ));
    lines.push(format!(
        "  Parent: {}",
        ref_name(doc, "parentObjectId", "None")
    ));
    lines.push(format!("  Visible: {}", field_or(doc, "visible", "True")));
    lines.push(format!("  Solid: {}", field_or(doc, "solid", "False")));
    lines.push(format!(
        "  Persistent: {}",
        field_or(doc, "persistent", "False")
    ));

    let event_count = doc
        .get("eventList")
        .and_then(Value::as_array)
        .map(Vec::len)
        .unwrap_or(0);
    lines.push(String::new());
    lines.push(format!("[Events ({event_count})]"));

    lines.push(String::new());
    lines.push("[Physics Properties]".to_string());
    let physics_enabled = doc
        .get("physicsObject")
        .and_then(Value::as_bool)
        .unwrap_or(false);
    if physics_enabled {
        lines.push("  Enabled: True".to_string());
        let fields: [(&str, &str, &str); 10] = [
            ("Sensor", "physicsSensor", "False"),
            ("Shape", "physicsShape", "1"),
            ("Density", "physicsDensity", "0.5"),
            ("Restitution", "physicsRestitution", "0.1"),
            ("Group", "physicsGroup", "1"),
            ("Linear Damping", "physicsLinearDamping", "0.1"),
            ("Angular Damping", "physicsAngularDamping", "0.1"),
            ("Friction", "physicsFriction", "0.2"),
            ("Awake", "physicsStartAwake", "True"),
            ("Kinematic", "physicsKinematic", "False"),
        ];
        for (label, key, default) in fields {
            lines.push(format!("  {label}: {}", field_or(doc, key, default)));
        }
    } else {
        // Other physics-named fields are ignored when the flag is off.
        lines.push("  Enabled: False".to_string());
    }

    let props = doc.get("properties").and_then(Value::as_array);
    let prop_count = props.map(Vec::len).unwrap_or(0);
    lines.push(String::new());
    lines.push(format!("[Object Variables ({prop_count})]"));
    match props {
        Some(props) if !props.is_empty() => {
            for prop in props {
                let var_name = prop_field(prop, "name", "varName", "UnknownVar");
                let var_value = prop_field(prop, "value", "varValue", "UnknownVal");
                let var_type = prop_field(prop, "type", "varType", "?");
                lines.push(format!("  - {var_name} = {var_value} (Type: {var_type})"));
            }
        }
        _ => lines.push("  (None)".to_string()),
    }

    lines.join("\n")
}

/// Two-key fallback for object variable fields: current-format key first,
/// then the legacy pre-2.3 key, then a fixed placeholder.
fn prop_field(prop: &Value, current: &str, legacy: &str, default: &str) -> String {
    prop.get(current)
        .or_else(|| prop.get(legacy))
        .map(fmt_value)
        .unwrap_or_else(|| default.to_string())
}
