/// Returns the starter body for a newly created GML event file.
pub fn gml_stub(event_name: &str) -> String {
    format!("/// @description {event_name}\n\n// Add your code here\n")
}
