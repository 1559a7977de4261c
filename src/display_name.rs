/// Build a display name from a required given name and an optional
/// family name. A missing or empty family name yields the given name
/// alone; otherwise the two parts are joined with a single space.
pub fn build_display_name(given: &str, family: Option<&str>) -> String {
    match family {
        Some(f) if !f.is_empty() => format!("{given} {f}"),
        _ => given.to_string(),
    }
}
