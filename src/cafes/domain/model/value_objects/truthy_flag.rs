const TRUTHY_VALUES: [&str; 5] = ["1", "yes", "y", "true", "t"];

/// Interprets a free-form form value as a boolean amenity flag.
pub fn parse_truthy_flag(value: &str) -> bool {
    let normalized = value.trim().to_lowercase();
    TRUTHY_VALUES.contains(&normalized.as_str())
}

/// Absent form fields are falsy.
pub fn parse_optional_truthy_flag(value: Option<&str>) -> bool {
    value.is_some_and(parse_truthy_flag)
}
