/// Treat a blank string the same as an absent field.
///
/// Clients send `""` as readily as they omit a key; both fail the
/// presence check on required fields.
pub fn required(field: Option<String>) -> Option<String> {
    field.filter(|value| !value.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn present_value_passes_through() {
        assert_eq!(required(Some("Ana".to_string())), Some("Ana".to_string()));
    }

    #[test]
    fn missing_value_stays_missing() {
        assert_eq!(required(None), None);
    }

    #[test]
    fn blank_value_counts_as_missing() {
        assert_eq!(required(Some(String::new())), None);
        assert_eq!(required(Some("   ".to_string())), None);
    }
}
