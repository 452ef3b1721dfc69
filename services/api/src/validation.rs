//! Input validation utilities

/// Returns the value when it is present and non-empty
pub fn required(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_non_empty_values() {
        let value = Some("alice".to_string());
        assert_eq!(required(&value), Some("alice"));
    }

    #[test]
    fn rejects_missing_values() {
        assert_eq!(required(&None), None);
    }

    #[test]
    fn rejects_empty_values() {
        let value = Some(String::new());
        assert_eq!(required(&value), None);
    }
}
