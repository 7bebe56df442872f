/// Skip predicate for identifier fields the API omits on creation.
pub fn is_none_or_empty(value: &Option<String>) -> bool {
    value.as_ref().map(|v| v.is_empty()).unwrap_or(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_and_empty_are_skipped() {
        assert!(is_none_or_empty(&None));
        assert!(is_none_or_empty(&Some(String::new())));
        assert!(!is_none_or_empty(&Some("identifier-zone-1".to_string())));
    }
}
