use std::collections::BTreeMap;

/// Splits `key=value;key=value` input. Keys and values are trimmed, blank
/// segments and segments without `=` are skipped, and later keys win.
pub fn parse_raw_input(raw: &str) -> BTreeMap<String, String> {
    raw.split(';')
        .filter_map(|segment| segment.split_once('='))
        .map(|(key, value)| (key.trim().to_string(), value.trim().to_string()))
        .filter(|(key, _)| !key.is_empty())
        .collect()
}
