//! Share strings: an array as a comma-separated list, optionally wrapped in a
//! `?data=` query so the same data can be opened in another visualizer.

use super::{validate_with, Bounds, InputError};

const DATA_PARAM: &str = "data";

/// `[5, 3, 8]` becomes `"5,3,8"`
pub fn encode(values: &[i64]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

/// The `?data=...` query for `values`
pub fn share_query(values: &[i64]) -> String {
    format!("?{}={}", DATA_PARAM, encode(values))
}

pub fn is_query(text: &str) -> bool {
    data_param(text).is_some()
}

/// Extract and validate the `data` parameter from a query string or URL
pub fn parse_query(text: &str, bounds: &Bounds) -> Result<Vec<i64>, InputError> {
    let raw = data_param(text).ok_or_else(|| InputError::MissingData(text.to_string()))?;
    Ok(validate_with(&decode(raw), bounds)?)
}

fn data_param(text: &str) -> Option<&str> {
    let query = match text.split_once('?') {
        Some((_, query)) => query,
        None => text,
    };
    let query = query.split('#').next().unwrap_or(query);

    query.split('&').find_map(|pair| match pair.split_once('=') {
        Some((key, value)) if key == DATA_PARAM => Some(value),
        _ => None,
    })
}

// Only the escapes a browser produces for a number list
fn decode(raw: &str) -> String {
    raw.replace("%2C", ",")
        .replace("%2c", ",")
        .replace("%20", " ")
        .replace('+', " ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::validate;

    #[test]
    fn test_encode() {
        assert_eq!(encode(&[5, 3, 8]), "5,3,8");
        assert_eq!(encode(&[]), "");
        assert_eq!(share_query(&[1, 2]), "?data=1,2");
    }

    #[test]
    fn test_encode_round_trips_through_validator() {
        let values = vec![25, 41, 48, 3, 99, 1, 60, 7, 7, 12];
        assert_eq!(validate(&encode(&values)), Ok(values));
    }

    #[test]
    fn test_parse_full_url() {
        let url = "https://example.com/sort?lang=ja&data=25%2C41%2C48,3,99,1,60,7,7,12#top";
        let values = parse_query(url, &Bounds::default()).unwrap();
        assert_eq!(values, vec![25, 41, 48, 3, 99, 1, 60, 7, 7, 12]);
    }

    #[test]
    fn test_parse_missing_param() {
        let err = parse_query("?lang=ja", &Bounds::default()).unwrap_err();
        assert!(matches!(err, InputError::MissingData(_)));
        assert!(!is_query("1,2,3"));
        assert!(is_query("data=1,2,3"));
    }

    #[test]
    fn test_parse_invalid_data() {
        let err = parse_query("?data=1,2,3", &Bounds::default()).unwrap_err();
        assert!(matches!(err, InputError::Validation(_)));
    }
}
