//! Field adapters for rows coming from the REST API.

use serde::{Deserialize, Deserializer};

/// Treats an explicit JSON `null` like a missing key. Pair with
/// `#[serde(default)]` so absent keys are covered too.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Row {
        #[serde(default, deserialize_with = "null_as_default")]
        label: String,
        #[serde(default, deserialize_with = "null_as_default")]
        count: u32,
    }

    #[test]
    fn test_null_as_default() {
        let parse = |raw: &str| serde_json::from_str::<Row>(raw).unwrap();
        let empty = Row {
            label: String::new(),
            count: 0,
        };
        assert_eq!(parse(r#"{"label":null,"count":null}"#), empty);
        assert_eq!(parse("{}"), empty);
        assert_eq!(
            parse(r#"{"label":"x","count":3}"#),
            Row {
                label: "x".to_string(),
                count: 3
            }
        );
        assert!(serde_json::from_str::<Row>(r#"{"label":5}"#).is_err());
    }
}
