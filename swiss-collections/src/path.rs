// Dotted-path lookup

use serde::de::DeserializeOwned;
use serde_json::Value;

/// Separator between path segments.
pub const PATH_SEPARATOR: char = '.';

/// Array position written in canonical decimal: no sign, no leading zero.
fn array_index(segment: &str) -> Option<usize> {
    let canonical = !segment.is_empty()
        && segment.bytes().all(|b| b.is_ascii_digit())
        && (segment == "0" || !segment.starts_with('0'));
    if canonical { segment.parse().ok() } else { None }
}

fn step<'a>(current: &'a Value, segment: &str) -> Option<&'a Value> {
    match current {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => array_index(segment).and_then(|i| items.get(i)),
        _ => None,
    }
}

/// Walk `key` (segments joined by `.`) into `value`.
///
/// Objects are indexed by key and arrays by canonical decimal position (`1`,
/// not `01` or `+1`). Returns `None` as soon as a segment is missing or the
/// current value is a scalar.
pub fn lookup<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    key.split(PATH_SEPARATOR)
        .try_fold(value, |current, segment| step(current, segment))
}

/// Value at `key`, or `default` when the path does not resolve.
///
/// A `None` key returns the whole input.
///
/// ```
/// use serde_json::json;
/// use swiss_collections::get;
///
/// let data = json!({"user": {"name": "Ana"}});
/// assert_eq!(get(&data, Some("user.name"), json!(null)), json!("Ana"));
/// assert_eq!(get(&data, Some("user.age"), json!(0)), json!(0));
/// ```
pub fn get(value: &Value, key: Option<&str>, default: Value) -> Value {
    match key {
        None => value.clone(),
        Some(key) => lookup(value, key).cloned().unwrap_or(default),
    }
}

/// Deserialize the value at `key` into `T`.
pub fn get_as<T: DeserializeOwned>(value: &Value, key: &str) -> Option<T> {
    let found = lookup(value, key)?;
    match T::deserialize(found) {
        Ok(typed) => Some(typed),
        Err(e) => {
            swiss_log::debug!("value at '{}' has an unexpected shape: {}", key, e);
            None
        }
    }
}

/// `key` resolves to a value, `null` included.
pub fn has(value: &Value, key: &str) -> bool {
    lookup(value, key).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fixture() -> Value {
        json!({
            "user": {
                "name": "Ana",
                "roles": ["admin", "editor"],
                "address": {"city": "Luanda", "zip": null}
            },
            "count": 3
        })
    }

    #[test]
    fn test_lookup_nested() {
        let data = fixture();
        assert_eq!(lookup(&data, "user.address.city"), Some(&json!("Luanda")));
        assert_eq!(lookup(&data, "count"), Some(&json!(3)));
        assert_eq!(lookup(&data, "user.email"), None);
    }

    #[test]
    fn test_lookup_arrays_by_index() {
        let data = fixture();
        assert_eq!(lookup(&data, "user.roles.1"), Some(&json!("editor")));
        assert_eq!(lookup(&data, "user.roles.2"), None);
        assert_eq!(lookup(&data, "user.roles.first"), None);
    }

    #[test]
    fn test_lookup_index_must_be_canonical() {
        let data = fixture();
        assert_eq!(lookup(&data, "user.roles.0"), Some(&json!("admin")));
        assert_eq!(lookup(&data, "user.roles.+1"), None);
        assert_eq!(lookup(&data, "user.roles.01"), None);
        assert_eq!(lookup(&data, "user.roles.00"), None);
        assert_eq!(lookup(&data, "user.roles."), None);
        assert!(!has(&data, "user.roles.+0"));
    }

    #[test]
    fn test_lookup_stops_at_scalars() {
        let data = fixture();
        assert_eq!(lookup(&data, "count.value"), None);
        assert_eq!(lookup(&data, "user.name.0"), None);
    }

    #[test]
    fn test_get_defaults() {
        let data = fixture();
        assert_eq!(get(&data, None, json!(null)), data);
        assert_eq!(get(&data, Some("user.name"), json!("x")), json!("Ana"));
        assert_eq!(get(&data, Some("nope.deeper"), json!("x")), json!("x"));
        assert_eq!(get(&data, Some(""), json!("x")), json!("x"));
    }

    #[test]
    fn test_null_is_present() {
        let data = fixture();
        assert!(has(&data, "user.address.zip"));
        assert_eq!(get(&data, Some("user.address.zip"), json!("x")), Value::Null);
        assert!(!has(&data, "user.address.street"));
    }

    #[test]
    fn test_get_as() {
        let data = fixture();
        assert_eq!(get_as::<Vec<String>>(&data, "user.roles"), Some(vec!["admin".to_string(), "editor".to_string()]));
        assert_eq!(get_as::<u32>(&data, "count"), Some(3));
        assert_eq!(get_as::<u32>(&data, "user.name"), None);
        assert_eq!(get_as::<u32>(&data, "missing"), None);
    }
}
