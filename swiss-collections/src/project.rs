// Key projection

use serde_json::{Map, Value};

/// Entries of `map` whose key is in `keys`, in the map's order.
pub fn only<K: AsRef<str>>(map: &Map<String, Value>, keys: &[K]) -> Map<String, Value> {
    map.iter()
        .filter(|(key, _)| keys.iter().any(|k| k.as_ref() == key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Entries of `map` whose key is not in `keys`, in the map's order.
pub fn except<K: AsRef<str>>(map: &Map<String, Value>, keys: &[K]) -> Map<String, Value> {
    map.iter()
        .filter(|(key, _)| !keys.iter().any(|k| k.as_ref() == key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn form() -> Map<String, Value> {
        match json!({"name": "Ana", "email": "ana@example.com", "_token": "abc", "age": 30}) {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_only_keeps_map_order() {
        let picked = only(&form(), &["age", "name", "missing"]);
        let keys: Vec<_> = picked.keys().cloned().collect();
        assert_eq!(keys, vec!["name", "age"]);
    }

    #[test]
    fn test_except() {
        let rest = except(&form(), &["_token"]);
        let keys: Vec<_> = rest.keys().cloned().collect();
        assert_eq!(keys, vec!["name", "email", "age"]);
    }

    #[test]
    fn test_complementary() {
        let keys = vec!["email".to_string()];
        let left = only(&form(), &keys);
        let right = except(&form(), &keys);
        assert_eq!(left.len() + right.len(), form().len());
    }

    #[test]
    fn test_empty_key_list() {
        let none: [&str; 0] = [];
        assert!(only(&form(), &none).is_empty());
        assert_eq!(except(&form(), &none), form());
    }
}
