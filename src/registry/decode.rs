/// Tolerant decoding of registry responses.
///
/// The appliance replies with loosely-shaped JSON; the policy here is
/// default-on-missing, never reject-on-missing. Each field helper returns
/// the decoded value together with a flag saying whether the field was
/// actually present with the expected type, so callers (and tests) can tell
/// a real `0` from a defaulted one.
use serde_json::Value;

use crate::types::NfcCard;

/// Numeric field, defaulting to 0. Accepts integral and float encodings.
#[must_use]
pub fn field_i64(obj: &Value, key: &str) -> (i64, bool) {
    let field = obj.get(key);
    if let Some(v) = field.and_then(Value::as_i64) {
        return (v, true);
    }
    if let Some(v) = field.and_then(Value::as_f64) {
        #[allow(clippy::cast_possible_truncation)]
        return (v as i64, true);
    }
    (0, false)
}

/// String field, defaulting to `""`.
#[must_use]
pub fn field_str(obj: &Value, key: &str) -> (String, bool) {
    match obj.get(key).and_then(Value::as_str) {
        Some(v) => (v.to_owned(), true),
        None => (String::new(), false),
    }
}

/// Boolean field, defaulting to `false`.
#[must_use]
pub fn field_bool(obj: &Value, key: &str) -> (bool, bool) {
    match obj.get(key).and_then(Value::as_bool) {
        Some(v) => (v, true),
        None => (false, false),
    }
}

/// Array field, defaulting to an empty slice.
#[must_use]
pub fn field_array<'a>(obj: &'a Value, key: &str) -> (&'a [Value], bool) {
    match obj.get(key).and_then(Value::as_array) {
        Some(v) => (v.as_slice(), true),
        None => (&[], false),
    }
}

/// Build a card from one listing element. Each field defaults
/// independently; an element that is not an object yields `None` and is
/// skipped by the caller.
#[must_use]
pub fn card_from_value(value: &Value) -> Option<NfcCard> {
    if !value.is_object() {
        return None;
    }
    let (id, _) = field_i64(value, "id");
    let (uuid, _) = field_str(value, "uuid");
    let (name, _) = field_str(value, "name");
    Some(NfcCard { id, uuid, name })
}

/// Extract the card list from a listing response. A missing or
/// wrong-shaped `cards` field is an empty listing, not an error.
#[must_use]
pub fn cards_from_value(obj: &Value) -> Vec<NfcCard> {
    let (items, _present) = field_array(obj, "cards");
    items.iter().filter_map(card_from_value).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_field_helpers_report_presence() {
        let obj = json!({"id": 7, "uuid": "u7", "status": true});
        assert_eq!(field_i64(&obj, "id"), (7, true));
        assert_eq!(field_str(&obj, "uuid"), ("u7".to_owned(), true));
        assert_eq!(field_bool(&obj, "status"), (true, true));
    }

    #[test]
    fn test_field_helpers_default_on_absent() {
        let obj = json!({});
        assert_eq!(field_i64(&obj, "id"), (0, false));
        assert_eq!(field_str(&obj, "uuid"), (String::new(), false));
        assert_eq!(field_bool(&obj, "status"), (false, false));
        let (items, present) = field_array(&obj, "cards");
        assert!(items.is_empty());
        assert!(!present);
    }

    #[test]
    fn test_field_helpers_default_on_wrong_type() {
        let obj = json!({"id": "seven", "uuid": 7, "status": "yes", "cards": 3});
        assert_eq!(field_i64(&obj, "id"), (0, false));
        assert_eq!(field_str(&obj, "uuid"), (String::new(), false));
        assert_eq!(field_bool(&obj, "status"), (false, false));
        assert!(!field_array(&obj, "cards").1);
    }

    #[test]
    fn test_field_i64_accepts_float_encoding() {
        let obj = json!({"id": 3.0});
        assert_eq!(field_i64(&obj, "id"), (3, true));
    }

    #[test]
    fn test_cards_default_per_field() {
        let obj = json!({"cards": [
            {"id": 1, "uuid": "u1", "name": "Alice"},
            {"id": 2}
        ]});
        let cards = cards_from_value(&obj);
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].id, 1);
        assert_eq!(cards[0].uuid, "u1");
        assert_eq!(cards[0].name, "Alice");
        assert_eq!(cards[1].id, 2);
        assert_eq!(cards[1].uuid, "");
        assert_eq!(cards[1].name, "");
    }

    #[test]
    fn test_missing_cards_field_is_empty_listing() {
        assert!(cards_from_value(&json!({})).is_empty());
    }

    #[test]
    fn test_non_object_elements_are_skipped() {
        let obj = json!({"cards": [42, "card", {"id": 9, "uuid": "u9", "name": "Eve"}, null]});
        let cards = cards_from_value(&obj);
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].id, 9);
    }
}
