//! The quote value type
//!
//! Quotes are submitted by wall visitors and reviewed by a single operator.
//! The backend never enforces a schema on them: whatever JSON object was
//! submitted must survive every read-modify-write cycle unchanged, so the
//! type is a transparent wrapper around a raw JSON value.

use serde::{Deserialize, Serialize};

/// An opaque quote entry
///
/// All fields are preserved verbatim; the backend only moves whole entries
/// between collections and never looks inside them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quote(pub serde_json::Value);

impl Quote {
    /// Wrap a raw JSON value as a quote
    #[must_use]
    pub fn new(value: serde_json::Value) -> Self {
        Self(value)
    }

    /// Borrow the underlying JSON value
    #[must_use]
    pub const fn as_value(&self) -> &serde_json::Value {
        &self.0
    }

    /// Unwrap into the underlying JSON value
    #[must_use]
    pub fn into_value(self) -> serde_json::Value {
        self.0
    }
}

impl From<serde_json::Value> for Quote {
    fn from(value: serde_json::Value) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn serializes_transparently() {
        let quote = Quote::new(json!({"q": "A", "author": "B"}));
        let serialized = serde_json::to_string(&quote).unwrap();
        assert_eq!(serialized, r#"{"q":"A","author":"B"}"#);
    }

    #[test]
    fn deserializes_transparently() {
        let quote: Quote = serde_json::from_str(r#"{"q":"A"}"#).unwrap();
        assert_eq!(quote.as_value(), &json!({"q": "A"}));
    }

    #[test]
    fn preserves_unknown_fields_through_round_trip() {
        let original = json!({
            "q": "Stay hungry",
            "submitted_by": "anonymous",
            "nested": {"tags": ["wall", "pi"]}
        });
        let quote = Quote::from(original.clone());
        let round_tripped: Quote =
            serde_json::from_str(&serde_json::to_string(&quote).unwrap()).unwrap();
        assert_eq!(round_tripped.into_value(), original);
    }

    #[test]
    fn non_object_values_are_accepted() {
        // The store treats entries as opaque; even a bare string survives.
        let quote: Quote = serde_json::from_str(r#""just text""#).unwrap();
        assert_eq!(quote.as_value(), &json!("just text"));
    }

    #[test]
    fn quote_has_debug() {
        let quote = Quote::new(json!({}));
        assert!(format!("{quote:?}").contains("Quote"));
    }
}
