//! Flat template field mapping handed to document renderers.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A primitive value substituted into a document template placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
}

impl FieldValue {
    /// The text content, or `None` for flags.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            FieldValue::Flag(_) => None,
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            FieldValue::Flag(b) => Some(*b),
            FieldValue::Text(_) => None,
        }
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_owned())
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Flag(value)
    }
}

/// Template placeholder name to value.
///
/// Backed by an ordered map so serialization and iteration are
/// deterministic regardless of the order fields were inserted in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fields(BTreeMap<String, FieldValue>);

impl Fields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a field.
    pub fn put(&mut self, key: impl Into<String>, value: impl Into<FieldValue>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.0.get(key)
    }

    /// Text value of `key`; `None` when absent or a flag.
    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(FieldValue::as_text)
    }

    pub fn flag(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(FieldValue::as_flag)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_flat_untagged_object() {
        let mut fields = Fields::new();
        fields.put("showHmoFields", " ");
        fields.put("hmoRenewalApplicationSubmitted", true);

        let json = serde_json::to_value(&fields).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "hmoRenewalApplicationSubmitted": true,
                "showHmoFields": " ",
            })
        );
    }

    #[test]
    fn typed_accessors_distinguish_text_and_flags() {
        let mut fields = Fields::new();
        fields.put("rentAmount", "650");
        fields.put("hmoRenewalApplicationSubmitted", false);

        assert_eq!(fields.text("rentAmount"), Some("650"));
        assert_eq!(fields.flag("rentAmount"), None);
        assert_eq!(fields.flag("hmoRenewalApplicationSubmitted"), Some(false));
        assert_eq!(fields.text("missing"), None);
    }
}
