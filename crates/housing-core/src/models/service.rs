//! Services included in the rent or provided by a letting agent.

use serde::{Deserialize, Serialize};

use super::null_as_default;
use super::person::is_blank;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Service {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// Monetary value in pounds, as entered. Blank when not charged for.
    #[serde(deserialize_with = "null_as_default")]
    pub value: String,
}

impl Service {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// `"<name>"` when no value was given, otherwise `"<name> £<value>"`.
    pub fn format(&self) -> String {
        if is_blank(&self.value) {
            self.name.clone()
        } else {
            format!("{} £{}", self.name, self.value)
        }
    }
}
