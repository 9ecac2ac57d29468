//! Three-valued answers to yes/no questions on the form.
//!
//! The form submits these as the strings `"true"` and `"false"`; anything
//! else, including a missing answer, means the question was not answered.
//! Unanswered is a distinct state and must never be treated as `No`.

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TriState {
    Yes,
    No,
    #[default]
    Unanswered,
}

impl TriState {
    /// Parse a submitted answer. Only the exact strings `"true"` and
    /// `"false"` are recognised.
    pub fn from_answer(answer: &str) -> Self {
        match answer {
            "true" => TriState::Yes,
            "false" => TriState::No,
            _ => TriState::Unanswered,
        }
    }

    /// Pick one of three values depending on the answer.
    pub fn select<T>(self, yes: T, no: T, unanswered: T) -> T {
        match self {
            TriState::Yes => yes,
            TriState::No => no,
            TriState::Unanswered => unanswered,
        }
    }
}

impl From<bool> for TriState {
    fn from(value: bool) -> Self {
        if value { TriState::Yes } else { TriState::No }
    }
}

impl Serialize for TriState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            TriState::Yes => serializer.serialize_str("true"),
            TriState::No => serializer.serialize_str("false"),
            TriState::Unanswered => serializer.serialize_none(),
        }
    }
}

struct TriStateVisitor;

impl<'de> Visitor<'de> for TriStateVisitor {
    type Value = TriState;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("\"true\", \"false\", a boolean, or null")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<TriState, E> {
        Ok(TriState::from_answer(v))
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<TriState, E> {
        Ok(TriState::from(v))
    }

    fn visit_none<E: de::Error>(self) -> Result<TriState, E> {
        Ok(TriState::Unanswered)
    }

    fn visit_unit<E: de::Error>(self) -> Result<TriState, E> {
        Ok(TriState::Unanswered)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<TriState, D::Error> {
        deserializer.deserialize_any(TriStateVisitor)
    }

    // Numbers and other scalars are not answers.
    fn visit_i64<E: de::Error>(self, _: i64) -> Result<TriState, E> {
        Ok(TriState::Unanswered)
    }

    fn visit_u64<E: de::Error>(self, _: u64) -> Result<TriState, E> {
        Ok(TriState::Unanswered)
    }

    fn visit_f64<E: de::Error>(self, _: f64) -> Result<TriState, E> {
        Ok(TriState::Unanswered)
    }
}

impl<'de> Deserialize<'de> for TriState {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(TriStateVisitor)
    }
}
