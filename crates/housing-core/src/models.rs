//! Form models for the model tenancy agreement.
//!
//! These are plain data records with no behaviour beyond a few derived
//! properties. Every field has a default so a partially filled form
//! deserializes cleanly.

pub mod person;
pub mod service;
pub mod tenancy;
pub mod terms;
pub mod tri_state;

use serde::{Deserialize, Deserializer};

/// Treat an explicit JSON `null` like a missing field.
///
/// Form front ends send `null` for slots the user never touched; those
/// become empty strings, empty lists or blank records.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
