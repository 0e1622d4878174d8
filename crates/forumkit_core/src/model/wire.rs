//! Serde helpers shared by entity field schemas.

use serde::{Deserialize, Deserializer};

/// Decodes `null` as the type's zero value, matching absent-field behavior.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
