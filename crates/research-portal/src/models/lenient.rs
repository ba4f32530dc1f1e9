//! Deserializers for fields the backend emits in more than one shape.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<Option<String>>),
}

/// Accepts `"x"`, `["x", ...]` or `null` and keeps the first non-empty string.
pub fn first_non_empty<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<OneOrMany>::deserialize(deserializer)?;
    Ok(match value {
        Some(OneOrMany::One(s)) => Some(s).filter(|s| !s.trim().is_empty()),
        Some(OneOrMany::Many(items)) => {
            items.into_iter().flatten().find(|s| !s.trim().is_empty())
        }
        None => None,
    })
}

/// Accepts a list of strings, a single `"; "`-separated string, or `null`.
pub fn string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<OneOrMany>::deserialize(deserializer)?;
    Ok(match value {
        Some(OneOrMany::One(s)) => s
            .split("; ")
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect(),
        Some(OneOrMany::Many(items)) => items.into_iter().flatten().collect(),
        None => Vec::new(),
    })
}

/// Treats an explicit `null` like a missing key.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum FlagRepr {
    Bool(bool),
    Text(String),
}

/// Accepts `true`/`false`, `"Yes"`/`"No"` (any case) or `null`.
pub fn yes_no_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<FlagRepr>::deserialize(deserializer)?;
    Ok(match value {
        Some(FlagRepr::Bool(b)) => b,
        Some(FlagRepr::Text(s)) => matches!(s.trim().to_ascii_lowercase().as_str(), "yes" | "true"),
        None => false,
    })
}
