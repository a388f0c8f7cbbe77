//! Common types used across the scaffolder crate.

use indexmap::IndexMap;

/// Placeholder name to substitution value.
///
/// Ordering carries no meaning for substitution; it only keeps log output stable.
pub type Variables = IndexMap<String, String>;

/// Builds a [`Variables`] mapping from borrowed key/value pairs.
pub fn variables<'a, I>(pairs: I) -> Variables
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    pairs.into_iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
}
