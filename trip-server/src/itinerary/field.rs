//! Always-present record fields.
//!
//! Upstream stop data leaves fields out freely. Normalized records instead
//! carry a [`Field`] for every column, so a missing value is an explicit
//! [`Field::NotAvailable`] rather than an absent key.

use std::fmt;

use serde::{Serialize, Serializer};

/// Placeholder written in place of a missing value.
pub const NOT_AVAILABLE: &str = "Not available";

/// A record value that is either present or explicitly unavailable.
///
/// Serializes as the inner value, or as the string `"Not available"`.
#[derive(Debug, Clone, PartialEq)]
pub enum Field<T> {
    Present(T),
    NotAvailable,
}

impl<T> Field<T> {
    /// Returns the value if present.
    pub fn as_present(&self) -> Option<&T> {
        match self {
            Field::Present(value) => Some(value),
            Field::NotAvailable => None,
        }
    }
}

impl<T> From<Option<T>> for Field<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Field::NotAvailable, Field::Present)
    }
}

impl<T: fmt::Display> fmt::Display for Field<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Present(value) => fmt::Display::fmt(value, f),
            Field::NotAvailable => f.write_str(NOT_AVAILABLE),
        }
    }
}

impl<T: Serialize> Serialize for Field<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Field::Present(value) => value.serialize(serializer),
            Field::NotAvailable => serializer.serialize_str(NOT_AVAILABLE),
        }
    }
}

/// Resolve a preferred value with a fallback.
///
/// Returns `primary` if present, else `fallback`, else
/// [`Field::NotAvailable`].
pub fn resolve<T: Clone>(primary: Option<&T>, fallback: Option<&T>) -> Field<T> {
    primary.or(fallback).cloned().into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_prefers_primary() {
        let arr = "10:00:00".to_string();
        let dep = "10:02:00".to_string();

        assert_eq!(resolve(Some(&arr), Some(&dep)), Field::Present(arr.clone()));
        assert_eq!(resolve(None, Some(&dep)), Field::Present(dep.clone()));
        assert_eq!(resolve(Some(&arr), None), Field::Present(arr));
        assert_eq!(resolve::<String>(None, None), Field::NotAvailable);
    }

    #[test]
    fn display_uses_sentinel() {
        assert_eq!(Field::Present("Torget").to_string(), "Torget");
        assert_eq!(Field::<&str>::NotAvailable.to_string(), "Not available");
    }

    #[test]
    fn serializes_value_or_sentinel() {
        let present = serde_json::to_value(Field::Present(59.33)).unwrap();
        assert_eq!(present, serde_json::json!(59.33));

        let missing = serde_json::to_value(Field::<f64>::NotAvailable).unwrap();
        assert_eq!(missing, serde_json::json!("Not available"));
    }

    #[test]
    fn from_option() {
        assert_eq!(Field::from(Some(1)), Field::Present(1));
        assert_eq!(Field::<i32>::from(None), Field::NotAvailable);
        assert_eq!(Field::Present(1).as_present(), Some(&1));
        assert_eq!(Field::<i32>::NotAvailable.as_present(), None);
    }
}
