//! Tri-state flag value object
//!
//! The navigator service does not distinguish between "false" and "unknown"
//! for most accessibility attributes, so these are modelled with a third
//! `NoData` state instead of `Option<bool>`.
//!
//! # Examples
//!
//! ```
//! use domain::value_objects::Ternary;
//!
//! assert_eq!(Ternary::from_str_lossy("TRUE"), Ternary::True);
//! assert_eq!(Ternary::from_str_lossy("NA"), Ternary::NoData);
//! assert_eq!(Ternary::from(false), Ternary::False);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Either `true`, `false` or no data available
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Ternary {
    /// Explicitly true
    True,
    /// Explicitly false
    False,
    /// Anything else the service sends (`"NA"`, empty strings, missing keys)
    #[default]
    NoData,
}

impl Ternary {
    /// Interpret a free-form string, case-insensitively
    #[must_use]
    pub fn from_str_lossy(value: &str) -> Self {
        if value.eq_ignore_ascii_case("true") {
            Self::True
        } else if value.eq_ignore_ascii_case("false") {
            Self::False
        } else {
            Self::NoData
        }
    }

    /// Collapse into an `Option<bool>`
    #[must_use]
    pub const fn as_bool(self) -> Option<bool> {
        match self {
            Self::True => Some(true),
            Self::False => Some(false),
            Self::NoData => None,
        }
    }

    /// Check whether this flag is explicitly true
    #[must_use]
    pub const fn is_true(self) -> bool {
        matches!(self, Self::True)
    }
}

impl From<bool> for Ternary {
    fn from(value: bool) -> Self {
        if value { Self::True } else { Self::False }
    }
}

impl fmt::Display for Ternary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::True => write!(f, "true"),
            Self::False => write!(f, "false"),
            Self::NoData => write!(f, "no data"),
        }
    }
}

/// Never fails: any value that is not a recognisable boolean becomes `NoData`
impl<'de> Deserialize<'de> for Ternary {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(match value {
            Value::String(s) => Self::from_str_lossy(&s),
            Value::Bool(b) => Self::from(b),
            _ => Self::NoData,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!(Ternary::from_str_lossy("TRUE"), Ternary::True);
        assert_eq!(Ternary::from_str_lossy("True"), Ternary::True);
        assert_eq!(Ternary::from_str_lossy("false"), Ternary::False);
        assert_eq!(Ternary::from_str_lossy("FaLsE"), Ternary::False);
    }

    #[test]
    fn unknown_strings_are_no_data() {
        assert_eq!(Ternary::from_str_lossy("maybe"), Ternary::NoData);
        assert_eq!(Ternary::from_str_lossy(""), Ternary::NoData);
        assert_eq!(Ternary::from_str_lossy("NA"), Ternary::NoData);
    }

    #[test]
    fn from_bool() {
        assert_eq!(Ternary::from(true), Ternary::True);
        assert_eq!(Ternary::from(false), Ternary::False);
    }

    #[test]
    fn as_bool() {
        assert_eq!(Ternary::True.as_bool(), Some(true));
        assert_eq!(Ternary::False.as_bool(), Some(false));
        assert_eq!(Ternary::NoData.as_bool(), None);
        assert!(Ternary::True.is_true());
        assert!(!Ternary::NoData.is_true());
    }

    #[test]
    fn deserialize_never_fails() {
        let t: Ternary = serde_json::from_str(r#""true""#).unwrap();
        assert_eq!(t, Ternary::True);

        let t: Ternary = serde_json::from_str(r#""NA""#).unwrap();
        assert_eq!(t, Ternary::NoData);

        let t: Ternary = serde_json::from_str("false").unwrap();
        assert_eq!(t, Ternary::False);

        let t: Ternary = serde_json::from_str("42").unwrap();
        assert_eq!(t, Ternary::NoData);

        let t: Ternary = serde_json::from_str("null").unwrap();
        assert_eq!(t, Ternary::NoData);

        let t: Ternary = serde_json::from_str(r#"{"nested": true}"#).unwrap();
        assert_eq!(t, Ternary::NoData);
    }

    #[test]
    fn default_is_no_data() {
        assert_eq!(Ternary::default(), Ternary::NoData);
    }
}
