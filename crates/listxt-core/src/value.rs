//! A dynamically typed element for heterogeneous sequences.
//!
//! Capabilities of a [`Value`] are only known at runtime: `Int` and `Float`
//! are numeric, numbers compare with numbers, text with text and booleans
//! with booleans. Operations that need a capability an element lacks report
//! [`CoreError::TypeMismatch`](crate::CoreError::TypeMismatch).

use core::cmp::Ordering;
use core::fmt;

use crate::dtype::AsNumber;

/// A boolean, integer, float or text element.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl Value {
    /// Short lowercase name of the variant, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Text(_) => "text",
        }
    }

    /// Whether the value converts to a number.
    #[inline]
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Int(_) | Self::Float(_))
    }
}

impl AsNumber for Value {
    fn as_number(&self) -> Option<f64> {
        match *self {
            #[allow(clippy::cast_precision_loss)]
            Self::Int(i) => Some(i as f64),
            Self::Float(x) => Some(x),
            Self::Bool(_) | Self::Text(_) => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Text(a), Self::Text(b)) => a == b,
            _ => match (self.as_number(), other.as_number()) {
                (Some(a), Some(b)) => a == b,
                _ => false,
            },
        }
    }
}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Bool(a), Self::Bool(b)) => Some(a.cmp(b)),
            (Self::Int(a), Self::Int(b)) => Some(a.cmp(b)),
            (Self::Text(a), Self::Text(b)) => Some(a.cmp(b)),
            _ => match (self.as_number(), other.as_number()) {
                (Some(a), Some(b)) => a.partial_cmp(&b),
                _ => None,
            },
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Text(s) => write!(f, "{s:?}"),
        }
    }
}

// ----------------------------------------------------------------------
// Conversions
// ----------------------------------------------------------------------

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_owned())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_as_number() {
        assert_eq!(Value::from(3_i64).as_number(), Some(3.0));
        assert_eq!(Value::from(2.5).as_number(), Some(2.5));
        assert_eq!(Value::from(true).as_number(), None);
        assert_eq!(Value::from("3").as_number(), None);
    }

    #[test]
    fn test_mixed_numeric_comparison() {
        assert_eq!(Value::Int(1), Value::Float(1.0));
        assert!(Value::Int(1) < Value::Float(1.5));
        assert!(Value::Float(-0.5) < Value::Int(0));
    }

    #[test]
    fn test_cross_kind_is_incomparable() {
        assert_eq!(Value::Int(1).partial_cmp(&Value::from("1")), None);
        assert_eq!(Value::Bool(true).partial_cmp(&Value::Int(1)), None);
        assert_ne!(Value::Bool(true), Value::Int(1));
    }

    #[test]
    fn test_same_kind_ordering() {
        assert!(Value::from("apple") < Value::from("banana"));
        assert!(Value::Bool(false) < Value::Bool(true));
        assert_eq!(Value::Float(f64::NAN).partial_cmp(&Value::Int(0)), None);
    }

    #[test]
    fn test_display_and_kind() {
        assert_eq!(Value::from(7_i64).to_string(), "7");
        assert_eq!(Value::from("hi").to_string(), "\"hi\"");
        assert_eq!(Value::from(0.5).kind(), "float");
        assert!(Value::from(1_i64).is_numeric());
        assert!(!Value::from(false).is_numeric());
    }
}
