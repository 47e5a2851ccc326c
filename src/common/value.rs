//! Member-value representation and raw-input matching
//!
//! Enumeration members carry one of four value kinds. [`EnumValue`] holds the
//! member side; raw external data stays a [`serde_json::Value`] and is only
//! ever compared against member values, never converted.

use std::cmp::Ordering;
use std::fmt;

use serde::{Serialize, Serializer};
use serde_json::Value;

/// The value carried by an enumeration member.
#[derive(Debug, Clone, PartialEq)]
pub enum EnumValue {
	Int(i64),
	Float(f64),
	Bool(bool),
	Str(String),
}

impl EnumValue {
	/// Whether a raw external value resolves to this member value.
	///
	/// Matching is exact per kind, except that integer member values also
	/// match JSON floats of equal magnitude (`2` matches `2.0`).
	pub fn matches(&self, raw: &Value) -> bool {
		match (self, raw) {
			(Self::Int(i), Value::Number(n)) => n.as_i64() == Some(*i) || n.as_f64() == Some(*i as f64),
			(Self::Float(x), Value::Number(n)) => n.as_f64() == Some(*x),
			(Self::Bool(b), Value::Bool(r)) => b == r,
			(Self::Str(s), Value::String(r)) => s == r,
			_ => false,
		}
	}

	fn numeric(&self) -> Option<f64> {
		match self {
			Self::Int(i) => Some(*i as f64),
			Self::Float(x) => Some(*x),
			Self::Bool(_) | Self::Str(_) => None,
		}
	}

	// Bools sort before numbers, numbers before strings.
	fn rank(&self) -> u8 {
		match self {
			Self::Bool(_) => 0,
			Self::Int(_) | Self::Float(_) => 1,
			Self::Str(_) => 2,
		}
	}

	/// Total order used when sorting the legal-representation listing.
	///
	/// Numbers compare numerically across `Int` and `Float`; within the other
	/// kinds the natural order applies.
	pub(crate) fn sort_cmp(&self, other: &Self) -> Ordering {
		if let (Some(a), Some(b)) = (self.numeric(), other.numeric()) {
			return a.total_cmp(&b);
		}
		match (self, other) {
			(Self::Bool(a), Self::Bool(b)) => a.cmp(b),
			(Self::Str(a), Self::Str(b)) => a.cmp(b),
			_ => self.rank().cmp(&other.rank()),
		}
	}
}

impl From<i32> for EnumValue {
	fn from(value: i32) -> Self {
		Self::Int(i64::from(value))
	}
}

impl From<i64> for EnumValue {
	fn from(value: i64) -> Self {
		Self::Int(value)
	}
}

impl From<f64> for EnumValue {
	fn from(value: f64) -> Self {
		Self::Float(value)
	}
}

impl From<bool> for EnumValue {
	fn from(value: bool) -> Self {
		Self::Bool(value)
	}
}

impl From<&str> for EnumValue {
	fn from(value: &str) -> Self {
		Self::Str(value.to_owned())
	}
}

impl From<String> for EnumValue {
	fn from(value: String) -> Self {
		Self::Str(value)
	}
}

impl From<&EnumValue> for Value {
	fn from(value: &EnumValue) -> Self {
		match value {
			EnumValue::Int(i) => Value::from(*i),
			EnumValue::Float(x) => Value::from(*x),
			EnumValue::Bool(b) => Value::from(*b),
			EnumValue::Str(s) => Value::from(s.as_str()),
		}
	}
}

impl fmt::Display for EnumValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Int(i) => {
				let mut buf = itoa::Buffer::new();
				f.write_str(buf.format(*i))
			},
			Self::Float(x) => write!(f, "{}", x),
			Self::Bool(b) => f.write_str(if *b { "true" } else { "false" }),
			Self::Str(s) => f.write_str(s),
		}
	}
}

impl Serialize for EnumValue {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		match self {
			Self::Int(i) => serializer.serialize_i64(*i),
			Self::Float(x) => serializer.serialize_f64(*x),
			Self::Bool(b) => serializer.serialize_bool(*b),
			Self::Str(s) => serializer.serialize_str(s),
		}
	}
}
