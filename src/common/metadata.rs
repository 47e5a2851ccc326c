//! Field metadata derived once at construction
//!
//! Schema generators introspect a field through [`FieldMetadata`]: a type tag
//! describing the external representation and the sorted listing of every
//! legal external value. Both are computed when the field is built, never per
//! call.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::common::enumeration::Enumeration;
use crate::common::value::EnumValue;

/// JSON-schema style tag for the external representation of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeTag {
	String,
	Integer,
	Number,
	Boolean,
}

impl fmt::Display for TypeTag {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Self::String => "string",
			Self::Integer => "integer",
			Self::Number => "number",
			Self::Boolean => "boolean",
		})
	}
}

/// Descriptive metadata for an enum conversion field.
///
/// Serializes as `{"type": ..., "enum": [...]}` plus any extra entries,
/// flattened.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldMetadata {
	/// Type tag, when the member values admit one.
	#[serde(rename = "type", skip_serializing_if = "Option::is_none")]
	pub type_tag: Option<TypeTag>,
	/// Sorted legal external representations: member values in by-value
	/// mode, member names in by-name mode.
	#[serde(rename = "enum")]
	pub choices: Vec<EnumValue>,
	/// Caller-supplied entries, serialized alongside the derived ones.
	#[serde(flatten)]
	pub extra: BTreeMap<String, Value>,
}

impl FieldMetadata {
	pub(crate) fn derive<E: Enumeration>(by_value: bool) -> Self {
		let values: Vec<EnumValue> = E::MEMBERS.iter().map(Enumeration::value).collect();

		// Checked in a fixed order; a value set outside these patterns gets
		// no tag at all.
		let type_tag = if !by_value {
			Some(TypeTag::String)
		} else if values.iter().all(|v| matches!(v, EnumValue::Int(_))) {
			Some(TypeTag::Integer)
		} else if values.iter().all(|v| matches!(v, EnumValue::Int(_) | EnumValue::Float(_))) {
			Some(TypeTag::Number)
		} else if values.iter().all(|v| matches!(v, EnumValue::Bool(_))) {
			Some(TypeTag::Boolean)
		} else if values.iter().all(|v| matches!(v, EnumValue::Str(_))) {
			Some(TypeTag::String)
		} else {
			None
		};

		let mut choices = if by_value {
			values
		} else {
			E::MEMBERS.iter().map(|member| EnumValue::Str(member.name().to_owned())).collect()
		};
		choices.sort_by(|a, b| a.sort_cmp(b));

		Self { type_tag, choices, extra: BTreeMap::new() }
	}
}
