//! Error types for enum conversion fields
//!
//! Construction problems are [`ConfigError`]s and abort field creation.
//! Rejected inputs during deserialization are [`ValidationError`]s carrying
//! the failure kind, the offending raw input, and a formatted message.

use serde_json::Value;
use thiserror::Error;

/// Construction-time configuration errors.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
	#[error("deprecated `load_by` parameter must not differ from `dump_by` parameter")]
	LoadDumpMismatch,
	#[error("deprecated `load_by` parameter differs from `by_value` parameter")]
	LoadByConflict,
	#[error("deprecated `dump_by` parameter differs from `by_value` parameter")]
	DumpByConflict,
}

/// The ways deserialization can reject an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationKind {
	/// No member carries the given name.
	ByName,
	/// No member carries the given value.
	ByValue,
	/// By-name conversion got a non-string input.
	MustBeString,
}

impl ValidationKind {
	/// Message-template key for this kind.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::ByName => "by_name",
			Self::ByValue => "by_value",
			Self::MustBeString => "must_be_string",
		}
	}

	/// Template used when the field has no override and no custom template.
	pub const fn default_message(self) -> &'static str {
		match self {
			Self::ByName => "Invalid enum member {input}",
			Self::ByValue => "Invalid enum value {input}",
			Self::MustBeString => "Enum name must be string",
		}
	}
}

/// Validation failure raised during deserialization.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{message}")]
pub struct ValidationError {
	kind: ValidationKind,
	input: Value,
	message: String,
}

impl ValidationError {
	pub(crate) fn new(kind: ValidationKind, input: Value, message: String) -> Self {
		Self { kind, input, message }
	}

	pub fn kind(&self) -> ValidationKind {
		self.kind
	}

	/// The raw input that failed to resolve.
	pub fn input(&self) -> &Value {
		&self.input
	}

	pub fn message(&self) -> &str {
		&self.message
	}
}

/// Substitutes `{key}` markers for the given context keys.
///
/// Markers with no matching key are left untouched.
pub(crate) fn format_template(template: &str, context: &[(&str, &str)]) -> String {
	let mut out = template.to_owned();
	for (key, value) in context {
		let marker = format!("{{{key}}}");
		if out.contains(marker.as_str()) {
			out = out.replace(marker.as_str(), value);
		}
	}
	out
}
