//! The enum conversion field and the contract it plugs into
//!
//! [`EnumField`] converts members of an [`Enumeration`] to and from their
//! external representation. All configuration is resolved at construction;
//! `serialize` and `deserialize` are pure functions over that immutable
//! state, so a built field is freely shared across threads.

use std::collections::{BTreeMap, HashMap};

use serde_json::Value;

use crate::builder::EnumFieldBuilder;
use crate::common::enumeration::Enumeration;
use crate::common::metadata::FieldMetadata;
use crate::errors::{ValidationError, ValidationKind, format_template};

/// Contract a field adapter exposes to the serialization pipeline.
///
/// `None` models an absent or null attribute on both sides: serializing
/// `None` produces JSON null, and deserializing JSON null yields `None`
/// without touching the conversion logic.
pub trait Field {
	/// In-memory type this field loads and dumps.
	type Native;

	/// Dump a native value to its external representation.
	fn serialize(&self, value: Option<&Self::Native>) -> Value;

	/// Load a native value from raw external data.
	fn deserialize(&self, raw: &Value) -> Result<Option<Self::Native>, ValidationError>;

	/// Descriptive metadata for schema generation.
	fn metadata(&self) -> &FieldMetadata;
}

/// Converts between members of `E` and their external representation.
///
/// In by-value mode the external representation is the member's value; in
/// by-name mode it is the member's name. Serialization and deserialization
/// are inverses for every member under either mode.
#[derive(Debug, Clone)]
pub struct EnumField<E: Enumeration> {
	by_value: bool,
	error_template: Option<String>,
	message_overrides: HashMap<ValidationKind, String>,
	members_by_name: HashMap<&'static str, E>,
	metadata: FieldMetadata,
}

impl<E: Enumeration> EnumField<E> {
	/// Field converting through member values.
	pub fn by_value() -> Self {
		Self::with_mode(true)
	}

	/// Field converting through member names.
	pub fn by_name() -> Self {
		Self::with_mode(false)
	}

	/// Full construction surface, including deprecated-parameter shims and
	/// message customization.
	pub fn builder() -> EnumFieldBuilder<E> {
		EnumFieldBuilder::new()
	}

	fn with_mode(by_value: bool) -> Self {
		Self::assemble(by_value, None, HashMap::new(), BTreeMap::new())
	}

	pub(crate) fn assemble(
		by_value: bool,
		error_template: Option<String>,
		message_overrides: HashMap<ValidationKind, String>,
		extra_metadata: BTreeMap<String, Value>,
	) -> Self {
		// Name resolution goes through this exact-lookup map only.
		let members_by_name = E::MEMBERS.iter().map(|member| (member.name(), member.clone())).collect();
		let mut metadata = FieldMetadata::derive::<E>(by_value);
		metadata.extra = extra_metadata;
		Self { by_value, error_template, message_overrides, members_by_name, metadata }
	}

	/// Whether this field converts through member values.
	pub const fn is_by_value(&self) -> bool {
		self.by_value
	}

	/// Metadata derived at construction.
	pub const fn metadata(&self) -> &FieldMetadata {
		&self.metadata
	}

	/// Dump a member to its external representation.
	///
	/// `None` passes through as JSON null.
	pub fn serialize(&self, value: Option<&E>) -> Value {
		match value {
			None => Value::Null,
			Some(member) if self.by_value => Value::from(&member.value()),
			Some(member) => Value::String(member.name().to_owned()),
		}
	}

	/// Load a member from raw external data.
	///
	/// JSON null passes through as `None`. By-value mode resolves the input
	/// against member values; by-name mode requires a string and resolves it
	/// against member names, case-sensitively.
	pub fn deserialize(&self, raw: &Value) -> Result<Option<E>, ValidationError> {
		if raw.is_null() {
			return Ok(None);
		}
		let member = if self.by_value { self.deserialize_by_value(raw) } else { self.deserialize_by_name(raw) }?;
		Ok(Some(member))
	}

	fn deserialize_by_value(&self, raw: &Value) -> Result<E, ValidationError> {
		E::MEMBERS
			.iter()
			.find(|member| member.value().matches(raw))
			.cloned()
			.ok_or_else(|| self.fail(ValidationKind::ByValue, raw))
	}

	fn deserialize_by_name(&self, raw: &Value) -> Result<E, ValidationError> {
		let Some(name) = raw.as_str() else {
			return Err(self.fail(ValidationKind::MustBeString, raw));
		};
		self.members_by_name.get(name).cloned().ok_or_else(|| self.fail(ValidationKind::ByName, raw))
	}

	/// Build the validation error for one rejected input.
	///
	/// The message context always carries the offending input and the
	/// comma-joined values and names listings; the legacy `name`/`value`
	/// keys alias the input depending on the failure kind. A custom template
	/// additionally gets `choices` — the listing matching the conversion
	/// mode — and takes precedence over per-kind templates.
	fn fail(&self, kind: ValidationKind, raw: &Value) -> ValidationError {
		let input = raw_text(raw);
		let values = E::MEMBERS.iter().map(|member| member.value().to_string()).collect::<Vec<_>>().join(", ");
		let names = E::MEMBERS.iter().map(Enumeration::name).collect::<Vec<_>>().join(", ");

		let mut context: Vec<(&str, &str)> = vec![("input", &input), ("values", &values), ("names", &names)];
		match kind {
			ValidationKind::ByValue => context.push(("value", &input)),
			ValidationKind::ByName | ValidationKind::MustBeString => context.push(("name", &input)),
		}

		let message = match self.error_template.as_deref() {
			Some(template) => {
				let choices = if self.by_value { values.as_str() } else { names.as_str() };
				context.push(("choices", choices));
				format_template(template, &context)
			},
			None => {
				let template = self.message_overrides.get(&kind).map_or(kind.default_message(), String::as_str);
				format_template(template, &context)
			},
		};

		ValidationError::new(kind, raw.clone(), message)
	}
}

impl<E: Enumeration> Field for EnumField<E> {
	type Native = E;

	fn serialize(&self, value: Option<&E>) -> Value {
		EnumField::serialize(self, value)
	}

	fn deserialize(&self, raw: &Value) -> Result<Option<E>, ValidationError> {
		EnumField::deserialize(self, raw)
	}

	fn metadata(&self) -> &FieldMetadata {
		EnumField::metadata(self)
	}
}

/// Strings render bare, everything else as JSON text.
fn raw_text(raw: &Value) -> String {
	match raw {
		Value::String(s) => s.clone(),
		other => other.to_string(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::enum_members;
	use serde_json::json;

	enum_members!(Color {
		Red => 1,
		Green => 2,
	});

	#[test]
	fn test_serialize_by_value() {
		let field = EnumField::<Color>::by_value();
		assert_eq!(field.serialize(Some(&Color::Red)), json!(1));
		assert_eq!(field.serialize(None), Value::Null);
	}

	#[test]
	fn test_serialize_by_name() {
		let field = EnumField::<Color>::by_name();
		assert_eq!(field.serialize(Some(&Color::Red)), json!("Red"));
		assert_eq!(field.serialize(None), Value::Null);
	}

	#[test]
	fn test_deserialize_by_value() {
		let field = EnumField::<Color>::by_value();
		assert_eq!(field.deserialize(&json!(2)).unwrap(), Some(Color::Green));
		assert_eq!(field.deserialize(&Value::Null).unwrap(), None);
	}

	#[test]
	fn test_deserialize_by_name() {
		let field = EnumField::<Color>::by_name();
		assert_eq!(field.deserialize(&json!("Green")).unwrap(), Some(Color::Green));
		assert_eq!(field.deserialize(&Value::Null).unwrap(), None);
	}

	#[test]
	fn test_default_failure_messages() {
		let field = EnumField::<Color>::by_value();
		let error = field.deserialize(&json!(3)).unwrap_err();
		assert_eq!(error.kind(), ValidationKind::ByValue);
		assert_eq!(error.to_string(), "Invalid enum value 3");

		let field = EnumField::<Color>::by_name();
		let error = field.deserialize(&json!("PURPLE")).unwrap_err();
		assert_eq!(error.kind(), ValidationKind::ByName);
		assert_eq!(error.to_string(), "Invalid enum member PURPLE");

		let error = field.deserialize(&json!(5)).unwrap_err();
		assert_eq!(error.kind(), ValidationKind::MustBeString);
		assert_eq!(error.to_string(), "Enum name must be string");
	}

	#[test]
	fn test_raw_text_renders_strings_bare() {
		assert_eq!(raw_text(&json!("PURPLE")), "PURPLE");
		assert_eq!(raw_text(&json!(3)), "3");
		assert_eq!(raw_text(&json!(true)), "true");
		assert_eq!(raw_text(&json!([1, 2])), "[1,2]");
	}
}
