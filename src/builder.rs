//! Fluent construction for enum conversion fields
//!
//! The builder is the full construction surface: conversion mode, custom
//! failure-message template, per-kind message overrides, extra metadata
//! entries, and the deprecated `load_by` / `dump_by` compatibility shims.
//! Deprecated parameters are reconciled into a single mode flag before any
//! other construction logic runs.

use std::collections::{BTreeMap, HashMap};
use std::marker::PhantomData;

use serde_json::Value;
use tracing::warn;

use crate::common::enumeration::Enumeration;
use crate::errors::{ConfigError, ValidationKind};
use crate::field::EnumField;

/// Deprecated conversion-mode selector, kept for callers migrating to
/// [`EnumFieldBuilder::by_value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadDumpBy {
	Value,
	Name,
}

/// Builder for [`EnumField`], created through [`EnumField::builder`].
#[derive(Debug)]
pub struct EnumFieldBuilder<E: Enumeration> {
	by_value: Option<bool>,
	load_by: Option<LoadDumpBy>,
	dump_by: Option<LoadDumpBy>,
	error_template: Option<String>,
	message_overrides: HashMap<ValidationKind, String>,
	extra_metadata: BTreeMap<String, Value>,
	_enumeration: PhantomData<E>,
}

impl<E: Enumeration> EnumFieldBuilder<E> {
	pub(crate) fn new() -> Self {
		Self {
			by_value: None,
			load_by: None,
			dump_by: None,
			error_template: None,
			message_overrides: HashMap::new(),
			extra_metadata: BTreeMap::new(),
			_enumeration: PhantomData,
		}
	}

	/// Convert through member values (`true`) or member names (`false`).
	///
	/// Defaults to `true` when neither this nor a deprecated selector is set.
	pub const fn by_value(mut self, by_value: bool) -> Self {
		self.by_value = Some(by_value);
		self
	}

	/// Set the conversion mode used when loading.
	#[deprecated(note = "use `by_value` instead")]
	pub const fn load_by(mut self, load_by: LoadDumpBy) -> Self {
		self.load_by = Some(load_by);
		self
	}

	/// Set the conversion mode used when dumping.
	#[deprecated(note = "use `by_value` instead")]
	pub const fn dump_by(mut self, dump_by: LoadDumpBy) -> Self {
		self.dump_by = Some(dump_by);
		self
	}

	/// Custom failure-message template.
	///
	/// Recognized substitution keys: `{input}`, `{names}`, `{values}` and
	/// `{choices}` (the values or names listing, whichever matches the
	/// conversion mode). The legacy `{name}` and `{value}` keys still
	/// substitute the offending input but warn at build time.
	pub fn error(mut self, template: impl Into<String>) -> Self {
		self.error_template = Some(template.into());
		self
	}

	/// Override the default message template for one failure kind.
	pub fn error_message(mut self, kind: ValidationKind, template: impl Into<String>) -> Self {
		self.message_overrides.insert(kind, template.into());
		self
	}

	/// Attach an extra metadata entry, serialized alongside the derived
	/// descriptor.
	pub fn metadata(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
		self.extra_metadata.insert(key.into(), value.into());
		self
	}

	/// Build the field.
	///
	/// Fails when deprecated mode selectors conflict with each other or with
	/// an explicit `by_value`.
	pub fn build(self) -> Result<EnumField<E>, ConfigError> {
		let by_value = self.resolve_mode()?;
		if let Some(template) = self.error_template.as_deref() {
			warn_on_legacy_keys(template);
		}
		Ok(EnumField::assemble(by_value, self.error_template, self.message_overrides, self.extra_metadata))
	}

	fn resolve_mode(&self) -> Result<bool, ConfigError> {
		let by_value = match self.by_value {
			Some(explicit) => explicit,
			None => match (self.load_by, self.dump_by) {
				(Some(load), Some(dump)) if load != dump => return Err(ConfigError::LoadDumpMismatch),
				(Some(load), _) => load == LoadDumpBy::Value,
				(None, Some(dump)) => dump == LoadDumpBy::Value,
				(None, None) => true,
			},
		};

		if let Some(load) = self.load_by {
			warn!("the `load_by` parameter is deprecated, use `by_value` instead");
			if (load == LoadDumpBy::Value) != by_value {
				return Err(ConfigError::LoadByConflict);
			}
		}

		if let Some(dump) = self.dump_by {
			warn!("the `dump_by` parameter is deprecated, use `by_value` instead");
			if (dump == LoadDumpBy::Value) != by_value {
				return Err(ConfigError::DumpByConflict);
			}
		}

		Ok(by_value)
	}
}

fn warn_on_legacy_keys(template: &str) {
	const LEGACY_KEYS: [&str; 3] = ["name}", "value}", "choices}"];
	if LEGACY_KEYS.iter().any(|key| template.contains(key)) {
		warn!(
			"the `{{name}}`, `{{value}}` and `{{choices}}` template keys are deprecated, \
			 use `{{input}}`, `{{names}}` and `{{values}}` instead"
		);
	}
}

#[cfg(test)]
mod tests {
	#![allow(deprecated)]

	use super::*;
	use crate::enum_members;

	enum_members!(Color {
		Red => 1,
		Green => 2,
	});

	fn builder() -> EnumFieldBuilder<Color> {
		EnumField::builder()
	}

	#[test]
	fn test_default_mode_is_by_value() {
		let field = builder().build().unwrap();
		assert!(field.is_by_value());
	}

	#[test]
	fn test_explicit_mode() {
		assert!(builder().by_value(true).build().unwrap().is_by_value());
		assert!(!builder().by_value(false).build().unwrap().is_by_value());
	}

	#[test]
	fn test_load_by_decides_mode_when_unset() {
		assert!(builder().load_by(LoadDumpBy::Value).build().unwrap().is_by_value());
		assert!(!builder().load_by(LoadDumpBy::Name).build().unwrap().is_by_value());
	}

	#[test]
	fn test_dump_by_decides_mode_when_unset() {
		assert!(builder().dump_by(LoadDumpBy::Value).build().unwrap().is_by_value());
		assert!(!builder().dump_by(LoadDumpBy::Name).build().unwrap().is_by_value());
	}

	#[test]
	fn test_agreeing_deprecated_selectors_resolve() {
		let field = builder().load_by(LoadDumpBy::Name).dump_by(LoadDumpBy::Name).build().unwrap();
		assert!(!field.is_by_value());
	}

	#[test]
	fn test_conflicting_deprecated_selectors_fail() {
		let result = builder().load_by(LoadDumpBy::Value).dump_by(LoadDumpBy::Name).build();
		assert_eq!(result.unwrap_err(), ConfigError::LoadDumpMismatch);
	}

	#[test]
	fn test_load_by_conflicting_with_explicit_mode_fails() {
		let result = builder().by_value(true).load_by(LoadDumpBy::Name).build();
		assert_eq!(result.unwrap_err(), ConfigError::LoadByConflict);
	}

	#[test]
	fn test_dump_by_conflicting_with_explicit_mode_fails() {
		let result = builder().by_value(false).dump_by(LoadDumpBy::Value).build();
		assert_eq!(result.unwrap_err(), ConfigError::DumpByConflict);
	}

	#[test]
	fn test_deprecated_selector_agreeing_with_explicit_mode_passes() {
		let field = builder().by_value(true).load_by(LoadDumpBy::Value).build().unwrap();
		assert!(field.is_by_value());
	}

	#[test]
	fn test_legacy_template_keys_still_build() {
		let field = builder().error("{name} is not one of {choices}").build().unwrap();
		assert!(field.is_by_value());
	}
}
