//! Enum conversion fields for schema-driven serialization
//!
//! This library provides a field adapter that converts between in-memory
//! enumeration members and an external representation — either the member's
//! name or its value — when loading and dumping documents. External data is
//! carried as [`serde_json::Value`], so the adapter plugs into any pipeline
//! that deals in JSON-shaped input.
//!
//! ## Example
//!
//! ```rust
//! use enum_field::{EnumField, enum_members};
//! use serde_json::json;
//!
//! enum_members!(Color {
//! 	Red   => 1,
//! 	Green => 2,
//! });
//!
//! let field = EnumField::<Color>::by_value();
//! assert_eq!(field.serialize(Some(&Color::Red)), json!(1));
//! assert_eq!(field.deserialize(&json!(2)).unwrap(), Some(Color::Green));
//! assert!(field.deserialize(&json!(3)).is_err());
//!
//! let field = EnumField::<Color>::by_name();
//! assert_eq!(field.serialize(Some(&Color::Red)), json!("Red"));
//! assert_eq!(field.deserialize(&json!("Green")).unwrap(), Some(Color::Green));
//! ```

pub mod macros;

pub mod common;

mod builder;
mod errors;
mod field;

// Re-export commonly used types
pub use builder::{EnumFieldBuilder, LoadDumpBy};
pub use common::{EnumValue, Enumeration, FieldMetadata, TypeTag};
pub use errors::{ConfigError, ValidationError, ValidationKind};
pub use field::{EnumField, Field};
