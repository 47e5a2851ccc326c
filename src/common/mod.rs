//! Common types for enum conversion fields
//!
//! This module contains the member-value representation, the contract an
//! enumeration type implements to be usable by a field, and the metadata
//! descriptor derived at field construction.

pub mod enumeration;
pub mod metadata;
pub mod value;

// Re-export commonly used types
pub use enumeration::Enumeration;
pub use metadata::{FieldMetadata, TypeTag};
pub use value::EnumValue;
