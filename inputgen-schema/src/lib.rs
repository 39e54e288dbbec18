//! # Inputgen Schema
//!
//! GraphQL type graph and SDL loader.
//!
//! This crate provides:
//! - Type definitions for the named types of a schema
//! - Wrapped type references (list and non-null modifiers)
//! - Constant literal values used as input field defaults
//! - SDL parsing into the type graph

pub mod error;
pub mod parser;
pub mod types;

pub use error::ParseError;
pub use parser::parse_schema;
pub use types::{
    BUILTIN_SCALARS, ConstValue, EnumDef, EnumValueDef, InputFieldDef, InputObjectDef,
    OutputTypeDef, ScalarDef, SchemaTypeGraph, TypeDef, TypeRef,
};
