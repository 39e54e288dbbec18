//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and traits.
//!
//! ```
//! use inputgen::prelude::*;
//! ```

// Schema types
pub use inputgen_schema::{
    ConstValue, EnumDef, InputFieldDef, InputObjectDef, ParseError, SchemaTypeGraph, TypeDef,
    TypeRef, parse_schema,
};

// Syntax tree
pub use inputgen_codegen::ast::{ClassDef, Expr, ImportFrom, Module, Stmt};

// Generation
pub use inputgen_codegen::{
    ClassSpec, CodegenError, FieldNameStrategy, FieldSpec, GeneratorConfig, InputTypesGenerator,
    ScalarData, ScalarRegistry, SnakeCase, Verbatim, generate_from_file, generate_from_sdl,
};
