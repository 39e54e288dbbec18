//! # inputgen
//!
//! Typed pydantic input classes from GraphQL schemas.
//!
//! Every GraphQL input object becomes a pydantic model. Field types become
//! `typing` annotations, declared defaults become Python literals, and the
//! classes are ordered so that each one follows the classes it references.
//!
//! ## Quick Start
//!
//! ```
//! use inputgen::prelude::*;
//!
//! let module = generate_from_sdl(
//!     "input A { b: B } input B { x: Int }",
//!     &GeneratorConfig::new(),
//! )?;
//!
//! let names: Vec<_> = module.class_defs().map(|c| c.name.as_str()).collect();
//! assert_eq!(names, vec!["B", "A"]);
//! # Ok::<(), CodegenError>(())
//! ```
//!
//! ## Crate Organization
//!
//! - [`schema`] - GraphQL type graph and SDL loading
//! - [`codegen`] - Python syntax tree and input class generation

pub mod prelude;

/// GraphQL type graph and SDL loading.
pub mod schema {
    pub use inputgen_schema::*;
}

/// Input class generation.
pub mod codegen {
    pub use inputgen_codegen::*;
}

// Re-export commonly used items at the crate root
pub use inputgen_codegen::{
    CodegenError, GeneratorConfig, InputTypesGenerator, generate_from_file, generate_from_sdl,
};
pub use inputgen_schema::{ParseError, SchemaTypeGraph, parse_schema};
