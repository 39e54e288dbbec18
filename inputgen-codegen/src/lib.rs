//! # inputgen codegen
//!
//! Generation of pydantic input classes from a GraphQL type graph.
//!
//! This crate provides:
//! - A Python syntax tree for the generated module
//! - Type annotation resolution and default value translation
//! - Class assembly with field aliasing
//! - Dependency ordering of the generated classes
//!
//! The output is a syntax tree; rendering it to text is left to the caller.

pub mod ast;
pub mod config;
pub mod constants;
pub mod error;
pub mod naming;
pub mod python;
pub mod scalars;

pub use ast::Module;
pub use config::GeneratorConfig;
pub use error::CodegenError;
pub use naming::{FieldNameStrategy, SnakeCase, Verbatim};
pub use python::{ClassSpec, FieldSpec, InputTypesGenerator};
pub use scalars::{ScalarData, ScalarRegistry};

/// Generates the input types module from GraphQL SDL.
///
/// # Arguments
/// * `sdl` - GraphQL schema definition language text
/// * `config` - Generator settings
///
/// # Returns
/// The generated Python module.
///
/// # Errors
/// Returns `CodegenError` if loading the schema or generation fails.
pub fn generate_from_sdl(sdl: &str, config: &GeneratorConfig) -> Result<Module, CodegenError> {
    let schema = inputgen_schema::parse_schema(sdl)?;
    let generator = InputTypesGenerator::new(&schema, config)?;
    Ok(generator.generate())
}

/// Generates the input types module from a GraphQL SDL file.
///
/// # Arguments
/// * `path` - Path to the SDL file
/// * `config` - Generator settings
///
/// # Returns
/// The generated Python module.
///
/// # Errors
/// Returns `CodegenError` if reading, loading the schema, or generation fails.
pub fn generate_from_file(
    path: &std::path::Path,
    config: &GeneratorConfig,
) -> Result<Module, CodegenError> {
    let sdl = std::fs::read_to_string(path)?;
    generate_from_sdl(&sdl, config)
}
