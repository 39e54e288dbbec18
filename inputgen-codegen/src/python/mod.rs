//! Python (pydantic) code generation.

pub mod annotations;
pub mod input_types;
pub mod literals;
pub mod sorter;

pub use annotations::{ResolvedAnnotation, resolve_annotation};
pub use input_types::{ClassSpec, FieldSpec, InputTypesGenerator};
pub use literals::{Nesting, translate_default, translate_value};
pub use sorter::DependencyGraph;
