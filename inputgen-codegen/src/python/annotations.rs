//! Type annotation resolution.
//!
//! Turns a wrapped GraphQL type reference into a Python annotation and the
//! name of the schema type it depends on, if any.

use crate::ast::Expr;
use crate::constants::{ANY, LIST, OPTIONAL, simple_type};
use crate::error::CodegenError;
use crate::scalars::ScalarRegistry;
use inputgen_schema::{ScalarDef, SchemaTypeGraph, TypeDef, TypeRef};

/// Annotation of a field together with the type it references.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedAnnotation {
    /// Python annotation.
    pub annotation: Expr,
    /// Schema type the annotation depends on: an input object, an enum or a
    /// registered custom scalar. `None` for builtin and unregistered scalars.
    pub dependency: Option<String>,
}

/// Resolves the annotation of an input field type.
///
/// Nullable positions are wrapped in `Optional[...]`, lists become
/// `List[...]`, input objects are referenced by a string forward reference.
///
/// # Errors
/// Returns `CodegenError::Parsing` if the chain nests non-null directly in
/// non-null, names an unknown type or names an output type.
pub fn resolve_annotation(
    ty: &TypeRef,
    schema: &SchemaTypeGraph,
    scalars: &dyn ScalarRegistry,
) -> Result<ResolvedAnnotation, CodegenError> {
    resolve(ty, true, schema, scalars)
}

fn resolve(
    ty: &TypeRef,
    nullable: bool,
    schema: &SchemaTypeGraph,
    scalars: &dyn ScalarRegistry,
) -> Result<ResolvedAnnotation, CodegenError> {
    match ty {
        TypeRef::NonNull(inner) => {
            if inner.is_non_null() {
                return Err(CodegenError::parsing(format!(
                    "invalid input field type '{ty}': non-null wrapping non-null"
                )));
            }
            resolve(inner, false, schema, scalars)
        }
        TypeRef::List(inner) => {
            // Element nullability is declared by the element's own modifier.
            let element = resolve(inner, true, schema, scalars)?;
            Ok(ResolvedAnnotation {
                annotation: optional(
                    Expr::subscript(Expr::name(LIST), element.annotation),
                    nullable,
                ),
                dependency: element.dependency,
            })
        }
        TypeRef::Named(name) => {
            let type_def = schema.get_type(name).ok_or_else(|| {
                CodegenError::parsing(format!("invalid input field type: unknown type '{name}'"))
            })?;
            let (annotation, dependency) = match type_def {
                TypeDef::Scalar(scalar) => scalar_annotation(scalar, scalars),
                TypeDef::InputObject(input) => (Expr::str(&input.name), Some(input.name.clone())),
                TypeDef::Enum(enum_def) => {
                    (Expr::name(&enum_def.name), Some(enum_def.name.clone()))
                }
                TypeDef::Object(_) | TypeDef::Interface(_) | TypeDef::Union(_) => {
                    return Err(CodegenError::parsing(format!(
                        "invalid input field type: {} '{}' is an output type",
                        type_def.kind_name(),
                        name
                    )));
                }
            };
            Ok(ResolvedAnnotation {
                annotation: optional(annotation, nullable),
                dependency,
            })
        }
    }
}

fn scalar_annotation(scalar: &ScalarDef, scalars: &dyn ScalarRegistry) -> (Expr, Option<String>) {
    if let Some(python_type) = simple_type(&scalar.name) {
        return (Expr::name(python_type), None);
    }
    if let Some(data) = scalars.lookup(&scalar.name) {
        return (Expr::name(&data.type_name), Some(scalar.name.clone()));
    }
    tracing::debug!("Scalar {} is not registered, annotating as {}", scalar.name, ANY);
    (Expr::name(ANY), None)
}

fn optional(annotation: Expr, nullable: bool) -> Expr {
    if nullable {
        Expr::subscript(Expr::name(OPTIONAL), annotation)
    } else {
        annotation
    }
}
