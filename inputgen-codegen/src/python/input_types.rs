//! Input type class generation.
//!
//! Builds one pydantic model per GraphQL input object and assembles them
//! into a module: imports, the classes in dependency order, then one
//! `update_forward_refs()` call per class.

use super::annotations::resolve_annotation;
use super::literals::translate_default;
use super::sorter::DependencyGraph;
use crate::ast::{AnnAssign, Call, ClassDef, Expr, ImportFrom, Keyword, Module, Stmt};
use crate::config::GeneratorConfig;
use crate::constants::{
    ALIAS_KEYWORD, ANY, BASE_MODEL_CLASS_NAME, DEFAULT_KEYWORD, FIELD_CLASS, LIST, OPTIONAL,
    PYDANTIC_MODULE, TYPING_MODULE, UNION, UPDATE_FORWARD_REFS_METHOD,
};
use crate::error::CodegenError;
use crate::naming::FieldNameStrategy;
use crate::scalars::ScalarRegistry;
use indexmap::IndexSet;
use inputgen_schema::{InputObjectDef, SchemaTypeGraph, TypeDef};
use std::collections::HashMap;

/// Prefix of the reserved introspection type names.
const INTROSPECTION_PREFIX: &str = "__";

/// Generated field of an input class.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    /// Name as declared in the schema.
    pub wire_name: String,
    /// Python attribute name.
    pub name: String,
    /// Type annotation.
    pub annotation: Expr,
    /// Schema type referenced by the annotation, if any.
    pub dependency: Option<String>,
    /// Translated default value, if the field declares one.
    pub default: Option<Expr>,
}

impl FieldSpec {
    /// Returns true if the attribute name differs from the wire name.
    #[must_use]
    pub fn is_aliased(&self) -> bool {
        self.name != self.wire_name
    }

    /// Returns the value assigned to the attribute.
    ///
    /// Aliased fields get `Field(alias=...)`; a default that already is a
    /// `Field(...)` call has its keywords merged in, any other default is
    /// passed as `default=`.
    #[must_use]
    pub fn value(&self) -> Option<Expr> {
        if !self.is_aliased() {
            return self.default.clone();
        }

        let mut keywords = vec![Keyword::new(ALIAS_KEYWORD, Expr::str(&self.wire_name))];
        if let Some(default) = &self.default {
            match default.as_call_of(FIELD_CLASS) {
                Some(field_call) => keywords.extend(field_call.keywords.iter().cloned()),
                None => keywords.push(Keyword::new(DEFAULT_KEYWORD, default.clone())),
            }
        }
        Some(Expr::Call(Call::new(FIELD_CLASS, keywords)))
    }
}

/// Generated class for one input object.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassSpec {
    /// Class name, equal to the input type name.
    pub name: String,
    /// Base class name.
    pub base: String,
    /// Fields in declaration order.
    pub fields: Vec<FieldSpec>,
    /// Input classes referenced by the fields, in field order, duplicates kept.
    pub dependencies: Vec<String>,
    /// Enums referenced by the fields.
    pub used_enums: IndexSet<String>,
    /// Custom scalars referenced by the fields.
    pub used_scalars: IndexSet<String>,
}

impl ClassSpec {
    /// Builds the class definition.
    #[must_use]
    pub fn to_class_def(&self) -> ClassDef {
        let mut body: Vec<Stmt> = self
            .fields
            .iter()
            .enumerate()
            .map(|(i, field)| {
                Stmt::AnnAssign(AnnAssign {
                    target: field.name.clone(),
                    annotation: field.annotation.clone(),
                    value: field.value(),
                    lineno: i + 1,
                })
            })
            .collect();
        if body.is_empty() {
            body.push(Stmt::Pass);
        }

        ClassDef {
            name: self.name.clone(),
            bases: vec![Expr::name(&self.base)],
            body,
        }
    }
}

/// Generator of the input types module.
///
/// All classes are built on construction; the generator is read-only
/// afterwards.
#[derive(Debug, Clone)]
pub struct InputTypesGenerator {
    imports: Vec<ImportFrom>,
    classes: Vec<ClassSpec>,
    dependencies: DependencyGraph,
}

impl InputTypesGenerator {
    /// Creates a generator using the strategies selected by `config`.
    ///
    /// # Errors
    /// Returns `CodegenError` if the configuration is invalid or a field type
    /// can't be annotated.
    pub fn new(schema: &SchemaTypeGraph, config: &GeneratorConfig) -> Result<Self, CodegenError> {
        config.validate()?;
        Self::with_collaborators(schema, config, config.field_name_strategy(), &config.scalars)
    }

    /// Creates a generator with explicit field naming and scalar lookup.
    ///
    /// `config.convert_to_snake_case` and `config.scalars` are ignored in
    /// favour of `naming` and `scalars`.
    ///
    /// # Errors
    /// Returns `CodegenError::Parsing` if a field type can't be annotated.
    pub fn with_collaborators(
        schema: &SchemaTypeGraph,
        config: &GeneratorConfig,
        naming: &dyn FieldNameStrategy,
        scalars: &dyn ScalarRegistry,
    ) -> Result<Self, CodegenError> {
        let classes = schema
            .input_objects()
            .filter(|input| !input.name.starts_with(INTROSPECTION_PREFIX))
            .map(|input| build_class(input, schema, naming, scalars))
            .collect::<Result<Vec<_>, _>>()?;

        let mut dependencies = DependencyGraph::new();
        let mut used_enums = IndexSet::new();
        let mut used_scalars = IndexSet::new();
        for class in &classes {
            for dependency in &class.dependencies {
                dependencies.add_dependency(&class.name, dependency);
            }
            used_enums.extend(class.used_enums.iter().cloned());
            used_scalars.extend(class.used_scalars.iter().cloned());
        }

        let mut imports = vec![
            ImportFrom::new([OPTIONAL, ANY, UNION, LIST], TYPING_MODULE, 0),
            ImportFrom::new([FIELD_CLASS], PYDANTIC_MODULE, 0),
            config.resolved_base_model_import(),
        ];
        if !used_enums.is_empty() {
            imports.push(ImportFrom::new(used_enums, config.enums_module.as_str(), 1));
        }
        for scalar_name in &used_scalars {
            if let Some(data) = scalars.lookup(scalar_name) {
                if let Some(module) = &data.import {
                    let import = ImportFrom::new(data.names_to_import(), module.as_str(), 0);
                    if !imports.contains(&import) {
                        imports.push(import);
                    }
                }
            }
        }

        tracing::debug!(
            "Built {} input classes ({} imports)",
            classes.len(),
            imports.len()
        );

        Ok(Self {
            imports,
            classes,
            dependencies,
        })
    }

    /// Generates the module: imports, sorted classes, forward reference
    /// updates.
    #[must_use]
    pub fn generate(&self) -> Module {
        let sorted = self.sorted_classes();

        let mut body: Vec<Stmt> = self.imports.iter().cloned().map(Stmt::ImportFrom).collect();
        body.extend(sorted.iter().map(|class| Stmt::ClassDef(class.to_class_def())));
        body.extend(sorted.iter().map(|class| {
            Stmt::Expr(Expr::method_call(
                class.name.as_str(),
                UPDATE_FORWARD_REFS_METHOD,
                Vec::new(),
            ))
        }));

        Module::new(body)
    }

    /// Returns the generated class names in schema declaration order.
    #[must_use]
    pub fn generated_public_names(&self) -> Vec<&str> {
        self.classes.iter().map(|c| c.name.as_str()).collect()
    }

    /// Returns the imports of the module.
    #[must_use]
    pub fn imports(&self) -> &[ImportFrom] {
        &self.imports
    }

    /// Returns the classes in schema declaration order.
    #[must_use]
    pub fn classes(&self) -> &[ClassSpec] {
        &self.classes
    }

    /// Returns the class-to-class references.
    #[must_use]
    pub fn dependencies(&self) -> &DependencyGraph {
        &self.dependencies
    }

    /// Returns the classes ordered so that each follows its dependencies.
    #[must_use]
    pub fn sorted_classes(&self) -> Vec<&ClassSpec> {
        let by_name: HashMap<&str, &ClassSpec> =
            self.classes.iter().map(|c| (c.name.as_str(), c)).collect();

        self.dependencies
            .sort(self.classes.iter().map(|c| c.name.as_str()))
            .iter()
            .filter_map(|name| by_name.get(name.as_str()).copied())
            .collect()
    }
}

fn build_class(
    input: &InputObjectDef,
    schema: &SchemaTypeGraph,
    naming: &dyn FieldNameStrategy,
    scalars: &dyn ScalarRegistry,
) -> Result<ClassSpec, CodegenError> {
    let mut class = ClassSpec {
        name: input.name.clone(),
        base: BASE_MODEL_CLASS_NAME.to_string(),
        fields: Vec::with_capacity(input.fields.len()),
        dependencies: Vec::new(),
        used_enums: IndexSet::new(),
        used_scalars: IndexSet::new(),
    };

    for field in &input.fields {
        let resolved = resolve_annotation(&field.ty, schema, scalars).map_err(|err| match err {
            CodegenError::Parsing { message } => {
                CodegenError::parsing(format!("{}.{}: {}", input.name, field.name, message))
            }
            other => other,
        })?;

        // Scalars carry no class to parse into or enum to qualify with.
        let literal_target = resolved
            .dependency
            .as_deref()
            .filter(|name| schema.get_type(name).is_some_and(|t| !t.is_scalar()));

        let field_spec = FieldSpec {
            wire_name: field.name.clone(),
            name: naming.normalize(&field.name),
            default: translate_default(field, literal_target),
            annotation: resolved.annotation,
            dependency: resolved.dependency,
        };
        tracing::trace!("{}.{} -> {}", class.name, field_spec.wire_name, field_spec.name);
        class.fields.push(field_spec);
    }

    for dependency in class.fields.iter().filter_map(|f| f.dependency.as_deref()) {
        match schema.get_type(dependency) {
            Some(TypeDef::InputObject(_)) => class.dependencies.push(dependency.to_string()),
            Some(TypeDef::Enum(_)) => {
                class.used_enums.insert(dependency.to_string());
            }
            Some(TypeDef::Scalar(_)) => {
                class.used_scalars.insert(dependency.to_string());
            }
            Some(TypeDef::Object(_) | TypeDef::Interface(_) | TypeDef::Union(_)) | None => {}
        }
    }

    Ok(class)
}
