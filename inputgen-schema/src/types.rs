//! Schema type definitions.
//!
//! This module contains the data structures representing a GraphQL type
//! system: named type definitions, wrapped type references and the literal
//! values used as input field defaults.

use indexmap::IndexMap;
use std::fmt;

/// Names of the scalars every GraphQL schema provides.
pub const BUILTIN_SCALARS: [&str; 5] = ["String", "ID", "Int", "Float", "Boolean"];

/// Complete GraphQL type graph.
///
/// Types are kept in declaration order, which drives the order of generated
/// classes before dependency sorting.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaTypeGraph {
    types: IndexMap<String, TypeDef>,
}

impl SchemaTypeGraph {
    /// Creates a type graph containing only the builtin scalars.
    #[must_use]
    pub fn new() -> Self {
        let mut graph = Self {
            types: IndexMap::new(),
        };
        for name in BUILTIN_SCALARS {
            graph.add_type(TypeDef::Scalar(ScalarDef::builtin(name.to_string())));
        }
        graph
    }

    /// Adds a type definition, returning the definition it replaced.
    pub fn add_type(&mut self, type_def: TypeDef) -> Option<TypeDef> {
        self.types.insert(type_def.name().to_string(), type_def)
    }

    /// Looks up a type by name.
    #[must_use]
    pub fn get_type(&self, name: &str) -> Option<&TypeDef> {
        self.types.get(name)
    }

    /// Looks up a type by name for in-place changes.
    pub fn get_type_mut(&mut self, name: &str) -> Option<&mut TypeDef> {
        self.types.get_mut(name)
    }

    /// Returns true if a type with the given name exists.
    #[must_use]
    pub fn has_type(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    /// Iterates over all type definitions in declaration order.
    pub fn types(&self) -> impl Iterator<Item = &TypeDef> {
        self.types.values()
    }

    /// Iterates over the input object definitions in declaration order.
    pub fn input_objects(&self) -> impl Iterator<Item = &InputObjectDef> {
        self.types.values().filter_map(|type_def| match type_def {
            TypeDef::InputObject(input) => Some(input),
            _ => None,
        })
    }

    /// Number of types, builtin scalars included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Returns true if the graph holds no types at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl Default for SchemaTypeGraph {
    fn default() -> Self {
        Self::new()
    }
}

/// Named type definition variants.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeDef {
    /// Scalar type definition.
    Scalar(ScalarDef),
    /// Enum type definition.
    Enum(EnumDef),
    /// Input object type definition.
    InputObject(InputObjectDef),
    /// Object (output) type definition.
    Object(OutputTypeDef),
    /// Interface (output) type definition.
    Interface(OutputTypeDef),
    /// Union (output) type definition.
    Union(OutputTypeDef),
}

impl TypeDef {
    /// Returns the name of the type.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Scalar(s) => &s.name,
            Self::Enum(e) => &e.name,
            Self::InputObject(i) => &i.name,
            Self::Object(o) | Self::Interface(o) | Self::Union(o) => &o.name,
        }
    }

    /// Returns the GraphQL keyword of the definition kind.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Scalar(_) => "scalar",
            Self::Enum(_) => "enum",
            Self::InputObject(_) => "input",
            Self::Object(_) => "type",
            Self::Interface(_) => "interface",
            Self::Union(_) => "union",
        }
    }

    /// Returns true if this is a scalar type.
    #[must_use]
    pub const fn is_scalar(&self) -> bool {
        matches!(self, Self::Scalar(_))
    }

    /// Returns true if this is an enum type.
    #[must_use]
    pub const fn is_enum(&self) -> bool {
        matches!(self, Self::Enum(_))
    }

    /// Returns true if this is an input object type.
    #[must_use]
    pub const fn is_input_object(&self) -> bool {
        matches!(self, Self::InputObject(_))
    }

    /// Returns true if the type may only appear in output positions.
    #[must_use]
    pub const fn is_output_only(&self) -> bool {
        matches!(self, Self::Object(_) | Self::Interface(_) | Self::Union(_))
    }
}

/// Scalar type definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScalarDef {
    /// Type name.
    pub name: String,
    /// Description.
    pub description: Option<String>,
    /// Whether the scalar is one of [`BUILTIN_SCALARS`].
    pub builtin: bool,
}

impl ScalarDef {
    /// Creates a custom scalar definition.
    #[must_use]
    pub fn new(name: String) -> Self {
        Self {
            name,
            description: None,
            builtin: false,
        }
    }

    /// Creates a builtin scalar definition.
    #[must_use]
    pub fn builtin(name: String) -> Self {
        Self {
            name,
            description: None,
            builtin: true,
        }
    }
}

/// Enum type definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumDef {
    /// Type name.
    pub name: String,
    /// Enum values in declaration order.
    pub values: Vec<EnumValueDef>,
    /// Description.
    pub description: Option<String>,
}

impl EnumDef {
    /// Creates a new enum definition without values.
    #[must_use]
    pub fn new(name: String) -> Self {
        Self {
            name,
            values: Vec::new(),
            description: None,
        }
    }

    /// Adds a value to the enum.
    pub fn add_value(&mut self, value: EnumValueDef) {
        self.values.push(value);
    }

    /// Looks up a value by name.
    #[must_use]
    pub fn get_value(&self, name: &str) -> Option<&EnumValueDef> {
        self.values.iter().find(|v| v.name == name)
    }
}

/// Single enum value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumValueDef {
    /// Value name.
    pub name: String,
    /// Description.
    pub description: Option<String>,
}

impl EnumValueDef {
    /// Creates a new enum value.
    #[must_use]
    pub fn new(name: String) -> Self {
        Self {
            name,
            description: None,
        }
    }
}

/// Input object type definition.
#[derive(Debug, Clone, PartialEq)]
pub struct InputObjectDef {
    /// Type name.
    pub name: String,
    /// Fields in declaration order.
    pub fields: Vec<InputFieldDef>,
    /// Description.
    pub description: Option<String>,
}

impl InputObjectDef {
    /// Creates a new input object definition without fields.
    #[must_use]
    pub fn new(name: String) -> Self {
        Self {
            name,
            fields: Vec::new(),
            description: None,
        }
    }

    /// Adds a field to the input object.
    pub fn add_field(&mut self, field: InputFieldDef) {
        self.fields.push(field);
    }

    /// Builder-style variant of [`InputObjectDef::add_field`].
    #[must_use]
    pub fn with_field(mut self, field: InputFieldDef) -> Self {
        self.fields.push(field);
        self
    }

    /// Looks up a field by its wire name.
    #[must_use]
    pub fn get_field(&self, name: &str) -> Option<&InputFieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// Field of an input object.
#[derive(Debug, Clone, PartialEq)]
pub struct InputFieldDef {
    /// Wire name, as declared in the schema.
    pub name: String,
    /// Declared (possibly wrapped) type.
    pub ty: TypeRef,
    /// Declared default value.
    pub default_value: Option<ConstValue>,
    /// Description.
    pub description: Option<String>,
}

impl InputFieldDef {
    /// Creates a new field without a default value.
    #[must_use]
    pub fn new(name: String, ty: TypeRef) -> Self {
        Self {
            name,
            ty,
            default_value: None,
            description: None,
        }
    }

    /// Sets the default value.
    #[must_use]
    pub fn with_default(mut self, value: ConstValue) -> Self {
        self.default_value = Some(value);
        self
    }
}

/// Object, interface or union definition.
///
/// Output types are tracked by name only; they can't appear in input
/// positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputTypeDef {
    /// Type name.
    pub name: String,
    /// Description.
    pub description: Option<String>,
}

impl OutputTypeDef {
    /// Creates a new output type definition.
    #[must_use]
    pub fn new(name: String) -> Self {
        Self {
            name,
            description: None,
        }
    }
}

/// Reference to a type, possibly wrapped in list and non-null modifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeRef {
    /// Named type.
    Named(String),
    /// List of the inner type.
    List(Box<TypeRef>),
    /// Non-null inner type.
    NonNull(Box<TypeRef>),
}

impl TypeRef {
    /// Creates a named type reference.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// Wraps a type reference in a list.
    #[must_use]
    pub fn list(of: TypeRef) -> Self {
        Self::List(Box::new(of))
    }

    /// Wraps a type reference in a non-null modifier.
    #[must_use]
    pub fn non_null(of: TypeRef) -> Self {
        Self::NonNull(Box::new(of))
    }

    /// Returns the innermost named type.
    #[must_use]
    pub fn named_type(&self) -> &str {
        match self {
            Self::Named(name) => name,
            Self::List(of) | Self::NonNull(of) => of.named_type(),
        }
    }

    /// Returns true if the outermost modifier is non-null.
    #[must_use]
    pub const fn is_non_null(&self) -> bool {
        matches!(self, Self::NonNull(_))
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => f.write_str(name),
            Self::List(of) => write!(f, "[{of}]"),
            Self::NonNull(of) => write!(f, "{of}!"),
        }
    }
}

/// Constant literal value, as found in input field defaults.
#[derive(Debug, Clone, PartialEq)]
pub enum ConstValue {
    /// `null`.
    Null,
    /// Integer literal.
    Int(i64),
    /// Float literal.
    Float(f64),
    /// String literal.
    String(String),
    /// Boolean literal.
    Boolean(bool),
    /// Enum value literal.
    Enum(String),
    /// List literal.
    List(Vec<ConstValue>),
    /// Object literal, fields in source order.
    Object(IndexMap<String, ConstValue>),
}

impl ConstValue {
    /// Builds an object literal from `(name, value)` pairs.
    #[must_use]
    pub fn object<I, K>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, ConstValue)>,
        K: Into<String>,
    {
        Self::Object(fields.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Returns true for the `null` literal.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_graph_has_builtin_scalars() {
        let graph = SchemaTypeGraph::new();
        assert_eq!(graph.len(), BUILTIN_SCALARS.len());
        for name in BUILTIN_SCALARS {
            match graph.get_type(name) {
                Some(TypeDef::Scalar(scalar)) => assert!(scalar.builtin),
                other => panic!("expected builtin scalar {name}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_schema_type_lookup() {
        let mut graph = SchemaTypeGraph::new();
        graph.add_type(TypeDef::Scalar(ScalarDef::new("DateTime".to_string())));

        assert!(graph.has_type("DateTime"));
        assert!(!graph.has_type("unknown"));
        assert!(graph.get_type("DateTime").unwrap().is_scalar());
    }

    #[test]
    fn test_add_type_returns_replaced() {
        let mut graph = SchemaTypeGraph::new();
        assert!(
            graph
                .add_type(TypeDef::Enum(EnumDef::new("Color".to_string())))
                .is_none()
        );
        let replaced = graph.add_type(TypeDef::Enum(EnumDef::new("Color".to_string())));
        assert!(replaced.is_some());
    }

    #[test]
    fn test_input_objects_keep_declaration_order() {
        let mut graph = SchemaTypeGraph::new();
        graph.add_type(TypeDef::InputObject(InputObjectDef::new("B".to_string())));
        graph.add_type(TypeDef::Enum(EnumDef::new("E".to_string())));
        graph.add_type(TypeDef::InputObject(InputObjectDef::new("A".to_string())));

        let names: Vec<_> = graph.input_objects().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["B", "A"]);
    }

    #[test]
    fn test_type_def_name_and_kind() {
        let input = TypeDef::InputObject(InputObjectDef::new("Filter".to_string()));
        assert_eq!(input.name(), "Filter");
        assert_eq!(input.kind_name(), "input");
        assert!(input.is_input_object());

        let object = TypeDef::Object(OutputTypeDef::new("User".to_string()));
        assert_eq!(object.name(), "User");
        assert!(object.is_output_only());

        let union = TypeDef::Union(OutputTypeDef::new("Result".to_string()));
        assert_eq!(union.kind_name(), "union");

        let color = TypeDef::Enum(EnumDef::new("Color".to_string()));
        assert!(color.is_enum());
        assert!(!color.is_input_object());
        assert!(!color.is_output_only());
        assert!(!input.is_enum());
    }

    #[test]
    fn test_types_follow_declaration_order() {
        let mut graph = SchemaTypeGraph::new();
        graph.add_type(TypeDef::Enum(EnumDef::new("Color".to_string())));
        graph.add_type(TypeDef::InputObject(InputObjectDef::new("Filter".to_string())));

        let names: Vec<_> = graph.types().map(TypeDef::name).collect();
        assert_eq!(
            names,
            vec!["String", "ID", "Int", "Float", "Boolean", "Color", "Filter"]
        );
        assert_eq!(graph.types().filter(|t| t.is_enum()).count(), 1);
    }

    #[test]
    fn test_type_ref_display() {
        let ty = TypeRef::non_null(TypeRef::list(TypeRef::non_null(TypeRef::named("String"))));
        assert_eq!(ty.to_string(), "[String!]!");
        assert_eq!(ty.named_type(), "String");
        assert!(ty.is_non_null());

        let ty = TypeRef::list(TypeRef::named("Int"));
        assert_eq!(ty.to_string(), "[Int]");
        assert!(!ty.is_non_null());
    }

    #[test]
    fn test_enum_def() {
        let mut enum_def = EnumDef::new("Side".to_string());
        enum_def.add_value(EnumValueDef::new("BUY".to_string()));
        enum_def.add_value(EnumValueDef::new("SELL".to_string()));

        assert_eq!(enum_def.values.len(), 2);
        assert!(enum_def.get_value("BUY").is_some());
        assert!(enum_def.get_value("HOLD").is_none());
    }

    #[test]
    fn test_input_object_fields() {
        let input = InputObjectDef::new("Filter".to_string())
            .with_field(InputFieldDef::new("limit".to_string(), TypeRef::named("Int")))
            .with_field(
                InputFieldDef::new("tags".to_string(), TypeRef::list(TypeRef::named("String")))
                    .with_default(ConstValue::List(vec![])),
            );

        assert_eq!(input.fields.len(), 2);
        assert!(input.get_field("limit").unwrap().default_value.is_none());
        assert_eq!(
            input.get_field("tags").unwrap().default_value,
            Some(ConstValue::List(vec![]))
        );
    }

    #[test]
    fn test_const_value_object_keeps_order() {
        let value = ConstValue::object([
            ("b", ConstValue::Int(1)),
            ("a", ConstValue::Null),
        ]);
        match value {
            ConstValue::Object(fields) => {
                let keys: Vec<_> = fields.keys().cloned().collect();
                assert_eq!(keys, vec!["b".to_string(), "a".to_string()]);
                assert!(fields["a"].is_null());
            }
            other => panic!("expected object, got {other:?}"),
        }
    }
}
