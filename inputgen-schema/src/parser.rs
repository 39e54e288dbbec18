//! GraphQL SDL loader.
//!
//! This module turns schema definition language text into a
//! [`SchemaTypeGraph`]. Only what input type generation needs is kept: type
//! kinds, input fields with their wrapped types and default values, and enum
//! values. No validation is performed beyond rejecting duplicate definitions.

use crate::error::ParseError;
use crate::types::{
    ConstValue, EnumDef, EnumValueDef, InputFieldDef, InputObjectDef, OutputTypeDef, ScalarDef,
    SchemaTypeGraph, TypeDef, TypeRef,
};
use async_graphql_parser::types as ast;
use async_graphql_value::ConstValue as AstValue;

/// Parses a GraphQL SDL document into a type graph.
///
/// # Arguments
/// * `sdl` - Schema definition language text
///
/// # Returns
/// Type graph holding the builtin scalars plus every type of the document.
///
/// # Errors
/// Returns `ParseError` if the SDL is malformed, defines a type twice or
/// extends a type that does not exist.
pub fn parse_schema(sdl: &str) -> Result<SchemaTypeGraph, ParseError> {
    let document = async_graphql_parser::parse_schema(sdl)?;
    let mut graph = SchemaTypeGraph::new();

    for definition in &document.definitions {
        match definition {
            ast::TypeSystemDefinition::Type(type_definition) => {
                ingest_type(&mut graph, &type_definition.node)?;
            }
            ast::TypeSystemDefinition::Schema(_) | ast::TypeSystemDefinition::Directive(_) => (),
        }
    }

    Ok(graph)
}

fn ingest_type(
    graph: &mut SchemaTypeGraph,
    definition: &ast::TypeDefinition,
) -> Result<(), ParseError> {
    let name = definition.name.node.to_string();
    let description = definition.description.as_ref().map(|d| d.node.clone());

    let type_def = match &definition.kind {
        ast::TypeKind::Scalar => TypeDef::Scalar(ScalarDef {
            name,
            description,
            builtin: false,
        }),
        ast::TypeKind::Object(_) => TypeDef::Object(OutputTypeDef { name, description }),
        ast::TypeKind::Interface(_) => TypeDef::Interface(OutputTypeDef { name, description }),
        ast::TypeKind::Union(_) => TypeDef::Union(OutputTypeDef { name, description }),
        ast::TypeKind::Enum(enum_type) => TypeDef::Enum(EnumDef {
            name,
            values: enum_type
                .values
                .iter()
                .map(|value| EnumValueDef {
                    name: value.node.value.node.to_string(),
                    description: value.node.description.as_ref().map(|d| d.node.clone()),
                })
                .collect(),
            description,
        }),
        ast::TypeKind::InputObject(input_object) => TypeDef::InputObject(InputObjectDef {
            name,
            fields: input_object
                .fields
                .iter()
                .map(|field| input_field(&field.node))
                .collect::<Result<_, _>>()?,
            description,
        }),
    };

    if definition.extend {
        extend_type(graph, type_def)
    } else {
        define_type(graph, type_def)
    }
}

fn define_type(graph: &mut SchemaTypeGraph, type_def: TypeDef) -> Result<(), ParseError> {
    match graph.get_type(type_def.name()) {
        None => {
            graph.add_type(type_def);
            Ok(())
        }
        // Redeclaring a builtin scalar is harmless.
        Some(TypeDef::Scalar(existing)) if existing.builtin && type_def.is_scalar() => Ok(()),
        Some(_) => Err(ParseError::duplicate(type_def.kind_name(), type_def.name())),
    }
}

fn extend_type(graph: &mut SchemaTypeGraph, extension: TypeDef) -> Result<(), ParseError> {
    let kind = extension.kind_name();
    let name = extension.name().to_string();

    match (graph.get_type_mut(&name), extension) {
        (Some(TypeDef::InputObject(existing)), TypeDef::InputObject(extension)) => {
            existing.fields.extend(extension.fields);
            Ok(())
        }
        (Some(TypeDef::Enum(existing)), TypeDef::Enum(extension)) => {
            existing.values.extend(extension.values);
            Ok(())
        }
        (Some(existing), extension) if existing.kind_name() == extension.kind_name() => Ok(()),
        _ => Err(ParseError::unknown_type(kind, name)),
    }
}

fn input_field(field: &ast::InputValueDefinition) -> Result<InputFieldDef, ParseError> {
    let name = field.name.node.to_string();
    let default_value = field
        .default_value
        .as_ref()
        .map(|value| const_value(&name, &value.node))
        .transpose()?;

    Ok(InputFieldDef {
        ty: type_ref(&field.ty.node),
        default_value,
        description: field.description.as_ref().map(|d| d.node.clone()),
        name,
    })
}

fn type_ref(ty: &ast::Type) -> TypeRef {
    let base = match &ty.base {
        ast::BaseType::Named(name) => TypeRef::Named(name.to_string()),
        ast::BaseType::List(of) => TypeRef::list(type_ref(of)),
    };
    if ty.nullable {
        base
    } else {
        TypeRef::non_null(base)
    }
}

fn const_value(field: &str, value: &AstValue) -> Result<ConstValue, ParseError> {
    let value = match value {
        AstValue::Null => ConstValue::Null,
        AstValue::Number(number) => match (number.as_i64(), number.as_f64()) {
            (Some(int), _) => ConstValue::Int(int),
            (None, Some(float)) => ConstValue::Float(float),
            (None, None) => {
                return Err(ParseError::unsupported_value(
                    field,
                    format!("number {number} is out of range"),
                ));
            }
        },
        AstValue::String(s) => ConstValue::String(s.clone()),
        AstValue::Boolean(b) => ConstValue::Boolean(*b),
        AstValue::Enum(name) => ConstValue::Enum(name.to_string()),
        AstValue::Binary(_) => {
            return Err(ParseError::unsupported_value(field, "binary literal"));
        }
        AstValue::List(items) => ConstValue::List(
            items
                .iter()
                .map(|item| const_value(field, item))
                .collect::<Result<_, _>>()?,
        ),
        AstValue::Object(fields) => ConstValue::Object(
            fields
                .iter()
                .map(|(key, item)| Ok((key.to_string(), const_value(field, item)?)))
                .collect::<Result<_, ParseError>>()?,
        ),
    };
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_input_with_enum() {
        let sdl = r#"
            input TestInput {
                field: TestEnum!
            }

            enum TestEnum {
                VAL1
                VAL2
            }
        "#;

        let graph = parse_schema(sdl).expect("Failed to parse");

        let input = graph.input_objects().next().expect("input type");
        assert_eq!(input.name, "TestInput");
        assert_eq!(
            input.fields[0].ty,
            TypeRef::non_null(TypeRef::named("TestEnum"))
        );
        match graph.get_type("TestEnum") {
            Some(TypeDef::Enum(e)) => assert_eq!(e.values.len(), 2),
            other => panic!("expected enum, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_wrapped_types() {
        let sdl = r#"
            input Wrapped {
                a: [String!]
                b: [String]!
                c: [[Int!]!]
            }
        "#;

        let graph = parse_schema(sdl).expect("Failed to parse");
        let input = graph.input_objects().next().expect("input type");

        let rendered: Vec<_> = input.fields.iter().map(|f| f.ty.to_string()).collect();
        assert_eq!(rendered, vec!["[String!]", "[String]!", "[[Int!]!]"]);
    }

    #[test]
    fn test_parse_default_values() {
        let sdl = r#"
            input Defaults {
                int: Int = 3
                float: Float = 1.5
                str: String = "abc"
                flag: Boolean = true
                nothing: String = null
                color: Color = RED
                list: [Int!] = [1, 2]
                nested: Other = { a: 1, b: [RED] }
                plain: String
            }

            input Other {
                a: Int
                b: [Color!]
            }

            enum Color { RED GREEN }
        "#;

        let graph = parse_schema(sdl).expect("Failed to parse");
        let input = graph.input_objects().next().expect("input type");
        let default = |name: &str| input.get_field(name).unwrap().default_value.clone();

        assert_eq!(default("int"), Some(ConstValue::Int(3)));
        assert_eq!(default("float"), Some(ConstValue::Float(1.5)));
        assert_eq!(default("str"), Some(ConstValue::String("abc".to_string())));
        assert_eq!(default("flag"), Some(ConstValue::Boolean(true)));
        assert_eq!(default("nothing"), Some(ConstValue::Null));
        assert_eq!(default("color"), Some(ConstValue::Enum("RED".to_string())));
        assert_eq!(
            default("list"),
            Some(ConstValue::List(vec![ConstValue::Int(1), ConstValue::Int(2)]))
        );
        assert_eq!(
            default("nested"),
            Some(ConstValue::object([
                ("a", ConstValue::Int(1)),
                ("b", ConstValue::List(vec![ConstValue::Enum("RED".to_string())])),
            ]))
        );
        assert_eq!(default("plain"), None);
    }

    #[test]
    fn test_parse_keeps_type_kinds() {
        let sdl = r#"
            scalar DateTime
            type Query { user: User }
            type User { id: ID! }
            interface Node { id: ID! }
            union Search = User
        "#;

        let graph = parse_schema(sdl).expect("Failed to parse");

        assert!(graph.get_type("DateTime").unwrap().is_scalar());
        assert!(matches!(graph.get_type("User"), Some(TypeDef::Object(_))));
        assert!(matches!(graph.get_type("Node"), Some(TypeDef::Interface(_))));
        assert!(matches!(graph.get_type("Search"), Some(TypeDef::Union(_))));
        assert_eq!(graph.input_objects().count(), 0);
    }

    #[test]
    fn test_parse_extensions() {
        let sdl = r#"
            input Filter { a: Int }
            extend input Filter { b: Int }
            enum Color { RED }
            extend enum Color { BLUE }
        "#;

        let graph = parse_schema(sdl).expect("Failed to parse");

        let filter = graph.input_objects().next().expect("input type");
        let names: Vec<_> = filter.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b"]);
        match graph.get_type("Color") {
            Some(TypeDef::Enum(e)) => assert_eq!(e.values.len(), 2),
            other => panic!("expected enum, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_duplicate_definition() {
        let sdl = r#"
            input Filter { a: Int }
            input Filter { b: Int }
        "#;

        let result = parse_schema(sdl);
        assert!(matches!(
            result,
            Err(ParseError::DuplicateDefinition { .. })
        ));
    }

    #[test]
    fn test_parse_builtin_scalar_redeclaration() {
        let graph = parse_schema("scalar String").expect("Failed to parse");
        match graph.get_type("String") {
            Some(TypeDef::Scalar(scalar)) => assert!(scalar.builtin),
            other => panic!("expected scalar, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_extension_of_unknown_type() {
        let result = parse_schema("extend input Missing { a: Int }");
        assert!(matches!(result, Err(ParseError::UnknownType { .. })));
    }

    #[test]
    fn test_parse_syntax_error() {
        let result = parse_schema("input Broken {");
        assert!(matches!(result, Err(ParseError::Syntax(_))));
    }
}
