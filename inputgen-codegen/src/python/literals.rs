//! Default value translation.
//!
//! Turns GraphQL constant literals into Python expressions. Mutable defaults
//! at the top level are never shared between model instances: a list becomes
//! `Field(default_factory=lambda: [...])` and an object becomes
//! `Type.parse_obj({...})`. Literals nested in another list or object are
//! left bare, since the enclosing constructor consumes them immediately.

use crate::ast::{Call, Constant, Expr, Keyword};
use crate::constants::{DEFAULT_FACTORY_KEYWORD, FIELD_CLASS, PARSE_OBJ_METHOD};
use inputgen_schema::{ConstValue, InputFieldDef};

/// Position of a literal within the default value being translated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Nesting {
    /// The literal is an element of a list literal.
    pub in_list: bool,
    /// The literal is a field value of an object literal.
    pub in_object: bool,
}

impl Nesting {
    /// Position of a field's whole default value.
    pub const TOP: Self = Self {
        in_list: false,
        in_object: false,
    };
}

/// Translates the declared default of a field, if it has one.
///
/// `target` names the enum or input object type of the field; enum literals
/// are qualified with it and object literals are parsed into it. An explicit
/// `null` default yields `None`, the Python constant, not the absence of a
/// default.
#[must_use]
pub fn translate_default(field: &InputFieldDef, target: Option<&str>) -> Option<Expr> {
    field
        .default_value
        .as_ref()
        .map(|value| translate_value(value, target, Nesting::TOP))
}

/// Translates a single literal at the given nesting position.
#[must_use]
pub fn translate_value(value: &ConstValue, target: Option<&str>, nesting: Nesting) -> Expr {
    match value {
        ConstValue::Null => Expr::Constant(Constant::None),
        ConstValue::Int(i) => Expr::Constant(Constant::Int(*i)),
        ConstValue::Float(f) => Expr::Constant(Constant::Float(*f)),
        ConstValue::String(s) => Expr::str(s),
        ConstValue::Boolean(b) => Expr::Constant(Constant::Bool(*b)),
        ConstValue::Enum(member) => match target {
            Some(enum_name) => Expr::attribute(Expr::name(enum_name), member),
            None => Expr::str(member),
        },
        ConstValue::List(items) => {
            let element_nesting = Nesting {
                in_list: true,
                ..nesting
            };
            let list = Expr::List(
                items
                    .iter()
                    .map(|item| translate_value(item, target, element_nesting))
                    .collect(),
            );
            if nesting.in_list {
                list
            } else {
                default_factory(list)
            }
        }
        ConstValue::Object(fields) => {
            let field_nesting = Nesting {
                in_list: true,
                in_object: true,
            };
            let dict = Expr::Dict {
                keys: fields.keys().map(Expr::str).collect(),
                values: fields
                    .values()
                    .map(|item| translate_value(item, target, field_nesting))
                    .collect(),
            };
            match target {
                _ if nesting.in_object => dict,
                Some(type_name) => Expr::method_call(type_name, PARSE_OBJ_METHOD, vec![dict]),
                None if nesting.in_list => dict,
                None => default_factory(dict),
            }
        }
    }
}

fn default_factory(value: Expr) -> Expr {
    Expr::Call(Call::new(
        FIELD_CLASS,
        vec![Keyword::new(DEFAULT_FACTORY_KEYWORD, Expr::lambda(value))],
    ))
}
