//! Python syntax tree produced by the generators.
//!
//! Only the node kinds the generators emit are modelled. Rendering the tree
//! to source text is left to the emitter.

/// Python module.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Module {
    /// Statements in order.
    pub body: Vec<Stmt>,
}

impl Module {
    /// Creates a module from its statements.
    #[must_use]
    pub fn new(body: Vec<Stmt>) -> Self {
        Self { body }
    }

    /// Iterates over the `from ... import ...` statements.
    pub fn imports(&self) -> impl Iterator<Item = &ImportFrom> {
        self.body.iter().filter_map(|stmt| match stmt {
            Stmt::ImportFrom(import) => Some(import),
            _ => None,
        })
    }

    /// Iterates over the class definitions.
    pub fn class_defs(&self) -> impl Iterator<Item = &ClassDef> {
        self.body.iter().filter_map(|stmt| match stmt {
            Stmt::ClassDef(class_def) => Some(class_def),
            _ => None,
        })
    }

    /// Looks up a class definition by name.
    #[must_use]
    pub fn class_def(&self, name: &str) -> Option<&ClassDef> {
        self.class_defs().find(|c| c.name == name)
    }
}

/// Statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// `from module import a, b`.
    ImportFrom(ImportFrom),
    /// `class Name(Base): ...`.
    ClassDef(ClassDef),
    /// `target: annotation = value`.
    AnnAssign(AnnAssign),
    /// Bare expression statement.
    Expr(Expr),
    /// `pass`.
    Pass,
}

/// `from module import names`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportFrom {
    /// Module path, without the leading dots.
    pub module: String,
    /// Imported names.
    pub names: Vec<String>,
    /// Number of leading dots (0 for absolute imports).
    pub level: u32,
}

impl ImportFrom {
    /// Creates an import statement.
    #[must_use]
    pub fn new<I, S>(names: I, module: impl Into<String>, level: u32) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            module: module.into(),
            names: names.into_iter().map(Into::into).collect(),
            level,
        }
    }
}

/// Class definition.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassDef {
    /// Class name.
    pub name: String,
    /// Base classes.
    pub bases: Vec<Expr>,
    /// Class body.
    pub body: Vec<Stmt>,
}

impl ClassDef {
    /// Iterates over the annotated field assignments of the body.
    pub fn fields(&self) -> impl Iterator<Item = &AnnAssign> {
        self.body.iter().filter_map(|stmt| match stmt {
            Stmt::AnnAssign(field) => Some(field),
            _ => None,
        })
    }

    /// Looks up a field by its (normalized) name.
    #[must_use]
    pub fn field(&self, target: &str) -> Option<&AnnAssign> {
        self.fields().find(|f| f.target == target)
    }
}

/// Annotated assignment, used for class fields.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnAssign {
    /// Assigned name.
    pub target: String,
    /// Type annotation.
    pub annotation: Expr,
    /// Assigned value, if any.
    pub value: Option<Expr>,
    /// 1-based position of the field within its class.
    pub lineno: usize,
}

/// Expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Identifier.
    Name(String),
    /// Literal constant.
    Constant(Constant),
    /// `value.attr`.
    Attribute {
        /// Object expression.
        value: Box<Expr>,
        /// Attribute name.
        attr: String,
    },
    /// `value[slice]`.
    Subscript {
        /// Subscripted expression.
        value: Box<Expr>,
        /// Index expression.
        slice: Box<Expr>,
    },
    /// `[a, b]`.
    List(Vec<Expr>),
    /// `{k: v}`; keys and values are parallel.
    Dict {
        /// Keys.
        keys: Vec<Expr>,
        /// Values.
        values: Vec<Expr>,
    },
    /// Function or method call.
    Call(Call),
    /// `lambda: body`.
    Lambda(Box<Expr>),
}

impl Expr {
    /// Creates a name expression.
    #[must_use]
    pub fn name(id: impl Into<String>) -> Self {
        Self::Name(id.into())
    }

    /// Creates a string constant.
    #[must_use]
    pub fn str(value: impl Into<String>) -> Self {
        Self::Constant(Constant::Str(value.into()))
    }

    /// Creates `value.attr`.
    #[must_use]
    pub fn attribute(value: Expr, attr: impl Into<String>) -> Self {
        Self::Attribute {
            value: Box::new(value),
            attr: attr.into(),
        }
    }

    /// Creates `value[slice]`.
    #[must_use]
    pub fn subscript(value: Expr, slice: Expr) -> Self {
        Self::Subscript {
            value: Box::new(value),
            slice: Box::new(slice),
        }
    }

    /// Creates `lambda: body`.
    #[must_use]
    pub fn lambda(body: Expr) -> Self {
        Self::Lambda(Box::new(body))
    }

    /// Creates `object.method(args)`.
    #[must_use]
    pub fn method_call(
        object: impl Into<String>,
        method: impl Into<String>,
        args: Vec<Expr>,
    ) -> Self {
        Self::Call(Call {
            func: Box::new(Self::attribute(Self::name(object), method)),
            args,
            keywords: Vec::new(),
        })
    }

    /// Returns the call if this expression is a call of the named function.
    #[must_use]
    pub fn as_call_of(&self, func_name: &str) -> Option<&Call> {
        match self {
            Self::Call(call) if matches!(call.func.as_ref(), Self::Name(id) if id == func_name) => {
                Some(call)
            }
            _ => None,
        }
    }
}

/// Literal constant.
#[derive(Debug, Clone, PartialEq)]
pub enum Constant {
    /// `None`.
    None,
    /// `True` / `False`.
    Bool(bool),
    /// Integer.
    Int(i64),
    /// Float.
    Float(f64),
    /// String.
    Str(String),
}

/// Call expression.
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    /// Called expression.
    pub func: Box<Expr>,
    /// Positional arguments.
    pub args: Vec<Expr>,
    /// Keyword arguments.
    pub keywords: Vec<Keyword>,
}

impl Call {
    /// Creates a call of a plain function name with keyword arguments only.
    #[must_use]
    pub fn new(func_name: impl Into<String>, keywords: Vec<Keyword>) -> Self {
        Self {
            func: Box::new(Expr::name(func_name)),
            args: Vec::new(),
            keywords,
        }
    }

    /// Looks up a keyword argument by name.
    #[must_use]
    pub fn keyword(&self, arg: &str) -> Option<&Expr> {
        self.keywords.iter().find(|k| k.arg == arg).map(|k| &k.value)
    }
}

/// Keyword argument `arg=value`.
#[derive(Debug, Clone, PartialEq)]
pub struct Keyword {
    /// Argument name.
    pub arg: String,
    /// Argument value.
    pub value: Expr,
}

impl Keyword {
    /// Creates a keyword argument.
    #[must_use]
    pub fn new(arg: impl Into<String>, value: Expr) -> Self {
        Self {
            arg: arg.into(),
            value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_call_shape() {
        let call = Expr::method_call("Filter", "update_forward_refs", vec![]);
        match call {
            Expr::Call(call) => {
                assert_eq!(
                    *call.func,
                    Expr::attribute(Expr::name("Filter"), "update_forward_refs")
                );
                assert!(call.args.is_empty());
                assert!(call.keywords.is_empty());
            }
            other => panic!("expected call, got {other:?}"),
        }
    }

    #[test]
    fn test_as_call_of() {
        let call = Expr::Call(Call::new("Field", vec![Keyword::new("alias", Expr::str("x"))]));
        let found = call.as_call_of("Field").expect("Field call");
        assert_eq!(found.keyword("alias"), Some(&Expr::str("x")));
        assert!(found.keyword("default").is_none());

        assert!(call.as_call_of("Other").is_none());
        assert!(Expr::name("Field").as_call_of("Field").is_none());
        assert!(
            Expr::method_call("Field", "parse_obj", vec![])
                .as_call_of("Field")
                .is_none()
        );
    }

    #[test]
    fn test_module_lookups() {
        let module = Module::new(vec![
            Stmt::ImportFrom(ImportFrom::new(["Field"], "pydantic", 0)),
            Stmt::ClassDef(ClassDef {
                name: "A".to_string(),
                bases: vec![Expr::name("BaseModel")],
                body: vec![Stmt::AnnAssign(AnnAssign {
                    target: "x".to_string(),
                    annotation: Expr::name("int"),
                    value: None,
                    lineno: 1,
                })],
            }),
            Stmt::Expr(Expr::method_call("A", "update_forward_refs", vec![])),
        ]);

        assert_eq!(module.imports().count(), 1);
        let class_def = module.class_def("A").expect("class A");
        assert!(class_def.field("x").is_some());
        assert!(class_def.field("y").is_none());
        assert!(module.class_def("B").is_none());
    }
}
