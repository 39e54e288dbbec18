//! Names used in the generated Python code.

/// `typing` module.
pub const TYPING_MODULE: &str = "typing";
/// `pydantic` module.
pub const PYDANTIC_MODULE: &str = "pydantic";

/// `typing.Optional`.
pub const OPTIONAL: &str = "Optional";
/// `typing.Any`.
pub const ANY: &str = "Any";
/// `typing.Union`.
pub const UNION: &str = "Union";
/// `typing.List`.
pub const LIST: &str = "List";

/// Base class of every generated model.
pub const BASE_MODEL_CLASS_NAME: &str = "BaseModel";
/// `pydantic.Field`.
pub const FIELD_CLASS: &str = "Field";

/// Keyword carrying the wire name of an aliased field.
pub const ALIAS_KEYWORD: &str = "alias";
/// Keyword carrying a plain default.
pub const DEFAULT_KEYWORD: &str = "default";
/// Keyword carrying a per-instance default constructor.
pub const DEFAULT_FACTORY_KEYWORD: &str = "default_factory";

/// Class method validating a mapping into a model instance.
pub const PARSE_OBJ_METHOD: &str = "parse_obj";
/// Class method binding string annotations once all classes exist.
pub const UPDATE_FORWARD_REFS_METHOD: &str = "update_forward_refs";

/// Builtin GraphQL scalars and the Python types they map to.
pub const SIMPLE_TYPE_MAP: [(&str, &str); 5] = [
    ("String", "str"),
    ("ID", "str"),
    ("Int", "int"),
    ("Boolean", "bool"),
    ("Float", "float"),
];

/// Returns the Python type of a builtin GraphQL scalar.
#[must_use]
pub fn simple_type(scalar_name: &str) -> Option<&'static str> {
    SIMPLE_TYPE_MAP
        .iter()
        .find(|(graphql, _)| *graphql == scalar_name)
        .map(|(_, python)| *python)
}

/// Python reserved words, which can't be used as field names.
pub const PYTHON_KEYWORDS: [&str; 35] = [
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
    "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global",
    "if", "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return",
    "try", "while", "with", "yield",
];

/// Returns true if `name` is a Python reserved word.
#[must_use]
pub fn is_python_keyword(name: &str) -> bool {
    PYTHON_KEYWORDS.contains(&name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_type() {
        assert_eq!(simple_type("String"), Some("str"));
        assert_eq!(simple_type("ID"), Some("str"));
        assert_eq!(simple_type("Int"), Some("int"));
        assert_eq!(simple_type("Boolean"), Some("bool"));
        assert_eq!(simple_type("Float"), Some("float"));
        assert_eq!(simple_type("DateTime"), None);
    }

    #[test]
    fn test_is_python_keyword() {
        assert!(is_python_keyword("from"));
        assert!(is_python_keyword("None"));
        assert!(!is_python_keyword("none"));
        assert!(!is_python_keyword("field"));
    }
}
