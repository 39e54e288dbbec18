//! Field name normalization.
//!
//! The generator asks a [`FieldNameStrategy`] for the Python attribute name
//! of every GraphQL field; the field is aliased whenever the two differ.

use crate::constants::is_python_keyword;

/// Turns a GraphQL field name into a Python attribute name.
pub trait FieldNameStrategy {
    /// Returns the attribute name for the given wire name.
    fn normalize(&self, wire_name: &str) -> String;
}

/// Converts camelCase names to snake_case.
#[derive(Debug, Clone, Copy, Default)]
pub struct SnakeCase;

impl FieldNameStrategy for SnakeCase {
    fn normalize(&self, wire_name: &str) -> String {
        escape_keyword(to_snake_case(wire_name))
    }
}

/// Keeps names as declared.
#[derive(Debug, Clone, Copy, Default)]
pub struct Verbatim;

impl FieldNameStrategy for Verbatim {
    fn normalize(&self, wire_name: &str) -> String {
        escape_keyword(wire_name.to_string())
    }
}

/// Converts a string to snake_case.
#[must_use]
pub fn to_snake_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);
    for (i, c) in s.chars().enumerate() {
        if c.is_uppercase() && i > 0 && !result.ends_with('_') {
            result.push('_');
        }
        result.extend(c.to_lowercase());
    }
    result
}

fn escape_keyword(mut name: String) -> String {
    if is_python_keyword(&name) {
        name.push('_');
    }
    name
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_snake_case() {
        assert_eq!(to_snake_case("fieldName"), "field_name");
        assert_eq!(to_snake_case("symbol"), "symbol");
        assert_eq!(to_snake_case("clOrdId"), "cl_ord_id");
        assert_eq!(to_snake_case("MDEntryPx"), "m_d_entry_px");
        assert_eq!(to_snake_case("already_Snake"), "already_snake");
    }

    #[test]
    fn test_snake_case_strategy() {
        assert_eq!(SnakeCase.normalize("createdAt"), "created_at");
        assert_eq!(SnakeCase.normalize("id"), "id");
        assert_eq!(SnakeCase.normalize("from"), "from_");
    }

    #[test]
    fn test_verbatim_strategy() {
        assert_eq!(Verbatim.normalize("createdAt"), "createdAt");
        assert_eq!(Verbatim.normalize("in"), "in_");
        assert_eq!(Verbatim.normalize("None"), "None_");
    }
}
