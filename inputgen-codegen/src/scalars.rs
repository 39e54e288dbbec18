//! Custom scalar registry.
//!
//! Maps GraphQL scalar names to the Python type that represents them and the
//! module it is imported from.

use indexmap::IndexMap;
use serde::Deserialize;
use std::collections::HashMap;

/// Python representation of a custom GraphQL scalar.
///
/// Deserializes from a table such as:
///
/// ```toml
/// [scalars.DateTime]
/// type = "datetime"
/// import = "datetime"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ScalarData {
    /// Python type used in annotations.
    #[serde(rename = "type")]
    pub type_name: String,
    /// Module the type (and functions) are imported from.
    #[serde(default)]
    pub import: Option<String>,
    /// Name of the serialization function.
    #[serde(default)]
    pub serialize: Option<String>,
    /// Name of the parsing function.
    #[serde(default)]
    pub parse: Option<String>,
}

impl ScalarData {
    /// Creates scalar data without import or conversion functions.
    #[must_use]
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            import: None,
            serialize: None,
            parse: None,
        }
    }

    /// Sets the module the type is imported from.
    #[must_use]
    pub fn with_import(mut self, import: impl Into<String>) -> Self {
        self.import = Some(import.into());
        self
    }

    /// Sets the serialization function.
    #[must_use]
    pub fn with_serialize(mut self, serialize: impl Into<String>) -> Self {
        self.serialize = Some(serialize.into());
        self
    }

    /// Sets the parsing function.
    #[must_use]
    pub fn with_parse(mut self, parse: impl Into<String>) -> Self {
        self.parse = Some(parse.into());
        self
    }

    /// Names imported from [`ScalarData::import`]: the type, then the
    /// conversion functions that are set.
    #[must_use]
    pub fn names_to_import(&self) -> Vec<String> {
        std::iter::once(&self.type_name)
            .chain(self.serialize.as_ref())
            .chain(self.parse.as_ref())
            .cloned()
            .collect()
    }
}

/// Lookup of custom scalars by GraphQL name.
pub trait ScalarRegistry {
    /// Returns the Python representation of the named scalar, if registered.
    fn lookup(&self, scalar_name: &str) -> Option<&ScalarData>;
}

impl ScalarRegistry for HashMap<String, ScalarData> {
    fn lookup(&self, scalar_name: &str) -> Option<&ScalarData> {
        self.get(scalar_name)
    }
}

impl ScalarRegistry for IndexMap<String, ScalarData> {
    fn lookup(&self, scalar_name: &str) -> Option<&ScalarData> {
        self.get(scalar_name)
    }
}
