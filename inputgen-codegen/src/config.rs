//! Generator configuration.

use crate::ast::ImportFrom;
use crate::constants::{BASE_MODEL_CLASS_NAME, PYDANTIC_MODULE, is_python_keyword};
use crate::error::CodegenError;
use crate::naming::{FieldNameStrategy, SnakeCase, Verbatim};
use crate::scalars::ScalarData;
use std::collections::HashMap;

/// Default module the generated enums live in.
pub const DEFAULT_ENUMS_MODULE: &str = "enums";

/// Settings of the input types generator.
///
/// Fields are public; the same-named methods are consuming setters for
/// builder-style construction.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Module, relative to the generated package, holding the enums.
    pub enums_module: String,
    /// Whether field names are converted to snake_case.
    pub convert_to_snake_case: bool,
    /// Import of the base model class; `from pydantic import BaseModel` if unset.
    pub base_model_import: Option<ImportFrom>,
    /// Custom scalars by GraphQL name.
    pub scalars: HashMap<String, ScalarData>,
}

impl GeneratorConfig {
    /// Creates a configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            enums_module: DEFAULT_ENUMS_MODULE.to_string(),
            convert_to_snake_case: true,
            base_model_import: None,
            scalars: HashMap::new(),
        }
    }

    /// Sets the enums module.
    #[must_use]
    pub fn enums_module(mut self, module: impl Into<String>) -> Self {
        self.enums_module = module.into();
        self
    }

    /// Enables or disables snake_case conversion of field names.
    #[must_use]
    pub fn convert_to_snake_case(mut self, enabled: bool) -> Self {
        self.convert_to_snake_case = enabled;
        self
    }

    /// Overrides the base model import.
    ///
    /// Generated classes always subclass `BaseModel`, so the import must bind
    /// that name.
    #[must_use]
    pub fn base_model_import(mut self, import: ImportFrom) -> Self {
        self.base_model_import = Some(import);
        self
    }

    /// Registers a custom scalar.
    #[must_use]
    pub fn scalar(mut self, name: impl Into<String>, data: ScalarData) -> Self {
        self.scalars.insert(name.into(), data);
        self
    }

    /// Replaces all custom scalars.
    #[must_use]
    pub fn scalars(mut self, scalars: HashMap<String, ScalarData>) -> Self {
        self.scalars = scalars;
        self
    }

    /// Returns the base model import to emit.
    #[must_use]
    pub fn resolved_base_model_import(&self) -> ImportFrom {
        self.base_model_import
            .clone()
            .unwrap_or_else(|| ImportFrom::new([BASE_MODEL_CLASS_NAME], PYDANTIC_MODULE, 0))
    }

    /// Returns the field name strategy selected by
    /// [`GeneratorConfig::convert_to_snake_case`].
    #[must_use]
    pub fn field_name_strategy(&self) -> &'static dyn FieldNameStrategy {
        if self.convert_to_snake_case {
            &SnakeCase
        } else {
            &Verbatim
        }
    }

    /// Checks the settings.
    ///
    /// # Errors
    /// Returns `CodegenError::InvalidConfiguration` if the enums module is not
    /// a valid Python identifier.
    pub fn validate(&self) -> Result<(), CodegenError> {
        if !is_python_identifier(&self.enums_module) {
            return Err(CodegenError::invalid_configuration(format!(
                "enums module '{}' is not a valid Python identifier",
                self.enums_module
            )));
        }
        Ok(())
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn is_python_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let starts_well = chars
        .next()
        .is_some_and(|c| c.is_alphabetic() || c == '_');
    starts_well && chars.all(|c| c.is_alphanumeric() || c == '_') && !is_python_keyword(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GeneratorConfig::default();
        assert_eq!(config.enums_module, "enums");
        assert!(config.convert_to_snake_case);
        assert!(config.base_model_import.is_none());
        assert!(config.scalars.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_setters() {
        let config = GeneratorConfig::new()
            .enums_module("my_enums")
            .convert_to_snake_case(false)
            .base_model_import(ImportFrom::new(["BaseModel"], "base_model", 1))
            .scalar("DateTime", ScalarData::new("datetime").with_import("datetime"));

        assert_eq!(config.enums_module, "my_enums");
        assert!(!config.convert_to_snake_case);
        assert_eq!(
            config.resolved_base_model_import(),
            ImportFrom::new(["BaseModel"], "base_model", 1)
        );
        assert!(config.scalars.contains_key("DateTime"));
    }

    #[test]
    fn test_resolved_base_model_import_default() {
        let config = GeneratorConfig::new();
        assert_eq!(
            config.resolved_base_model_import(),
            ImportFrom::new(["BaseModel"], "pydantic", 0)
        );
    }

    #[test]
    fn test_field_name_strategy_selection() {
        let snake = GeneratorConfig::new();
        assert_eq!(snake.field_name_strategy().normalize("userId"), "user_id");

        let verbatim = GeneratorConfig::new().convert_to_snake_case(false);
        assert_eq!(verbatim.field_name_strategy().normalize("userId"), "userId");
    }

    #[test]
    fn test_validate_rejects_bad_enums_module() {
        for module in ["", "1enums", "my-enums", "my.enums", "import"] {
            let config = GeneratorConfig::new().enums_module(module);
            assert!(
                matches!(
                    config.validate(),
                    Err(CodegenError::InvalidConfiguration { .. })
                ),
                "module {module:?} should be rejected"
            );
        }
    }
}
