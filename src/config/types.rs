use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

use crate::mapping::MappingDictionary;
use crate::options::{
    DEFAULT_SOURCE_SEPARATOR,
    DEFAULT_TARGET_SEPARATOR,
    OrderByOption,
    TranslationConfig,
};
use crate::processor::VariablePrefixProcessor;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "fields.user name")
    pub field_path: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    #[error("Failed to load configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),
}

fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Contents of an `.order-by.json` file.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderBySettings {
    /// Splits the incoming directive. Used verbatim, `""` included.
    pub source_separator: String,
    /// Joins rendered fragments. Used verbatim, `""` included.
    pub target_separator: String,

    /// Cypher variable to prefix every destination with (e.g. `"n"`).
    /// If unset, destinations are rendered as written.
    pub variable: Option<String>,

    /// Orderable logical keys and their rules.
    pub fields: MappingDictionary,
}

impl Default for OrderBySettings {
    fn default() -> Self {
        Self {
            source_separator: DEFAULT_SOURCE_SEPARATOR.to_string(),
            target_separator: DEFAULT_TARGET_SEPARATOR.to_string(),
            variable: None,
            fields: MappingDictionary::new(),
        }
    }
}

impl OrderBySettings {
    /// # Errors
    /// - Field key is empty
    /// - Field key contains whitespace or the source separator
    /// - Variable contains whitespace
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        let mut keys: Vec<&String> = self.fields.keys().collect();
        keys.sort();

        for key in keys {
            let field_path = format!("fields.{key}");
            if key.is_empty() {
                errors.push(ValidationError::new(
                    field_path,
                    "The field name cannot be empty. Example: \"createdAt\"",
                ));
            } else if key.chars().any(char::is_whitespace) {
                errors.push(ValidationError::new(
                    field_path,
                    format!("The field name '{key}' contains whitespace and can never be requested"),
                ));
            } else if !self.source_separator.is_empty() && key.contains(&self.source_separator) {
                errors.push(ValidationError::new(
                    field_path,
                    format!(
                        "The field name '{key}' contains the source separator '{}' and can never be requested",
                        self.source_separator
                    ),
                ));
            }

            if self.fields.get(key).is_some_and(|rule| rule.is_empty()) {
                tracing::warn!("Field '{}' has no destinations and will never be ordered by", key);
            }
        }

        if let Some(variable) = &self.variable
            && variable.chars().any(char::is_whitespace)
        {
            errors.push(ValidationError::new(
                "variable",
                "The variable cannot contain whitespace. Example: \"n\"",
            ));
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// Builds the translator configuration described by these settings.
    #[must_use]
    pub fn to_config(&self) -> TranslationConfig {
        let target_processor = self
            .variable
            .as_deref()
            .filter(|variable| !variable.trim().is_empty())
            .map(|variable| OrderByOption::target_processor(VariablePrefixProcessor::new(variable)));

        TranslationConfig::from_options([
            Some(OrderByOption::source_separator(self.source_separator.as_str())),
            Some(OrderByOption::target_separator(self.target_separator.as_str())),
            target_processor,
        ])
    }

    #[must_use]
    pub const fn dictionary(&self) -> &MappingDictionary {
        &self.fields
    }
}
