//! Translator configuration and the options that build it.

use std::fmt;
use std::sync::Arc;

use crate::processor::{
    DefaultSourceProcessor,
    DefaultTargetProcessor,
    SourceProcessor,
    TargetProcessor,
};

/// Default separator between candidates of the incoming directive.
pub const DEFAULT_SOURCE_SEPARATOR: &str = ",";
/// Default separator between rendered fragments.
pub const DEFAULT_TARGET_SEPARATOR: &str = ", ";

/// One override applied on top of [`TranslationConfig::default`].
///
/// A processor option holding `None` restores the default processor.
/// A separator option is always used verbatim, including `""`.
#[derive(Clone)]
pub enum OrderByOption {
    SourceSeparator(String),
    TargetSeparator(String),
    SourceProcessor(Option<Arc<dyn SourceProcessor>>),
    TargetProcessor(Option<Arc<dyn TargetProcessor>>),
}

impl OrderByOption {
    #[must_use]
    pub fn source_separator(separator: impl Into<String>) -> Self {
        Self::SourceSeparator(separator.into())
    }

    #[must_use]
    pub fn target_separator(separator: impl Into<String>) -> Self {
        Self::TargetSeparator(separator.into())
    }

    #[must_use]
    pub fn source_processor(processor: impl SourceProcessor + 'static) -> Self {
        Self::SourceProcessor(Some(Arc::new(processor)))
    }

    #[must_use]
    pub fn target_processor(processor: impl TargetProcessor + 'static) -> Self {
        Self::TargetProcessor(Some(Arc::new(processor)))
    }
}

impl fmt::Debug for OrderByOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SourceSeparator(s) => f.debug_tuple("SourceSeparator").field(s).finish(),
            Self::TargetSeparator(s) => f.debug_tuple("TargetSeparator").field(s).finish(),
            Self::SourceProcessor(p) => {
                f.debug_tuple("SourceProcessor").field(&p.as_ref().map(|_| "custom")).finish()
            }
            Self::TargetProcessor(p) => {
                f.debug_tuple("TargetProcessor").field(&p.as_ref().map(|_| "custom")).finish()
            }
        }
    }
}

/// Resolved settings for one or many translations.
///
/// Immutable once built; share it freely between threads.
#[derive(Clone)]
pub struct TranslationConfig {
    source_separator: String,
    target_separator: String,
    source_processor: Option<Arc<dyn SourceProcessor>>,
    target_processor: Option<Arc<dyn TargetProcessor>>,
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            source_separator: DEFAULT_SOURCE_SEPARATOR.to_string(),
            target_separator: DEFAULT_TARGET_SEPARATOR.to_string(),
            source_processor: None,
            target_processor: None,
        }
    }
}

impl TranslationConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies options in order over the defaults, skipping `None` entries.
    ///
    /// ```
    /// use order_by_translator::{OrderByOption, TranslationConfig};
    ///
    /// let config = TranslationConfig::from_options([
    ///     Some(OrderByOption::source_separator("|")),
    ///     None,
    ///     Some(OrderByOption::TargetProcessor(None)),
    /// ]);
    /// assert_eq!(config.source_separator(), "|");
    /// assert_eq!(config.target_separator(), ", ");
    /// ```
    #[must_use]
    pub fn from_options<I>(options: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Option<OrderByOption>>,
    {
        options
            .into_iter()
            .filter_map(Into::<Option<OrderByOption>>::into)
            .fold(Self::default(), Self::with)
    }

    /// Returns the config with one more option applied.
    #[must_use]
    pub fn with(mut self, option: OrderByOption) -> Self {
        match option {
            OrderByOption::SourceSeparator(separator) => self.source_separator = separator,
            OrderByOption::TargetSeparator(separator) => self.target_separator = separator,
            OrderByOption::SourceProcessor(processor) => self.source_processor = processor,
            OrderByOption::TargetProcessor(processor) => self.target_processor = processor,
        }
        self
    }

    #[must_use]
    pub fn source_separator(&self) -> &str {
        &self.source_separator
    }

    #[must_use]
    pub fn target_separator(&self) -> &str {
        &self.target_separator
    }

    /// The configured source processor, or [`DefaultSourceProcessor`].
    #[must_use]
    pub fn source_processor(&self) -> &dyn SourceProcessor {
        self.source_processor.as_deref().unwrap_or(&DefaultSourceProcessor)
    }

    /// The configured target processor, or [`DefaultTargetProcessor`].
    #[must_use]
    pub fn target_processor(&self) -> &dyn TargetProcessor {
        self.target_processor.as_deref().unwrap_or(&DefaultTargetProcessor)
    }
}

impl fmt::Debug for TranslationConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TranslationConfig")
            .field("source_separator", &self.source_separator)
            .field("target_separator", &self.target_separator)
            .field("custom_source_processor", &self.source_processor.is_some())
            .field("custom_target_processor", &self.target_processor.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use googletest::prelude::*;
    use rstest::*;

    use super::*;
    use crate::types::Direction;

    #[rstest]
    fn default_config_uses_documented_defaults() {
        let config = TranslationConfig::default();

        assert_that!(config.source_separator(), eq(","));
        assert_that!(config.target_separator(), eq(", "));
        assert_eq!(config.source_processor().parse("uid desc"), ("uid".to_string(), Direction::Desc));
        assert_eq!(config.target_processor().render("uid", Direction::Asc), "uid ASC");
    }

    #[rstest]
    fn from_options_skips_none_and_last_option_wins() {
        let config = TranslationConfig::from_options([
            Some(OrderByOption::target_separator(";")),
            None,
            Some(OrderByOption::target_separator(" | ")),
        ]);

        assert_that!(config.target_separator(), eq(" | "));
        assert_that!(config.source_separator(), eq(","));
    }

    #[rstest]
    fn from_options_accepts_plain_options() {
        let config = TranslationConfig::from_options(vec![OrderByOption::source_separator(";")]);

        assert_that!(config.source_separator(), eq(";"));
    }

    #[rstest]
    fn empty_separators_are_kept_verbatim() {
        let config = TranslationConfig::from_options([
            OrderByOption::source_separator(""),
            OrderByOption::target_separator(""),
        ]);

        assert_that!(config.source_separator(), eq(""));
        assert_that!(config.target_separator(), eq(""));
    }

    #[rstest]
    fn none_processor_restores_default() {
        let custom = TranslationConfig::new()
            .with(OrderByOption::target_processor(|d: &str, _: Direction| format!("{d}!")));
        assert_eq!(custom.target_processor().render("uid", Direction::Asc), "uid!");

        let reset = custom.with(OrderByOption::TargetProcessor(None));
        assert_eq!(reset.target_processor().render("uid", Direction::Asc), "uid ASC");

        let never_set = TranslationConfig::from_options([
            OrderByOption::SourceProcessor(None),
            OrderByOption::TargetProcessor(None),
        ]);
        assert_eq!(never_set.source_processor().parse("uid desc").1, Direction::Desc);
        assert_eq!(never_set.target_processor().render("uid", Direction::Desc), "uid DESC");
    }

    #[rstest]
    fn debug_hides_processor_internals() {
        let config = TranslationConfig::new()
            .with(OrderByOption::source_processor(|s: &str| (s.to_string(), Direction::Asc)));

        let debug = format!("{config:?}");

        assert_that!(debug, contains_substring("custom_source_processor: true"));
        assert_that!(debug, contains_substring("custom_target_processor: false"));
    }
}
