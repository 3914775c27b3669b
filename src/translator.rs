//! Directive-to-`ORDER BY` translation.

use crate::mapping::MappingDictionary;
use crate::options::TranslationConfig;

/// Translates a client sort directive into an `ORDER BY` expression.
///
/// Unknown fields, fields mapped to an empty rule, blank candidates and
/// fragments rendered blank are dropped silently. An empty directive or a
/// missing/empty dictionary yields `""`. Custom processors that panic are not
/// caught.
///
/// ```
/// use order_by_translator::{MappingDictionary, MappingRule, TranslationConfig, translate};
///
/// let dict = MappingDictionary::from([
///     ("uid".to_string(), MappingRule::new(false, ["uid"])),
///     ("username".to_string(), MappingRule::new(false, ["firstname", "lastname"])),
///     ("age".to_string(), MappingRule::new(true, ["birthday"])),
/// ]);
/// let config = TranslationConfig::default();
///
/// assert_eq!(translate("uid, age desc", Some(&dict), &config), "uid ASC, birthday ASC");
/// assert_eq!(
///     translate("age, username desc", Some(&dict), &config),
///     "birthday DESC, firstname DESC, lastname DESC"
/// );
/// ```
#[must_use]
pub fn translate(
    query_source: &str,
    dict: Option<&MappingDictionary>,
    config: &TranslationConfig,
) -> String {
    let query_source = query_source.trim();
    let Some(dict) = dict.filter(|d| !d.is_empty()) else {
        return String::new();
    };
    if query_source.is_empty() {
        return String::new();
    }

    let source_processor = config.source_processor();
    let target_processor = config.target_processor();

    let mut targets = Vec::new();
    for candidate in query_source.split(config.source_separator()) {
        let candidate = candidate.trim();
        if candidate.is_empty() {
            continue;
        }

        let (field, direction) = source_processor.parse(candidate);
        let Some(rule) = dict.get(&field).filter(|rule| !rule.is_empty()) else {
            tracing::debug!("Skipping non-orderable field: {:?}", field);
            continue;
        };

        let direction = if rule.reverse() { direction.reversed() } else { direction };
        for destination in rule.destinations() {
            let target = target_processor.render(destination, direction);
            let target = target.trim();
            if target.is_empty() {
                tracing::debug!("Rendered fragment for {:?} is empty, dropped", destination);
                continue;
            }
            targets.push(target.to_string());
        }
    }

    let expression = targets.join(config.target_separator());
    tracing::trace!("Translated {:?} into {:?}", query_source, expression);
    expression
}

impl TranslationConfig {
    /// Method form of [`translate`].
    #[must_use]
    pub fn translate(&self, query_source: &str, dict: Option<&MappingDictionary>) -> String {
        translate(query_source, dict, self)
    }
}
