//! Pluggable parsing and rendering steps of the translator.
//!
//! Any `Fn(&str) -> (String, Direction)` is a [`SourceProcessor`] and any
//! `Fn(&str, Direction) -> String` is a [`TargetProcessor`], so closures can be
//! passed where a strategy object is expected.

use crate::types::Direction;

/// Extracts the logical field name and requested direction from one trimmed candidate.
pub trait SourceProcessor: Send + Sync {
    fn parse(&self, candidate: &str) -> (String, Direction);
}

/// Renders one destination with its resolved direction.
///
/// Returning an empty or whitespace-only string suppresses the fragment.
pub trait TargetProcessor: Send + Sync {
    fn render(&self, destination: &str, direction: Direction) -> String;
}

impl<F> SourceProcessor for F
where
    F: Fn(&str) -> (String, Direction) + Send + Sync,
{
    fn parse(&self, candidate: &str) -> (String, Direction) {
        self(candidate)
    }
}

impl<F> TargetProcessor for F
where
    F: Fn(&str, Direction) -> String + Send + Sync,
{
    fn render(&self, destination: &str, direction: Direction) -> String {
        self(destination, direction)
    }
}

/// Parses `field`, `field asc` or `field desc`.
///
/// Only the second space-separated token is inspected (case-insensitively);
/// anything after it is ignored, so `uid desc xxx` reads as `uid desc`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultSourceProcessor;

impl SourceProcessor for DefaultSourceProcessor {
    fn parse(&self, candidate: &str) -> (String, Direction) {
        let mut tokens = candidate.split(' ');
        let field = tokens.next().unwrap_or_default();
        let desc = tokens.next().is_some_and(|token| token.trim().eq_ignore_ascii_case("desc"));
        (field.to_string(), Direction::from_ascending(!desc))
    }
}

/// Renders `destination ASC` / `destination DESC`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTargetProcessor;

impl TargetProcessor for DefaultTargetProcessor {
    fn render(&self, destination: &str, direction: Direction) -> String {
        format!("{destination} {direction}")
    }
}

/// Binds bare property names to a Cypher variable: `n.destination DESC`.
///
/// A blank variable falls back to [`DefaultTargetProcessor`] output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariablePrefixProcessor {
    variable: String,
}

impl VariablePrefixProcessor {
    #[must_use]
    pub fn new(variable: impl Into<String>) -> Self {
        Self { variable: variable.into().trim().to_string() }
    }

    #[must_use]
    pub fn variable(&self) -> &str {
        &self.variable
    }
}

impl TargetProcessor for VariablePrefixProcessor {
    fn render(&self, destination: &str, direction: Direction) -> String {
        if self.variable.is_empty() {
            return DefaultTargetProcessor.render(destination, direction);
        }
        format!("{}.{destination} {direction}", self.variable)
    }
}
