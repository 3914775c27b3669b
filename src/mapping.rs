//! Whitelist of orderable logical keys and their physical expansion rules.

use std::collections::HashMap;

use serde::{
    Deserialize,
    Serialize,
};

/// Maps a logical (client-facing) sort key to its [`MappingRule`].
///
/// Keys are case-sensitive. Build it once and share it read-only; a later
/// `insert` of the same key replaces the earlier rule.
pub type MappingDictionary = HashMap<String, MappingRule>;

/// How one logical sort key expands to physical columns or properties.
///
/// Use a bare name (`"birthday"`) for SQL and a qualified one (`"n.birthday"`)
/// for Cypher. Destination strings are emitted verbatim, so they must already
/// be safe identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "RawMappingRule")]
pub struct MappingRule {
    reverse: bool,
    destinations: Vec<String>,
}

impl MappingRule {
    /// Creates a rule, trimming every destination and dropping the ones left empty.
    ///
    /// A rule without destinations is valid; keys mapped to it are never orderable.
    #[must_use]
    pub fn new<I, S>(reverse: bool, destinations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let destinations = destinations
            .into_iter()
            .filter_map(|d| {
                let d = d.as_ref().trim();
                (!d.is_empty()).then(|| d.to_string())
            })
            .collect();
        Self { reverse, destinations }
    }

    #[must_use]
    pub fn destinations(&self) -> &[String] {
        &self.destinations
    }

    /// Whether the requested direction is inverted for this key.
    #[must_use]
    pub const fn reverse(&self) -> bool {
        self.reverse
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.destinations.is_empty()
    }
}

/// Accepted on-disk shapes of a rule: `["a", "b"]` or `{"reverse": true, "destinations": [...]}`.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawMappingRule {
    /// Destinations only, never reversed.
    List(Vec<String>),
    /// Full form.
    Rule {
        #[serde(default)]
        reverse: bool,
        destinations: Vec<String>,
    },
}

impl From<RawMappingRule> for MappingRule {
    fn from(raw: RawMappingRule) -> Self {
        match raw {
            RawMappingRule::List(destinations) => Self::new(false, destinations),
            RawMappingRule::Rule { reverse, destinations } => Self::new(reverse, destinations),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use googletest::prelude::*;
    use rstest::*;

    use super::*;

    #[rstest]
    #[case(&["uid"], &["uid"])]
    #[case(&["firstname", "lastname"], &["firstname", "lastname"])]
    #[case(&["  n.uid  ", "\tn.name\n"], &["n.uid", "n.name"])]
    #[case(&["", "a", "   ", "b", ""], &["a", "b"])]
    #[case(&[], &[])]
    #[case(&["", " "], &[])]
    fn new_trims_and_drops_empty_destinations(#[case] given: &[&str], #[case] expected: &[&str]) {
        let rule = MappingRule::new(false, given);

        assert_eq!(rule.destinations(), expected);
        assert_that!(rule.is_empty(), eq(expected.is_empty()));
    }

    #[rstest]
    fn new_keeps_reverse_flag_verbatim() {
        assert!(MappingRule::new(true, ["birthday"]).reverse());
        assert!(!MappingRule::new(false, ["uid"]).reverse());
        assert!(MappingRule::new(true, Vec::<String>::new()).reverse());
    }

    #[rstest]
    fn dictionary_lookup_is_case_sensitive_and_last_insert_wins() {
        let mut dict = MappingDictionary::new();
        dict.insert("uid".to_string(), MappingRule::new(false, ["uid"]));
        dict.insert("uid".to_string(), MappingRule::new(true, ["user_id"]));

        assert_that!(dict.len(), eq(1));
        assert_eq!(dict["uid"].destinations(), ["user_id"]);
        assert!(dict["uid"].reverse());
        assert!(!dict.contains_key("UID"));
    }

    #[rstest]
    fn deserializes_both_rule_shapes() {
        let json = r#"{
            "uid": ["uid"],
            "username": [" firstname ", "", "lastname"],
            "age": { "reverse": true, "destinations": ["birthday"] },
            "score": { "destinations": ["score"] }
        }"#;

        let dict: MappingDictionary = serde_json::from_str(json).unwrap();

        assert_eq!(dict["uid"], MappingRule::new(false, ["uid"]));
        assert_eq!(dict["username"], MappingRule::new(false, ["firstname", "lastname"]));
        assert_eq!(dict["age"], MappingRule::new(true, ["birthday"]));
        assert_eq!(dict["score"], MappingRule::new(false, ["score"]));
    }

    #[rstest]
    fn rejects_malformed_rule() {
        let result = serde_json::from_str::<MappingRule>(r#"{"reverse": true}"#);

        assert!(result.is_err());
    }

    #[rstest]
    fn serializes_to_object_form() {
        let rule = MappingRule::new(true, ["a", "b"]);

        let json = serde_json::to_value(&rule).unwrap();

        assert_eq!(json, serde_json::json!({ "reverse": true, "destinations": ["a", "b"] }));
    }
}
