//! order-by-translator
//!
//! Translates client sort directives such as `"username desc, age"` into
//! whitelisted SQL or Cypher `ORDER BY` expressions such as
//! `"lastname DESC, firstname DESC"` or `"n.lastname DESC, n.firstname DESC"`.

pub mod config;
pub mod mapping;
pub mod options;
pub mod processor;
pub mod translator;
pub mod types;

pub use mapping::{
    MappingDictionary,
    MappingRule,
};
pub use options::{
    OrderByOption,
    TranslationConfig,
};
pub use processor::{
    DefaultSourceProcessor,
    DefaultTargetProcessor,
    SourceProcessor,
    TargetProcessor,
    VariablePrefixProcessor,
};
pub use translator::translate;
pub use types::Direction;
