//! Rule-set configuration for the saju engine.
//!
//! Rule sets are stored as TOML, either naming a built-in preset or
//! spelling out every table. Loaded sets are validated before use.

pub mod error;
pub mod file;
pub mod resolve;

pub use error::ConfigError;
pub use file::RulesFile;
pub use resolve::{
    RULES_ENV_VAR, RuleSource, load_rules, resolve_rules, select_source, write_rules,
};
