//! Rule-set TOML documents.
//!
//! A rule file either names a preset:
//!
//! ```toml
//! preset = "classic"
//! ```
//!
//! or carries a complete `[rules]` table in the shape of
//! [`saju_engine::RuleSet`]. An empty document selects the default preset.

use std::path::Path;

use saju_engine::{RulePreset, RuleSet};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RulesFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preset: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rules: Option<RuleSet>,
}

impl RulesFile {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// A document holding the full tables of `rules`.
    pub fn from_rule_set(rules: RuleSet) -> Self {
        Self {
            preset: None,
            rules: Some(rules),
        }
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string(self)?)
    }

    /// Resolve to a validated rule set.
    pub fn into_rule_set(self) -> Result<RuleSet, ConfigError> {
        let rules = match (self.preset, self.rules) {
            (Some(_), Some(_)) => return Err(ConfigError::Ambiguous),
            (Some(name), None) => RuleSet::preset(name.parse::<RulePreset>()?),
            (None, Some(rules)) => rules,
            (None, None) => RuleSet::default(),
        };
        rules.validate()?;
        Ok(rules)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_document() {
        let rules = RulesFile::from_toml_str("preset = \"classic\"\n")
            .unwrap()
            .into_rule_set()
            .unwrap();
        assert_eq!(rules, RuleSet::preset(RulePreset::Classic));
    }

    #[test]
    fn empty_document_is_default() {
        let rules = RulesFile::from_toml_str("").unwrap().into_rule_set().unwrap();
        assert_eq!(rules.name, "weighted");
    }

    #[test]
    fn unknown_preset() {
        let err = RulesFile::from_toml_str("preset = \"lunar\"")
            .unwrap()
            .into_rule_set()
            .unwrap_err();
        assert!(matches!(err, ConfigError::UnknownPreset(name) if name == "lunar"));
    }

    #[test]
    fn unknown_keys_rejected() {
        let err = RulesFile::from_toml_str("presets = \"classic\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn both_forms_is_ambiguous() {
        let mut file = RulesFile::from_rule_set(RuleSet::default());
        file.preset = Some("classic".into());
        assert!(matches!(file.into_rule_set(), Err(ConfigError::Ambiguous)));
    }

    #[test]
    fn full_table_round_trip() {
        let original = RuleSet::preset(RulePreset::Weighted);
        let text = RulesFile::from_rule_set(original.clone()).to_toml_string().unwrap();
        assert!(text.contains("[rules]") || text.contains("[rules."));
        let back = RulesFile::from_toml_str(&text).unwrap().into_rule_set().unwrap();
        assert_eq!(back, original);
    }

    #[test]
    fn invalid_tables_rejected() {
        let mut rules = RuleSet::default();
        rules.bonuses.duplicate = -5;
        let err = RulesFile::from_rule_set(rules).into_rule_set().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }
}
