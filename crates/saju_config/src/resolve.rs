//! Choosing the rule set for a run.
//!
//! Precedence, highest first:
//! 1. an explicit rule file
//! 2. an explicit preset name
//! 3. the file named by `SAJU_RULES`
//! 4. the default preset

use std::path::{Path, PathBuf};

use saju_engine::{RulePreset, RuleSet};

use crate::error::ConfigError;
use crate::file::RulesFile;

/// Environment variable naming a default rule file.
pub const RULES_ENV_VAR: &str = "SAJU_RULES";

/// Where a resolved rule set came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleSource {
    File(PathBuf),
    Preset(RulePreset),
    Default,
}

impl std::fmt::Display for RuleSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File(p) => write!(f, "file {}", p.display()),
            Self::Preset(p) => write!(f, "preset {p}"),
            Self::Default => f.write_str("default preset"),
        }
    }
}

/// Load and validate a rule file.
pub fn load_rules(path: impl AsRef<Path>) -> Result<RuleSet, ConfigError> {
    let path = path.as_ref();
    let rules = RulesFile::from_file(path)?.into_rule_set()?;
    tracing::info!(
        path = %path.display(),
        rules = %rules.name,
        version = rules.version,
        "loaded rule set"
    );
    Ok(rules)
}

/// Write `rules` as a full `[rules]` document.
pub fn write_rules(path: impl AsRef<Path>, rules: &RuleSet) -> Result<(), ConfigError> {
    let path = path.as_ref();
    let text = RulesFile::from_rule_set(rules.clone()).to_toml_string()?;
    std::fs::write(path, text).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Pick a rule source from explicit arguments and an environment value.
///
/// Split from [`resolve_rules`] so callers can supply the environment.
pub fn select_source(
    file: Option<&Path>,
    preset: Option<&str>,
    env_file: Option<PathBuf>,
) -> Result<RuleSource, ConfigError> {
    if let Some(path) = file {
        return Ok(RuleSource::File(path.to_path_buf()));
    }
    if let Some(name) = preset {
        return Ok(RuleSource::Preset(name.parse()?));
    }
    match env_file {
        Some(path) if !path.as_os_str().is_empty() => Ok(RuleSource::File(path)),
        _ => Ok(RuleSource::Default),
    }
}

/// Resolve the rule set for a run, consulting `SAJU_RULES` last.
pub fn resolve_rules(
    file: Option<&Path>,
    preset: Option<&str>,
) -> Result<(RuleSet, RuleSource), ConfigError> {
    let env_file = std::env::var_os(RULES_ENV_VAR).map(PathBuf::from);
    let source = select_source(file, preset, env_file)?;
    let rules = match &source {
        RuleSource::File(path) => load_rules(path)?,
        RuleSource::Preset(p) => RuleSet::preset(*p),
        RuleSource::Default => RuleSet::default(),
    };
    tracing::debug!(%source, rules = %rules.name, "resolved rule set");
    Ok((rules, source))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_file_wins() {
        let src = select_source(
            Some(Path::new("a.toml")),
            Some("classic"),
            Some(PathBuf::from("env.toml")),
        )
        .unwrap();
        assert_eq!(src, RuleSource::File(PathBuf::from("a.toml")));
    }

    #[test]
    fn preset_beats_env() {
        let src = select_source(None, Some("classic"), Some(PathBuf::from("env.toml"))).unwrap();
        assert_eq!(src, RuleSource::Preset(RulePreset::Classic));
    }

    #[test]
    fn env_then_default() {
        let src = select_source(None, None, Some(PathBuf::from("env.toml"))).unwrap();
        assert_eq!(src, RuleSource::File(PathBuf::from("env.toml")));
        assert_eq!(select_source(None, None, None).unwrap(), RuleSource::Default);
        assert_eq!(
            select_source(None, None, Some(PathBuf::new())).unwrap(),
            RuleSource::Default
        );
    }

    #[test]
    fn bad_preset_name() {
        assert!(matches!(
            select_source(None, Some("nope"), None),
            Err(ConfigError::UnknownPreset(_))
        ));
    }
}
