//! Integration tests for reading and writing rule files on disk.

use std::io::Write;

use saju_config::{ConfigError, load_rules, write_rules};
use saju_engine::{RulePreset, RuleSet};
use tempfile::NamedTempFile;

fn temp_with(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn load_preset_file() {
    let file = temp_with("preset = \"classic\"\n");
    let rules = load_rules(file.path()).unwrap();
    assert_eq!(rules, RuleSet::preset(RulePreset::Classic));
}

#[test]
fn write_then_load_custom_rules() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("custom.toml");

    let mut rules = RuleSet::preset(RulePreset::Weighted);
    rules.name = "local".into();
    rules.version = 7;
    rules.bonuses.duplicate = 8;
    rules.weights.branch = [5, 30, 15, 5];
    write_rules(&path, &rules).unwrap();

    let loaded = load_rules(&path).unwrap();
    assert_eq!(loaded, rules);
}

#[test]
fn hand_written_rules_table() {
    let file = temp_with(
        r#"
[rules]
name = "tiny"
version = 1
stem_clashes = [{ stems = ["Gap", "Gyeong"], penalty = 10 }]
stem_combinations = []
branch_clashes = [{ branches = ["Ja", "O"], bonus = 10 }]
triads = [{ element = "Water", members = ["Sin", "Ja", "Jin"] }]
directionals = []

[rules.weights]
stem = [10, 10, 10, 10]
branch = [10, 10, 10, 10]

[rules.bonuses]
duplicate = 5
triad = { full = 12, partial = 4 }
directional = { full = 10, partial = 3 }
battle = { dominance = 5, upset = 5, drain_loss = 3, drain_gain = 5 }
"#,
    );
    let rules = load_rules(file.path()).unwrap();
    assert_eq!(rules.name, "tiny");
    assert_eq!(rules.stem_clashes.len(), 1);
    assert!(rules.directionals.is_empty());
    assert_eq!(rules.bonuses.triad.full, 12);
}

#[test]
fn invalid_rules_table() {
    let file = temp_with(
        r#"
[rules]
name = "broken"
version = 1
stem_clashes = []
stem_combinations = []
branch_clashes = [{ branches = ["Ja", "Ja"], bonus = 10 }]
triads = []
directionals = []

[rules.weights]
stem = [10, 10, 10, 10]
branch = [10, 10, 10, 10]

[rules.bonuses]
duplicate = 5
triad = { full = 12, partial = 4 }
directional = { full = 10, partial = 3 }
battle = { dominance = 5, upset = 5, drain_loss = 3, drain_gain = 5 }
"#,
    );
    assert!(matches!(load_rules(file.path()), Err(ConfigError::Invalid(_))));
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_rules(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}

#[test]
fn malformed_toml_is_parse_error() {
    let file = temp_with("preset = ");
    assert!(matches!(load_rules(file.path()), Err(ConfigError::Parse(_))));
}
