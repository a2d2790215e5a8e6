//! One-call helpers over the inner crates.

use std::path::Path;

use chrono::NaiveDate;
use saju_base::{Branch, ElementMap, Stem, SymbolError, TenGod, branch_ten_god, stem_ten_god};
use saju_calendar::{BirthMoment, BirthTime, Chart, derive_chart};
use saju_config::resolve_rules;
use saju_engine::{Evaluation, InteractionEngine, RuleSet};

use crate::error::SajuError;
use crate::intake::BirthInput;
use crate::reading::Reading;

/// Derive the four pillars for a date and time.
pub fn chart(date: NaiveDate, time: BirthTime) -> Result<Chart, SajuError> {
    let moment = BirthMoment::new(date, time)?;
    Ok(derive_chart(&moment)?)
}

/// Score a chart with the standard element map.
pub fn evaluate(chart: &Chart, rules: &RuleSet) -> Evaluation {
    InteractionEngine::with_rules(rules).evaluate(chart)
}

/// Validate an intake and produce its reading.
pub fn read(input: &BirthInput, rules: &RuleSet) -> Result<Reading, SajuError> {
    let moment = input.validate()?;
    let chart = derive_chart(&moment)?;
    let map = ElementMap::standard();
    let evaluation = InteractionEngine::new(map, rules).evaluate(&chart);
    tracing::debug!(
        nickname = input.nickname(),
        %chart,
        self_strength = evaluation.self_strength,
        band = %evaluation.band(),
        "reading built"
    );
    Ok(Reading::build(
        input.nickname(),
        input.gender,
        &chart,
        &evaluation,
        rules,
        map,
    ))
}

/// [`read`] with the rule set resolved from a file, a preset name or the
/// environment.
pub fn read_with_config(
    input: &BirthInput,
    rules_file: Option<&Path>,
    preset: Option<&str>,
) -> Result<Reading, SajuError> {
    let (rules, _) = resolve_rules(rules_file, preset)?;
    read(input, &rules)
}

/// Ten-god of a stem against a Day Stem.
pub fn stem_category(day_stem: Stem, stem: Stem) -> TenGod {
    stem_ten_god(ElementMap::standard(), day_stem, stem)
}

/// Ten-god of a branch against a Day Stem.
pub fn branch_category(day_stem: Stem, branch: Branch) -> TenGod {
    branch_ten_god(ElementMap::standard(), day_stem, branch)
}

/// Which row a symbol is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolKind {
    Stem,
    Branch,
}

/// Ten-god of a stem or branch given by name, hanja or hangul.
///
/// 辛 and 申 share both the romanization `Sin` and the reading 신. Without a
/// `kind` those spellings are rejected; the hanja is always unambiguous.
pub fn symbol_category(
    day_stem: Stem,
    symbol: &str,
    kind: Option<SymbolKind>,
) -> Result<TenGod, SymbolError> {
    match kind {
        Some(SymbolKind::Stem) => Ok(stem_category(day_stem, symbol.parse()?)),
        Some(SymbolKind::Branch) => Ok(branch_category(day_stem, symbol.parse()?)),
        None => match (symbol.parse::<Stem>(), symbol.parse::<Branch>()) {
            (Ok(_), Ok(_)) => Err(SymbolError::Ambiguous(symbol.trim().to_string())),
            (Ok(stem), Err(_)) => Ok(stem_category(day_stem, stem)),
            (Err(_), Ok(branch)) => Ok(branch_category(day_stem, branch)),
            (Err(_), Err(_)) => Err(SymbolError::UnknownSymbol(symbol.trim().to_string())),
        },
    }
}
