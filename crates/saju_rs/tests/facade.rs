//! Free-function entry points outside the intake path.

use saju_rs::{
    BirthTime, Branch, CalendarError, NaiveDate, RuleSet, SajuError, Stem, SymbolError,
    SymbolKind, TenGod, branch_category, chart, evaluate, stem_category, symbol_category,
};

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1990, 5, 15).unwrap()
}

#[test]
fn chart_and_evaluate_match_reading() {
    let c = chart(date(), BirthTime::Known { hour: 10, minute: 30 }).unwrap();
    assert_eq!(c.labels(), ["庚午", "辛巳", "庚辰", "辛巳"].map(String::from));

    let e = evaluate(&c, &RuleSet::default());
    assert_eq!(e.self_strength, 16);
    assert_eq!(e.log.len(), 2);

    let c = chart(date(), BirthTime::Unknown).unwrap();
    assert!(!c.has_hour());
}

#[test]
fn chart_rejects_bad_time() {
    let err = chart(date(), BirthTime::Known { hour: 24, minute: 0 }).unwrap_err();
    assert!(matches!(err, SajuError::Calendar(CalendarError::InvalidHour(24))));
}

#[test]
fn categories_against_gap_day() {
    // 辛 Metal yin against 甲 Wood yang
    assert_eq!(stem_category(Stem::Gap, Stem::Sin), TenGod::Jeonggwan);
    // 申 Metal, functional yang
    assert_eq!(branch_category(Stem::Gap, Branch::Sin), TenGod::Pyeongwan);
    // 子 Water, functional yin
    assert_eq!(branch_category(Stem::Gap, Branch::Ja), TenGod::Jeongin);
}

#[test]
fn symbol_category_resolves_shared_spellings() {
    assert_eq!(symbol_category(Stem::Gap, "辛", None), Ok(TenGod::Jeonggwan));
    assert_eq!(symbol_category(Stem::Gap, "申", None), Ok(TenGod::Pyeongwan));
    assert_eq!(symbol_category(Stem::Gap, "Ja", None), Ok(TenGod::Jeongin));

    for spelling in ["Sin", "sin", "신"] {
        assert_eq!(
            symbol_category(Stem::Gap, spelling, None),
            Err(SymbolError::Ambiguous(spelling.to_string()))
        );
        assert_eq!(
            symbol_category(Stem::Gap, spelling, Some(SymbolKind::Stem)),
            Ok(TenGod::Jeonggwan)
        );
        assert_eq!(
            symbol_category(Stem::Gap, spelling, Some(SymbolKind::Branch)),
            Ok(TenGod::Pyeongwan)
        );
    }

    assert_eq!(
        symbol_category(Stem::Gap, "zz", None),
        Err(SymbolError::UnknownSymbol("zz".into()))
    );
    assert!(matches!(
        symbol_category(Stem::Gap, "子", Some(SymbolKind::Stem)),
        Err(SymbolError::UnknownStem(_))
    ));
}
