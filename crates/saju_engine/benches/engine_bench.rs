use criterion::{Criterion, black_box, criterion_group, criterion_main};
use saju_base::ElementMap;
use saju_calendar::{BirthMoment, BirthTime, derive_chart};
use saju_engine::{ChartTenGods, InteractionEngine, RulePreset, RuleSet, Stage};

fn evaluate_bench(c: &mut Criterion) {
    let moment = BirthMoment::from_ymd(1990, 5, 15, BirthTime::Known { hour: 10, minute: 30 })
        .unwrap();
    let chart = derive_chart(&moment).unwrap();
    let classic = RuleSet::preset(RulePreset::Classic);
    let weighted = RuleSet::preset(RulePreset::Weighted);

    let mut group = c.benchmark_group("evaluate");
    group.bench_function("classic", |b| {
        let engine = InteractionEngine::with_rules(&classic);
        b.iter(|| engine.evaluate(black_box(&chart)))
    });
    group.bench_function("weighted", |b| {
        let engine = InteractionEngine::with_rules(&weighted);
        b.iter(|| engine.evaluate(black_box(&chart)))
    });
    group.bench_function("base_only", |b| {
        let engine = InteractionEngine::with_rules(&weighted);
        b.iter(|| engine.evaluate_through(black_box(&chart), Stage::Base))
    });
    group.finish();

    c.bench_function("ten_gods_classify", |b| {
        b.iter(|| ChartTenGods::classify(ElementMap::standard(), black_box(&chart)))
    });
}

fn rules_bench(c: &mut Criterion) {
    let rules = RuleSet::default();
    c.bench_function("rules_validate", |b| b.iter(|| black_box(&rules).validate()));
}

criterion_group!(benches, evaluate_bench, rules_bench);
criterion_main!(benches);
