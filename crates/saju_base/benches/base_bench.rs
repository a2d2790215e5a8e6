use criterion::{Criterion, black_box, criterion_group, criterion_main};
use saju_base::{
    ALL_BRANCHES, ALL_ELEMENTS, ALL_STEMS, Element, ElementMap, Stem, branch_ten_god, stem_ten_god,
};

fn relation_bench(c: &mut Criterion) {
    let map = ElementMap::standard();

    let mut group = c.benchmark_group("element_map");
    group.bench_function("relation_all_pairs", |b| {
        b.iter(|| {
            let mut n = 0u32;
            for day in ALL_ELEMENTS {
                for other in ALL_ELEMENTS {
                    n += map.relation(black_box(day), black_box(other)).index() as u32;
                }
            }
            n
        })
    });
    group.bench_function("generated_by", |b| {
        b.iter(|| map.generated_by(black_box(Element::Wood)))
    });
    group.finish();
}

fn ten_god_bench(c: &mut Criterion) {
    let map = ElementMap::standard();

    let mut group = c.benchmark_group("ten_god");
    group.bench_function("stems_vs_gap", |b| {
        b.iter(|| {
            ALL_STEMS
                .iter()
                .map(|&s| stem_ten_god(map, black_box(Stem::Gap), s).index() as u32)
                .sum::<u32>()
        })
    });
    group.bench_function("branches_vs_gyeong", |b| {
        b.iter(|| {
            ALL_BRANCHES
                .iter()
                .map(|&br| branch_ten_god(map, black_box(Stem::Gyeong), br).index() as u32)
                .sum::<u32>()
        })
    });
    group.finish();
}

criterion_group!(benches, relation_bench, ten_god_bench);
criterion_main!(benches);
