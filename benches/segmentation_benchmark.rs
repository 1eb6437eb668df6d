use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use jyutsearch::analysis::segmenter::RomanizationSegmenter;
use jyutsearch::core::types::SearchQuery;
use jyutsearch::query::QueryBuilder;
use rand::Rng;

const JYUTPING_SYLLABLES: [&str; 8] = ["nei", "hou", "ngo", "sik", "faan", "gwong", "dung", "waa"];

/// Run-together Jyutping with random tones, e.g. "nei5hougwong2"
fn random_jyutping(syllables: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..syllables)
        .map(|_| {
            let syllable = JYUTPING_SYLLABLES[rng.gen_range(0..JYUTPING_SYLLABLES.len())];
            if rng.gen_bool(0.5) {
                format!("{}{}", syllable, rng.gen_range(1..=6))
            } else {
                syllable.to_string()
            }
        })
        .collect()
}

/// Benchmark segmentation by input length
fn bench_segmentation(c: &mut Criterion) {
    let segmenter = RomanizationSegmenter::jyutping();
    let mut group = c.benchmark_group("jyutping_segmentation");

    for syllables in [1, 4, 16, 64].iter() {
        let input = random_jyutping(*syllables);
        group.bench_with_input(BenchmarkId::from_parameter(syllables), &input, |b, input| {
            b.iter(|| segmenter.segment(black_box(input)));
        });
    }
    group.finish();
}

fn bench_pinyin_segmentation(c: &mut Criterion) {
    let segmenter = RomanizationSegmenter::pinyin();
    c.bench_function("pinyin_segmentation", |b| {
        b.iter(|| segmenter.segment(black_box("zhonghuarenmingongheguo nǚ ér lv4shi1")));
    });
}

/// Benchmark query building for each script
fn bench_query_building(c: &mut Criterion) {
    let builder = QueryBuilder::new();
    let queries = [
        ("simplified", SearchQuery::Simplified("中华人民".to_string())),
        ("jyutping", SearchQuery::Jyutping(random_jyutping(6))),
        ("pinyin", SearchQuery::Pinyin("zhong1hua2renmin".to_string())),
        ("english", SearchQuery::English("people's republic".to_string())),
    ];

    let mut group = c.benchmark_group("query_building");
    for (name, query) in queries.iter() {
        group.bench_with_input(BenchmarkId::from_parameter(name), query, |b, query| {
            b.iter(|| builder.build(black_box(query)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_segmentation, bench_pinyin_segmentation, bench_query_building);
criterion_main!(benches);
