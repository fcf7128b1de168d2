use criterion::{criterion_group, criterion_main, Criterion};
use scrabble_engine::{evaluate, Lexicon, Query, Rack};

const WORDS: &[&str] = &[
    "af", "ah", "al", "aar", "aas", "bi", "bo", "bar", "bes", "bel", "belt",
];

fn bench_from_words() {
    let _lexicon = Lexicon::from_words(WORDS);
}

fn bench_search(c: &mut Criterion, name: &str, lexicon: &Lexicon, pool: &str, word_spec: &str) {
    let rack = Rack::from_pool(pool).unwrap();
    let spec = scrabble_engine::parse::parse_word_spec(word_spec).unwrap();
    let query = Query::new(rack, spec, vec![]).unwrap();
    c.bench_function(name, |b| {
        b.iter(|| evaluate(lexicon, &query, usize::MAX))
    });
}

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("lexicon.from_words", |b| b.iter(bench_from_words));

    let lexicon = Lexicon::from_words(WORDS);
    bench_search(c, "search.3_open_cells", &lexicon, "abel", "...");
    bench_search(c, "search.7_open_cells_anchored", &lexicon, "abel***", "/.......");
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
