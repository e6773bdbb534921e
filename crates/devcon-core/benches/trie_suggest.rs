//! Benchmarks for trie autocomplete queries.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use devcon_core::{SuggestionBuffer, Trie};

fn command_names(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("cmd_{i}")).collect()
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("trie_insert");

    for n in [100, 1_000, 10_000] {
        let names = command_names(n);
        let label = format!("{n}");

        group.bench_function(BenchmarkId::new("insert", &label), |b| {
            b.iter(|| Trie::from_words(&names));
        });
    }

    group.finish();
}

fn bench_suggest(c: &mut Criterion) {
    let mut group = c.benchmark_group("trie_suggest");

    for n in [100, 1_000, 10_000] {
        let trie = Trie::from_words(command_names(n));
        let label = format!("{n}");

        group.bench_function(BenchmarkId::new("unbounded", &label), |b| {
            b.iter(|| trie.suggest("cmd_1", false));
        });

        let mut buf = SuggestionBuffer::new(5);
        group.bench_function(BenchmarkId::new("bounded_5", &label), |b| {
            b.iter(|| trie.suggest_bounded("cmd_1", &mut buf, false));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_insert, bench_suggest);
criterion_main!(benches);
