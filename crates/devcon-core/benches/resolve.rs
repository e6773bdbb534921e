//! Benchmarks for tokenizing and resolving command lines.

use criterion::{Criterion, criterion_group, criterion_main};
use devcon_core::{Console, LogHost, Param, ValueType, tokenize};

fn console() -> Console {
    let mut console = Console::new(LogHost);
    console.register_command("tp", vec![], |_| Ok(()), None, None);
    console.register_command(
        "tp",
        vec![Param::required("pos", ValueType::Vec3)],
        |_| Ok(()),
        None,
        None,
    );
    console.register_command(
        "tp",
        vec![
            Param::required("who", ValueType::Str),
            Param::required("pos", ValueType::Vec3),
            Param::optional("instant", ValueType::Bool, true),
        ],
        |_| Ok(()),
        None,
        None,
    );
    console
}

fn bench_tokenize(c: &mut Criterion) {
    c.bench_function("tokenize_mixed", |b| {
        b.iter(|| tokenize(r#"tp "player one" (1.5, 2, -3) false"#));
    });
}

fn bench_resolve(c: &mut Criterion) {
    let console = console();
    let mut group = c.benchmark_group("resolve");

    group.bench_function("first_overload", |b| {
        b.iter(|| console.registry().resolve::<&str>("tp", &[]).is_ok());
    });
    group.bench_function("third_overload", |b| {
        b.iter(|| {
            console
                .registry()
                .resolve("tp", &["player", "(1, 2, 3)", "false"])
                .is_ok()
        });
    });
    group.bench_function("submit", |b| {
        b.iter(|| console.submit(r#"tp "player one" (1.5, 2, -3)"#).is_ok());
    });

    group.finish();
}

criterion_group!(benches, bench_tokenize, bench_resolve);
criterion_main!(benches);
