use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use jslit::{escape, escape_with_options, EscapeOptions, JsMap, JsValue};

fn ascii_text(len: usize) -> String {
    "The quick brown fox jumps over the lazy dog. "
        .chars()
        .cycle()
        .take(len)
        .collect()
}

fn unicode_text(len: usize) -> String {
    "Ich ♥ Bücher — 𝌆💩 “quotes” \0\t\n "
        .chars()
        .cycle()
        .take(len)
        .collect()
}

fn nested_value(users: usize) -> JsValue {
    let entries = (0..users)
        .map(|i| {
            let mut user = JsMap::new();
            user.insert("id".to_string(), JsValue::from(i as i64));
            user.insert("name".to_string(), JsValue::from(format!("user-{i}")));
            user.insert(
                "tags".to_string(),
                JsValue::Array(vec![JsValue::from("a"), JsValue::from("b")]),
            );
            JsValue::Object(user)
        })
        .collect();
    JsValue::Array(entries)
}

fn benchmark_escape_ascii(c: &mut Criterion) {
    let value = JsValue::from(ascii_text(4096));

    c.bench_function("escape_ascii_string", |b| {
        b.iter(|| escape(black_box(&value)))
    });
}

fn benchmark_escape_unicode(c: &mut Criterion) {
    let value = JsValue::from(unicode_text(4096));

    c.bench_function("escape_unicode_string", |b| {
        b.iter(|| escape(black_box(&value)))
    });
}

fn benchmark_escape_nested(c: &mut Criterion) {
    let mut group = c.benchmark_group("escape_nested");

    for size in [10, 100, 1000].iter() {
        let value = nested_value(*size);

        group.bench_with_input(BenchmarkId::new("compact", size), &value, |b, value| {
            b.iter(|| escape(black_box(value)));
        });

        group.bench_with_input(BenchmarkId::new("indented", size), &value, |b, value| {
            let options = EscapeOptions::new().with_compact(false);
            b.iter(|| escape_with_options(black_box(value), options.clone()));
        });
    }

    group.finish();
}

fn benchmark_json_mode(c: &mut Criterion) {
    let value = nested_value(100);

    c.bench_function("escape_json_mode", |b| {
        b.iter(|| escape_with_options(black_box(&value), EscapeOptions::json()))
    });
}

criterion_group!(
    benches,
    benchmark_escape_ascii,
    benchmark_escape_unicode,
    benchmark_escape_nested,
    benchmark_json_mode
);
criterion_main!(benches);
