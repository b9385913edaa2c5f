use std::fmt::Write;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use council_lists::specs::lists::{parse_lists, ListFormat};

/// 20 lists of 82 members, roughly a real election.
fn synthetic(format: ListFormat) -> String {
    let mut text = String::new();
    for l in 1..=20 {
        match format {
            ListFormat::Plain => { let _ = writeln!(text, "Sąrašas numeris {l}"); }
            ListFormat::Numbered => { let _ = writeln!(text, "Nr. {l}. Sąrašas numeris {l}"); }
        }
        for m in 1..=82 {
            let _ = writeln!(text, "{m}. Vardenis{m} Pavardenis{l}");
        }
        text.push('\n');
    }
    text
}

fn bench_parse_lists(c: &mut Criterion) {
    let plain = synthetic(ListFormat::Plain);
    let numbered = synthetic(ListFormat::Numbered);

    c.bench_function("parse_lists plain", |b| {
        b.iter(|| parse_lists(black_box(&plain), ListFormat::Plain))
    });
    c.bench_function("parse_lists numbered", |b| {
        b.iter(|| parse_lists(black_box(&numbered), ListFormat::Numbered))
    });
}

criterion_group!(benches, bench_parse_lists);
criterion_main!(benches);
