use criterion::{black_box, criterion_group, criterion_main, Criterion};
use recase::{split_words, Case, Config, Converter};

const IDENTIFIERS: &[&str] = &[
    "HTTPServer",
    "getHTTPResponseCode",
    "user_name",
    "SCREAMING-KEBAB-CASE",
    "wordWith01number",
    "用户のId",
];

fn bench_split(c: &mut Criterion) {
    c.bench_function("split_words", |b| {
        b.iter(|| {
            for id in IDENTIFIERS {
                black_box(split_words(black_box(id)));
            }
        })
    });
}

fn bench_cases(c: &mut Criterion) {
    let mut group = c.benchmark_group("apply");
    for case in Case::ALL {
        group.bench_function(case.name(), |b| {
            b.iter(|| {
                for id in IDENTIFIERS {
                    black_box(case.apply(black_box(id)));
                }
            })
        });
    }
    group.finish();
}

fn bench_convert_text(c: &mut Criterion) {
    let text = IDENTIFIERS.repeat(2000).join("\n");
    let converter = Converter::new(&Config {
        case: Case::Camel,
        ..Default::default()
    });
    c.bench_function("convert_text", |b| {
        b.iter(|| black_box(converter.convert_text(black_box(&text))))
    });
}

criterion_group!(benches, bench_split, bench_cases, bench_convert_text);
criterion_main!(benches);
