use criterion::{Criterion, criterion_group, criterion_main};
use repconv_core::{ConvertConfig, convert_structure, convert_to_csv};
use std::hint::black_box;

fn synthetic_report(blocks: usize, fields: usize) -> String {
    let mut text = String::from("# synthetic report\n");
    for i in 0..blocks {
        text.push_str(&format!("> rep {}.{}\n", i / 10, i % 10));
        for j in 0..fields {
            text.push_str(&format!("** Field {j}\nvalue-{i}-{j} # note\n"));
        }
        text.push_str("> ----\n");
    }
    text
}

fn bench_convert(c: &mut Criterion) {
    let config = ConvertConfig::default();
    let report = synthetic_report(1000, 12);

    c.bench_function("csv_1000_blocks", |b| {
        b.iter(|| {
            let mut out = Vec::with_capacity(report.len());
            convert_to_csv(black_box(&report), &config, &mut out).unwrap();
            out
        });
    });

    c.bench_function("structure_1000_blocks", |b| {
        b.iter(|| {
            let mut out = Vec::with_capacity(report.len());
            convert_structure(black_box(&report), &config, &mut out).unwrap();
            out
        });
    });
}

criterion_group!(benches, bench_convert);
criterion_main!(benches);
