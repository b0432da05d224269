// benches/parse.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use lit_sheet::core::csv::split_line;
use lit_sheet::fetch;

fn synthetic_sheet(rows: usize) -> String {
    let mut out = String::from("작품명,작가,갈래,교과서,대단원,소단원\n");
    for i in 0..rows {
        out.push_str(&format!(
            "\"작품 {i}, 개정판\",작가 {i},현대시,천재(김),{}.단원,({}) 소단원\n",
            i % 5 + 1,
            i % 3 + 1
        ));
    }
    out
}

fn bench_parse(c: &mut Criterion) {
    let sheet = synthetic_sheet(2_000);

    c.bench_function("split_line_quoted", |b| {
        let line = "\"고향, 그 쓸쓸함\",백석,현대시,\"비상(한)\",2.문학과 삶,(1) 서정";
        b.iter(|| split_line(black_box(line), ',').len())
    });

    c.bench_function("parse_sheet_2k_rows", |b| {
        b.iter(|| {
            let ds = fetch::parse_sheet(black_box(&sheet)).expect("parse synthetic sheet");
            black_box(ds.row_count())
        })
    });
}

criterion_group!(benches, bench_parse);
criterion_main!(benches);
