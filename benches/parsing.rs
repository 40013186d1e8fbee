//! Performance benchmarks for listmark
//!
//! Run with: cargo bench

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

/// Sample list documents of various shapes
mod samples {
    pub const TINY: &str = "- Hello";

    pub const SMALL: &str = "1. One\n2. Two\n3. Three\n- Four\n- Five\n";

    pub const NESTED: &str = r#"- A
    - A1
        - A11
            - A111
        - A12
            - A121
        - A13
    - A2
- B
    1. B1
    2. B2
       continued text for B2
- C
"#;

    /// Flat list with `n` items
    pub fn flat(n: usize) -> String {
        (1..=n).map(|i| format!("{i}. Item number {i}\n")).collect()
    }

    /// Mixed bullets, forcing a homogeneity split on every line
    pub fn alternating(n: usize) -> String {
        (0..n)
            .map(|i| if i % 2 == 0 { "- dash\n" } else { "* star\n" })
            .collect()
    }

    /// Repeated nested sections
    pub fn large() -> String {
        NESTED.repeat(200)
    }

    /// Staircase of `depth` levels, one more space each
    pub fn pathological_nested(depth: usize) -> String {
        (0..depth).map(|i| format!("{}- deep\n", " ".repeat(i))).collect()
    }

    /// Many malformed markers merged into one item
    pub fn malformed(n: usize) -> String {
        let mut doc = String::from("- start\n");
        for _ in 0..n {
            doc.push_str("-nope 1234567890. 3!. nope\n");
        }
        doc
    }
}

fn bench_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");

    for (name, input) in [
        ("tiny", samples::TINY),
        ("small", samples::SMALL),
        ("nested", samples::NESTED),
    ] {
        group.throughput(Throughput::Bytes(input.len() as u64));
        group.bench_function(name, |b| {
            b.iter(|| listmark::render_lists(black_box(input)))
        });
    }

    let large = samples::large();
    group.throughput(Throughput::Bytes(large.len() as u64));
    group.bench_function("large", |b| {
        b.iter(|| listmark::render_lists(black_box(&large)))
    });

    group.finish();
}

fn bench_shapes(c: &mut Criterion) {
    let mut group = c.benchmark_group("shapes");

    for n in [100, 1_000, 10_000] {
        let flat = samples::flat(n);
        group.throughput(Throughput::Bytes(flat.len() as u64));
        group.bench_with_input(BenchmarkId::new("flat", n), &flat, |b, input| {
            b.iter(|| listmark::render_lists(black_box(input)))
        });

        let alternating = samples::alternating(n);
        group.throughput(Throughput::Bytes(alternating.len() as u64));
        group.bench_with_input(BenchmarkId::new("alternating", n), &alternating, |b, input| {
            b.iter(|| listmark::render_lists(black_box(input)))
        });
    }

    group.finish();
}

fn bench_pathological(c: &mut Criterion) {
    let mut group = c.benchmark_group("pathological");
    group.sample_size(20); // Fewer samples for slow cases

    let nested = samples::pathological_nested(2_000);
    group.throughput(Throughput::Bytes(nested.len() as u64));
    group.bench_function("deep_nesting", |b| {
        b.iter(|| listmark::render_lists(black_box(&nested)))
    });

    let malformed = samples::malformed(5_000);
    group.throughput(Throughput::Bytes(malformed.len() as u64));
    group.bench_function("malformed_markers", |b| {
        b.iter(|| listmark::render_lists(black_box(&malformed)))
    });

    group.finish();
}

fn bench_escaping(c: &mut Criterion) {
    let mut group = c.benchmark_group("escaping");

    let options = listmark::Options {
        escape_text: true,
        ..listmark::Options::default()
    };
    let html_heavy = "- <b>bold</b> & \"quoted\" text\n".repeat(500);
    group.throughput(Throughput::Bytes(html_heavy.len() as u64));
    group.bench_function("verbatim", |b| {
        b.iter(|| listmark::render_lists(black_box(&html_heavy)))
    });
    group.bench_function("escaped", |b| {
        b.iter(|| listmark::render_lists_with_options(black_box(&html_heavy), &options))
    });

    group.finish();
}

fn bench_buffer_reuse(c: &mut Criterion) {
    let mut group = c.benchmark_group("buffer_reuse");

    let input = samples::large();
    group.throughput(Throughput::Bytes(input.len() as u64));

    group.bench_function("without_reuse", |b| {
        b.iter(|| listmark::to_html(black_box(&input)))
    });

    group.bench_function("with_reuse", |b| {
        let mut buffer = Vec::with_capacity(input.len() * 2);
        b.iter(|| {
            listmark::to_html_into(black_box(&input), &mut buffer);
            black_box(&buffer);
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_parsing,
    bench_shapes,
    bench_pathological,
    bench_escaping,
    bench_buffer_reuse
);
criterion_main!(benches);
