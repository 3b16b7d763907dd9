use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::io;
use tagprint::{args, format, formatf, print_to, Arg, Mode, Printer, Slice, SliceBuf};

fn benchmark_format_plain(c: &mut Criterion) {
    c.bench_function("format_plain_mixed", |b| {
        b.iter(|| format(black_box(&args!["id:", 12345, "ok:", true, "ratio:", 0.75])))
    });
}

fn benchmark_format_template(c: &mut Criterion) {
    c.bench_function("format_template", |b| {
        b.iter(|| formatf(black_box(&args!["user % logged in from % (% ms)", "alice", "10.0.0.1", 42])))
    });
}

fn benchmark_print_sink(c: &mut Criterion) {
    let mut group = c.benchmark_group("print_sink_args");

    for size in [1, 10, 100, 1000].iter() {
        let numbers: Vec<Arg<'_>> = (0..*size).map(|i: u32| Arg::from(i)).collect();
        group.bench_with_input(BenchmarkId::from_parameter(size), &numbers, |b, numbers| {
            b.iter(|| print_to(io::sink(), black_box(numbers)))
        });
    }

    group.finish();
}

fn benchmark_buffer_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("printer_buffer_size");
    let text = "lorem ipsum ".repeat(500);
    let args = args!["text: %", text.as_str(), u64::MAX];

    group.bench_function("64", |b| {
        b.iter(|| {
            let mut printer: Printer<_, 64> = Printer::new(io::sink());
            printer.print(black_box(&args), Mode::Template)
        })
    });
    group.bench_function("4096", |b| {
        b.iter(|| {
            let mut printer: Printer<_> = Printer::new(io::sink());
            printer.print(black_box(&args), Mode::Template)
        })
    });

    group.finish();
}

fn benchmark_string_growth(c: &mut Criterion) {
    let mut group = c.benchmark_group("string_building");
    let chunk = "0123456789abcdef";

    group.bench_function("fresh_buffer", |b| {
        b.iter(|| {
            let mut buf = SliceBuf::new();
            for _ in 0..256 {
                buf.write(black_box(chunk)).unwrap();
            }
            buf
        })
    });
    group.bench_function("reused_buffer", |b| {
        let mut buf = SliceBuf::with_capacity(4096).unwrap();
        b.iter(|| {
            buf.clear();
            for _ in 0..256 {
                buf.write(black_box(chunk)).unwrap();
            }
        })
    });

    group.finish();
}

fn benchmark_slices(c: &mut Criterion) {
    let line = "key=value;".repeat(200);

    c.bench_function("split_iter", |b| {
        b.iter(|| Slice::from(black_box(line.as_str())).split_iter(";").count())
    });
    c.bench_function("index_of_late_match", |b| {
        let hay = format!("{}needle", "x".repeat(4000));
        b.iter(|| Slice::from(black_box(hay.as_str())).index_of("needle"))
    });
}

criterion_group!(
    benches,
    benchmark_format_plain,
    benchmark_format_template,
    benchmark_print_sink,
    benchmark_buffer_size,
    benchmark_string_growth,
    benchmark_slices
);
criterion_main!(benches);
