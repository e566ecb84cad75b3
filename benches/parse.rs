//! Benchmarks for argument parsing and normalization.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use owl_args::numeric::parse_int;
use owl_args::{ConfigParser, Configuration, MemoryLogger, ParserOptions, StaticDevices};
use std::hint::black_box;

/// Benchmark full parses of typical command lines.
fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    let devices = StaticDevices::with_count(4);
    let logger = MemoryLogger::new();
    let parser = ConfigParser::new(&devices, &logger)
        .with_options(ParserOptions::new().with_echo(false));

    let command_lines: [(&str, &[&str]); 3] = [
        ("defaults", &["gpuowl"]),
        ("steps", &["gpuowl", "-logstep", "5000", "-savestep", "12345", "-checkstep", "60000"]),
        (
            "everything",
            &[
                "gpuowl", "-logstep", "5000", "-uid", "alice/box1", "-supersafe", "-cl", "-O2",
                "-selftest", "-time", "kernels", "-legacy", "-device", "3",
            ],
        ),
    ];

    for (name, argv) in command_lines {
        group.bench_with_input(BenchmarkId::new("argv", name), &argv, |b, argv| {
            b.iter(|| black_box(parser.parse(black_box(argv.iter().copied()))))
        });
    }

    // Rejections log one line each; clear between runs so memory stays flat
    group.bench_function("unknown_flag", |b| {
        b.iter(|| {
            let outcome = parser.parse(black_box(["gpuowl", "-legacy", "-bogus"]));
            logger.clear();
            black_box(outcome)
        })
    });

    group.finish();
}

/// Benchmark the normalization pass on its own.
fn bench_normalize(c: &mut Criterion) {
    c.bench_function("normalize", |b| {
        let template = Configuration {
            log_step: 7,
            save_step: 1_000_003,
            check_step: 999,
            ..Configuration::default()
        };
        b.iter(|| {
            let mut config = black_box(template.clone());
            black_box(config.normalize());
            config
        })
    });
}

/// Benchmark atoi-style integer conversion.
fn bench_parse_int(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_int");
    for token in ["20000", "  -42", "12abc", "99999999999999999999999"] {
        group.bench_with_input(BenchmarkId::from_parameter(token), &token, |b, token| {
            b.iter(|| black_box(parse_int(black_box(token))))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_parse, bench_normalize, bench_parse_int);
criterion_main!(benches);
