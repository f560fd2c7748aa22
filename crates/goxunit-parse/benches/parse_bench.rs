use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use goxunit_parse::classify::{classify_gocheck, classify_gotest};
use goxunit_parse::{ParseOptions, parse_gocheck, parse_gotest};

/// Build go test output with `packages` packages of `tests` tests each
fn gotest_input(packages: usize, tests: usize) -> String {
    let mut out = String::new();
    for p in 0..packages {
        for t in 0..tests {
            out.push_str(&format!("=== RUN TestCase{t}\n"));
            if t % 5 == 0 {
                out.push_str(&format!("    case_test.go:{t}: value mismatch\n"));
                out.push_str(&format!("--- FAIL: TestCase{t} (0.01s)\n"));
            } else {
                out.push_str(&format!("--- PASS: TestCase{t} (0.00s)\n"));
            }
        }
        out.push_str(&format!("FAIL\tgithub.com/acme/pkg{p}\t0.123s\n"));
    }
    out
}

/// Build gocheck output with fixtures around every test
fn gocheck_input(suites: usize, tests: usize) -> String {
    let mut out = String::new();
    for s in 0..suites {
        for t in 0..tests {
            out.push_str(&format!("START: s_test.go:{t}: Suite{s}.TestCase{t}\n"));
            out.push_str("START: s_test.go:1: Suite.SetUpTest\nPASS: s_test.go:1: Suite.SetUpTest\t0.000s\n");
            out.push_str(&format!("PASS: s_test.go:{t}: Suite{s}.TestCase{t}\t0.001s\n\n"));
        }
    }
    out
}

fn classify_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");

    group.bench_function("gotest_end_line", |b| {
        b.iter(|| classify_gotest("--- FAIL: TestSubFail (0.00 seconds)"))
    });
    group.bench_function("gotest_output_line", |b| {
        b.iter(|| classify_gotest("    mmath_test.go:19: 1 - 1 = 0, expected 1"))
    });
    group.bench_function("gocheck_end_line", |b| {
        b.iter(|| classify_gocheck("PASS: mmath_test.go:16: MySuite.TestAdd\t0.000s"))
    });

    group.finish();
}

fn parse_benchmarks(c: &mut Criterion) {
    let options = ParseOptions::default();
    let mut group = c.benchmark_group("parse");

    for size in [10, 100, 1000] {
        let input = gotest_input(4, size);
        group.bench_with_input(BenchmarkId::new("gotest", size), &input, |b, input| {
            b.iter(|| parse_gotest(input.as_bytes(), &options).expect("parse failed"))
        });

        let input = gocheck_input(4, size);
        group.bench_with_input(BenchmarkId::new("gocheck", size), &input, |b, input| {
            b.iter(|| parse_gocheck(input.as_bytes(), &options).expect("parse failed"))
        });
    }

    group.finish();
}

criterion_group!(benches, classify_benchmarks, parse_benchmarks);
criterion_main!(benches);
