// std imports
use std::{alloc::System, hint::black_box};

// third-party imports
use criterion::{Criterion, criterion_group, criterion_main};
use stats_alloc::{INSTRUMENTED_SYSTEM, Region, StatsAlloc};
use wildmatch::WildMatch;

// local imports
use wildcompare::{matches_bytes, matches_chars, matches_str};

#[global_allocator]
static GA: &StatsAlloc<System> = &INSTRUMENTED_SYSTEM;

fn benchmark(c: &mut Criterion) {
    let mut c = c.benchmark_group("wildcompare");

    let mut c1 = None;
    let mut n1 = 0;
    c.bench_function("bytes-short-match", |b| {
        let reg = Region::new(&GA);
        b.iter(|| {
            assert_eq!(matches_bytes(black_box(b"_*"), black_box(b"_TEST")), true);
            n1 += 1;
        });
        c1 = Some(reg.change());
    });
    println!("allocations at 1 ({:?} iterations): {:#?}", n1, c1);

    c.bench_function("bytes-long-match", |b| {
        b.iter(|| {
            assert_eq!(
                matches_bytes(black_box(b"_*"), black_box(b"_TEST_SOME_VERY_VERY_LONG_NAME")),
                true
            );
        });
    });
    c.bench_function("bytes-long-non-match", |b| {
        b.iter(|| {
            assert_eq!(
                matches_bytes(black_box(b"_*"), black_box(b"TEST_SOME_VERY_VERY_LONG_NAME")),
                false
            );
        });
    });

    let pattern = "a*a*a*a*a*a*aa*aaa*a*a*b".as_bytes();
    let subject = "a".repeat(91) + "b";
    c.bench_function("bytes-adversarial-match", |b| {
        b.iter(|| {
            assert_eq!(
                matches_bytes(black_box(pattern), black_box(subject.as_bytes())),
                true
            );
        });
    });

    let pattern: Vec<char> = "*issip*ss*".chars().collect();
    let subject: Vec<char> = "mississipissippi".chars().collect();
    let mut c2 = None;
    let mut n2 = 0;
    c.bench_function("chars-backtracking-match", |b| {
        let reg = Region::new(&GA);
        b.iter(|| {
            assert_eq!(matches_chars(black_box(&pattern), black_box(&subject)), true);
            n2 += 1;
        });
        c2 = Some(reg.change());
    });
    println!("allocations at 2 ({:?} iterations): {:#?}", n2, c2);

    c.bench_function("str-unicode-match", |b| {
        b.iter(|| {
            assert_eq!(
                matches_str(black_box("?ؿꜪ*ꜿ"), black_box("ḪؿꜪἪꜿ")),
                true
            );
        });
    });

    // Baseline for comparison.
    let pattern = WildMatch::new("*issip*ss*");
    c.bench_function("wildmatch-backtracking-match", |b| {
        b.iter(|| {
            assert_eq!(black_box(&pattern).matches(black_box("mississipissippi")), true);
        });
    });
}

criterion_group!(benches, benchmark);
criterion_main!(benches);
