use std::env;
use std::fmt::Debug;

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

use tandemsort::patterns;

#[inline(never)]
fn bench_sort<T: Ord + Debug>(
    c: &mut Criterion,
    test_size: usize,
    transform_name: &str,
    transform: &fn(Vec<i32>) -> Vec<T>,
    pattern_name: &str,
    pattern_provider: &fn(usize) -> Vec<i32>,
    bench_name: &str,
    sort_func: impl Fn(&mut [T]),
) {
    let batch_size = if test_size > 30 {
        BatchSize::LargeInput
    } else {
        BatchSize::SmallInput
    };

    c.bench_function(
        &format!("{bench_name}-{transform_name}-{pattern_name}-{test_size}"),
        |b| {
            b.iter_batched(
                || transform(pattern_provider(test_size)),
                |mut test_data| sort_func(black_box(test_data.as_mut_slice())),
                batch_size,
            )
        },
    );
}

#[inline(never)]
fn bench_sort_pairs<T: Ord + Debug>(
    c: &mut Criterion,
    test_size: usize,
    transform_name: &str,
    transform: &fn(Vec<i32>) -> Vec<T>,
    pattern_name: &str,
    pattern_provider: &fn(usize) -> Vec<i32>,
) {
    let batch_size = if test_size > 30 {
        BatchSize::LargeInput
    } else {
        BatchSize::SmallInput
    };

    c.bench_function(
        &format!("tandemsort_pairs-{transform_name}-{pattern_name}-{test_size}"),
        |b| {
            b.iter_batched(
                || {
                    let keys = transform(pattern_provider(test_size));
                    let values: Vec<usize> = (0..keys.len()).collect();

                    (keys, values)
                },
                |(mut keys, mut values)| {
                    tandemsort::sort_pairs(
                        black_box(keys.as_mut_slice()),
                        black_box(values.as_mut_slice()),
                    )
                    .unwrap()
                },
                batch_size,
            )
        },
    );
}

fn measure_comp_count(name: &str, test_size: usize, instrumented_sort_func: impl Fn() -> u64) {
    // Measure how many comparisons are performed by a specific input
    // combination, instead of wall clock time.
    let run_count: usize = if test_size <= 20 {
        100_000
    } else if test_size < 10_000 {
        3000
    } else {
        1000
    };

    let mut comp_count = 0u64;
    for _ in 0..run_count {
        comp_count += instrumented_sort_func();
    }

    // If there is on average less than a single comparison this will be wrong.
    // But that's such a corner case I don't care about it.
    let total = comp_count / (run_count as u64);
    println!("{name}: mean comparisons: {total}");
}

#[inline(never)]
fn bench_impl<T: Ord + Debug>(
    c: &mut Criterion,
    test_size: usize,
    transform_name: &str,
    transform: &fn(Vec<i32>) -> Vec<T>,
    pattern_name: &str,
    pattern_provider: &fn(usize) -> Vec<i32>,
) {
    if env::var("MEASURE_COMP").is_ok() {
        // For comparison counts the element type doesn't matter, so only
        // run the plain one.
        if transform_name == "i32" && test_size <= 100_000 {
            let name = format!("tandemsort-comp-{pattern_name}-{test_size}");

            measure_comp_count(&name, test_size, || {
                let mut test_data = transform(pattern_provider(test_size));
                let mut comp_count = 0u64;

                tandemsort::sort_by(black_box(test_data.as_mut_slice()), |a, b| {
                    comp_count += 1;

                    a.cmp(b)
                })
                .unwrap();

                comp_count
            });
        }
    } else {
        bench_sort(
            c,
            test_size,
            transform_name,
            transform,
            pattern_name,
            pattern_provider,
            "tandemsort",
            |test_data| tandemsort::sort(test_data).unwrap(),
        );

        bench_sort(
            c,
            test_size,
            transform_name,
            transform,
            pattern_name,
            pattern_provider,
            "rust_std_unstable",
            |test_data| test_data.sort_unstable(),
        );

        bench_sort_pairs(
            c,
            test_size,
            transform_name,
            transform,
            pattern_name,
            pattern_provider,
        );
    }
}

fn bench_patterns<T: Ord + Debug>(
    c: &mut Criterion,
    test_size: usize,
    transform_name: &str,
    transform: fn(Vec<i32>) -> Vec<T>,
) {
    if test_size > 100_000 && transform_name != "i32" {
        // These are just too expensive.
        return;
    }

    let pattern_providers: Vec<(&'static str, fn(usize) -> Vec<i32>)> = vec![
        ("random", patterns::random),
        ("random_dense", |size| {
            patterns::random_uniform(size, 0..=(((size as f64).log2().round()) as i32))
        }),
        ("random_binary", |size| {
            patterns::random_uniform(size, 0..=1)
        }),
        ("ascending", patterns::ascending),
        ("descending", patterns::descending),
        ("saws_long", |size| {
            patterns::saw_mixed(size, ((size as f64).log2().round()) as usize)
        }),
        ("saws_short", |size| {
            patterns::saw_mixed(size, (size as f64 / 22.0).round() as usize)
        }),
        ("pipe_organ", patterns::pipe_organ),
        ("median_of_3_killer", patterns::median_of_3_killer),
    ];

    for (pattern_name, pattern_provider) in pattern_providers.iter() {
        if test_size < 3 && *pattern_name != "random" {
            continue;
        }

        bench_impl(
            c,
            test_size,
            transform_name,
            &transform,
            pattern_name,
            pattern_provider,
        );
    }
}

fn ensure_true_random() {
    // Ensure that random vecs are actually different.
    let random_vec_a = patterns::random(5);
    let random_vec_b = patterns::random(5);

    assert_ne!(random_vec_a, random_vec_b);
}

fn criterion_benchmark(c: &mut Criterion) {
    let test_sizes = [
        0, 1, 2, 3, 5, 7, 8, 9, 11, 13, 15, 16, 17, 19, 20, 24, 28, 31, 36, 50, 101, 200, 500,
        1_000, 2_048, 10_000, 100_000, 1_000_000,
    ];

    patterns::disable_fixed_seed();
    ensure_true_random();

    for test_size in test_sizes {
        // Basic type often used to test sorting algorithms.
        bench_patterns(c, test_size, "i32", |values| values);

        // Common type for indices on 64-bit machines.
        bench_patterns(c, test_size, "u64", |values| {
            values
                .iter()
                .map(|val| -> u64 {
                    // Extends the value into the 64 bit range,
                    // while preserving input order.
                    let x = ((*val as i64) + (i32::MAX as i64) + 1) as u64;
                    x.checked_mul(i32::MAX as u64).unwrap()
                })
                .collect()
        });

        // Heap allocated type with indirect comparison.
        bench_patterns(c, test_size, "string", |values| {
            values
                .iter()
                .map(|val| format!("{:010}", val.saturating_abs()))
                .collect()
        });
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
