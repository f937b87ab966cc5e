//! A set of patterns useful for testing and benchmarking sorting
//! algorithms. Currently limited to i32 values.

use std::sync::atomic::{AtomicBool, Ordering};

use once_cell::sync::OnceCell;
use rand::prelude::*;

// --- Public ---

pub fn random(size: usize) -> Vec<i32> {
    //     .
    // : . : :
    // :.:::.::

    random_vec(size)
}

pub fn random_uniform<R>(size: usize, range: R) -> Vec<i32>
where
    R: Into<rand::distributions::Uniform<i32>>,
{
    // :.:.:.::
    let mut rng = new_seed();

    let dist: rand::distributions::Uniform<i32> = range.into();

    (0..size).map(|_| dist.sample(&mut rng)).collect()
}

pub fn all_equal(size: usize) -> Vec<i32> {
    // ......
    // ::::::

    (0..size).map(|_| 66).collect::<Vec<_>>()
}

pub fn ascending(size: usize) -> Vec<i32> {
    //     .:
    //   .:::
    // .:::::

    (0..size as i32).collect::<Vec<_>>()
}

pub fn descending(size: usize) -> Vec<i32> {
    // :.
    // :::.
    // :::::.

    (0..size as i32).rev().collect::<Vec<_>>()
}

pub fn ascending_saw(size: usize, saw_count: usize) -> Vec<i32> {
    //   .:  .:
    // .:::.:::

    if size == 0 {
        return Vec::new();
    }

    let mut vals = random_vec(size);
    let chunks_size = size / saw_count.max(1);

    for chunk in vals.chunks_mut(chunks_size) {
        chunk.sort();
    }

    vals
}

pub fn descending_saw(size: usize, saw_count: usize) -> Vec<i32> {
    // :.  :.
    // :::.:::.

    if size == 0 {
        return Vec::new();
    }

    let mut vals = random_vec(size);
    let chunks_size = size / saw_count.max(1);

    for chunk in vals.chunks_mut(chunks_size) {
        chunk.sort_by_key(|&e| std::cmp::Reverse(e));
    }

    vals
}

pub fn saw_mixed(size: usize, saw_count: usize) -> Vec<i32> {
    // :.  :.    .::.    .:
    // :::.:::..::::::..:::

    if size == 0 {
        return Vec::new();
    }

    let mut vals = random_vec(size);
    let chunks_size = size / saw_count.max(1);
    let saw_directions = random_uniform((size / chunks_size) + 1, 0..=1);

    for (i, chunk) in vals.chunks_mut(chunks_size).enumerate() {
        if saw_directions[i] == 0 {
            chunk.sort();
        } else if saw_directions[i] == 1 {
            chunk.sort_by_key(|&e| std::cmp::Reverse(e));
        } else {
            unreachable!();
        }
    }

    vals
}

pub fn pipe_organ(size: usize) -> Vec<i32> {
    //   .:.
    // .:::::.

    let mut vals = random_vec(size);

    let first_half = &mut vals[0..(size / 2)];
    first_half.sort();

    let second_half = &mut vals[(size / 2)..size];
    second_half.sort_by_key(|&e| std::cmp::Reverse(e));

    vals
}

pub fn median_of_3_killer(size: usize) -> Vec<i32> {
    // 1 9 3 11 5 13 7 15 2 4 6 8 ..
    //
    // Musser's adversarial permutation for median-of-three pivot
    // selection: quicksort steered by first/middle/last medians degrades
    // to quadratic scanning on it. The core construction needs a length
    // divisible by four; any remainder is appended as an ascending tail.

    let m = size - size % 4;
    let k = m / 2;

    let mut vals = Vec::with_capacity(size);
    for i in 1..=k {
        if i % 2 == 1 {
            vals.push(i as i32);
        } else {
            vals.push((k + i - 1) as i32);
        }
    }
    for i in 1..=k {
        vals.push((2 * i) as i32);
    }
    for i in m..size {
        vals.push(i as i32 + 1);
    }

    vals
}

static USE_FIXED_SEED: AtomicBool = AtomicBool::new(true);

pub fn disable_fixed_seed() {
    USE_FIXED_SEED.store(false, Ordering::Release);
}

pub fn random_init_seed() -> u64 {
    if USE_FIXED_SEED.load(Ordering::Acquire) {
        static SEED: OnceCell<u64> = OnceCell::new();
        *SEED.get_or_init(|| -> u64 { thread_rng().gen() })
    } else {
        thread_rng().gen()
    }
}

// --- Private ---

fn new_seed() -> StdRng {
    // Random seed, but the tests print it for repeatability.
    rand::SeedableRng::seed_from_u64(random_init_seed())
}

fn random_vec(size: usize) -> Vec<i32> {
    let mut rng = new_seed();

    (0..size).map(|_| rng.gen::<i32>()).collect()
}
