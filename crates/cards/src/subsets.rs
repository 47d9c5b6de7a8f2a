// Copyright (C) 2025 Thirteen developers
// SPDX-License-Identifier: Apache-2.0

//! Index based k-subsets enumeration.
//!
//! Subsets are generated as slices of increasing positions into a cards slice
//! so that callers can map them to cards, bit masks, or precomputed tables
//! without allocating. Every k-subset of `0..n` has a rank in colex order and
//! enumeration can start from any rank, which allows splitting the subsets
//! among tasks.

/// Largest set size supported.
pub const MAX_N: usize = 52;

/// Largest subset size supported.
pub const MAX_K: usize = 13;

/// Creates table for nck(n, k) for n <= 52 and k <= 13.
const fn make_nck() -> [[u64; MAX_K + 1]; MAX_N + 1] {
    let mut t = [[0u64; MAX_K + 1]; MAX_N + 1];
    let mut n = 0;

    while n <= MAX_N {
        // base case nck(n, 0) = 1
        t[n][0] = 1;

        let mut k = 1;
        while k <= MAX_K && k <= n {
            // nck(n, k) = nck(n-1, k-1) + nck(n-1, k)
            t[n][k] = t[n - 1][k - 1] + t[n - 1][k];
            k += 1;
        }

        n += 1;
    }

    t
}

const NCKS: [[u64; MAX_K + 1]; MAX_N + 1] = make_nck();

/// Returns the binomial coefficient for n choose k.
#[inline]
pub fn nck(n: usize, k: usize) -> usize {
    assert!(n <= MAX_N, "n={n} must be 0 <= n <= {MAX_N}");
    assert!(k <= MAX_K, "k={k} must be 0 <= k <= {MAX_K}");
    NCKS[n][k] as usize
}

/// Uses the combinatorial number system to convert n to a
/// k-combination (see Theorem L pg. 260 Knuth 4a).
///
/// The first k positions of the returned array are in increasing order.
pub fn nth_ksubset(mut n: usize, k: usize) -> [usize; MAX_K] {
    assert!(k <= MAX_K);

    let mut out = [0; MAX_K];
    for k in (0..k).rev() {
        let mut c = k;
        while nck(c, k + 1) <= n {
            c += 1;
        }

        c = c.saturating_sub(1);
        out[k] = c;

        n = n.saturating_sub(nck(c, k + 1));
    }

    out
}

/// Calls the given closure for count k-subsets of `0..n` starting from the
/// nth k-subset, stops early when the last subset is reached.
pub fn for_each_ksubset<F>(n: usize, k: usize, nth: usize, count: usize, mut f: F)
where
    F: FnMut(&[usize]),
{
    assert!(1 <= k && k <= n, "1 <= k={k} <= n={n}");

    if count == 0 || nth >= nck(n, k) {
        return;
    }

    // Algorithm L from TAOCP 4a, c[k + 1] = n and c[k + 2] = 0 are sentinels.
    let mut c = vec![0usize; k + 3];

    let ks = nth_ksubset(nth, k);
    c[1..=k].copy_from_slice(&ks[..k]);
    c[k + 1] = n;

    let mut counter = 1;
    loop {
        f(&c[1..=k]);

        counter += 1;
        if counter > count {
            break;
        }

        let mut j = 1;
        while c[j] + 1 == c[j + 1] {
            c[j] = j - 1;
            j += 1;
        }

        if j > k {
            break;
        }

        c[j] += 1;
    }
}

/// Splits the k-subsets of `0..n` into `parts` contiguous `(nth, count)`
/// ranges, the last range may be shorter or empty.
pub fn split_ranges(n: usize, k: usize, parts: usize) -> Vec<(usize, usize)> {
    assert!(parts > 0);

    let total = nck(n, k);
    let per_part = total.div_ceil(parts);

    (0..parts)
        .map(|part| {
            let start = (part * per_part).min(total);
            let end = (start + per_part).min(total);
            (start, end - start)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;

    #[test]
    fn test_nck() {
        // For n < k = 0
        assert_eq!(nck(2, 3), 0);

        [1, 52, 1326, 22100, 270725, 2598960, 20358520, 133784560]
            .into_iter()
            .enumerate()
            .for_each(|(k, v)| assert_eq!(nck(52, k), v));

        [1, 13, 78, 286, 715, 1287, 1716, 1716, 1287, 715, 286, 78, 13, 1]
            .into_iter()
            .enumerate()
            .for_each(|(k, v)| assert_eq!(nck(13, k), v));

        [1, 8, 28, 56, 70, 56, 28, 8, 1, 0, 0, 0, 0, 0]
            .into_iter()
            .enumerate()
            .for_each(|(k, v)| assert_eq!(nck(8, k), v));

        assert_eq!(nck(52, 13), 635_013_559_600);
        assert_eq!(nck(0, 0), 1);
    }

    #[test]
    fn test_nth_ksubset() {
        for (n, k) in [(13, 5), (13, 3), (8, 5), (52, 2)] {
            let mut counter = 0;
            let mut seen = HashSet::default();
            for_each_ksubset(n, k, 0, nck(n, k), |s| {
                assert!(s.windows(2).all(|w| w[0] < w[1]));
                assert!(s.iter().all(|&i| i < n));

                let ks = nth_ksubset(counter, k);
                assert_eq!(s, &ks[..k]);

                seen.insert(s.to_vec());
                counter += 1;
            });

            assert_eq!(counter, nck(n, k));
            assert_eq!(seen.len(), nck(n, k));
        }
    }

    #[test]
    fn test_for_each_ksubset_from_nth() {
        // Start from half way.
        let mut counter = 0;
        let nth = nck(13, 5) / 2;
        for_each_ksubset(13, 5, nth, nth, |s| {
            let ks = nth_ksubset(nth + counter, 5);
            assert_eq!(s, &ks[..5]);
            counter += 1;
        });
        assert_eq!(counter, nth);

        // Count past the end stops at the last subset.
        counter = 0;
        for_each_ksubset(8, 5, 50, 100, |_| counter += 1);
        assert_eq!(counter, 6);

        counter = 0;
        for_each_ksubset(8, 5, 56, 10, |_| counter += 1);
        assert_eq!(counter, 0);
    }

    #[test]
    fn test_split_ranges() {
        let ranges = split_ranges(13, 5, 4);
        assert_eq!(ranges.len(), 4);
        assert_eq!(ranges.iter().map(|r| r.1).sum::<usize>(), 1287);

        let mut seen = HashSet::default();
        for (nth, count) in ranges {
            for_each_ksubset(13, 5, nth, count, |s| {
                assert!(seen.insert(s.to_vec()));
            });
        }
        assert_eq!(seen.len(), 1287);

        // More parts than subsets.
        let ranges = split_ranges(4, 3, 8);
        assert_eq!(ranges.iter().map(|r| r.1).sum::<usize>(), 4);
    }
}
