//! Bounded-knapsack table over whole budget units.
//!
//! `best[i][c]` is the best yield reachable with options `i..` and capacity `c`.
//! Filling runs back to front so reconstruction can walk forward and take, per
//! option, the largest count that still reaches the optimum: the same
//! lexicographically greatest tie-break the exhaustive search produces.
//!
//! A row is filled in `O(cap)` regardless of multiplicity. Capacities are
//! split by residue modulo the option's cost; along one residue class
//! `c = r + j*w` the recurrence is a sliding-window maximum of
//! `next[r + t*w] - t*y` over `t in [j - m, j]`, kept in a monotone deque.

use std::collections::VecDeque;

use super::model::ResourceOption;

/// `None` when some cost is fractional or the table would exceed `cell_limit`.
pub(super) fn solve(
    options: &[ResourceOption],
    budget: f64,
    tolerance: f64,
    cell_limit: usize,
) -> Option<Vec<u32>> {
    if options.iter().any(|o| o.cost().fract() != 0.0) {
        return None;
    }
    let rows = options.len() + 1;
    let cap_f = budget.floor();
    if cap_f + 1.0 > (cell_limit / rows) as f64 {
        return None;
    }
    let cap = cap_f as usize;
    let width = cap + 1;

    let weights: Vec<usize> = options.iter().map(|o| o.cost() as usize).collect();
    let mut best = vec![0.0_f64; rows * width];
    let mut window: VecDeque<(usize, f64)> = VecDeque::new();

    for i in (0..options.len()).rev() {
        let (w, y, m) = (weights[i], options[i].yields(), options[i].max_count() as usize);
        let (row, next) = best.split_at_mut((i + 1) * width);
        let row = &mut row[i * width..];
        let next = &next[..width];

        if w == 0 {
            for c in 0..width {
                row[c] = m as f64 * y + next[c];
            }
            continue;
        }
        if w > cap {
            row.copy_from_slice(next);
            continue;
        }

        for r in 0..w {
            window.clear();
            let mut j = 0;
            let mut c = r;
            while c < width {
                let g = next[c] - j as f64 * y;
                while window.back().is_some_and(|&(_, v)| v <= g) {
                    window.pop_back();
                }
                window.push_back((j, g));
                while window.front().is_some_and(|&(t, _)| j - t > m) {
                    window.pop_front();
                }
                let (_, top) = window[0];
                row[c] = top + j as f64 * y;
                j += 1;
                c += w;
            }
        }
    }

    let mut counts = vec![0u32; options.len()];
    let mut c = cap;
    for (i, opt) in options.iter().enumerate() {
        let (w, y, m) = (weights[i], opt.yields(), opt.max_count());
        if w == 0 {
            counts[i] = m;
            continue;
        }
        let next = &best[(i + 1) * width..(i + 2) * width];
        let kmax = (c / w).min(m as usize);
        let value = |k: usize| k as f64 * y + next[c - k * w];
        let top = (0..=kmax).map(value).fold(f64::NEG_INFINITY, f64::max);
        let k = (0..=kmax).rev().find(|&k| value(k) >= top - tolerance).unwrap_or(0);
        counts[i] = k as u32;
        c -= k * w;
    }
    Some(counts)
}
