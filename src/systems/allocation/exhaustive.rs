//! Depth-first branch-and-bound over multiplicities.
//!
//! Options are visited in caller order and, per option, multiplicities are
//! tried from the largest affordable count down to zero. Leaves are therefore
//! reached in lexicographically descending order of the count vector, and the
//! incumbent is only replaced by a strictly better yield: the first optimum
//! found is the lexicographically greatest one.

use super::model::ResourceOption;

pub(super) struct Outcome {
    pub counts: Vec<u32>,
    pub nodes: u64,
}

struct Search<'a> {
    options: &'a [ResourceOption],
    budget: f64,
    tolerance: f64,
    // Upper-bound tables, indexed by the first option still undecided.
    suffix_yield: Vec<f64>,
    suffix_free: Vec<f64>,
    suffix_ratio: Vec<f64>,
    counts: Vec<u32>,
    best: Option<(Vec<u32>, f64)>,
    nodes: u64,
}

/// Inputs must already be validated (finite, non-negative).
pub(super) fn search(options: &[ResourceOption], budget: f64, tolerance: f64) -> Outcome {
    let n = options.len();
    let mut suffix_yield = vec![0.0; n + 1];
    let mut suffix_free = vec![0.0; n + 1];
    let mut suffix_ratio = vec![0.0_f64; n + 1];
    for i in (0..n).rev() {
        let o = &options[i];
        let all = f64::from(o.max_count()) * o.yields();
        suffix_yield[i] = suffix_yield[i + 1] + all;
        if o.cost() > 0.0 {
            suffix_free[i] = suffix_free[i + 1];
            let ratio = if o.max_count() > 0 { o.yields() / o.cost() } else { 0.0 };
            suffix_ratio[i] = suffix_ratio[i + 1].max(ratio);
        } else {
            suffix_free[i] = suffix_free[i + 1] + all;
            suffix_ratio[i] = suffix_ratio[i + 1];
        }
    }

    let mut s = Search {
        options,
        budget,
        tolerance,
        suffix_yield,
        suffix_free,
        suffix_ratio,
        counts: vec![0; n],
        best: None,
        nodes: 0,
    };
    s.visit(0, 0.0, 0.0);

    let counts = s.best.map(|(c, _)| c).unwrap_or_else(|| vec![0; n]);
    Outcome { counts, nodes: s.nodes }
}

impl Search<'_> {
    fn bound(&self, i: usize, remaining: f64) -> f64 {
        let by_ratio = self.suffix_free[i] + remaining.max(0.0) * self.suffix_ratio[i];
        self.suffix_yield[i].min(by_ratio)
    }

    fn visit(&mut self, i: usize, cost: f64, value: f64) {
        self.nodes += 1;

        if i == self.options.len() {
            let better = match &self.best {
                Some((_, best)) => value > best + self.tolerance,
                None => true,
            };
            if better {
                self.best = Some((self.counts.clone(), value));
            }
            return;
        }

        if let Some((_, best)) = &self.best {
            if value + self.bound(i, self.budget - cost) <= *best {
                return;
            }
        }

        let opt = &self.options[i];
        let (c, y, m) = (opt.cost(), opt.yields(), opt.max_count());

        // Free picks: taking all of them is optimal and lexicographically greatest.
        if c == 0.0 {
            self.counts[i] = m;
            self.visit(i + 1, cost, value + f64::from(m) * y);
            self.counts[i] = 0;
            return;
        }

        let fits = ((self.budget - cost) / c).floor().max(0.0);
        let mut k = fits.min(f64::from(m)) as u32;
        // the rounded quotient can be off by one either way; settle on the exact sum
        while k > 0 && cost + f64::from(k) * c > self.budget {
            k -= 1;
        }
        while k < m && cost + f64::from(k + 1) * c <= self.budget {
            k += 1;
        }

        loop {
            self.counts[i] = k;
            self.visit(i + 1, cost + f64::from(k) * c, value + f64::from(k) * y);
            if k == 0 {
                break;
            }
            k -= 1;
        }
        self.counts[i] = 0;
    }
}
