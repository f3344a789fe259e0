use itertools::Itertools;
use log::*;

use crate::data_structs::typedef::{
    CountType,
    PValueType,
};

/// Probability of drawing one particular symbol under the uniform
/// four-letter null model.
pub const NULL_SYMBOL_PROBABILITY: f64 = 0.25;

/// Binomial coefficient `C(n, k)` by the multiplicative recurrence
/// `C(n, i) = C(n, i - 1) * (n - i + 1) / i`.
///
/// Returns `0.0` for `k > n`. The smaller of `k` and `n - k` is used, so the
/// product never has more than `n / 2` factors.
///
/// Standalone utility: the pipeline does not call it. For very large `n` the
/// value itself leaves the `f64` range, so [`binomial_tail`] works with
/// [`ln_binomial_coefficient`] instead.
pub fn binomial_coefficient(
    n: CountType,
    k: CountType,
) -> f64 {
    if k > n {
        return 0.0;
    }
    let k = k.min(n - k);
    (1..=k).fold(1.0, |acc, i| acc * (n - i + 1) as f64 / i as f64)
}

/// Natural logarithm of `C(n, k)`, accumulated from the same multiplicative
/// recurrence as [`binomial_coefficient`].
pub fn ln_binomial_coefficient(
    n: CountType,
    k: CountType,
) -> f64 {
    if k > n {
        return f64::NEG_INFINITY;
    }
    let k = k.min(n - k);
    (1..=k)
        .map(|i| ((n - i + 1) as f64 / i as f64).ln())
        .sum()
}

/// Upper tail of the binomial distribution, `P(X >= k)` for
/// `X ~ Binomial(n, p)`.
///
/// Computed as an exact finite sum of probability masses. The mass closest
/// to the mode is evaluated in log space and every further term is derived
/// from its neighbour with the ratio `C(n, i) / C(n, i - 1)`, so long merged
/// segments neither overflow the coefficient nor cost a quadratic number of
/// multiplications. Above the mean the terms `k..=n` are summed directly;
/// at or below it the tail is `1 - P(X <= k - 1)`.
///
/// `k == 0` is exactly `1`, `k > n` is `0`. Inside the support the tail is
/// strictly positive: a sum that underflows is reported as
/// [`f64::MIN_POSITIVE`], never as `0`.
pub fn binomial_tail(
    n: CountType,
    k: CountType,
    p: f64,
) -> PValueType {
    if k == 0 {
        return 1.0;
    }
    if k > n {
        return 0.0;
    }
    if p <= 0.0 {
        return 0.0;
    }
    if p >= 1.0 {
        return 1.0;
    }

    let odds = p / (1.0 - p);
    let tail = if k as f64 > n as f64 * p {
        let first = binomial_pmf(n, k, p);
        let (sum, _) = ((k + 1)..=n).fold((first, first), |(sum, term), i| {
            let next = term * (n - i + 1) as f64 / i as f64 * odds;
            (sum + next, next)
        });
        sum
    }
    else {
        let last = binomial_pmf(n, k - 1, p);
        let (lower, _) = (1..k).rev().fold((last, last), |(sum, term), i| {
            let prev = term * i as f64 / (n - i + 1) as f64 / odds;
            (sum + prev, prev)
        });
        1.0 - lower
    };

    trace!("Binomial tail: n={}, k={}, p={} -> {:e}", n, k, p, tail);
    tail.clamp(f64::MIN_POSITIVE, 1.0)
}

/// `P(X = k)`, evaluated in log space.
fn binomial_pmf(
    n: CountType,
    k: CountType,
    p: f64,
) -> f64 {
    (ln_binomial_coefficient(n, k)
        + k as f64 * p.ln()
        + (n - k) as f64 * (1.0 - p).ln())
    .exp()
}

/// Fisher-style combination of per-position p-values.
///
/// Computes `X = -2 Σ ln(p_i)` over the p-values strictly greater than zero
/// and returns `exp(-0.5 X)`. Zero (or negative) p-values are left out of the
/// sum instead of driving it to infinity. The result is not a calibrated
/// chi-square p-value; it is a monotone score in `(0, 1]` that the noise
/// thresholds are tuned against. Underflow is clamped to
/// [`f64::MIN_POSITIVE`].
pub fn combine_pvalues_fisher(pvalues: &[PValueType]) -> PValueType {
    let positive = pvalues
        .iter()
        .copied()
        .filter(|p| *p > 0.0)
        .collect_vec();
    if positive.len() != pvalues.len() {
        debug!(
            "Fisher combination: skipping {} non-positive p-value(s) of {}",
            pvalues.len() - positive.len(),
            pvalues.len()
        );
    }

    let statistic = -2.0 * positive.iter().map(|p| p.ln()).sum::<f64>();
    (-0.5 * statistic).exp().clamp(f64::MIN_POSITIVE, 1.0)
}
