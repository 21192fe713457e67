//! Exact upper-tail hypergeometric probability.
//!
//! Drawing `n` targets without replacement from a universe of `N` genes of
//! which `B` belong to a category, the probability of seeing at least `b`
//! category genes among the targets is
//!
//! ```text
//! P(X >= b) = sum_{i=b}^{min(n,B)} C(n,i) * C(N-n, B-i) / C(N,B)
//! ```
//!
//! Every term is evaluated in log-space so universes of tens of thousands
//! of genes stay finite.

use thiserror::Error;

use crate::stats::combinatorics::LogFactorials;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum HypergeomError {
    #[error("category size {category} exceeds universe size {universe}")]
    CategoryExceedsUniverse { category: usize, universe: usize },
    #[error("target size {target} exceeds universe size {universe}")]
    TargetExceedsUniverse { target: usize, universe: usize },
    #[error("overlap {overlap} exceeds category size {category}")]
    OverlapExceedsCategory { overlap: usize, category: usize },
    #[error("overlap {overlap} exceeds target size {target}")]
    OverlapExceedsTarget { overlap: usize, target: usize },
    #[error(
        "overlap {overlap} below support minimum {minimum} (N={universe}, B={category}, n={target})"
    )]
    OverlapBelowSupport {
        overlap: usize,
        minimum: usize,
        universe: usize,
        category: usize,
        target: usize,
    },
    #[error("non-finite tail term at i={index} (N={universe}, B={category}, n={target})")]
    NonFiniteTerm {
        index: usize,
        universe: usize,
        category: usize,
        target: usize,
    },
}

/// Counts for one category test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TailParams {
    /// Universe size (N).
    pub universe: usize,
    /// Category size (B).
    pub category: usize,
    /// Normalized target size (n).
    pub target: usize,
    /// Observed overlap (b).
    pub overlap: usize,
}

impl TailParams {
    fn check(&self) -> Result<(), HypergeomError> {
        let TailParams {
            universe,
            category,
            target,
            overlap,
        } = *self;
        if category > universe {
            return Err(HypergeomError::CategoryExceedsUniverse { category, universe });
        }
        if target > universe {
            return Err(HypergeomError::TargetExceedsUniverse { target, universe });
        }
        if overlap > category {
            return Err(HypergeomError::OverlapExceedsCategory { overlap, category });
        }
        if overlap > target {
            return Err(HypergeomError::OverlapExceedsTarget { overlap, target });
        }
        let minimum = category.saturating_sub(universe - target);
        if overlap < minimum {
            return Err(HypergeomError::OverlapBelowSupport {
                overlap,
                minimum,
                universe,
                category,
                target,
            });
        }
        Ok(())
    }
}

/// `P(X >= b)` for `X ~ Hypergeometric(N, B, n)`.
///
/// Returns exactly `1.0` when `b == 0`. Rounding noise outside `[0, 1]` is
/// clamped; values inside the interval are returned untouched.
pub fn upper_tail(lf: &LogFactorials, params: TailParams) -> Result<f64, HypergeomError> {
    params.check()?;
    if params.overlap == 0 {
        return Ok(1.0);
    }

    let TailParams {
        universe,
        category,
        target,
        overlap,
    } = params;
    let log_total = lf.log_binomial(universe, category);
    let upper = target.min(category);

    let mut sum = 0.0f64;
    for i in overlap..=upper {
        let log_term = lf.log_binomial(target, i) + lf.log_binomial(universe - target, category - i)
            - log_total;
        let term = log_term.exp();
        if !term.is_finite() {
            return Err(HypergeomError::NonFiniteTerm {
                index: i,
                universe,
                category,
                target,
            });
        }
        sum += term;
    }

    Ok(clamp_probability(sum))
}

pub fn clamp_probability(p: f64) -> f64 {
    if p < 0.0 {
        0.0
    } else if p > 1.0 {
        1.0
    } else {
        p
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/stats/hypergeom.rs"]
mod tests;
