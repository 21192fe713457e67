/// Natural log of `n!` as the running sum `ln 1 + ln 2 + ... + ln n`.
pub fn log_factorial(n: usize) -> f64 {
    let mut acc = 0.0f64;
    for k in 2..=n {
        acc += (k as f64).ln();
    }
    acc
}

/// Natural log of `C(n, k)`. Callers must pass `k <= n`.
pub fn log_binomial(n: usize, k: usize) -> f64 {
    debug_assert!(k <= n, "log_binomial requires k <= n (n={n}, k={k})");
    log_factorial(n) - (log_factorial(k) + log_factorial(n - k))
}

/// Prefix table of `ln(k!)` for `k` in `0..=max`.
///
/// Entries are accumulated in the same order as [`log_factorial`], so a
/// lookup and a direct evaluation agree exactly. Arguments above `max` fall
/// back to the direct sum.
#[derive(Debug, Clone)]
pub struct LogFactorials {
    table: Vec<f64>,
}

impl LogFactorials {
    pub fn new(max: usize) -> Self {
        let mut table = Vec::with_capacity(max + 1);
        let mut acc = 0.0f64;
        table.push(acc);
        for k in 1..=max {
            if k >= 2 {
                acc += (k as f64).ln();
            }
            table.push(acc);
        }
        Self { table }
    }

    pub fn log_factorial(&self, n: usize) -> f64 {
        match self.table.get(n) {
            Some(v) => *v,
            None => log_factorial(n),
        }
    }

    /// Natural log of `C(n, k)`. Callers must pass `k <= n`.
    pub fn log_binomial(&self, n: usize, k: usize) -> f64 {
        debug_assert!(k <= n, "log_binomial requires k <= n (n={n}, k={k})");
        if n >= self.table.len() {
            return log_binomial(n, k);
        }
        self.log_factorial(n) - (self.log_factorial(k) + self.log_factorial(n - k))
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/stats/combinatorics.rs"]
mod tests;
