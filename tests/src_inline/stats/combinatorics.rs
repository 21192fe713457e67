use super::*;

#[test]
fn test_log_factorial_small_values() {
    assert_eq!(log_factorial(0), 0.0);
    assert_eq!(log_factorial(1), 0.0);
    assert!((log_factorial(5) - 120f64.ln()).abs() < 1e-12);
    assert!((log_factorial(10) - 3_628_800f64.ln()).abs() < 1e-10);
}

#[test]
fn test_log_binomial_known_values() {
    let lf = LogFactorials::new(10);
    assert!((lf.log_binomial(5, 2) - 10f64.ln()).abs() < 1e-12);
    assert!((lf.log_binomial(10, 4) - 210f64.ln()).abs() < 1e-12);
    assert_eq!(lf.log_binomial(7, 0), 0.0);
    assert!(lf.log_binomial(7, 7).abs() < 1e-12);
    assert_eq!(lf.log_binomial(10, 4), log_binomial(10, 4));
}

#[test]
fn test_log_binomial_symmetry() {
    let lf = LogFactorials::new(60);
    for n in 0..=60 {
        for k in 0..=n {
            let a = lf.log_binomial(n, k);
            let b = lf.log_binomial(n, n - k);
            assert!((a - b).abs() < 1e-9, "n={n} k={k}: {a} vs {b}");
        }
    }
}

#[test]
fn test_table_matches_direct_sum() {
    let lf = LogFactorials::new(500);
    for n in [0usize, 1, 2, 3, 17, 250, 499, 500] {
        assert_eq!(lf.log_factorial(n), log_factorial(n));
    }
}

#[test]
fn test_table_falls_back_past_max() {
    let lf = LogFactorials::new(10);
    assert_eq!(lf.log_factorial(25), log_factorial(25));
    assert!((lf.log_binomial(25, 3) - 2300f64.ln()).abs() < 1e-9);
    assert_eq!(lf.log_binomial(25, 3), log_binomial(25, 3));
    assert_eq!(lf.log_binomial(10, 3), log_binomial(10, 3));
}

#[test]
fn test_large_universe_stays_finite() {
    let lf = LogFactorials::new(20_000);
    let v = lf.log_binomial(20_000, 10_000);
    assert!(v.is_finite());
    assert!(v > 0.0);
}
