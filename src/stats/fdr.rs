/// 1-based ordinal ranks of `values` in ascending order.
///
/// Equal values are ranked by their position in the input.
pub fn ordinal_ranks(values: &[f64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by(|&a, &b| values[a].total_cmp(&values[b]));
    let mut ranks = vec![0usize; values.len()];
    for (pos, idx) in order.into_iter().enumerate() {
        ranks[idx] = pos + 1;
    }
    ranks
}

/// FDR q-values `M * p_i / rank_i` over all tested categories.
///
/// Each q-value comes from its own ordinal rank only: the result is not
/// forced to be monotone in `p` and is not capped at 1.
pub fn fdr_q_values(p_values: &[f64]) -> Vec<f64> {
    let m = p_values.len() as f64;
    let ranks = ordinal_ranks(p_values);
    p_values
        .iter()
        .zip(ranks)
        .map(|(&p, rank)| m * p / rank as f64)
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/stats/fdr.rs"]
mod tests;
