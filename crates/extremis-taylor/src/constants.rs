//! Euler's number from the factorial sequence.

/// `0!, 1!, 2!, …` for as long as the value fits in a `u64` (through `20!`).
pub fn factorials() -> impl Iterator<Item = u64> {
    std::iter::successors(Some((0u64, 1u64)), |&(k, f)| {
        f.checked_mul(k + 1).map(|next| (k + 1, next))
    })
    .map(|(_, f)| f)
}

/// `Σ 1/k!` over every factorial [`factorials`] yields.
pub fn euler_number() -> f64 {
    factorials().map(|f| 1.0 / f as f64).sum()
}
