//! Trial-division factorization of natural numbers.

use crate::error::GaussError;

/// Prime decomposition of a natural number.
///
/// Factors are kept in ascending order as `(prime, multiplicity)` pairs. `0`
/// and `1` have no factors; their `product()` is the empty product `1`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrimeFactorization {
    value: u64,
    factors: Vec<(u64, u32)>,
    is_prime: bool,
}

impl PrimeFactorization {
    pub fn value(&self) -> u64 {
        self.value
    }

    pub fn factors(&self) -> &[(u64, u32)] {
        &self.factors
    }

    pub fn is_prime(&self) -> bool {
        self.is_prime
    }

    /// Product of all factors counted with multiplicity.
    pub fn product(&self) -> u64 {
        self.factors
            .iter()
            .map(|&(p, k)| p.pow(k))
            .product()
    }

    /// Number of prime factors counted with multiplicity.
    pub fn total_multiplicity(&self) -> u32 {
        self.factors.iter().map(|&(_, k)| k).sum()
    }
}

/// Factor `n`, rejecting negative input.
pub fn factorize(n: i64) -> Result<PrimeFactorization, GaussError> {
    if n < 0 {
        return Err(GaussError::InvalidArgument(format!(
            "cannot factorize negative number {}",
            n
        )));
    }
    Ok(factorize_natural(n as u64))
}

/// Factor a natural number by trial division up to the square root of the
/// shrinking remainder.
pub fn factorize_natural(n: u64) -> PrimeFactorization {
    let mut factors = Vec::new();
    if n >= 2 {
        let mut remainder = n;
        let mut divisor = 2u64;
        while divisor <= remainder / divisor {
            if remainder % divisor == 0 {
                let mut multiplicity = 0u32;
                while remainder % divisor == 0 {
                    remainder /= divisor;
                    multiplicity += 1;
                }
                factors.push((divisor, multiplicity));
            }
            divisor += if divisor == 2 { 1 } else { 2 };
        }
        if remainder > 1 {
            factors.push((remainder, 1));
        }
    }

    let is_prime = matches!(factors.as_slice(), [(_, 1)]);
    PrimeFactorization {
        value: n,
        factors,
        is_prime,
    }
}
