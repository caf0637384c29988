//! One-time table of factorizations for `0..size`.
//!
//! The table is owned by a [`GaussianPrimeCache`] value and populated on first
//! use. Concurrent first callers block on the same initialization and all
//! observe the finished table; afterwards reads take no lock.

use once_cell::sync::{Lazy, OnceCell};

use crate::error::GaussError;
use crate::factorize::{factorize_natural, PrimeFactorization};
use crate::gaussian::GaussianInteger;

pub const DEFAULT_CACHE_SIZE: usize = 2500;

static GLOBAL_CACHE: Lazy<GaussianPrimeCache> =
    Lazy::new(|| GaussianPrimeCache::new(DEFAULT_CACHE_SIZE));

#[derive(Debug)]
pub struct GaussianPrimeCache {
    size: usize,
    table: OnceCell<Vec<PrimeFactorization>>,
}

impl GaussianPrimeCache {
    /// Create an empty cache covering `0..size`. Nothing is computed until
    /// the first query or an explicit [`initialize`](Self::initialize).
    pub fn new(size: usize) -> Self {
        Self {
            size,
            table: OnceCell::new(),
        }
    }

    /// Process-wide cache of [`DEFAULT_CACHE_SIZE`] entries.
    pub fn global() -> &'static GaussianPrimeCache {
        &GLOBAL_CACHE
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_initialized(&self) -> bool {
        self.table.get().is_some()
    }

    /// Populate the table if it has not been populated yet and return it.
    /// Later calls return the existing table untouched.
    pub fn initialize(&self) -> &[PrimeFactorization] {
        self.table.get_or_init(|| {
            let table: Vec<PrimeFactorization> =
                (0..self.size as u64).map(factorize_natural).collect();
            log::debug!(
                "[Extremis::Gauss] Populated prime cache with {} entries ({} primes)",
                table.len(),
                table.iter().filter(|f| f.is_prime()).count()
            );
            table
        })
    }

    pub fn factors(&self, n: i64) -> Result<&PrimeFactorization, GaussError> {
        let index = self.check_range(n)?;
        Ok(&self.initialize()[index])
    }

    pub fn is_prime(&self, n: i64) -> Result<bool, GaussError> {
        Ok(self.factors(n)?.is_prime())
    }

    /// True when `n` is a rational prime congruent to 1 mod 4, i.e. a prime
    /// that splits into a conjugate pair of Gaussian primes.
    pub fn is_rational_prime_splitting(&self, n: i64) -> Result<bool, GaussError> {
        let factors = self.factors(n)?;
        Ok(n % 4 == 1 && factors.is_prime())
    }

    /// True when the norm of `g` is a splitting rational prime, which makes `g`
    /// one member of a conjugate pair of Gaussian primes.
    pub fn is_split_prime_norm(&self, g: &GaussianInteger) -> Result<bool, GaussError> {
        let norm = g.norm();
        if norm >= self.size as u128 {
            return Err(GaussError::OutOfRange {
                index: i128::try_from(norm).unwrap_or(i128::MAX),
                size: self.size,
            });
        }
        self.is_rational_prime_splitting(norm as i64)
    }

    /// Splitting primes below the cache size, in ascending order.
    pub fn splitting_primes(&self) -> Vec<u64> {
        self.initialize()
            .iter()
            .filter(|f| f.is_prime() && f.value() % 4 == 1)
            .map(|f| f.value())
            .collect()
    }

    fn check_range(&self, n: i64) -> Result<usize, GaussError> {
        if n < 0 || n as u64 >= self.size as u64 {
            return Err(GaussError::OutOfRange {
                index: n as i128,
                size: self.size,
            });
        }
        Ok(n as usize)
    }
}

impl Default for GaussianPrimeCache {
    fn default() -> Self {
        GaussianPrimeCache::new(DEFAULT_CACHE_SIZE)
    }
}
