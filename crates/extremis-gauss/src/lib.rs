//! extremis-gauss: Gaussian integer structure over the first naturals.
//!
//! The crate factors every natural below a bound once, classifies which of
//! them are rational primes splitting in `Z[i]`, buckets the Gaussian integers
//! by norm into a scaled planar lattice, and folds that lattice into
//! concentric rings carrying mass and reverse-cumulative pressure.
//!
//! Everything except the one-time cache population is a pure function of its
//! inputs.
pub mod cache;
pub mod config;
pub mod error;
pub mod factorize;
pub mod gaussian;
pub mod lattice;
pub mod rings;

pub use cache::{GaussianPrimeCache, DEFAULT_CACHE_SIZE};
pub use error::GaussError;
pub use factorize::{factorize, PrimeFactorization};
pub use gaussian::GaussianInteger;
pub use lattice::{build_lattice, Lattice, LatticePoint};
pub use rings::{build_rings, Ring};
