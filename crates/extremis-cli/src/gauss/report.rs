use anyhow::Result;
use serde::Serialize;
use std::io::Write;

use extremis_gauss::config::GaussConfig;
use extremis_gauss::{build_lattice, build_rings, GaussianPrimeCache, Ring};

/// One line of the ring table.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RingRow {
    pub ring: usize,
    pub mass: usize,
    pub pressure: usize,
    pub normalized_pressure: f64,
    pub radius: f64,
    pub radius_delta: f64,
    pub deviation: f64,
}

impl From<&Ring> for RingRow {
    fn from(ring: &Ring) -> Self {
        Self {
            ring: ring.index,
            mass: ring.mass,
            pressure: ring.pressure,
            normalized_pressure: ring.normalized_pressure,
            radius: ring.radius(),
            radius_delta: ring.radius_delta(),
            deviation: ring.deviation(),
        }
    }
}

pub fn ring_rows(config: &GaussConfig) -> Result<Vec<RingRow>> {
    let lattice = build_lattice(config.scale, config.cache_size)?;
    let rings = build_rings(&lattice);
    log::info!(
        "[Extremis::Gauss] {} rings over {} lattice points at scale {}",
        rings.len(),
        lattice.point_count(),
        lattice.scale()
    );
    Ok(rings.iter().map(RingRow::from).collect())
}

/// Write the rows as a tab-separated table with a header line.
pub fn write_ring_table<W: Write>(rows: &[RingRow], writer: W) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .from_writer(writer);
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Human readable factorization and splitting status of `n`.
pub fn describe_factorization(cache: &GaussianPrimeCache, n: i64) -> Result<String> {
    let factors = cache.factors(n)?;
    let decomposition = if factors.factors().is_empty() {
        "1".to_string()
    } else {
        factors
            .factors()
            .iter()
            .map(|&(p, k)| if k == 1 { p.to_string() } else { format!("{}^{}", p, k) })
            .collect::<Vec<_>>()
            .join(" * ")
    };
    let splitting = cache.is_rational_prime_splitting(n)?;
    Ok(format!(
        "{} = {}\tprime: {}\tsplits in Z[i]: {}",
        n,
        decomposition,
        factors.is_prime(),
        splitting
    ))
}
