//! Concentric ring partition of a norm lattice with reverse-cumulative
//! pressure.

use std::f64::consts::PI;

use crate::lattice::{isqrt, Lattice, LatticePoint};

/// A band of norm classes whose integer square root equals `index`.
#[derive(Clone, Debug, PartialEq)]
pub struct Ring {
    pub index: usize,
    pub points: Vec<LatticePoint>,
    pub mass: usize,
    /// Mass of this ring plus every ring outside it.
    pub pressure: usize,
    /// `pressure / pressure of ring 0`
    pub normalized_pressure: f64,
}

impl Ring {
    fn closed(index: usize, points: Vec<LatticePoint>) -> Self {
        Self {
            index,
            mass: points.len(),
            points,
            pressure: 0,
            normalized_pressure: 0.0,
        }
    }

    /// Radius of a circle whose circumference equals the ring's mass.
    pub fn radius(&self) -> f64 {
        self.mass as f64 / (2.0 * PI)
    }

    pub fn radius_delta(&self) -> f64 {
        self.index as f64 - self.radius()
    }

    /// `radius_delta² / mass²`; zero for an empty ring.
    pub fn deviation(&self) -> f64 {
        if self.mass == 0 {
            return 0.0;
        }
        let mass = self.mass as f64;
        self.radius_delta().powi(2) / (mass * mass)
    }
}

/// Partition `lattice` into rings.
///
/// Norm classes are consumed in order; class `i` goes to ring `floor(sqrt(i))`.
/// The final ring is closed once the classes run out, so the ring masses sum
/// to the lattice's point count. When every ring is empty the normalized
/// pressures are all zero.
pub fn build_rings(lattice: &Lattice) -> Vec<Ring> {
    let classes = lattice.classes();
    if classes.is_empty() {
        return Vec::new();
    }

    let mut rings: Vec<Ring> = Vec::with_capacity(isqrt(classes.len() as u64) as usize + 1);
    let mut buffer: Vec<LatticePoint> = Vec::new();
    let mut ring_index = 0usize;
    let mut i = 0usize;
    while i < classes.len() {
        if isqrt(i as u64) as usize <= ring_index {
            buffer.extend_from_slice(&classes[i]);
            i += 1;
        } else {
            rings.push(Ring::closed(ring_index, std::mem::take(&mut buffer)));
            ring_index += 1;
        }
    }
    rings.push(Ring::closed(ring_index, buffer));

    let mut total = 0usize;
    for ring in rings.iter_mut().rev() {
        total += ring.mass;
        ring.pressure = total;
    }

    let max_pressure = rings[0].pressure;
    for ring in rings.iter_mut() {
        ring.normalized_pressure = if max_pressure == 0 {
            0.0
        } else {
            ring.pressure as f64 / max_pressure as f64
        };
    }

    log::debug!(
        "[Extremis::Gauss] Partitioned {} points into {} rings",
        total,
        rings.len()
    );
    rings
}
