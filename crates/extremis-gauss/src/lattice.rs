//! Gaussian integers grouped by norm and projected onto the plane.

use crate::error::GaussError;
use crate::gaussian::GaussianInteger;

/// A Gaussian integer placed on the plane at `(a * scale, b * scale)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LatticePoint {
    pub x: f64,
    pub y: f64,
    pub source: GaussianInteger,
}

impl LatticePoint {
    pub fn new(source: GaussianInteger, scale: f64) -> Self {
        Self {
            x: source.re() as f64 * scale,
            y: source.im() as f64 * scale,
            source,
        }
    }
}

/// Lattice points bucketed by norm: `classes[n]` holds every point whose
/// Gaussian integer has norm `n`. Norms with no representation as a sum of
/// two squares hold an empty bucket.
#[derive(Clone, Debug, PartialEq)]
pub struct Lattice {
    scale: f64,
    classes: Vec<Vec<LatticePoint>>,
}

impl Lattice {
    /// Wrap pre-grouped norm classes.
    pub fn from_classes(scale: f64, classes: Vec<Vec<LatticePoint>>) -> Self {
        Self { scale, classes }
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Number of norm classes, empty ones included.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn classes(&self) -> &[Vec<LatticePoint>] {
        &self.classes
    }

    pub fn class(&self, norm: usize) -> Option<&[LatticePoint]> {
        self.classes.get(norm).map(|c| c.as_slice())
    }

    pub fn point_count(&self) -> usize {
        self.classes.iter().map(|c| c.len()).sum()
    }

    /// Leading norm classes swept by a circle of `radius` lattice units,
    /// i.e. every class with norm `< radius²`.
    pub fn classes_within(&self, radius: f64) -> &[Vec<LatticePoint>] {
        if !(radius > 0.0) {
            return &[];
        }
        let swept = (radius * radius).ceil();
        let count = if swept >= self.classes.len() as f64 {
            self.classes.len()
        } else {
            swept as usize
        };
        &self.classes[..count]
    }
}

/// Enumerate every Gaussian integer with norm below `norm_bound` and group the
/// scaled points by norm.
///
/// The search square is `|a|, |b| <= ceil(sqrt(norm_bound))`; any `(a, b)`
/// with `a² + b² < norm_bound` has both coordinates strictly inside it, so
/// every attainable norm in `[0, norm_bound)` is represented.
pub fn build_lattice(scale: f64, norm_bound: usize) -> Result<Lattice, GaussError> {
    if !(scale.is_finite() && scale > 0.0) {
        return Err(GaussError::InvalidScale(scale));
    }

    let reach = ceil_sqrt(norm_bound as u64) as i64;
    let mut classes: Vec<Vec<LatticePoint>> = vec![Vec::new(); norm_bound];
    for a in -reach..=reach {
        for b in -reach..=reach {
            let g = GaussianInteger::new(a, b);
            let norm = g.norm();
            if norm < norm_bound as u128 {
                classes[norm as usize].push(LatticePoint::new(g, scale));
            }
        }
    }

    let lattice = Lattice::from_classes(scale, classes);
    log::debug!(
        "[Extremis::Gauss] Built lattice: {} norm classes, {} points, scale {}",
        lattice.len(),
        lattice.point_count(),
        scale
    );
    Ok(lattice)
}

/// Largest `r` with `r² <= n`.
pub(crate) fn isqrt(n: u64) -> u64 {
    let mut r = (n as f64).sqrt() as u64;
    while r > 0 && r.saturating_mul(r) > n {
        r -= 1;
    }
    while (r + 1).saturating_mul(r + 1) <= n {
        r += 1;
    }
    r
}

/// Smallest `r` with `r² >= n`.
fn ceil_sqrt(n: u64) -> u64 {
    let r = isqrt(n);
    if r * r == n {
        r
    } else {
        r + 1
    }
}
