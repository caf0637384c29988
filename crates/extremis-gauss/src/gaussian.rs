/// A Gaussian integer `a + bi`.
///
/// Arithmetic is exposed through named methods; every operation returns a new
/// value and leaves its operands untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GaussianInteger {
    a: i64,
    b: i64,
}

impl GaussianInteger {
    pub const ZERO: GaussianInteger = GaussianInteger { a: 0, b: 0 };

    pub fn new(a: i64, b: i64) -> Self {
        Self { a, b }
    }

    /// Real part.
    pub fn re(&self) -> i64 {
        self.a
    }

    /// Imaginary part.
    pub fn im(&self) -> i64 {
        self.b
    }

    /// Componentwise sum, `None` if a component leaves the `i64` range.
    pub fn add(&self, other: &GaussianInteger) -> Option<GaussianInteger> {
        Some(GaussianInteger::new(
            self.a.checked_add(other.a)?,
            self.b.checked_add(other.b)?,
        ))
    }

    /// `(a + bi)(c + di) = (ac - bd) + (bc + ad)i`, `None` on `i64` overflow.
    pub fn multiply(&self, other: &GaussianInteger) -> Option<GaussianInteger> {
        let re = self.a.checked_mul(other.a)?.checked_sub(self.b.checked_mul(other.b)?)?;
        let im = self.b.checked_mul(other.a)?.checked_add(self.a.checked_mul(other.b)?)?;
        Some(GaussianInteger::new(re, im))
    }

    /// `None` only for an imaginary part of `i64::MIN`.
    pub fn conjugate(&self) -> Option<GaussianInteger> {
        Some(GaussianInteger::new(self.a, self.b.checked_neg()?))
    }

    /// `a² + b²`, exact for every pair of `i64` components; zero only at the
    /// origin.
    pub fn norm(&self) -> u128 {
        let a = self.a.unsigned_abs() as u128;
        let b = self.b.unsigned_abs() as u128;
        a * a + b * b
    }

    pub fn is_zero(&self) -> bool {
        self.a == 0 && self.b == 0
    }
}

impl From<(i64, i64)> for GaussianInteger {
    fn from(value: (i64, i64)) -> Self {
        GaussianInteger::new(value.0, value.1)
    }
}
