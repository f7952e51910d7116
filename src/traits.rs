// Helper traits
use crate::epsilon;

/// Comparison up to an absolute tolerance
///
/// This relation is reflexive and symmetric, but not transitive:
/// values that differ by amounts comparable to the tolerance may
/// compare equal to a common third value without being equal to each
/// other.
pub trait ApproxEq<Rhs: ?Sized = Self> {
    /// Compare with the given absolute tolerance
    fn approx_eq_within(&self, other: &Rhs, eps: f64) -> bool;

    /// Compare with the global tolerance returned by [epsilon]
    fn approx_eq(&self, other: &Rhs) -> bool {
        self.approx_eq_within(other, epsilon())
    }
}
