//! Dense polynomials in a single variable with complex coefficients
//!
//! Polynomials are immutable values in canonical form. They support
//! addition, subtraction, multiplication, long division with
//! remainder and evaluation with Horner's method.
//!
//! # Example
//!
//! ```rust
//! use cpoly::{Complex, Polynomial};
//!
//! let c = |re| Complex::new(re, 0.);
//! let p = Polynomial::new(vec![c(2.), c(3.), c(1.)]);
//! let q = Polynomial::new(vec![c(1.), c(1.)]);
//!
//! let (quot, rem) = p.div_rem(&q).unwrap();
//! assert_eq!(&q * &quot + rem, p);
//! assert_eq!(p.eval(c(2.)), c(12.));
//! ```
//!
//! Coefficients are compared with an absolute tolerance, see
//! [epsilon] and [set_epsilon].
pub mod complex;
pub mod error;
pub mod poly;
pub use self::complex::Complex;
pub use self::error::{Error, Result};
pub use self::poly::Polynomial;
mod traits;
pub use self::traits::ApproxEq;
mod util;

use std::iter::Zip;
use std::ops::RangeFrom;
use std::sync::atomic::{AtomicU64, Ordering};

use log::debug;

/// Default absolute tolerance for comparing coefficients
pub const DEFAULT_EPSILON: f64 = 1e-10;

static EPSILON_BITS: AtomicU64 = AtomicU64::new(DEFAULT_EPSILON.to_bits());

/// Absolute tolerance used for all comparisons
///
/// Two complex numbers are considered equal if both their real and
/// imaginary parts differ by less than this value. This also decides
/// which coefficients are dropped when constructing a polynomial and
/// which divisors are rejected.
///
/// # Example
///
/// ```rust
/// assert_eq!(cpoly::epsilon(), cpoly::DEFAULT_EPSILON);
/// ```
pub fn epsilon() -> f64 {
    f64::from_bits(EPSILON_BITS.load(Ordering::Relaxed))
}

/// Change the global tolerance
///
/// This affects all subsequent operations in all threads.
///
/// # Panics
///
/// Panics if `eps` is not a positive finite number
pub fn set_epsilon(eps: f64) {
    assert!(
        eps.is_finite() && eps > 0.,
        "Tolerance has to be positive and finite, got {eps}"
    );
    debug!("Setting tolerance to {eps:e}");
    EPSILON_BITS.store(eps.to_bits(), Ordering::Relaxed);
}

/// Restore the global tolerance to [DEFAULT_EPSILON]
pub fn reset_epsilon() {
    set_epsilon(DEFAULT_EPSILON)
}

/// Immutable `Polynomial` iterator.
///
/// This `struct` is created by the `iter` method on `Polynomial`
pub type Iter<'a> = Zip<RangeFrom<usize>, std::slice::Iter<'a, Complex>>;
/// An iterator that moves out of a polynomial.
///
/// This `struct` is created by the `into_iter` method on `Polynomial`
pub type IntoIter = Zip<RangeFrom<usize>, std::vec::IntoIter<Complex>>;
