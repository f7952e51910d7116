use crate::error::{Error, Result};
use crate::traits::ApproxEq;
use crate::epsilon;

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use num_traits::{One, Zero};

/// Complex number with `f64` components
///
/// Comparison with `==` is approximate: two numbers compare equal if
/// both their real and their imaginary parts differ by less than the
/// global tolerance, see [epsilon](crate::epsilon).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default)]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

impl Complex {
    pub const ZERO: Self = Self { re: 0., im: 0. };
    pub const ONE: Self = Self { re: 1., im: 0. };
    /// The imaginary unit
    pub const I: Self = Self { re: 0., im: 1. };

    /// Create a new complex number
    ///
    /// # Example
    ///
    /// ```rust
    /// let z = cpoly::Complex::new(1., 2.);
    /// assert_eq!(z.re, 1.);
    /// assert_eq!(z.im, 2.);
    /// ```
    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// Squared absolute value `re² + im²`
    pub fn norm_sqr(&self) -> f64 {
        self.re * self.re + self.im * self.im
    }

    /// Complex conjugate
    pub fn conj(&self) -> Self {
        Self::new(self.re, -self.im)
    }

    /// Check whether both components vanish within the global tolerance
    ///
    /// # Example
    ///
    /// ```rust
    /// use cpoly::Complex;
    /// assert!(Complex::new(1e-12, -1e-12).is_zero());
    /// assert!(!Complex::new(0., 1e-3).is_zero());
    /// ```
    pub fn is_zero(&self) -> bool {
        self.is_zero_within(epsilon())
    }

    /// Check whether both components vanish within `eps`
    pub fn is_zero_within(&self, eps: f64) -> bool {
        self.re.abs() < eps && self.im.abs() < eps
    }

    /// Divide by `rhs`
    ///
    /// # Errors
    ///
    /// Fails with [Error::DivisionByZero] if the squared absolute
    /// value of `rhs` is below the global tolerance.
    ///
    /// # Example
    ///
    /// ```rust
    /// use cpoly::{Complex, Error};
    /// let a = Complex::new(1., 2.);
    /// let b = Complex::new(3., 4.);
    /// assert_eq!(b.try_div(a), Ok(Complex::new(2.2, -0.4)));
    /// assert_eq!(a.try_div(Complex::ZERO), Err(Error::DivisionByZero));
    /// ```
    pub fn try_div(self, rhs: Complex) -> Result<Complex> {
        let d = rhs.norm_sqr();
        if d < epsilon() {
            return Err(Error::DivisionByZero);
        }
        Ok(Self::new(
            (self.re * rhs.re + self.im * rhs.im) / d,
            (self.im * rhs.re - self.re * rhs.im) / d,
        ))
    }
}

impl ApproxEq for Complex {
    fn approx_eq_within(&self, other: &Complex, eps: f64) -> bool {
        (self.re - other.re).abs() < eps && (self.im - other.im).abs() < eps
    }
}

impl PartialEq for Complex {
    fn eq(&self, other: &Complex) -> bool {
        self.approx_eq(other)
    }
}

impl From<f64> for Complex {
    fn from(re: f64) -> Self {
        Self::new(re, 0.)
    }
}

impl From<(f64, f64)> for Complex {
    fn from((re, im): (f64, f64)) -> Self {
        Self::new(re, im)
    }
}

impl Add for Complex {
    type Output = Complex;

    fn add(self, rhs: Complex) -> Complex {
        Self::new(self.re + rhs.re, self.im + rhs.im)
    }
}

impl Sub for Complex {
    type Output = Complex;

    fn sub(self, rhs: Complex) -> Complex {
        Self::new(self.re - rhs.re, self.im - rhs.im)
    }
}

impl Mul for Complex {
    type Output = Complex;

    fn mul(self, rhs: Complex) -> Complex {
        Self::new(
            self.re * rhs.re - self.im * rhs.im,
            self.re * rhs.im + self.im * rhs.re,
        )
    }
}

impl Neg for Complex {
    type Output = Complex;

    fn neg(self) -> Complex {
        Self::new(-self.re, -self.im)
    }
}

impl<'a> Neg for &'a Complex {
    type Output = Complex;

    fn neg(self) -> Complex {
        -*self
    }
}

macro_rules! forward_ref_binop {
    ($($imp:ident, $method:ident);*) => {
        $(
            impl<'a> $imp<&'a Complex> for Complex {
                type Output = Complex;

                fn $method(self, rhs: &'a Complex) -> Complex {
                    self.$method(*rhs)
                }
            }

            impl<'a> $imp<Complex> for &'a Complex {
                type Output = Complex;

                fn $method(self, rhs: Complex) -> Complex {
                    (*self).$method(rhs)
                }
            }

            impl<'a, 'b> $imp<&'b Complex> for &'a Complex {
                type Output = Complex;

                fn $method(self, rhs: &'b Complex) -> Complex {
                    (*self).$method(*rhs)
                }
            }
        )*
    };
}

forward_ref_binop!(Add, add; Sub, sub; Mul, mul);

impl Zero for Complex {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        self.is_zero_within(epsilon())
    }
}

impl One for Complex {
    fn one() -> Self {
        Self::ONE
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let eps = epsilon();
        if self.im.abs() < eps {
            write!(f, "{:.2}", self.re)
        } else if self.re.abs() < eps {
            write!(f, "{:.2}i", self.im)
        } else {
            write!(f, "{:.2}{:+.2}i", self.re, self.im)
        }
    }
}
