use crate::error::{Error, Result};
use crate::traits::ApproxEq;
use crate::util::trim_end;
use crate::{Complex, IntoIter, Iter};

use std::fmt;
use std::ops::{Add, Index, Mul, Neg, Sub};

use log::trace;
use num_traits::{One, Zero};

static ZERO: Complex = Complex::ZERO;

/// Dense polynomial in a single variable with complex coefficients
///
/// The coefficient with index `i` belongs to `x^i`. Polynomials are
/// kept in canonical form: there are no vanishing coefficients above
/// the degree, and the zero polynomial is represented by a single
/// vanishing constant coefficient.
///
/// Polynomials are never modified after construction. All arithmetic
/// returns a new polynomial with its own coefficient storage.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "Vec<Complex>", into = "Vec<Complex>")
)]
#[derive(Debug, Clone)]
pub struct Polynomial {
    coeffs: Vec<Complex>,
}

impl Polynomial {
    /// Create a new polynomial from its coefficients
    ///
    /// The coefficient at index `i` multiplies `x^i`. Vanishing
    /// coefficients above the degree are removed.
    ///
    /// # Example
    ///
    /// This creates the polynomial (1+2i) + (3+4i)*x.
    /// ```rust
    /// use cpoly::{Complex, Polynomial};
    /// let p = Polynomial::new(vec![
    ///     Complex::new(1., 2.),
    ///     Complex::new(3., 4.),
    ///     Complex::ZERO,
    /// ]);
    /// assert_eq!(p.degree(), 1);
    /// ```
    pub fn new(mut coeffs: Vec<Complex>) -> Polynomial {
        if coeffs.is_empty() {
            coeffs.push(Complex::ZERO);
        }
        let removed = trim_end(&mut coeffs, Complex::is_zero);
        if removed > 0 {
            trace!("Removed {removed} vanishing leading coefficients");
        }
        Polynomial { coeffs }
    }

    /// Constant polynomial
    pub fn constant(c: Complex) -> Polynomial {
        Polynomial::new(vec![c])
    }

    /// Single term `c*x^pow`
    ///
    /// # Example
    ///
    /// ```rust
    /// use cpoly::{Complex, Polynomial};
    /// let p = Polynomial::monomial(Complex::I, 3);
    /// assert_eq!(p.degree(), 3);
    /// assert_eq!(p.coeff(3), &Complex::I);
    /// assert_eq!(p.coeff(2), &Complex::ZERO);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `pow + 1` overflows or the coefficients cannot be
    /// allocated
    pub fn monomial(c: Complex, pow: usize) -> Polynomial {
        let len = pow.checked_add(1).expect("monomial power too large");
        let mut coeffs = vec![Complex::ZERO; len];
        coeffs[pow] = c;
        Polynomial::new(coeffs)
    }

    /// Get the degree of the polynomial
    ///
    /// The zero polynomial has degree 0.
    ///
    /// # Example
    ///
    /// ```rust
    /// use cpoly::{Complex, Polynomial};
    /// let p = Polynomial::new(vec![Complex::ONE, Complex::ONE]);
    /// assert_eq!(p.degree(), 1);
    /// let p = Polynomial::new(vec![]);
    /// assert_eq!(p.degree(), 0);
    /// ```
    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    /// Get the coefficient of `x^pow`
    ///
    /// Coefficients above the degree are zero.
    pub fn coeff(&self, pow: usize) -> &Complex {
        self.coeffs.get(pow).unwrap_or(&ZERO)
    }

    /// Coefficient of the highest power
    pub fn leading_coeff(&self) -> &Complex {
        &self.coeffs[self.degree()]
    }

    /// All coefficients, starting with the constant one
    pub fn coeffs(&self) -> &[Complex] {
        &self.coeffs
    }

    /// Check if this is the zero polynomial
    ///
    /// # Example
    ///
    /// ```rust
    /// use cpoly::{Complex, Polynomial};
    /// let p = Polynomial::new(vec![Complex::ZERO, Complex::ZERO]);
    /// assert!(p.is_zero());
    /// let p = Polynomial::new(vec![Complex::ZERO, Complex::ONE]);
    /// assert!(!p.is_zero());
    /// ```
    pub fn is_zero(&self) -> bool {
        self.degree() == 0 && self.coeffs[0].is_zero()
    }

    /// Iterator over the powers and coefficients
    ///
    /// # Example
    ///
    /// ```rust
    /// use cpoly::{Complex, Polynomial};
    /// let p = Polynomial::new(vec![Complex::ONE, Complex::I]);
    /// let mut iter = p.iter();
    /// assert_eq!(iter.next(), Some((0, &Complex::ONE)));
    /// assert_eq!(iter.next(), Some((1, &Complex::I)));
    /// assert_eq!(iter.next(), None);
    /// ```
    pub fn iter(&self) -> Iter<'_> {
        (0..).zip(self.coeffs.iter())
    }

    /// Evaluate the polynomial at `x` using Horner's method
    ///
    /// # Example
    ///
    /// ```rust
    /// use cpoly::{Complex, Polynomial};
    /// // 1 + x^2
    /// let p = Polynomial::new(vec![Complex::ONE, Complex::ZERO, Complex::ONE]);
    /// assert_eq!(p.eval(Complex::I), Complex::ZERO);
    /// assert_eq!(p.eval(Complex::new(2., 0.)), Complex::new(5., 0.));
    /// ```
    pub fn eval(&self, x: Complex) -> Complex {
        let deg = self.degree();
        self.coeffs[..deg]
            .iter()
            .rev()
            .fold(self.coeffs[deg], |acc, c| acc * x + *c)
    }

    /// Polynomial long division
    ///
    /// Returns the quotient `q` and the remainder `r` such that
    /// `self == divisor * q + r`, where either `r` is zero or its
    /// degree is less than that of `divisor`.
    ///
    /// # Errors
    ///
    /// Fails with [Error::DivisionByZero] if `divisor` is the zero
    /// polynomial.
    ///
    /// # Example
    ///
    /// ```rust
    /// use cpoly::{Complex, Polynomial};
    /// let c = |re| Complex::new(re, 0.);
    /// // (2 + 3x + x^2) / (1 + x)
    /// let a = Polynomial::new(vec![c(2.), c(3.), c(1.)]);
    /// let b = Polynomial::new(vec![c(1.), c(1.)]);
    /// let (q, r) = a.div_rem(&b).unwrap();
    /// assert_eq!(q, Polynomial::new(vec![c(2.), c(1.)]));
    /// assert!(r.is_zero());
    ///
    /// let zero = Polynomial::new(vec![]);
    /// assert!(a.div_rem(&zero).is_err());
    /// ```
    pub fn div_rem(
        &self,
        divisor: &Polynomial,
    ) -> Result<(Polynomial, Polynomial)> {
        if divisor.is_zero() {
            return Err(Error::DivisionByZero);
        }
        let n = self.degree();
        let m = divisor.degree();
        if n < m {
            return Ok((Polynomial::zero(), self.clone()));
        }
        trace!("Long division of polynomials with degrees {n}, {m}");
        let mut rem = self.coeffs.clone();
        let mut quot = vec![Complex::ZERO; n - m + 1];
        let lead = *divisor.leading_coeff();
        for i in (m..=n).rev() {
            // the subtraction below would be a no-op
            if rem[i].is_zero() {
                continue;
            }
            let term = rem[i].try_div(lead)?;
            quot[i - m] = term;
            for (r, b) in rem[i - m..=i].iter_mut().zip(divisor.coeffs.iter())
            {
                *r = *r - *b * term;
            }
        }
        // eliminated positions only hold rounding residues
        rem.truncate(m);
        Ok((Polynomial::new(quot), Polynomial::new(rem)))
    }

    fn zip_with<F>(&self, other: &Polynomial, op: F) -> Polynomial
    where
        F: Fn(Complex, Complex) -> Complex,
    {
        let len = std::cmp::max(self.coeffs.len(), other.coeffs.len());
        let coeffs = (0..len)
            .map(|i| op(*self.coeff(i), *other.coeff(i)))
            .collect();
        Polynomial::new(coeffs)
    }

    // Cauchy product, quadratic in the number of coefficients
    fn mul_naive(&self, other: &Polynomial) -> Polynomial {
        trace!(
            "Cauchy product of polynomials with lengths {}, {}",
            self.coeffs.len(),
            other.coeffs.len()
        );
        let mut coeffs =
            vec![Complex::ZERO; self.coeffs.len() + other.coeffs.len() - 1];
        for (i, a) in self.iter() {
            for (j, b) in other.iter() {
                coeffs[i + j] = coeffs[i + j] + *a * *b;
            }
        }
        Polynomial::new(coeffs)
    }
}

impl ApproxEq for Polynomial {
    fn approx_eq_within(&self, other: &Polynomial, eps: f64) -> bool {
        self.degree() == other.degree()
            && self
                .coeffs
                .iter()
                .zip(other.coeffs.iter())
                .all(|(a, b)| a.approx_eq_within(b, eps))
    }
}

impl PartialEq for Polynomial {
    /// Compare two polynomials coefficient by coefficient
    ///
    /// Polynomials with different degrees are never equal. Otherwise
    /// all coefficients have to agree within the global tolerance.
    ///
    /// # Example
    ///
    /// ```rust
    /// use cpoly::{Complex, Polynomial};
    /// let p = Polynomial::new(vec![Complex::ONE, Complex::I]);
    /// let q = Polynomial::new(vec![Complex::ONE, Complex::new(1e-12, 1.)]);
    /// assert_eq!(p, q);
    /// assert_ne!(p, Polynomial::constant(Complex::ONE));
    /// ```
    fn eq(&self, other: &Polynomial) -> bool {
        self.approx_eq(other)
    }
}

impl From<Vec<Complex>> for Polynomial {
    fn from(coeffs: Vec<Complex>) -> Self {
        Polynomial::new(coeffs)
    }
}

impl From<Polynomial> for Vec<Complex> {
    fn from(p: Polynomial) -> Self {
        p.coeffs
    }
}

impl FromIterator<Complex> for Polynomial {
    fn from_iter<I: IntoIterator<Item = Complex>>(iter: I) -> Self {
        Polynomial::new(iter.into_iter().collect())
    }
}

impl Index<usize> for Polynomial {
    type Output = Complex;

    /// Get the coefficient of `x^index`
    ///
    /// # Panics
    ///
    /// Panics if the index is larger than the degree
    ///
    /// # Example
    ///
    /// ```rust
    /// use cpoly::{Complex, Polynomial};
    /// let p = Polynomial::new(vec![Complex::ONE, Complex::I]);
    /// assert_eq!(p[1], Complex::I);
    /// assert!(std::panic::catch_unwind(|| p[2]).is_err());
    /// ```
    fn index(&self, index: usize) -> &Self::Output {
        &self.coeffs[index]
    }
}

impl IntoIterator for Polynomial {
    type Item = (usize, Complex);
    type IntoIter = IntoIter;

    fn into_iter(self) -> IntoIter {
        (0..).zip(self.coeffs)
    }
}

impl<'a> IntoIterator for &'a Polynomial {
    type Item = (usize, &'a Complex);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

impl<'a> Neg for &'a Polynomial {
    type Output = Polynomial;

    /// Compute -p for a polynomial p
    ///
    /// # Example
    ///
    /// ```rust
    /// use cpoly::{Complex, Polynomial};
    /// let p = Polynomial::new(vec![Complex::ONE, Complex::I]);
    /// let minus_p = Polynomial::new(vec![-Complex::ONE, -Complex::I]);
    /// assert_eq!(-&p, minus_p);
    /// ```
    fn neg(self) -> Polynomial {
        self.coeffs.iter().map(|c| -c).collect()
    }
}

impl Neg for Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Polynomial {
        -&self
    }
}

impl<'a, 'b> Add<&'b Polynomial> for &'a Polynomial {
    type Output = Polynomial;

    /// Compute p + q for two polynomials p, q
    ///
    /// # Example
    ///
    /// ```rust
    /// use cpoly::{Complex, Polynomial};
    /// let c = |re| Complex::new(re, 0.);
    /// let p = Polynomial::new(vec![c(1.), c(0.), c(-3.)]);
    /// let q = Polynomial::new(vec![c(3.), c(4.), c(3.)]);
    /// assert_eq!(&p + &q, Polynomial::new(vec![c(4.), c(4.)]));
    /// ```
    fn add(self, other: &'b Polynomial) -> Polynomial {
        self.zip_with(other, |a, b| a + b)
    }
}

impl<'a, 'b> Sub<&'b Polynomial> for &'a Polynomial {
    type Output = Polynomial;

    /// Compute p - q for two polynomials p, q
    ///
    /// # Example
    ///
    /// ```rust
    /// use cpoly::{Complex, Polynomial};
    /// let c = |re| Complex::new(re, 0.);
    /// let p = Polynomial::new(vec![c(5.), c(3.), c(1.)]);
    /// assert!((&p - &p).is_zero());
    /// ```
    fn sub(self, other: &'b Polynomial) -> Polynomial {
        self.zip_with(other, |a, b| a - b)
    }
}

impl<'a, 'b> Mul<&'b Polynomial> for &'a Polynomial {
    type Output = Polynomial;

    /// Compute p * q for two polynomials p, q
    ///
    /// # Example
    ///
    /// ```rust
    /// use cpoly::{Complex, Polynomial};
    /// let c = |re| Complex::new(re, 0.);
    /// let p = Polynomial::new(vec![c(1.), c(1.)]);
    /// assert_eq!(&p * &p, Polynomial::new(vec![c(1.), c(2.), c(1.)]));
    /// ```
    fn mul(self, other: &'b Polynomial) -> Polynomial {
        self.mul_naive(other)
    }
}

impl<'a> Mul<Complex> for &'a Polynomial {
    type Output = Polynomial;

    /// Multiply each coefficient by a factor
    fn mul(self, other: Complex) -> Polynomial {
        self.coeffs.iter().map(|c| *c * other).collect()
    }
}

impl Mul<Complex> for Polynomial {
    type Output = Polynomial;

    fn mul(self, other: Complex) -> Polynomial {
        &self * other
    }
}

macro_rules! forward_binop {
    ($($imp:ident, $method:ident);*) => {
        $(
            impl $imp<Polynomial> for Polynomial {
                type Output = Polynomial;

                fn $method(self, other: Polynomial) -> Polynomial {
                    (&self).$method(&other)
                }
            }

            impl<'a> $imp<&'a Polynomial> for Polynomial {
                type Output = Polynomial;

                fn $method(self, other: &'a Polynomial) -> Polynomial {
                    (&self).$method(other)
                }
            }

            impl<'a> $imp<Polynomial> for &'a Polynomial {
                type Output = Polynomial;

                fn $method(self, other: Polynomial) -> Polynomial {
                    self.$method(&other)
                }
            }
        )*
    };
}

forward_binop!(Add, add; Sub, sub; Mul, mul);

impl Zero for Polynomial {
    fn zero() -> Self {
        Polynomial::new(vec![Complex::ZERO])
    }

    fn is_zero(&self) -> bool {
        Polynomial::is_zero(self)
    }
}

impl One for Polynomial {
    fn one() -> Self {
        Polynomial::new(vec![Complex::ONE])
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "({})", Complex::ZERO);
        }
        let mut first = true;
        for (pow, coeff) in self.iter() {
            if coeff.is_zero() {
                continue;
            }
            if !first {
                write!(f, " + ")?;
            }
            first = false;
            write!(f, "({})", coeff)?;
            if pow != 0 {
                write!(f, "*x")?;
                if pow != 1 {
                    write!(f, "^{}", pow)?;
                }
            }
        }
        Ok(())
    }
}
