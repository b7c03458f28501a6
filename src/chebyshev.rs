//! Chebyshev approximation of a function on a finite interval.
//!
//! A function f on [a, b] is represented by coefficients c₀..c_{n-1} with
//!
//! ```text
//! f(x) ≈ Σ_{k=0}^{n-1} c_k T_k(y) - c₀/2,   y = (x - (b+a)/2) / ((b-a)/2)
//! ```
//!
//! Fit with a generous degree (30 or 50) and truncate at evaluation time to
//! the first m coefficients that are not negligible.

use alloc::vec::Vec;
use core::cmp::Ordering;

use crate::algo::constants::PI;
use crate::machine::BesselFloat;
use crate::types::Error;

/// Minimum number of coefficients for fitting, differentiation and
/// integration.
pub const MIN_FIT_DEGREE: usize = 30;

/// Chebyshev series on the interval [a, b].
#[derive(Debug, Clone, PartialEq)]
pub struct ChebyshevSeries<T: BesselFloat> {
    a: T,
    b: T,
    coeffs: Vec<T>,
}

impl<T: BesselFloat> ChebyshevSeries<T> {
    /// Fit `f` on [a, b] by sampling it at `degree` Chebyshev nodes.
    ///
    /// Requires a < b, b − a > ε and `degree >= 30`.
    ///
    /// # Example
    ///
    /// ```
    /// use real_bessel::ChebyshevSeries;
    ///
    /// let s = ChebyshevSeries::fit(0.0_f64, 2.0, 40, |x| x.exp()).unwrap();
    /// let v = s.evaluate(20, 1.0).unwrap();
    /// assert!((v - 1.0_f64.exp()).abs() < 1e-13);
    /// ```
    pub fn fit<F>(a: T, b: T, degree: usize, mut f: F) -> Result<Self, Error>
    where
        F: FnMut(T) -> T,
    {
        check_interval(a, b)?;
        if degree < MIN_FIT_DEGREE {
            return Err(Error::InsufficientTerms);
        }

        let half = T::from_f64(0.5);
        let bma = half * (b - a);
        let bpa = half * (b + a);
        let n_t = T::from_f64(degree as f64);
        let pi = T::from_f64(PI);

        let samples: Vec<T> = (0..degree)
            .map(|k| {
                let y = (pi * (T::from_f64(k as f64) + half) / n_t).cos();
                f(y * bma + bpa)
            })
            .collect();

        let fac = T::from_f64(2.0) / n_t;
        let coeffs = (0..degree)
            .map(|j| {
                let jt = T::from_f64(j as f64);
                let sum = samples
                    .iter()
                    .enumerate()
                    .fold(T::zero(), |acc, (k, &fk)| {
                        let angle = pi * jt * (T::from_f64(k as f64) + half) / n_t;
                        acc + fk * angle.cos()
                    });
                fac * sum
            })
            .collect();

        Ok(Self { a, b, coeffs })
    }

    /// Build a series from precomputed coefficients.
    ///
    /// Requires a valid interval and at least two coefficients.
    pub fn from_coefficients(a: T, b: T, coeffs: Vec<T>) -> Result<Self, Error> {
        check_interval(a, b)?;
        if coeffs.len() < 2 {
            return Err(Error::InsufficientTerms);
        }
        Ok(Self { a, b, coeffs })
    }

    /// Evaluate the first `used_terms` coefficients at `x`.
    ///
    /// `x` must lie strictly inside (a, b) and `2 <= used_terms <= len()`.
    pub fn evaluate(&self, used_terms: usize, x: T) -> Result<T, Error> {
        check_interval(self.a, self.b)?;
        if used_terms < 2 || used_terms > self.coeffs.len() {
            return Err(Error::InsufficientTerms);
        }
        // NaN compares as unordered and is rejected with the endpoints
        let side = (x - self.a) * (x - self.b);
        if side.partial_cmp(&T::zero()) != Some(Ordering::Less) {
            return Err(Error::OutOfRange);
        }
        let y = (T::from_f64(2.0) * x - self.a - self.b) / (self.b - self.a);
        Ok(clenshaw(y, &self.coeffs[..used_terms]))
    }

    /// Coefficients of the derivative series on the same interval.
    pub fn derivative(&self) -> Result<Self, Error> {
        self.check_full()?;
        let n = self.coeffs.len();
        let c = &self.coeffs;
        let two = T::from_f64(2.0);

        let mut cder = alloc::vec![T::zero(); n];
        cder[n - 2] = two * T::from_f64((n - 1) as f64) * c[n - 1];
        for j in (0..n - 2).rev() {
            cder[j] = cder[j + 2] + two * T::from_f64((j + 1) as f64) * c[j + 1];
        }
        let con = two / (self.b - self.a);
        for v in cder.iter_mut() {
            *v = *v * con;
        }

        Ok(Self {
            a: self.a,
            b: self.b,
            coeffs: cder,
        })
    }

    /// Coefficients of the integral series, normalized to vanish at x = a.
    pub fn integral(&self) -> Result<Self, Error> {
        self.check_full()?;
        let n = self.coeffs.len();
        let c = &self.coeffs;
        let con = T::from_f64(0.25) * (self.b - self.a);

        let mut cint = alloc::vec![T::zero(); n];
        let mut sum = T::zero();
        let mut fac = T::one();
        for j in 1..n - 1 {
            cint[j] = con * (c[j - 1] - c[j + 1]) / T::from_f64(j as f64);
            sum = sum + fac * cint[j];
            fac = -fac;
        }
        cint[n - 1] = con * c[n - 2] / T::from_f64((n - 1) as f64);
        sum = sum + fac * cint[n - 1];
        cint[0] = T::from_f64(2.0) * sum;

        Ok(Self {
            a: self.a,
            b: self.b,
            coeffs: cint,
        })
    }

    /// Copy of the series keeping only the first `m` coefficients.
    pub fn truncated(&self, m: usize) -> Result<Self, Error> {
        if m < 2 || m > self.coeffs.len() {
            return Err(Error::InsufficientTerms);
        }
        Ok(Self {
            a: self.a,
            b: self.b,
            coeffs: self.coeffs[..m].to_vec(),
        })
    }

    pub fn coefficients(&self) -> &[T] {
        &self.coeffs
    }

    pub fn interval(&self) -> (T, T) {
        (self.a, self.b)
    }

    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coeffs.is_empty()
    }

    fn check_full(&self) -> Result<(), Error> {
        check_interval(self.a, self.b)?;
        if self.coeffs.len() < MIN_FIT_DEGREE {
            return Err(Error::InsufficientTerms);
        }
        Ok(())
    }
}

fn check_interval<T: BesselFloat>(a: T, b: T) -> Result<(), Error> {
    if a.is_nan() || b.is_nan() || a >= b || (b - a) <= T::MACH_EPSILON {
        return Err(Error::InvalidInterval);
    }
    Ok(())
}

/// Clenshaw backward recurrence at the rescaled argument `y` in [-1, 1].
///
/// Returns `y·d − dd + c₀/2`. Callers guarantee `c.len() >= 2`.
#[inline]
pub(crate) fn clenshaw<T: BesselFloat>(y: T, c: &[T]) -> T {
    let y2 = y + y;
    let mut d = T::zero();
    let mut dd = T::zero();
    for &cj in c[1..].iter().rev() {
        let sv = d;
        d = y2 * d - dd + cj;
        dd = sv;
    }
    y * d - dd + T::from_f64(0.5) * c[0]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cubic(x: f64) -> f64 {
        x * x * x - 2.0 * x + 1.0
    }

    #[test]
    fn fit_rejects_bad_input() {
        assert_eq!(
            ChebyshevSeries::fit(1.0_f64, 0.0, 40, cubic).unwrap_err(),
            Error::InvalidInterval
        );
        assert_eq!(
            ChebyshevSeries::fit(1.0_f64, 1.0, 40, cubic).unwrap_err(),
            Error::InvalidInterval
        );
        assert_eq!(
            ChebyshevSeries::fit(0.0_f64, 1.0, 29, cubic).unwrap_err(),
            Error::InsufficientTerms
        );
        assert_eq!(
            ChebyshevSeries::fit(f64::NAN, 1.0, 40, cubic).unwrap_err(),
            Error::InvalidInterval
        );
    }

    #[test]
    fn polynomial_is_exact_with_few_terms() {
        // A cubic needs only T_0..T_3
        let s = ChebyshevSeries::fit(-2.0_f64, 3.0, 30, cubic).unwrap();
        for &x in &[-1.5, 0.0, 0.7, 2.9] {
            let v = s.evaluate(4, x).unwrap();
            assert!((v - cubic(x)).abs() < 1e-12, "x={x}: {v} vs {}", cubic(x));
        }
        assert!(s.coefficients()[4..].iter().all(|c| c.abs() < 1e-12));
    }

    #[test]
    fn error_shrinks_with_more_terms() {
        let s = ChebyshevSeries::fit(0.0_f64, 3.0, 50, |x| (x * 1.7).sin()).unwrap();
        let x = 1.234;
        let exact = (x * 1.7_f64).sin();
        let e4 = (s.evaluate(4, x).unwrap() - exact).abs();
        let e8 = (s.evaluate(8, x).unwrap() - exact).abs();
        let e16 = (s.evaluate(16, x).unwrap() - exact).abs();
        assert!(e8 < e4);
        assert!(e16 < e8);
        assert!(e16 < 1e-13);
    }

    #[test]
    fn evaluate_rejects_endpoints_and_few_terms() {
        let s = ChebyshevSeries::fit(0.0_f64, 1.0, 30, cubic).unwrap();
        assert_eq!(s.evaluate(10, 0.0).unwrap_err(), Error::OutOfRange);
        assert_eq!(s.evaluate(10, 1.0).unwrap_err(), Error::OutOfRange);
        assert_eq!(s.evaluate(10, 1.5).unwrap_err(), Error::OutOfRange);
        assert_eq!(s.evaluate(10, f64::NAN).unwrap_err(), Error::OutOfRange);
        assert_eq!(s.evaluate(1, 0.5).unwrap_err(), Error::InsufficientTerms);
        assert_eq!(s.evaluate(31, 0.5).unwrap_err(), Error::InsufficientTerms);
    }

    #[test]
    fn derivative_of_exp() {
        let s = ChebyshevSeries::fit(-1.0_f64, 2.0, 40, |x| x.exp()).unwrap();
        let d = s.derivative().unwrap();
        assert_eq!(d.interval(), (-1.0, 2.0));
        for &x in &[-0.5, 0.3, 1.8] {
            let v = d.evaluate(30, x).unwrap();
            assert!((v - x.exp()).abs() < 1e-11, "x={x}: {v}");
        }
    }

    #[test]
    fn integral_vanishes_at_left_endpoint() {
        let s = ChebyshevSeries::fit(0.5_f64, 2.5, 40, |x| x.cos()).unwrap();
        let int = s.integral().unwrap();
        for &x in &[0.6, 1.0, 2.4] {
            let v = int.evaluate(35, x).unwrap();
            let exact = x.sin() - 0.5_f64.sin();
            assert!((v - exact).abs() < 1e-12, "x={x}: {v} vs {exact}");
        }
    }

    #[test]
    fn truncated_series_cannot_differentiate() {
        let s = ChebyshevSeries::fit(0.0_f64, 1.0, 30, cubic).unwrap();
        let t = s.truncated(6).unwrap();
        assert_eq!(t.len(), 6);
        assert!((t.evaluate(6, 0.25).unwrap() - cubic(0.25)).abs() < 1e-12);
        assert_eq!(t.derivative().unwrap_err(), Error::InsufficientTerms);
        assert_eq!(s.truncated(1).unwrap_err(), Error::InsufficientTerms);
    }

    #[test]
    fn from_coefficients_validates() {
        assert!(ChebyshevSeries::from_coefficients(-1.0_f64, 1.0, alloc::vec![1.0]).is_err());
        let s = ChebyshevSeries::from_coefficients(-1.0_f64, 1.0, alloc::vec![2.0, 0.0, 1.0])
            .unwrap();
        // c0/2 + T_2(y) = 1 + 2y² - 1
        assert!((s.evaluate(3, 0.5).unwrap() - 0.5).abs() < 1e-15);
    }

    #[test]
    fn fit_f32() {
        let s = ChebyshevSeries::fit(0.0_f32, 1.0, 30, |x| x * x).unwrap();
        assert!((s.evaluate(5, 0.5).unwrap() - 0.25).abs() < 1e-5);
    }
}
