//! J_ν(x), Y_ν(x) and their derivatives for real ν ≥ 0, x > 0.
//!
//! The ratio J'_ν/J_ν comes from the first continued fraction (modified
//! Lentz). An unnormalized J is carried down to μ = ν − nl with |μ| ≤ 1/2,
//! where Y_μ, Y_{μ+1} come from Temme's series (x < 2) or Steed's complex
//! continued fraction (x ≥ 2). The Wronskian
//!
//! ```text
//! J_μ·Y'_μ − J'_μ·Y_μ = 2/(πx)
//! ```
//!
//! fixes the scale of J, and Y is then walked back up to ν, which is
//! stable for Y.

use num_complex::Complex;

use crate::algo::beschb::beschb;
use crate::algo::constants::{MAXIT, PI, TWO_OVER_PI, XMIN};
use crate::algo::recur::{Kind, RecurrenceState};
use crate::machine::BesselFloat;
use crate::types::{Error, JyValues, Regime};
use crate::utils::{sinpi, zrecip};

/// Reject x ≤ 0 (or NaN/∞) and negative or non-finite orders.
pub(crate) fn check_inputs<T: BesselFloat>(x: T, nu: T) -> Result<(), Error> {
    if x.is_nan() || x <= T::zero() || x.is_infinite() {
        return Err(Error::InvalidArgument);
    }
    if nu.is_nan() || nu < T::zero() || nu.is_infinite() {
        return Err(Error::InvalidOrder);
    }
    Ok(())
}

/// Number of downward steps from ν to μ, given a starting guess.
pub(crate) fn steps<T: BesselFloat>(shift: T) -> Result<u32, Error> {
    let s = shift.floor().max(T::zero());
    s.to_u32().ok_or(Error::InvalidOrder)
}

/// J'_ν/J_ν by the modified Lentz method, with the sign of J_ν's
/// unnormalized seed.
fn cf1<T: BesselFloat>(x: T, nu: T) -> Result<(T, T), Error> {
    let eps = T::tol();
    let fpmin = T::fpmin();
    let xi = x.recip();
    let xi2 = T::from_f64(2.0) * xi;

    let mut isign = T::one();
    let mut h = (nu * xi).max(fpmin);
    let mut b = xi2 * nu;
    let mut d = T::zero();
    let mut c = h;
    for _ in 0..MAXIT {
        b = b + xi2;
        d = b - d;
        if d.abs() < fpmin {
            d = fpmin;
        }
        c = b - c.recip();
        if c.abs() < fpmin {
            c = fpmin;
        }
        d = d.recip();
        let del = c * d;
        h = del * h;
        if d < T::zero() {
            isign = -isign;
        }
        if (del - T::one()).abs() < eps {
            return Ok((h, isign));
        }
    }
    log::debug!("bessjy: CF1 did not converge for x = {x:?}, nu = {nu:?}");
    Err(Error::ConvergenceFailure)
}

/// Temme's series for (Y_μ, Y_{μ+1}), |μ| ≤ 1/2, x < 2.
fn temme<T: BesselFloat>(x: T, xmu: T) -> Result<(T, T), Error> {
    let eps = T::tol();
    let one = T::one();
    let pi = T::from_f64(PI);
    let x2 = T::from_f64(0.5) * x;
    let pimu = pi * xmu;

    let fact = if pimu.abs() < eps { one } else { pimu / sinpi(xmu) };
    let d = -x2.ln();
    let e = xmu * d;
    let fact2 = if e.abs() < eps { one } else { e.sinh() / e };
    let g = beschb(xmu);

    let mut ff = T::from_f64(TWO_OVER_PI) * fact * (g.gam1 * e.cosh() + g.gam2 * fact2 * d);
    let e = e.exp();
    let mut p = e / (g.gampl * pi);
    let mut q = (e * pi * g.gammi).recip();
    let pimu2 = T::from_f64(0.5) * pimu;
    let fact3 = if pimu2.abs() < eps { one } else { pimu2.sin() / pimu2 };
    let r = pi * pimu2 * fact3 * fact3;

    let xmu2 = xmu * xmu;
    let d = -x2 * x2;
    let mut c = one;
    let mut sum = ff + r * q;
    let mut sum1 = p;
    let mut i = one;
    for _ in 0..MAXIT {
        ff = (i * ff + p + q) / (i * i - xmu2);
        c = c * d / i;
        p = p / (i - xmu);
        q = q / (i + xmu);
        let del = c * (ff + r * q);
        sum = sum + del;
        sum1 = sum1 + c * p - i * del;
        if del.abs() < (one + sum.abs()) * eps {
            return Ok((-sum, -sum1 * T::from_f64(2.0) / x));
        }
        i = i + one;
    }
    log::debug!("bessjy: Temme series did not converge for x = {x:?}, mu = {xmu:?}");
    Err(Error::ConvergenceFailure)
}

/// p + iq = (J'_μ + iY'_μ)/(J_μ + iY_μ) by Steed's method, x ≥ 2.
fn cf2<T: BesselFloat>(x: T, xmu: T) -> Result<Complex<T>, Error> {
    let eps = T::tol();
    let fpmin = T::fpmin();
    let one = T::one();
    let two = T::from_f64(2.0);
    let xi = x.recip();

    let mut a = T::from_f64(0.25) - xmu * xmu;
    let mut pq = Complex::new(-T::from_f64(0.5) * xi, one);
    let mut b = Complex::new(two * x, two);
    let mut c = b + Complex::new(T::zero(), a * xi) * zrecip(pq);
    let mut d = zrecip(b);
    pq = pq * (c * d);

    let mut i = two;
    for _ in 1..MAXIT {
        a = a + two * (i - one);
        b.im = b.im + two;
        d = d.scale(a) + b;
        if d.re.abs() + d.im.abs() < fpmin {
            d.re = fpmin;
        }
        c = b + zrecip(c).scale(a);
        if c.re.abs() + c.im.abs() < fpmin {
            c.re = fpmin;
        }
        d = zrecip(d);
        let dl = c * d;
        pq = pq * dl;
        if (dl.re - one).abs() + dl.im.abs() < eps {
            return Ok(pq);
        }
        i = i + one;
    }
    log::debug!("bessjy: CF2 did not converge for x = {x:?}, mu = {xmu:?}");
    Err(Error::ConvergenceFailure)
}

/// J_ν, Y_ν, J'_ν, Y'_ν for ν ≥ 0, x > 0.
pub(crate) fn bessjy<T: BesselFloat>(x: T, nu: T) -> Result<JyValues<T>, Error> {
    check_inputs(x, nu)?;
    let half = T::from_f64(0.5);
    let regime = Regime::select(x, XMIN, false);
    let nl = match regime {
        Regime::Series => steps(nu + half)?,
        Regime::Asymptotic => steps(nu - x + T::from_f64(1.5))?,
    };
    let xmu = nu - T::from_f64(f64::from(nl));
    let xi = x.recip();
    let xi2 = T::from_f64(2.0) * xi;
    let w = xi2 / T::from_f64(PI);

    let (h, isign) = cf1(x, nu)?;

    // Unnormalized downward walk of (J, J') from ν to μ.
    let mut rjl = isign * T::fpmin();
    let mut rjpl = h * rjl;
    let rjl1 = rjl;
    let rjp1 = rjpl;
    let mut fact = nu * xi;
    for _ in 0..nl {
        let rjtemp = fact * rjl + rjpl;
        fact = fact - xi;
        rjpl = fact * rjtemp - rjl;
        rjl = rjtemp;
    }
    if rjl == T::zero() {
        rjl = T::tol();
    }
    let f = rjpl / rjl;

    let (rjmu, rymu, ry1) = match regime {
        Regime::Series => {
            let (rymu, ry1) = temme(x, xmu)?;
            let rymup = xmu * xi * rymu - ry1;
            (w / (rymup - f * rymu), rymu, ry1)
        }
        Regime::Asymptotic => {
            let pq = cf2(x, xmu)?;
            let (p, q) = (pq.re, pq.im);
            let gam = (p - f) / q;
            let rjmu = (w / ((p - f) * gam + q)).sqrt().copysign(rjl);
            let rymu = rjmu * gam;
            let rymup = rymu * (p + q / gam);
            (rjmu, rymu, xmu * xi * rymu - rymup)
        }
    };

    let scale = rjmu / rjl;
    let mut state = RecurrenceState::new(Kind::Ordinary, rymu, ry1);
    let ynu1 = state.walk(xmu + T::one(), xi2, nl);
    let ynu = state.prev;

    let out = JyValues {
        j: rjl1 * scale,
        y: ynu,
        jp: rjp1 * scale,
        yp: nu * xi * ynu - ynu1,
    };
    if !(out.j.is_finite() && out.y.is_finite() && out.jp.is_finite() && out.yp.is_finite()) {
        log::debug!("bessjy: result not representable for x = {x:?}, nu = {nu:?}");
        return Err(Error::Overflow);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rel(a: f64, b: f64) -> f64 {
        (a - b).abs() / b.abs()
    }

    #[test]
    fn series_branch() {
        // J_{1/3}(1) = 0.7308764021694480, Y_{1/3}(1) = -0.2788016412759922
        let v = bessjy(1.0_f64, 1.0 / 3.0).unwrap();
        assert!(rel(v.j, 0.7308764021694480) < 1e-13);
        assert!(rel(v.y, -0.2788016412759922) < 1e-12);
    }

    #[test]
    fn continued_fraction_branch() {
        // J_2.7(10), Y_0(30)
        let v = bessjy(10.0_f64, 2.7).unwrap();
        let w = v.j * v.yp - v.jp * v.y;
        assert!(rel(w, 2.0 / (core::f64::consts::PI * 10.0)) < 1e-13);
        let v = bessjy(30.0_f64, 0.0).unwrap();
        assert!(rel(v.j, -0.08636798358104702) < 1e-12);
        assert!(rel(v.y, -0.11729573168666413) < 1e-12);
    }

    #[test]
    fn half_order_closed_form() {
        // J_{1/2}(x) = sqrt(2/(πx)) sin x
        for &x in &[0.3_f64, 1.5, 2.0, 7.0] {
            let v = bessjy(x, 0.5).unwrap();
            let expect = (2.0 / (core::f64::consts::PI * x)).sqrt() * x.sin();
            assert!((v.j - expect).abs() < 1e-14, "x = {x}");
        }
    }

    #[test]
    fn wronskian_across_regimes() {
        for &x in &[0.05_f64, 0.5, 1.99, 2.0, 2.5, 50.0] {
            for &nu in &[0.0_f64, 0.25, 1.0, 2.5, 10.0] {
                let v = bessjy(x, nu).unwrap();
                let w = v.j * v.yp - v.jp * v.y;
                let expect = 2.0 / (core::f64::consts::PI * x);
                assert!(rel(w, expect) < 1e-12, "x = {x}, nu = {nu}");
            }
        }
    }

    #[test]
    fn rejects_bad_inputs() {
        assert_eq!(bessjy(0.0_f64, 1.0).unwrap_err(), Error::InvalidArgument);
        assert_eq!(bessjy(-1.0_f64, 1.0).unwrap_err(), Error::InvalidArgument);
        assert_eq!(bessjy(f64::NAN, 1.0).unwrap_err(), Error::InvalidArgument);
        assert_eq!(bessjy(1.0_f64, -0.5).unwrap_err(), Error::InvalidOrder);
        assert_eq!(bessjy(1.0_f64, f64::INFINITY).unwrap_err(), Error::InvalidOrder);
    }

    #[test]
    fn cf1_iteration_cap() {
        // CF1 needs about x iterations
        assert_eq!(bessjy(1.0e5_f64, 0.0).unwrap_err(), Error::ConvergenceFailure);
    }

    #[test]
    fn y_overflow_is_reported() {
        assert_eq!(bessjy(1.0e-3_f64, 200.5).unwrap_err(), Error::Overflow);
    }
}
