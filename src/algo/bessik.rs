//! I_ν(x), K_ν(x) and their derivatives for real ν ≥ 0, x > 0.
//!
//! Same outline as [`bessjy`](super::bessjy): the first continued fraction
//! gives I'_ν/I_ν, an unnormalized I is carried down to |μ| ≤ 1/2, K_μ and
//! K_{μ+1} come from Temme's series (x < 2) or Steed's continued fraction
//! (x ≥ 2), and the Wronskian
//!
//! ```text
//! I_μ·K'_μ − I'_μ·K_μ = −1/x
//! ```
//!
//! normalizes I. K is walked up to ν, which is stable for K.

use crate::algo::beschb::beschb;
use crate::algo::bessjy::{check_inputs, steps};
use crate::algo::constants::{MAXIT, PI, XMIN};
use crate::algo::recur::{Kind, RecurrenceState};
use crate::machine::BesselFloat;
use crate::types::{Error, IkValues, Regime};
use crate::utils::sinpi;

/// I'_ν/I_ν by the modified Lentz method. All partial denominators are
/// positive, so no sign tracking is needed.
fn cf1<T: BesselFloat>(x: T, nu: T) -> Result<T, Error> {
    let eps = T::tol();
    let xi2 = T::from_f64(2.0) / x;

    let mut h = (nu / x).max(T::fpmin());
    let mut b = xi2 * nu;
    let mut d = T::zero();
    let mut c = h;
    for _ in 0..MAXIT {
        b = b + xi2;
        d = (b + d).recip();
        c = b + c.recip();
        let del = c * d;
        h = del * h;
        if (del - T::one()).abs() < eps {
            return Ok(h);
        }
    }
    log::debug!("bessik: CF1 did not converge for x = {x:?}, nu = {nu:?}");
    Err(Error::ConvergenceFailure)
}

/// Temme's series for (K_μ, K_{μ+1}), |μ| ≤ 1/2, x < 2.
fn temme<T: BesselFloat>(x: T, xmu: T) -> Result<(T, T), Error> {
    let eps = T::tol();
    let one = T::one();
    let half = T::from_f64(0.5);
    let x2 = half * x;
    let pimu = T::from_f64(PI) * xmu;

    let fact = if pimu.abs() < eps { one } else { pimu / sinpi(xmu) };
    let d = -x2.ln();
    let e = xmu * d;
    let fact2 = if e.abs() < eps { one } else { e.sinh() / e };
    let g = beschb(xmu);

    let mut ff = fact * (g.gam1 * e.cosh() + g.gam2 * fact2 * d);
    let mut sum = ff;
    let e = e.exp();
    let mut p = half * e / g.gampl;
    let mut q = half / (e * g.gammi);
    let mut c = one;
    let d = x2 * x2;
    let mut sum1 = p;

    let xmu2 = xmu * xmu;
    let mut i = one;
    for _ in 0..MAXIT {
        ff = (i * ff + p + q) / (i * i - xmu2);
        c = c * d / i;
        p = p / (i - xmu);
        q = q / (i + xmu);
        let del = c * ff;
        sum = sum + del;
        sum1 = sum1 + c * (p - i * ff);
        if del.abs() < sum.abs() * eps {
            return Ok((sum, sum1 * T::from_f64(2.0) / x));
        }
        i = i + one;
    }
    log::debug!("bessik: Temme series did not converge for x = {x:?}, mu = {xmu:?}");
    Err(Error::ConvergenceFailure)
}

/// Steed's continued fraction for (K_μ, K_{μ+1}), x ≥ 2.
///
/// Sums the Thompson–Barnett series for z^{1/2}·U(1/2+μ, 2μ+1, 2x)
/// alongside the fraction itself.
fn cf2<T: BesselFloat>(x: T, xmu: T) -> Result<(T, T), Error> {
    let eps = T::tol();
    let one = T::one();
    let two = T::from_f64(2.0);

    let mut b = two * (one + x);
    let mut d = b.recip();
    let mut h = d;
    let mut delh = d;
    let mut q1 = T::zero();
    let mut q2 = one;
    let a1 = T::from_f64(0.25) - xmu * xmu;
    let mut q = a1;
    let mut c = a1;
    let mut a = -a1;
    let mut s = one + q * delh;

    let mut i = two;
    for _ in 1..MAXIT {
        a = a - two * (i - one);
        c = -a * c / i;
        let qnew = (q1 - b * q2) / a;
        q1 = q2;
        q2 = qnew;
        q = q + c * qnew;
        b = b + two;
        d = (b + a * d).recip();
        delh = (b * d - one) * delh;
        h = h + delh;
        let dels = q * delh;
        s = s + dels;
        if (dels / s).abs() < eps {
            let h = a1 * h;
            let kmu = (T::from_f64(PI) / (two * x)).sqrt() * (-x).exp() / s;
            let k1 = kmu * (xmu + x + T::from_f64(0.5) - h) / x;
            return Ok((kmu, k1));
        }
        i = i + one;
    }
    log::debug!("bessik: CF2 did not converge for x = {x:?}, mu = {xmu:?}");
    Err(Error::ConvergenceFailure)
}

/// I_ν, K_ν, I'_ν, K'_ν for ν ≥ 0, x > 0.
pub(crate) fn bessik<T: BesselFloat>(x: T, nu: T) -> Result<IkValues<T>, Error> {
    check_inputs(x, nu)?;
    let nl = steps(nu + T::from_f64(0.5))?;
    let xmu = nu - T::from_f64(f64::from(nl));
    let xi = x.recip();
    let xi2 = T::from_f64(2.0) * xi;

    let h = cf1(x, nu)?;

    // Unnormalized downward walk of (I, I') from ν to μ.
    let mut ril = T::fpmin();
    let mut ripl = h * ril;
    let ril1 = ril;
    let rip1 = ripl;
    let mut fact = nu * xi;
    for _ in 0..nl {
        let ritemp = fact * ril + ripl;
        fact = fact - xi;
        ripl = fact * ritemp + ril;
        ril = ritemp;
    }
    let f = ripl / ril;

    let (rkmu, rk1) = match Regime::select(x, XMIN, false) {
        Regime::Series => temme(x, xmu)?,
        Regime::Asymptotic => cf2(x, xmu)?,
    };
    let rkmup = xmu * xi * rkmu - rk1;
    let rimu = xi / (f * rkmu - rkmup);

    let mut state = RecurrenceState::new(Kind::Modified, rkmu, rk1);
    let knu1 = state.walk(xmu + T::one(), xi2, nl);
    let knu = state.prev;

    let out = IkValues {
        i: rimu * ril1 / ril,
        k: knu,
        ip: rimu * rip1 / ril,
        kp: nu * xi * knu - knu1,
    };
    if !(out.i.is_finite() && out.k.is_finite() && out.ip.is_finite() && out.kp.is_finite()) {
        log::debug!("bessik: result not representable for x = {x:?}, nu = {nu:?}");
        return Err(Error::Overflow);
    }
    Ok(out)
}
