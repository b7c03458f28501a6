//! Bessel functions of the first kind, integer order.
//!
//! J₀ and J₁ use a rational approximation in x² for |x| < 8 and the
//! Hankel amplitude/phase form with polynomial corrections in (8/x)²
//! beyond. Jₙ for n ≥ 2 walks the three-term recurrence: upward from
//! J₀, J₁ when |x| > n, otherwise Miller's backward recurrence.

#![allow(clippy::excessive_precision)]

use crate::algo::miller::miller_j;
use crate::algo::recur::{Kind, RecurrenceState};
use crate::machine::BesselFloat;
use crate::types::{Direction, Error, Regime};
use crate::utils::poly;

/// Regime boundary for J₀, J₁ (shared with Y₀, Y₁).
pub(crate) const JY_THRESHOLD: f64 = 8.0;

/// 2/π as carried by the asymptotic coefficient set.
pub(crate) const AMPLITUDE: f64 = 0.636619772;

/// Phase offsets π/4 and 3π/4 matched to the coefficient set.
pub(crate) const PHASE0: f64 = 0.785398164;
pub(crate) const PHASE1: f64 = 2.356194491;

#[rustfmt::skip]
const J0_NUM: [f64; 6] = [
    57568490574.0, -13362590354.0, 651619640.7,
    -11214424.18,  77392.33017,    -184.9052456,
];
#[rustfmt::skip]
const J0_DEN: [f64; 6] = [
    57568490411.0, 1029533985.0, 9494680.718,
    59272.64853,   267.8532712,  1.0,
];
#[rustfmt::skip]
const J1_NUM: [f64; 6] = [
    72362614232.0, -7895059235.0, 242396853.1,
    -2972611.439,  15704.48260,   -30.16036606,
];
#[rustfmt::skip]
const J1_DEN: [f64; 6] = [
    144725228442.0, 2300535178.0, 18583304.74,
    99447.43394,    376.9991397,  1.0,
];

/// Asymptotic amplitude corrections P₀, Q₀ in (8/x)², shared with Y₀.
#[rustfmt::skip]
pub(crate) const P0: [f64; 5] = [
    1.0, -0.1098628627e-2, 0.2734510407e-4, -0.2073370639e-5, 0.2093887211e-6,
];
#[rustfmt::skip]
pub(crate) const Q0: [f64; 5] = [
    -0.1562499995e-1, 0.1430488765e-3, -0.6911147651e-5, 0.7621095161e-6, -0.934945152e-7,
];

/// Asymptotic amplitude corrections P₁, Q₁ in (8/x)², shared with Y₁.
#[rustfmt::skip]
pub(crate) const P1: [f64; 5] = [
    1.0, 0.183105e-2, -0.3516396496e-4, 0.245752017e-5, -0.240337019e-6,
];
#[rustfmt::skip]
pub(crate) const Q1: [f64; 5] = [
    0.04687499995, -0.2002690873e-3, 0.8449199096e-5, -0.88228987e-6, 0.105787412e-6,
];

/// Hankel-form pieces for ax ≥ 8: `(amplitude, z·Q, P, phase angle)`.
#[inline]
pub(crate) fn hankel_terms<T: BesselFloat>(
    ax: T,
    p: &[f64],
    q: &[f64],
    phase: f64,
) -> (T, T, T, T) {
    let z = T::from_f64(JY_THRESHOLD) / ax;
    let y = z * z;
    let amp = (T::from_f64(AMPLITUDE) / ax).sqrt();
    (amp, z * poly(y, q), poly(y, p), ax - T::from_f64(phase))
}

/// J₀(x) for any real x.
pub(crate) fn j0<T: BesselFloat>(x: T) -> T {
    let ax = x.abs();
    match Regime::select(ax, JY_THRESHOLD, false) {
        Regime::Series => {
            let y = x * x;
            poly(y, &J0_NUM) / poly(y, &J0_DEN)
        }
        Regime::Asymptotic => {
            let (amp, zq, p, xx) = hankel_terms(ax, &P0, &Q0, PHASE0);
            amp * (xx.cos() * p - xx.sin() * zq)
        }
    }
}

/// J₁(x) for any real x; odd in x.
pub(crate) fn j1<T: BesselFloat>(x: T) -> T {
    let ax = x.abs();
    match Regime::select(ax, JY_THRESHOLD, false) {
        Regime::Series => {
            let y = x * x;
            x * poly(y, &J1_NUM) / poly(y, &J1_DEN)
        }
        Regime::Asymptotic => {
            let (amp, zq, p, xx) = hankel_terms(ax, &P1, &Q1, PHASE1);
            let ans = amp * (xx.cos() * p - xx.sin() * zq);
            if x < T::zero() { -ans } else { ans }
        }
    }
}

/// Jₙ(x) for n ≥ 2 and any real x.
pub(crate) fn jn<T: BesselFloat>(n: u32, x: T) -> Result<T, Error> {
    if n < 2 {
        return Err(Error::InvalidOrder);
    }
    let ax = x.abs();
    if ax == T::zero() {
        return Ok(T::zero());
    }

    let direction = if ax > T::from_f64(n as f64) {
        Direction::Upward
    } else {
        Direction::Downward
    };
    log::trace!("jn: n = {n}, x = {x:?}, direction = {direction:?}");

    let ans = match direction {
        Direction::Upward => {
            let tox = T::from_f64(2.0) / ax;
            let mut state = RecurrenceState::new(Kind::Ordinary, j0(ax), j1(ax));
            state.walk(T::one(), tox, n - 1)
        }
        Direction::Downward => miller_j(n, ax)?,
    };

    if !ans.is_finite() {
        return Err(Error::Overflow);
    }
    Ok(if x < T::zero() && n % 2 == 1 { -ans } else { ans })
}
