//! Miller's backward recurrence for Jₙ and Iₙ.
//!
//! Starting from an even order m well above n with the seed (0, 1), the
//! recurrence runs down to order 0. The unnormalized sequence is
//! proportional to the true one; J is normalized by
//!   1 = J₀ + 2·(J₂ + J₄ + …)
//! and I by the ratio against an independently computed I₀.
//!
//! When (x/2)² is below ε·(n+1) the series for Jₙ and Iₙ has collapsed to
//! its leading term (x/2)ⁿ/n!, which is returned directly; the recurrence
//! coefficients 2k/x would otherwise outgrow the rescaling.

use num_traits::Float;

use crate::algo::constants::{ACC, BIGNI, BIGNO};
use crate::algo::recur::{Kind, RecurrenceState};
use crate::besi::i0;
use crate::machine::BesselFloat;
use crate::types::Error;

/// Starting order for the J recurrence: 2·⌈(n + √(ACC·n))/2⌉.
#[inline]
fn start_order_j(n: u32) -> Result<u32, Error> {
    let half = (f64::from(n) + Float::sqrt(ACC * f64::from(n))) / 2.0;
    let m = 2 * (Float::ceil(half) as u64);
    u32::try_from(m).map_err(|_| Error::InvalidOrder)
}

/// Starting order for the I recurrence: 2·(n + ⌊√(ACC·n)⌋).
#[inline]
fn start_order_i(n: u32) -> Result<u32, Error> {
    let extra = Float::sqrt(ACC * f64::from(n)) as u64;
    let m = 2 * (u64::from(n) + extra);
    u32::try_from(m).map_err(|_| Error::InvalidOrder)
}

/// True when the second series term is below ε relative to the first.
#[inline]
fn leading_term_suffices<T: BesselFloat>(n: u32, x: T) -> bool {
    let h = x / T::from_f64(2.0);
    h * h < T::tol() * T::from_f64(f64::from(n) + 1.0)
}

/// (x/2)ⁿ/n!, built factor by factor so it underflows instead of
/// overflowing.
fn leading_term<T: BesselFloat>(n: u32, x: T) -> T {
    let h = x / T::from_f64(2.0);
    let mut t = T::one();
    for k in 1..=n {
        t = t * h / T::from_f64(f64::from(k));
        if t == T::zero() {
            break;
        }
    }
    t
}

/// Jₙ(x) for x > 0 by backward recurrence, normalized by the even-order
/// sum rule.
pub(crate) fn miller_j<T: BesselFloat>(n: u32, x: T) -> Result<T, Error> {
    if leading_term_suffices(n, x) {
        return Ok(leading_term(n, x));
    }
    let tox = T::from_f64(2.0) / x;
    let bigno = T::from_f64(BIGNO);
    let bigni = T::from_f64(BIGNI);
    let m = start_order_j(n)?;

    let mut state = RecurrenceState::new(Kind::Ordinary, T::zero(), T::one());
    let mut ans = T::zero();
    let mut sum = T::zero();
    let mut even = false;
    let mut rescales = 0_u32;

    for j in (1..=m).rev() {
        state.step(T::from_f64(f64::from(j)), tox);
        while state.cur.abs() > bigno {
            state.rescale(bigni);
            ans = ans * bigni;
            sum = sum * bigni;
            rescales += 1;
        }
        if even {
            sum = sum + state.cur;
        }
        even = !even;
        if j == n {
            ans = state.prev;
        }
    }
    if rescales > 0 {
        log::trace!("miller_j: n = {n}, x = {x:?}, {rescales} rescales from order {m}");
    }

    sum = T::from_f64(2.0) * sum - state.cur;
    Ok(ans / sum)
}

/// Iₙ(x) for x > 0 by backward recurrence, normalized against I₀(x).
pub(crate) fn miller_i<T: BesselFloat>(n: u32, x: T) -> Result<T, Error> {
    if leading_term_suffices(n, x) {
        return Ok(leading_term(n, x));
    }
    let tox = T::from_f64(2.0) / x;
    let bigno = T::from_f64(BIGNO);
    let bigni = T::from_f64(BIGNI);
    let m = start_order_i(n)?;

    let mut state = RecurrenceState::new(Kind::Modified, T::zero(), T::one());
    let mut ans = T::zero();
    let mut rescales = 0_u32;

    for j in (1..=m).rev() {
        state.step(T::from_f64(f64::from(j)), tox);
        while state.cur.abs() > bigno {
            state.rescale(bigni);
            ans = ans * bigni;
            rescales += 1;
        }
        if j == n {
            ans = state.prev;
        }
    }
    if rescales > 0 {
        log::trace!("miller_i: n = {n}, x = {x:?}, {rescales} rescales from order {m}");
    }

    Ok(ans * i0(x) / state.cur)
}
