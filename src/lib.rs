//! Real-argument Bessel functions and their relatives.
//!
//! This crate provides Bessel functions of the first kind (J), second kind
//! (Y), modified first kind (I) and modified second kind (K) for integer
//! and real non-negative order, together with Airy functions, spherical
//! Bessel functions, Struve functions H₀/H₁ and a Chebyshev series
//! approximator.
//!
//! Integer orders use rational approximations for orders 0 and 1 (about
//! 1e-7 relative accuracy) and a stabilized three-term recurrence above.
//! Real orders use continued fractions and Temme's series and reach close
//! to machine precision.
//!
//! All functions are generic over [`BesselFloat`] (`f64` and `f32`).
//!
//! ```
//! use real_bessel::{bessel_jy, besselj};
//!
//! let j2 = besselj(2, 1.0_f64).unwrap();
//! let v = bessel_jy(1.0_f64, 2.0).unwrap();
//! assert!((j2 - v.j).abs() < 1e-6);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod chebyshev;
pub mod machine;
pub mod types;

mod airy;
mod algo;
mod besi;
mod besj;
mod besk;
mod besy;
mod sphbes;
mod struve;
mod utils;

pub use chebyshev::{ChebyshevSeries, MIN_FIT_DEGREE};
pub use machine::BesselFloat;
pub use types::{AiryValues, Error, IkValues, JyValues, SphericalValues};

#[inline]
fn check_finite<T: BesselFloat>(x: T) -> Result<(), Error> {
    if x.is_finite() {
        Ok(())
    } else {
        Err(Error::InvalidArgument)
    }
}

#[inline]
fn check_positive<T: BesselFloat>(x: T) -> Result<(), Error> {
    check_finite(x)?;
    if x <= T::zero() {
        return Err(Error::InvalidArgument);
    }
    Ok(())
}

// ── Integer order ──

/// Bessel function of the first kind of order zero, J₀(x).
pub fn besselj0<T: BesselFloat>(x: T) -> T {
    besj::j0(x)
}

/// Bessel function of the first kind of order one, J₁(x).
pub fn besselj1<T: BesselFloat>(x: T) -> T {
    besj::j1(x)
}

/// Bessel function of the second kind of order zero, Y₀(x), x > 0.
pub fn bessely0<T: BesselFloat>(x: T) -> Result<T, Error> {
    check_positive(x)?;
    Ok(besy::y0(x))
}

/// Bessel function of the second kind of order one, Y₁(x), x > 0.
pub fn bessely1<T: BesselFloat>(x: T) -> Result<T, Error> {
    check_positive(x)?;
    Ok(besy::y1(x))
}

/// Modified Bessel function of the first kind of order zero, I₀(x).
pub fn besseli0<T: BesselFloat>(x: T) -> T {
    besi::i0(x)
}

/// Modified Bessel function of the first kind of order one, I₁(x).
pub fn besseli1<T: BesselFloat>(x: T) -> T {
    besi::i1(x)
}

/// Modified Bessel function of the second kind of order zero, K₀(x), x > 0.
pub fn besselk0<T: BesselFloat>(x: T) -> Result<T, Error> {
    check_positive(x)?;
    Ok(besk::k0(x))
}

/// Modified Bessel function of the second kind of order one, K₁(x), x > 0.
pub fn besselk1<T: BesselFloat>(x: T) -> Result<T, Error> {
    check_positive(x)?;
    Ok(besk::k1(x))
}

/// Bessel function of the first kind, Jₙ(x), for any finite x.
///
/// `besselj(0, 0.0) == 1` and `besselj(n, 0.0) == 0` for n ≥ 1.
pub fn besselj<T: BesselFloat>(n: u32, x: T) -> Result<T, Error> {
    check_finite(x)?;
    match n {
        0 => Ok(besj::j0(x)),
        1 => Ok(besj::j1(x)),
        _ => besj::jn(n, x),
    }
}

/// Bessel function of the second kind, Yₙ(x), x > 0.
pub fn bessely<T: BesselFloat>(n: u32, x: T) -> Result<T, Error> {
    check_positive(x)?;
    match n {
        0 => Ok(besy::y0(x)),
        1 => Ok(besy::y1(x)),
        _ => besy::yn(n, x),
    }
}

/// Modified Bessel function of the first kind, Iₙ(x), for any finite x.
pub fn besseli<T: BesselFloat>(n: u32, x: T) -> Result<T, Error> {
    check_finite(x)?;
    match n {
        0 => Ok(besi::i0(x)),
        1 => Ok(besi::i1(x)),
        _ => besi::i_n(n, x),
    }
}

/// Modified Bessel function of the second kind, Kₙ(x), x > 0.
pub fn besselk<T: BesselFloat>(n: u32, x: T) -> Result<T, Error> {
    check_positive(x)?;
    match n {
        0 => Ok(besk::k0(x)),
        1 => Ok(besk::k1(x)),
        _ => besk::kn(n, x),
    }
}

// ── Real order ──

/// J_ν(x), Y_ν(x) and their first derivatives for ν ≥ 0, x > 0.
///
/// Fails with [`Error::ConvergenceFailure`] when a continued fraction or
/// series hits the iteration cap (x beyond roughly 10⁴), and with
/// [`Error::Overflow`] when Y_ν(x) is not representable.
pub fn bessel_jy<T: BesselFloat>(x: T, nu: T) -> Result<JyValues<T>, Error> {
    algo::bessjy::bessjy(x, nu)
}

/// I_ν(x), K_ν(x) and their first derivatives for ν ≥ 0, x > 0.
pub fn bessel_ik<T: BesselFloat>(x: T, nu: T) -> Result<IkValues<T>, Error> {
    algo::bessik::bessik(x, nu)
}

// ── Derived functions ──

/// Airy functions Ai(x), Bi(x) and their derivatives.
pub fn airy<T: BesselFloat>(x: T) -> Result<AiryValues<T>, Error> {
    airy::airy(x)
}

/// Spherical Bessel functions jₙ(x), yₙ(x) and their derivatives, x > 0.
pub fn spherical_bessel<T: BesselFloat>(n: u32, x: T) -> Result<SphericalValues<T>, Error> {
    check_positive(x)?;
    sphbes::sphbes(n, x)
}

/// Struve function H₀(x); odd in x.
pub fn struve_h0<T: BesselFloat>(x: T) -> T {
    struve::struve_h0(x)
}

/// Struve function H₁(x); even in x.
pub fn struve_h1<T: BesselFloat>(x: T) -> T {
    struve::struve_h1(x)
}
