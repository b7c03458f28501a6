//! Three-term order recurrences.
//!
//! Ordinary Bessel functions satisfy
//!   f_{k+1} = (2k/x)·f_k − f_{k−1}
//! and modified ones
//!   f_{k+1} = (2k/x)·f_k + f_{k−1}   (K, upward)
//!   f_{k−1} = (2k/x)·f_k + f_{k+1}   (I, downward)
//! so one step in either direction is `k·tox·cur ∓ prev`, with `prev` the
//! neighbour on the far side.

use crate::machine::BesselFloat;

/// Sign of the `prev` term in one recurrence step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Kind {
    /// J and Y: `k·tox·cur − prev`.
    Ordinary,
    /// I and K: `k·tox·cur + prev`.
    Modified,
}

/// Transient (previous, current) pair walked along a recurrence.
///
/// Never outlives the call that creates it.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RecurrenceState<T: BesselFloat> {
    pub(crate) prev: T,
    pub(crate) cur: T,
    kind: Kind,
}

impl<T: BesselFloat> RecurrenceState<T> {
    #[inline]
    pub(crate) fn new(kind: Kind, prev: T, cur: T) -> Self {
        Self { prev, cur, kind }
    }

    /// Advance one order using coefficient `k·tox`; returns the new value.
    #[inline]
    pub(crate) fn step(&mut self, k: T, tox: T) -> T {
        let next = match self.kind {
            Kind::Ordinary => k * tox * self.cur - self.prev,
            Kind::Modified => k * tox * self.cur + self.prev,
        };
        self.prev = self.cur;
        self.cur = next;
        next
    }

    /// Multiply both stored values by `s`.
    #[inline]
    pub(crate) fn rescale(&mut self, s: T) {
        self.prev = self.prev * s;
        self.cur = self.cur * s;
    }

    /// Walk upward from the stored orders (k₀−1, k₀) through `count`
    /// steps, using `k₀, k₀+1, …` as multipliers.
    #[inline]
    pub(crate) fn walk(&mut self, k0: T, tox: T, count: u32) -> T {
        let mut k = k0;
        for _ in 0..count {
            self.step(k, tox);
            k = k + T::one();
        }
        self.cur
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinary_step() {
        // 1·1·3 − 1 → 2
        let mut s = RecurrenceState::new(Kind::Ordinary, 1.0_f64, 3.0);
        assert_eq!(s.step(1.0, 1.0), 2.0);
        assert_eq!(s.prev, 3.0);
        assert_eq!(s.cur, 2.0);
    }

    #[test]
    fn modified_walk() {
        // f = 1, 1; multipliers 1, 2, 3 with tox = 1: 2, 5, 17
        let mut s = RecurrenceState::new(Kind::Modified, 1.0_f64, 1.0);
        assert_eq!(s.walk(1.0, 1.0, 3), 17.0);
        assert_eq!(s.prev, 5.0);
    }

    #[test]
    fn rescale_both() {
        let mut s = RecurrenceState::new(Kind::Ordinary, 2.0_f64, 4.0);
        s.rescale(0.5);
        assert_eq!((s.prev, s.cur), (1.0, 2.0));
    }
}
