//! Internal numerical kernels.
//!
//! All items are `pub(crate)`; the upper-interface modules (`besj`, `besy`,
//! `besi`, `besk`, `airy`, `sphbes`) validate arguments and call in here.
//!
//! Kernels report failure through [`Error`](crate::Error):
//! `ConvergenceFailure` when a continued fraction or series reaches
//! [`MAXIT`](constants::MAXIT) iterations, `Overflow` when a recurrence
//! leaves the representable range.

pub(crate) mod constants;

// Shared recurrences
pub(crate) mod miller;
pub(crate) mod recur;

// Real order
pub(crate) mod beschb;
pub(crate) mod bessik;
pub(crate) mod bessjy;
