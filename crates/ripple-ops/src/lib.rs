//! Lattice operators for the Ripple solver.
//!
//! Each operator is a small configured struct acting on the field types
//! from `ripple-lattice`:
//!
//! - [`PotentialGenerator`] fills the potential from a preset.
//! - [`GaussianPacket`] seeds the wavefunction and aligns the staggered
//!   pair with a half-step.
//! - [`PulseInjector`] adds a localized source wave in place.
//! - [`Leapfrog`] advances the field with the two-phase staggered update.
//!
//! All operators are deterministic, write interior sites only (the
//! potential generator excepted, which covers the whole lattice), and
//! hold no mutable state of their own.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod leapfrog;
mod packet;
mod potential;
mod pulse;

pub use leapfrog::Leapfrog;
pub use packet::{GaussianPacket, GaussianPacketBuilder};
pub use potential::PotentialGenerator;
pub use pulse::{PulseInjector, PulseInjectorBuilder};
