//! Lattice geometry and field storage for the Ripple solver.
//!
//! [`Grid`] fixes the square lattice geometry; [`WaveField`] owns the
//! double-buffered wavefunction pair; [`ScalarField`] holds the potential
//! and [`ColorField`] the rendered output. All buffers are exclusively
//! owned by the core and mutated only by the currently executing phase.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod color;
mod error;
mod grid;
mod scalar;
mod wave;

pub use color::ColorField;
pub use error::LatticeError;
pub use grid::Grid;
pub use scalar::ScalarField;
pub use wave::{ImPhase, RePhase, WaveField};
