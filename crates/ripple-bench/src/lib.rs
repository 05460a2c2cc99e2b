//! Benchmark profiles for the Ripple solver.
//!
//! Provides pre-seeded simulation states at the resolutions the
//! benchmarks exercise:
//!
//! - [`reference_profile`]: the full 800-site interactive lattice
//! - [`small_profile`]: a 200-site lattice for quick comparisons

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use ripple_core::{Preset, SimConstants};
use ripple_lattice::{Grid, ScalarField, WaveField};
use ripple_ops::{GaussianPacket, PotentialGenerator};

/// A ready-to-step solver state.
pub struct Profile {
    /// Lattice geometry.
    pub grid: Grid,
    /// Derived constants.
    pub constants: SimConstants,
    /// Harmonic potential at the profile's energy scale.
    pub potential: ScalarField,
    /// Seeded wavefunction.
    pub wave: WaveField,
}

/// Build a profile at side `n` with the reference packet.
pub fn profile(n: usize, v_char: f64) -> Profile {
    let grid = Grid::new(n).expect("benchmark grid");
    let constants = SimConstants::derive(n, 0.4, v_char, 1e4, 1);
    let mut potential = ScalarField::new(&grid);
    PotentialGenerator::new(constants.v_char)
        .expect("benchmark v_char")
        .generate(&grid, Preset::Harmonic, &mut potential);
    let mut wave = WaveField::new(&grid);
    GaussianPacket::builder()
        .center(0.6, 0.0)
        .momentum(-80.0, 0.0)
        .width(0.1, 0.1)
        .build()
        .expect("benchmark packet")
        .seed(&grid, &constants, &potential, &mut wave);
    Profile {
        grid,
        constants,
        potential,
        wave,
    }
}

/// Full interactive resolution: 800×800 sites.
pub fn reference_profile() -> Profile {
    profile(800, 1e5)
}

/// Quick-comparison resolution: 200×200 sites.
pub fn small_profile() -> Profile {
    profile(200, 1e4)
}
