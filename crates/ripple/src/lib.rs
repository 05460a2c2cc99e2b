//! Ripple: a real-time finite-difference solver for the 2-D
//! time-dependent Schrödinger equation, rendered as a pseudo-colored
//! field.
//!
//! This is the top-level facade crate re-exporting the public API from
//! the Ripple sub-crates. For most users, adding `ripple` as a single
//! dependency is sufficient: build a [`engine::Simulation`] and drive
//! it once per presented frame.
//!
//! # Quick start
//!
//! ```rust
//! use ripple::prelude::*;
//!
//! let config = SimConfig {
//!     grid_side: 64,
//!     v_char: 1e2,
//!     ..Default::default()
//! };
//! let mut sim = Simulation::new(&config).unwrap();
//! let mut controls = ControlState::new(config.brightness_step);
//!
//! // One interactive frame: inject at the pointer, advance, render.
//! sim.inject_at(0.2, -0.1);
//! sim.advance_frame();
//! sim.handle_action(&mut controls, Action::ToggleColorMode);
//! let buffer = sim.render(&controls);
//! assert_eq!(buffer.side(), 64);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `ripple-core` | Simulation constants, presets, color modes |
//! | [`lattice`] | `ripple-lattice` | Grid geometry and field storage |
//! | [`ops`] | `ripple-ops` | Potential, packet, pulse, and integrator operators |
//! | [`render`] | `ripple-render` | Color mapping and box-filter downsampling |
//! | [`engine`] | `ripple-engine` | The driver-facing simulation facade |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and simulation constants (`ripple-core`).
pub use ripple_core as types;

/// Lattice geometry and field storage (`ripple-lattice`).
pub use ripple_lattice as lattice;

/// Lattice operators (`ripple-ops`).
pub use ripple_ops as ops;

/// Rendering pipeline (`ripple-render`).
pub use ripple_render as render;

/// Driver-facing simulation facade (`ripple-engine`).
pub use ripple_engine as engine;

/// The most commonly used types, re-exported flat.
pub mod prelude {
    pub use ripple_core::{ColorMode, Preset, SimConstants};
    pub use ripple_engine::{
        Action, ConfigError, ControlState, EdgeDetector, PointerState, SimConfig, Simulation,
    };
    pub use ripple_lattice::{ColorField, Grid, ScalarField, WaveField};
    pub use ripple_ops::{GaussianPacket, Leapfrog, PotentialGenerator, PulseInjector};
    pub use ripple_render::{Downsampler, Renderer};
}
