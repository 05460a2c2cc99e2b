//! Driver-facing facade for the Ripple solver.
//!
//! [`Simulation`] owns the lattice, fields, and operators and exposes
//! the per-frame surface an interactive shell drives: advance, inject,
//! render, and the discrete [`Action`]s. The shell remains responsible
//! for the window, event polling, and presentation; this crate holds
//! everything that has testable semantics — configuration validation,
//! toggle/clamp/wrap rules, and edge detection.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod config;
mod control;
mod sim;

pub use config::{ConfigError, SimConfig};
pub use control::{Action, ControlState, EdgeDetector, PointerState};
pub use sim::{FrameMetrics, Simulation};
