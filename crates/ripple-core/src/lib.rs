//! Core types for the Ripple solver.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! simulation constants shared by every operator, the potential preset
//! enum, and the color mode selector.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod constants;
mod preset;
mod types;

pub use constants::SimConstants;
pub use preset::Preset;
pub use types::ColorMode;
