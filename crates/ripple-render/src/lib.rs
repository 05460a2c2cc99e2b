//! Rendering pipeline for the Ripple solver.
//!
//! [`Renderer`] maps the wavefunction and potential to an RGB buffer;
//! [`Downsampler`] optionally box-filters it to a lower presentation
//! resolution. Both run strictly after the frame's last integrator
//! sub-step and perform no synchronization of their own.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod downsample;
mod render;

pub use downsample::Downsampler;
pub use render::Renderer;
