//! Simulation configuration, validation, and error types.

use std::error::Error;
use std::fmt;

use ripple_lattice::LatticeError;

/// Construction-time configuration for a [`Simulation`](crate::Simulation).
///
/// Defaults are the reference interactive configuration: an 800-site
/// lattice, `dt = 0.4·dx²`, a strong potential, and a fast packet
/// launched from the right half of the domain toward the center.
///
/// The timestep is derived as `dt = dt_factor·dx²`; the scheme is only
/// bounded for small factors relative to the potential magnitude
/// (`dt_factor ≈ 0.4` in the reference configuration). That bound is a
/// documented precondition, deliberately not enforced here — see
/// `Leapfrog::max_dt` for the advisory limit.
#[derive(Clone, Debug)]
pub struct SimConfig {
    /// Lattice side length in sites.
    pub grid_side: usize,
    /// Presentation reduction factor; 1 disables downsampling. Must
    /// divide `grid_side`.
    pub upscale_factor: usize,
    /// Timestep factor `k` in `dt = k·dx²`.
    pub dt_factor: f64,
    /// Characteristic potential energy scale.
    pub v_char: f64,
    /// Pulse-injection coupling constant.
    pub coupling: f64,
    /// Integrator sub-steps per presented frame.
    pub substeps: u32,
    /// Initial packet center in normalized [−1, 1] coordinates.
    pub packet_center: (f32, f32),
    /// Initial packet momentum.
    pub packet_momentum: (f32, f32),
    /// Initial packet Gaussian widths.
    pub packet_width: (f32, f32),
    /// Pulse source Gaussian widths.
    pub pulse_width: (f32, f32),
    /// Pulse source radial wavenumber.
    pub pulse_wavenumber: f32,
    /// Brightness increment per action, in `(0, 1)`.
    pub brightness_step: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            grid_side: 800,
            upscale_factor: 1,
            dt_factor: 0.4,
            v_char: 2e5,
            coupling: 1e4,
            substeps: 1,
            packet_center: (0.6, 0.0),
            packet_momentum: (-100.0, 0.0),
            packet_width: (0.1, 0.1),
            pulse_width: (0.1, 0.1),
            pulse_wavenumber: 100.0,
            brightness_step: 0.1,
        }
    }
}

impl SimConfig {
    /// Check structural invariants.
    ///
    /// Operator-level parameter validation (widths, energy scale)
    /// happens again in the operator builders at construction; this
    /// catches everything with a dedicated error variant first.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_side < 3 {
            return Err(ConfigError::Lattice(LatticeError::GridTooSmall {
                side: self.grid_side,
            }));
        }
        if self.upscale_factor == 0 || self.grid_side % self.upscale_factor != 0 {
            return Err(ConfigError::UpscaleDoesNotDivide {
                side: self.grid_side,
                factor: self.upscale_factor,
            });
        }
        if !(self.dt_factor > 0.0 && self.dt_factor.is_finite()) {
            return Err(ConfigError::InvalidScale {
                name: "dt_factor",
                value: self.dt_factor,
            });
        }
        if self.substeps == 0 {
            return Err(ConfigError::ZeroSubsteps);
        }
        if !(self.v_char > 0.0 && self.v_char.is_finite()) {
            return Err(ConfigError::InvalidScale {
                name: "v_char",
                value: self.v_char,
            });
        }
        if !(self.coupling > 0.0 && self.coupling.is_finite()) {
            return Err(ConfigError::InvalidScale {
                name: "coupling",
                value: self.coupling,
            });
        }
        if !(self.brightness_step > 0.0 && self.brightness_step < 1.0) {
            return Err(ConfigError::InvalidScale {
                name: "brightness_step",
                value: self.brightness_step as f64,
            });
        }
        Ok(())
    }
}

/// Errors detected while building a [`Simulation`](crate::Simulation).
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// Lattice construction rejected the configuration.
    Lattice(LatticeError),
    /// The upscale factor does not evenly divide the grid side.
    UpscaleDoesNotDivide {
        /// Configured grid side.
        side: usize,
        /// Rejected factor.
        factor: usize,
    },
    /// A scale parameter is out of range.
    InvalidScale {
        /// Parameter name.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// Sub-steps per frame must be at least 1.
    ZeroSubsteps,
    /// An operator builder rejected its parameters.
    Operator {
        /// The builder's rejection message.
        reason: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lattice(err) => write!(f, "{err}"),
            Self::UpscaleDoesNotDivide { side, factor } => {
                write!(f, "upscale factor {factor} does not divide grid side {side}")
            }
            Self::InvalidScale { name, value } => {
                write!(f, "{name} is out of range: {value}")
            }
            Self::ZeroSubsteps => write!(f, "substeps per frame must be at least 1"),
            Self::Operator { reason } => write!(f, "operator configuration: {reason}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Lattice(err) => Some(err),
            _ => None,
        }
    }
}

impl From<LatticeError> for ConfigError {
    fn from(err: LatticeError) -> Self {
        Self::Lattice(err)
    }
}
