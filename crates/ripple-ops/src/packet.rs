//! Gaussian wave-packet initialization.

use std::f32::consts::PI;

use num_complex::Complex;
use ripple_core::SimConstants;
use ripple_lattice::{Grid, ScalarField, WaveField};

use crate::leapfrog::half_step_im;

/// Seeds the wavefunction with a minimum-uncertainty Gaussian packet.
///
/// At every interior site:
///
/// ```text
/// ψ  = exp(−(X−cx)²/(2sx²) − (Y−cy)²/(2sy²)) / (2π·sx·sy)
/// Re = ψ·cos(px·X + py·Y)      Im = ψ·sin(px·X + py·Y)
/// ```
///
/// then Im is advanced by half a timestep with the integrator's own
/// operator, establishing the offset the staggered scheme requires.
/// Seeding fully overwrites the wavefunction (both buffer pairs) and
/// must run once before the first integrator call; re-running resets
/// and re-synchronizes.
///
/// Constructed via [`GaussianPacket::builder`].
#[derive(Clone, Copy, Debug)]
pub struct GaussianPacket {
    center: (f32, f32),
    momentum: (f32, f32),
    width: (f32, f32),
}

/// Builder for [`GaussianPacket`].
///
/// Defaults: centered at the origin, at rest, width 0.1 per axis.
#[derive(Clone, Copy, Debug)]
pub struct GaussianPacketBuilder {
    center: (f32, f32),
    momentum: (f32, f32),
    width: (f32, f32),
}

impl GaussianPacket {
    /// Create a new builder for configuring a packet.
    pub fn builder() -> GaussianPacketBuilder {
        GaussianPacketBuilder {
            center: (0.0, 0.0),
            momentum: (0.0, 0.0),
            width: (0.1, 0.1),
        }
    }

    /// Packet center in normalized coordinates.
    pub fn center(&self) -> (f32, f32) {
        self.center
    }

    /// Seed `wave` with this packet and align the staggered pair.
    pub fn seed(
        &self,
        grid: &Grid,
        constants: &SimConstants,
        potential: &ScalarField,
        wave: &mut WaveField,
    ) {
        let n = grid.side();
        let (cx, cy) = self.center;
        let (px, py) = self.momentum;
        let (sx, sy) = self.width;
        let norm = 1.0 / (2.0 * PI * sx * sy);
        let gx = 1.0 / (2.0 * sx * sx);
        let gy = 1.0 / (2.0 * sy * sy);

        wave.clear();
        let (re, im) = wave.pair_mut();
        for y in 1..n - 1 {
            let yc = grid.coord(y);
            let dy = yc - cy;
            for x in 1..n - 1 {
                let xc = grid.coord(x);
                let dx = xc - cx;
                let envelope = norm * (-dx * dx * gx - dy * dy * gy).exp();
                let amp = Complex::from_polar(envelope, px * xc + py * yc);
                let i = y * n + x;
                re[i] = amp.re;
                im[i] = amp.im;
            }
        }

        half_step_im(grid, constants, potential, wave);
        wave.sync_previous();
    }
}

impl GaussianPacketBuilder {
    /// Packet center `(cx, cy)` in normalized [−1, 1] coordinates.
    pub fn center(mut self, cx: f32, cy: f32) -> Self {
        self.center = (cx, cy);
        self
    }

    /// Packet momentum `(px, py)`.
    pub fn momentum(mut self, px: f32, py: f32) -> Self {
        self.momentum = (px, py);
        self
    }

    /// Gaussian widths `(sx, sy)`. Must be positive.
    pub fn width(mut self, sx: f32, sy: f32) -> Self {
        self.width = (sx, sy);
        self
    }

    /// Build the packet, validating all parameters.
    ///
    /// # Errors
    ///
    /// Returns `Err` if either width is not finite and positive, or if
    /// the center or momentum contains a non-finite component.
    pub fn build(self) -> Result<GaussianPacket, String> {
        let (sx, sy) = self.width;
        if !(sx > 0.0 && sx.is_finite()) || !(sy > 0.0 && sy.is_finite()) {
            return Err(format!("widths must be finite and > 0, got ({sx}, {sy})"));
        }
        let (cx, cy) = self.center;
        if !cx.is_finite() || !cy.is_finite() {
            return Err(format!("center must be finite, got ({cx}, {cy})"));
        }
        let (px, py) = self.momentum;
        if !px.is_finite() || !py.is_finite() {
            return Err(format!("momentum must be finite, got ({px}, {py})"));
        }
        Ok(GaussianPacket {
            center: self.center,
            momentum: self.momentum,
            width: self.width,
        })
    }
}
