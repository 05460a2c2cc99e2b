//! Potential-field preset generation.

use std::f32::consts::PI;

use ripple_core::Preset;
use ripple_lattice::{Grid, ScalarField};

/// Radius of the circular well/barrier presets in normalized coordinates.
const DISC_RADIUS: f32 = 0.3;

/// Spatial frequency of the corrugation cosine, in half-turns per unit.
const CORRUGATION: f32 = 2.1 * PI;

/// Fills the potential field from a [`Preset`].
///
/// A pure function of `(preset, grid)`: regeneration clears the field
/// and then overwrites it site by site, boundary included. Deterministic
/// and idempotent — regenerating the same preset yields an identical
/// field.
#[derive(Clone, Copy, Debug)]
pub struct PotentialGenerator {
    v_char: f32,
}

impl PotentialGenerator {
    /// Create a generator with characteristic energy `v_char`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `v_char` is not finite and positive.
    pub fn new(v_char: f32) -> Result<Self, String> {
        if !(v_char > 0.0 && v_char.is_finite()) {
            return Err(format!("v_char must be finite and > 0, got {v_char}"));
        }
        Ok(Self { v_char })
    }

    /// Characteristic energy scale.
    pub fn v_char(&self) -> f32 {
        self.v_char
    }

    /// Regenerate `out` for `preset`.
    pub fn generate(&self, grid: &Grid, preset: Preset, out: &mut ScalarField) {
        let n = grid.side();
        let v_char = self.v_char;
        out.fill(0.0);
        let data = out.as_mut_slice();
        for y in 0..n {
            let yc = grid.coord(y);
            for x in 0..n {
                let xc = grid.coord(x);
                let r2 = xc * xc + yc * yc;
                let i = y * n + x;
                match preset {
                    Preset::Well => {
                        if r2 < DISC_RADIUS * DISC_RADIUS {
                            data[i] = -v_char;
                        }
                    }
                    Preset::Barrier => {
                        if r2 < DISC_RADIUS * DISC_RADIUS {
                            data[i] = v_char;
                        }
                    }
                    Preset::Harmonic => {
                        data[i] = v_char * r2;
                    }
                    Preset::CorrugatedQuartic => {
                        data[i] = v_char / 4.0
                            * ((CORRUGATION * xc).cos() + (CORRUGATION * yc).cos())
                            + v_char * r2 * r2;
                    }
                }
            }
        }
    }
}
