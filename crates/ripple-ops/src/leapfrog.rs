//! Two-phase staggered (leapfrog) finite-difference integrator.
//!
//! Each sub-step advances the wavefunction with the explicit scheme, with
//! `h = dt/(2·dx²)` and `a = 4h + dt·V`:
//!
//! ```text
//! phase 1:  newRe = Re − a·Im − h·(Im_E + Im_W + Im_N + Im_S)
//! phase 2:  newIm = Im + a·newRe + h·(newRe_E + newRe_W + newRe_N + newRe_S)
//! ```
//!
//! Phase 2 reads *neighbouring* staged Re values, so every staged Re over
//! the whole grid must be finalized before any staged Im is computed.
//! Each phase runs row-parallel; the join at the end of the parallel pass
//! is the grid-wide barrier between phases, and [`WaveField::commit`]
//! promotes the staged pair before the next sub-step.
//!
//! Interior sites only; boundary sites stay at their constructed zero.

use rayon::prelude::*;
use ripple_core::SimConstants;
use ripple_lattice::{Grid, ImPhase, RePhase, ScalarField, WaveField};

/// The staggered finite-difference integrator.
///
/// Stateless: all per-run numbers come from [`SimConstants`] at call
/// time. `step(count)` is numerically identical to `count` calls of
/// `step(1)`.
///
/// # Stability
///
/// The scheme is only bounded when `dt` respects [`Leapfrog::max_dt`]
/// (reference configuration: `dt = 0.4·dx²`). Violations are not
/// detected; the field grows without bound.
#[derive(Clone, Copy, Debug, Default)]
pub struct Leapfrog;

impl Leapfrog {
    /// Advance the simulation by `count` sub-steps.
    pub fn step(
        &self,
        grid: &Grid,
        constants: &SimConstants,
        potential: &ScalarField,
        wave: &mut WaveField,
        count: u32,
    ) {
        for _ in 0..count {
            self.sub_step(grid, constants, potential, wave);
        }
    }

    /// Advisory stability limit on `dt` for spacing `dx` and peak
    /// potential magnitude `v_max`.
    ///
    /// The worst Fourier mode of the update couples the pair with
    /// `λ = dt·(4/dx² + V)`; the scheme is bounded while `λ <= 2`.
    /// Advisory only — nothing enforces it at step time.
    pub fn max_dt(dx: f32, v_max: f32) -> f32 {
        2.0 / (4.0 / (dx * dx) + v_max)
    }

    fn sub_step(
        &self,
        grid: &Grid,
        constants: &SimConstants,
        potential: &ScalarField,
        wave: &mut WaveField,
    ) {
        let n = grid.side();
        let h = constants.dt / (2.0 * constants.dx * constants.dx);
        let dt = constants.dt;
        let v = potential.as_slice();

        // Phase 1: reads the committed pair, writes staged Re.
        let RePhase { re, im, re_next } = wave.re_phase();
        re_next[n..n * n - n]
            .par_chunks_mut(n)
            .enumerate()
            .for_each(|(row, out)| {
                let y = row + 1;
                for x in 1..n - 1 {
                    let i = y * n + x;
                    let a = 4.0 * h + dt * v[i];
                    out[x] = re[i]
                        - a * im[i]
                        - h * (im[i + 1] + im[i - 1] + im[i + n] + im[i - n]);
                }
            });

        // Phase 2: reads staged Re (finalized above) and committed Im,
        // writes staged Im.
        let ImPhase { im, re_next, im_next } = wave.im_phase();
        im_next[n..n * n - n]
            .par_chunks_mut(n)
            .enumerate()
            .for_each(|(row, out)| {
                let y = row + 1;
                for x in 1..n - 1 {
                    let i = y * n + x;
                    let a = 4.0 * h + dt * v[i];
                    out[x] = im[i]
                        + a * re_next[i]
                        + h * (re_next[i + 1] + re_next[i - 1] + re_next[i + n] + re_next[i - n]);
                }
            });

        wave.commit();
    }
}

/// Advance Im by `dt/2` with the phase-2 operator evaluated from the
/// current Re, in place, interior only.
///
/// Establishes the half-step offset the staggered scheme requires
/// between a freshly seeded Re and its Im partner.
pub(crate) fn half_step_im(
    grid: &Grid,
    constants: &SimConstants,
    potential: &ScalarField,
    wave: &mut WaveField,
) {
    let n = grid.side();
    let h = constants.dt / (4.0 * constants.dx * constants.dx);
    let half_dt = 0.5 * constants.dt;
    let v = potential.as_slice();
    let (re, im) = wave.pair_mut();
    for y in 1..n - 1 {
        for x in 1..n - 1 {
            let i = y * n + x;
            let a = 4.0 * h + half_dt * v[i];
            im[i] += a * re[i] + h * (re[i + 1] + re[i - 1] + re[i + n] + re[i - n]);
        }
    }
}
