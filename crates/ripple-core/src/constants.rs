//! Per-run simulation constants.

/// Numeric constants fixed for the lifetime of a simulation.
///
/// Derived once at startup from the grid side and the configured scale
/// factors; every operator reads these and none mutates them.
///
/// # Stability precondition
///
/// The explicit staggered scheme is only bounded when `dt` is a small
/// multiple of `dx²` relative to the potential magnitude (the reference
/// configuration uses `dt = 0.4·dx²`). Violating the bound produces
/// unbounded growth; it is the caller's responsibility and is never
/// detected at step time. See `Leapfrog::max_dt` in `ripple-ops` for an
/// advisory limit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimConstants {
    /// Lattice side length in sites.
    pub n: usize,
    /// Lattice spacing, `1/n`.
    pub dx: f32,
    /// Timestep per sub-step.
    pub dt: f32,
    /// Characteristic potential energy scale.
    pub v_char: f32,
    /// Pulse-injection coupling constant.
    pub coupling: f32,
    /// Integrator sub-steps per presented frame.
    pub substeps: u32,
}

impl SimConstants {
    /// Derive the constants for a side-`n` lattice.
    ///
    /// `dx = 1/n` and `dt = dt_factor·dx²`. The computation is done in
    /// `f64` and narrowed once, so the stored `f32` values are the best
    /// available roundings.
    pub fn derive(n: usize, dt_factor: f64, v_char: f64, coupling: f64, substeps: u32) -> Self {
        let dx = 1.0 / n as f64;
        let dt = dt_factor * dx * dx;
        Self {
            n,
            dx: dx as f32,
            dt: dt as f32,
            v_char: v_char as f32,
            coupling: coupling as f32,
            substeps,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derive_reference_configuration() {
        let c = SimConstants::derive(800, 0.4, 2e5, 1e4, 1);
        assert_eq!(c.n, 800);
        assert!((c.dx - 1.0 / 800.0).abs() < 1e-12);
        let expected_dt = 0.4 / (800.0f64 * 800.0) as f64;
        assert!((c.dt as f64 - expected_dt).abs() < 1e-12);
        assert_eq!(c.v_char, 2e5);
        assert_eq!(c.substeps, 1);
    }

    #[test]
    fn dt_scales_quadratically_with_spacing() {
        let coarse = SimConstants::derive(100, 0.4, 1.0, 1.0, 1);
        let fine = SimConstants::derive(200, 0.4, 1.0, 1.0, 1);
        let ratio = coarse.dt / fine.dt;
        assert!((ratio - 4.0).abs() < 1e-4, "halving dx quarters dt, got ratio {ratio}");
    }
}
