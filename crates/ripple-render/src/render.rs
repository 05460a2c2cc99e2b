//! Field-to-color mapping.

use rayon::prelude::*;
use ripple_core::ColorMode;
use ripple_lattice::{ColorField, Grid, ScalarField, WaveField};

/// Overlay tint for positive potential, linear RGB.
const TINT_POSITIVE: [f32; 3] = [54.0 / 255.0, 14.0 / 255.0, 97.0 / 255.0];

/// Overlay tint for negative potential, linear RGB.
const TINT_NEGATIVE: [f32; 3] = [97.0 / 255.0, 14.0 / 255.0, 54.0 / 255.0];

/// Maps simulation state to an RGB buffer.
///
/// Uses the most recently committed (Re, Im) pair plus the retired Im —
/// the staggered partner of the current one:
///
/// - [`ColorMode::Density`]: all channels get `Re² + Im_prev·Im`, a
///   probability-density approximation built from the staggered pair
///   rather than a single-instant `|ψ|²`.
/// - [`ColorMode::Phase`]: `(Re, 0, Im)`.
///
/// Both are scaled by `1/brightness`. With the potential overlay
/// enabled, a tint of intensity `|V|/V_char` is blended in additively;
/// the hue encodes the sign of `V` (violet for positive, amber for
/// negative).
///
/// Every pixel is overwritten every frame; channel values are left
/// unclamped for presentation to quantize.
#[derive(Clone, Copy, Debug)]
pub struct Renderer {
    v_char: f32,
}

impl Renderer {
    /// Create a renderer normalizing the overlay by `v_char`.
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

    /// Render one frame into `out`.
    ///
    /// `brightness` must be positive (the control state keeps it so).
    pub fn render(
        &self,
        grid: &Grid,
        wave: &WaveField,
        potential: &ScalarField,
        mode: ColorMode,
        show_potential: bool,
        brightness: f32,
        out: &mut ColorField,
    ) {
        let n = grid.side();
        let scale = 1.0 / brightness;
        let inv_v_char = 1.0 / self.v_char;
        let re = wave.re();
        let im = wave.im();
        let im_prev = wave.im_prev();
        let v = potential.as_slice();

        out.as_mut_slice()
            .par_chunks_mut(n * ColorField::CHANNELS)
            .enumerate()
            .for_each(|(y, row)| {
                for x in 0..n {
                    let i = y * n + x;
                    let mut rgb = match mode {
                        ColorMode::Density => {
                            let d = (re[i] * re[i] + im_prev[i] * im[i]) * scale;
                            [d, d, d]
                        }
                        ColorMode::Phase => [re[i] * scale, 0.0, im[i] * scale],
                    };
                    if show_potential {
                        let tint = if v[i] >= 0.0 { TINT_POSITIVE } else { TINT_NEGATIVE };
                        let strength = v[i].abs() * inv_v_char;
                        for (c, t) in rgb.iter_mut().zip(tint) {
                            *c += t * strength;
                        }
                    }
                    row[x * ColorField::CHANNELS..x * ColorField::CHANNELS + 3]
                        .copy_from_slice(&rgb);
                }
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup(n: usize) -> (Grid, WaveField, ScalarField, ColorField) {
        let grid = Grid::new(n).unwrap();
        let wave = WaveField::new(&grid);
        let potential = ScalarField::new(&grid);
        let out = ColorField::new(n);
        (grid, wave, potential, out)
    }

    #[test]
    fn rejects_degenerate_v_char() {
        assert!(Renderer::new(0.0).is_err());
        assert!(Renderer::new(f32::NAN).is_err());
        assert!(Renderer::new(1e5).is_ok());
    }

    #[test]
    fn zero_field_renders_black_in_both_modes() {
        let (grid, wave, potential, mut out) = setup(8);
        let renderer = Renderer::new(1e5).unwrap();
        for mode in [ColorMode::Density, ColorMode::Phase] {
            for brightness in [0.9, 1.0, 37.5] {
                renderer.render(&grid, &wave, &potential, mode, false, brightness, &mut out);
                assert!(
                    out.as_slice().iter().all(|&c| c == 0.0),
                    "{mode:?} at brightness {brightness}"
                );
            }
        }
    }

    #[test]
    fn density_mixes_the_staggered_pair() {
        let (grid, mut wave, potential, mut out) = setup(8);
        let i = grid.index(3, 4);
        wave.pair_mut().1[i] = 0.5;
        wave.sync_previous();
        // Step-like mutation: current pair moves on, retired Im stays.
        wave.pair_mut().0[i] = 2.0;
        wave.pair_mut().1[i] = 3.0;

        let renderer = Renderer::new(1e5).unwrap();
        renderer.render(&grid, &wave, &potential, ColorMode::Density, false, 2.0, &mut out);

        // (2² + 0.5·3) / 2
        let expected = (4.0 + 1.5) / 2.0;
        assert_eq!(out.pixel(3, 4), [expected, expected, expected]);
    }

    #[test]
    fn phase_maps_components_to_red_and_blue() {
        let (grid, mut wave, potential, mut out) = setup(8);
        let i = grid.index(2, 5);
        wave.pair_mut().0[i] = 0.8;
        wave.pair_mut().1[i] = -0.4;

        let renderer = Renderer::new(1e5).unwrap();
        renderer.render(&grid, &wave, &potential, ColorMode::Phase, false, 1.0, &mut out);

        assert_eq!(out.pixel(2, 5), [0.8, 0.0, -0.4]);
    }

    #[test]
    fn brightness_divides_the_output() {
        let (grid, mut wave, potential, mut out) = setup(8);
        wave.pair_mut().0[grid.index(4, 4)] = 1.0;
        let renderer = Renderer::new(1e5).unwrap();

        renderer.render(&grid, &wave, &potential, ColorMode::Phase, false, 4.0, &mut out);
        assert_eq!(out.pixel(4, 4)[0], 0.25);
    }

    #[test]
    fn overlay_hue_tracks_potential_sign() {
        let (grid, wave, mut potential, mut out) = setup(8);
        let renderer = Renderer::new(100.0).unwrap();
        potential.as_mut_slice()[grid.index(1, 1)] = 50.0;
        potential.as_mut_slice()[grid.index(6, 6)] = -100.0;

        renderer.render(&grid, &wave, &potential, ColorMode::Density, true, 1.0, &mut out);

        let pos = out.pixel(1, 1);
        let neg = out.pixel(6, 6);
        // Positive potential tints blue-heavy at half strength.
        assert!((pos[2] - TINT_POSITIVE[2] * 0.5).abs() < 1e-6);
        assert!(pos[2] > pos[0]);
        // Negative potential tints red-heavy at full strength.
        assert!((neg[0] - TINT_NEGATIVE[0]).abs() < 1e-6);
        assert!(neg[0] > neg[2]);
        // Zero potential leaves the black field untinted.
        assert_eq!(out.pixel(3, 3), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn overlay_sites_with_zero_potential_use_positive_tint_at_zero_strength() {
        let (grid, wave, potential, mut out) = setup(4);
        let renderer = Renderer::new(1.0).unwrap();
        renderer.render(&grid, &wave, &potential, ColorMode::Phase, true, 1.0, &mut out);
        assert!(out.as_slice().iter().all(|&c| c == 0.0));
    }
}
