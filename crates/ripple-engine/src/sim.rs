//! The simulation facade: owns all state, orchestrates the frame.

use ripple_core::{Preset, SimConstants};
use ripple_lattice::{ColorField, Grid, ScalarField, WaveField};
use ripple_ops::{GaussianPacket, Leapfrog, PotentialGenerator, PulseInjector};
use ripple_render::{Downsampler, Renderer};

use crate::config::{ConfigError, SimConfig};
use crate::control::{Action, ControlState};

/// Counters accumulated across the simulation's lifetime.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameMetrics {
    /// Frames advanced.
    pub frames: u64,
    /// Integrator sub-steps executed.
    pub substeps: u64,
    /// Pulse injections applied.
    pub injections: u64,
}

/// The complete solver state behind the per-frame driver surface.
///
/// The driver loop is expected to run, once per presented frame:
///
/// 1. edge-detected [`Action`]s through
///    [`handle_action`](Simulation::handle_action),
/// 2. [`inject_at`](Simulation::inject_at) while the pointer is held,
/// 3. [`advance_frame`](Simulation::advance_frame),
/// 4. [`render`](Simulation::render), presenting the returned buffer.
///
/// Every operation completes before the next begins; the integrator's
/// final sub-step is finished before `render` reads the field, which is
/// the barrier ordering the data-parallel phases require.
pub struct Simulation {
    grid: Grid,
    constants: SimConstants,
    potential_gen: PotentialGenerator,
    packet: GaussianPacket,
    injector: PulseInjector,
    integrator: Leapfrog,
    renderer: Renderer,
    downsampler: Downsampler,
    wave: WaveField,
    potential: ScalarField,
    frame: ColorField,
    reduced: Option<ColorField>,
    metrics: FrameMetrics,
}

impl Simulation {
    /// Build a simulation from `config`, generate the default preset's
    /// potential, and seed the initial packet.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the configuration fails
    /// [`SimConfig::validate`] or an operator builder rejects its
    /// parameters.
    pub fn new(config: &SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let grid = Grid::new(config.grid_side)?;
        let constants = SimConstants::derive(
            config.grid_side,
            config.dt_factor,
            config.v_char,
            config.coupling,
            config.substeps,
        );

        let operator = |reason: String| ConfigError::Operator { reason };
        let potential_gen = PotentialGenerator::new(constants.v_char).map_err(operator)?;
        let packet = GaussianPacket::builder()
            .center(config.packet_center.0, config.packet_center.1)
            .momentum(config.packet_momentum.0, config.packet_momentum.1)
            .width(config.packet_width.0, config.packet_width.1)
            .build()
            .map_err(operator)?;
        let injector = PulseInjector::builder()
            .width(config.pulse_width.0, config.pulse_width.1)
            .wavenumber(config.pulse_wavenumber)
            .build()
            .map_err(operator)?;
        let renderer = Renderer::new(constants.v_char).map_err(operator)?;
        let downsampler = Downsampler::new(config.upscale_factor).map_err(operator)?;

        let mut potential = ScalarField::new(&grid);
        potential_gen.generate(&grid, Preset::default(), &mut potential);

        let mut wave = WaveField::new(&grid);
        packet.seed(&grid, &constants, &potential, &mut wave);

        let frame = ColorField::new(grid.side());
        let reduced = (config.upscale_factor > 1)
            .then(|| ColorField::new(downsampler.output_side(grid.side())));

        Ok(Self {
            grid,
            constants,
            potential_gen,
            packet,
            injector,
            integrator: Leapfrog,
            renderer,
            downsampler,
            wave,
            potential,
            frame,
            reduced,
            metrics: FrameMetrics::default(),
        })
    }

    /// Run the frame's integrator sub-steps.
    pub fn advance_frame(&mut self) {
        self.integrator.step(
            &self.grid,
            &self.constants,
            &self.potential,
            &mut self.wave,
            self.constants.substeps,
        );
        self.metrics.frames += 1;
        self.metrics.substeps += u64::from(self.constants.substeps);
    }

    /// Inject one pulse at the pointer position.
    pub fn inject_at(&mut self, cx: f32, cy: f32) {
        self.injector
            .inject(&self.grid, &self.constants, cx, cy, &mut self.wave);
        self.metrics.injections += 1;
    }

    /// Render the current state and return the presentation buffer —
    /// the downsampled buffer when an upscale factor is configured,
    /// the full-resolution buffer otherwise.
    pub fn render(&mut self, controls: &ControlState) -> &ColorField {
        self.renderer.render(
            &self.grid,
            &self.wave,
            &self.potential,
            controls.color_mode(),
            controls.show_potential(),
            controls.brightness(),
            &mut self.frame,
        );
        match &mut self.reduced {
            Some(reduced) => {
                self.downsampler
                    .downsample(&self.frame, reduced)
                    .expect("reduced buffer sized at construction");
                reduced
            }
            None => &self.frame,
        }
    }

    /// Apply one edge-triggered action: update the control state and
    /// perform its field-level effect.
    pub fn handle_action(&mut self, controls: &mut ControlState, action: Action) {
        controls.apply(action);
        match action {
            Action::Reset => self.reseed(),
            Action::ClearField => self.clear_wave(),
            Action::NextPreset | Action::PrevPreset => self.set_preset(controls.preset()),
            _ => {}
        }
    }

    /// Re-seed the wavefunction with the configured initial packet.
    pub fn reseed(&mut self) {
        self.packet
            .seed(&self.grid, &self.constants, &self.potential, &mut self.wave);
    }

    /// Seed the wavefunction with an arbitrary packet.
    pub fn seed(&mut self, packet: &GaussianPacket) {
        packet.seed(&self.grid, &self.constants, &self.potential, &mut self.wave);
    }

    /// Zero the wavefunction.
    pub fn clear_wave(&mut self) {
        self.wave.clear();
    }

    /// Regenerate the potential for `preset`.
    pub fn set_preset(&mut self, preset: Preset) {
        self.potential_gen
            .generate(&self.grid, preset, &mut self.potential);
    }

    /// Lattice geometry.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Derived simulation constants.
    pub fn constants(&self) -> &SimConstants {
        &self.constants
    }

    /// The wavefunction.
    pub fn wave(&self) -> &WaveField {
        &self.wave
    }

    /// The potential field.
    pub fn potential(&self) -> &ScalarField {
        &self.potential
    }

    /// Lifetime counters.
    pub fn metrics(&self) -> FrameMetrics {
        self.metrics
    }
}
