//! Driver-owned control state and input edge detection.
//!
//! The interactive shell polls its input devices every frame; the types
//! here turn that polling into the explicit state the core consumes —
//! no toggle or debounce state hides inside the solver.

use ripple_core::{ColorMode, Preset};

/// Upper clamp for the brightness divisor.
const BRIGHTNESS_MAX: f32 = 100.0;

/// A discrete, edge-triggered user action.
///
/// Each action fires once per press-release transition (see
/// [`EdgeDetector`]), not once per polled frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// Re-seed the wavefunction with the initial packet.
    Reset,
    /// Zero the wavefunction.
    ClearField,
    /// Switch between density and phase rendering.
    ToggleColorMode,
    /// Show or hide the potential overlay.
    TogglePotentialOverlay,
    /// Advance to the next potential preset, wrapping.
    NextPreset,
    /// Retreat to the previous potential preset, wrapping.
    PrevPreset,
    /// Brighten the display (smaller brightness divisor).
    BrightnessUp,
    /// Dim the display (larger brightness divisor).
    BrightnessDown,
}

/// Explicit display/control state, owned by the driver and passed into
/// render and preset calls.
///
/// The brightness value is the divisor applied by the renderer: lower
/// is brighter. Steps clamp it to `[1 − step, 100]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ControlState {
    color_mode: ColorMode,
    show_potential: bool,
    brightness: f32,
    brightness_step: f32,
    preset: Preset,
}

impl ControlState {
    /// Create the initial control state with the given brightness
    /// increment (validated by the simulation config).
    pub fn new(brightness_step: f32) -> Self {
        Self {
            color_mode: ColorMode::default(),
            show_potential: false,
            brightness: 1.0,
            brightness_step,
            preset: Preset::default(),
        }
    }

    /// Current color mode.
    pub fn color_mode(&self) -> ColorMode {
        self.color_mode
    }

    /// Whether the potential overlay is shown.
    pub fn show_potential(&self) -> bool {
        self.show_potential
    }

    /// Current brightness divisor.
    pub fn brightness(&self) -> f32 {
        self.brightness
    }

    /// Currently selected potential preset.
    pub fn preset(&self) -> Preset {
        self.preset
    }

    /// Apply one discrete action to the state.
    ///
    /// [`Action::Reset`] and [`Action::ClearField`] do not touch the
    /// control state; their effect is on the fields and lives in
    /// [`Simulation::handle_action`](crate::Simulation::handle_action).
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::ToggleColorMode => self.color_mode = self.color_mode.toggled(),
            Action::TogglePotentialOverlay => self.show_potential = !self.show_potential,
            Action::NextPreset => self.preset = self.preset.next(),
            Action::PrevPreset => self.preset = self.preset.prev(),
            Action::BrightnessUp => {
                self.brightness = (self.brightness - self.brightness_step)
                    .max(1.0 - self.brightness_step);
            }
            Action::BrightnessDown => {
                self.brightness = (self.brightness + self.brightness_step).min(BRIGHTNESS_MAX);
            }
            Action::Reset | Action::ClearField => {}
        }
    }
}

/// Press/release edge detector for one key or button.
///
/// [`update`](EdgeDetector::update) is called once per polled frame with
/// the current held state and returns `true` exactly once per
/// press-release transition — on the release edge, matching the
/// debounce behavior interactive shells expect.
#[derive(Clone, Copy, Debug, Default)]
pub struct EdgeDetector {
    held: bool,
}

impl EdgeDetector {
    /// Create a detector in the released state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the current pressed state; returns `true` on release.
    pub fn update(&mut self, pressed: bool) -> bool {
        let fired = self.held && !pressed;
        self.held = pressed;
        fired
    }
}

/// Pointer input in normalized [−1, 1]² coordinates plus a held flag.
///
/// While `held` is set the driver calls
/// [`Simulation::inject_at`](crate::Simulation::inject_at) once per
/// frame at `(x, y)`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    /// Horizontal position in [−1, 1].
    pub x: f32,
    /// Vertical position in [−1, 1].
    pub y: f32,
    /// Whether the injection trigger is held.
    pub held: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggles_flip_and_restore() {
        let mut state = ControlState::new(0.1);
        state.apply(Action::ToggleColorMode);
        assert_eq!(state.color_mode(), ColorMode::Phase);
        state.apply(Action::ToggleColorMode);
        assert_eq!(state.color_mode(), ColorMode::Density);

        state.apply(Action::TogglePotentialOverlay);
        assert!(state.show_potential());
        state.apply(Action::TogglePotentialOverlay);
        assert!(!state.show_potential());
    }

    #[test]
    fn preset_cycle_wraps_both_ways() {
        let mut state = ControlState::new(0.1);
        let start = state.preset();
        for _ in 0..Preset::COUNT {
            state.apply(Action::NextPreset);
        }
        assert_eq!(state.preset(), start);
        state.apply(Action::PrevPreset);
        assert_eq!(state.preset(), start.prev());
    }

    #[test]
    fn brightness_clamps_to_its_range() {
        let mut state = ControlState::new(0.1);
        for _ in 0..50 {
            state.apply(Action::BrightnessUp);
        }
        assert!((state.brightness() - 0.9).abs() < 1e-6);
        for _ in 0..2000 {
            state.apply(Action::BrightnessDown);
        }
        assert_eq!(state.brightness(), 100.0);
    }

    #[test]
    fn brightness_stays_positive_for_any_valid_step() {
        let mut state = ControlState::new(0.999);
        for _ in 0..10 {
            state.apply(Action::BrightnessUp);
        }
        assert!(state.brightness() > 0.0);
    }

    #[test]
    fn edge_detector_fires_once_per_transition() {
        let mut edge = EdgeDetector::new();
        assert!(!edge.update(false));
        assert!(!edge.update(true));
        assert!(!edge.update(true));
        assert!(edge.update(false), "fires on the release edge");
        assert!(!edge.update(false));
        assert!(!edge.update(true));
        assert!(edge.update(false));
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn arb_action() -> impl Strategy<Value = Action> {
            prop_oneof![
                Just(Action::Reset),
                Just(Action::ClearField),
                Just(Action::ToggleColorMode),
                Just(Action::TogglePotentialOverlay),
                Just(Action::NextPreset),
                Just(Action::PrevPreset),
                Just(Action::BrightnessUp),
                Just(Action::BrightnessDown),
            ]
        }

        proptest! {
            #[test]
            fn brightness_never_leaves_its_clamp_range(
                step in 0.01f32..0.99,
                actions in prop::collection::vec(arb_action(), 0..200),
            ) {
                let mut state = ControlState::new(step);
                for action in actions {
                    state.apply(action);
                    prop_assert!(state.brightness() >= 1.0 - step - 1e-5);
                    prop_assert!(state.brightness() <= 100.0);
                }
            }

            #[test]
            fn edge_detector_fires_exactly_once_per_release(
                presses in prop::collection::vec(any::<bool>(), 1..64),
            ) {
                let mut edge = EdgeDetector::new();
                let mut fired = 0usize;
                let mut releases = 0usize;
                let mut prev = false;
                for pressed in presses {
                    if prev && !pressed {
                        releases += 1;
                    }
                    if edge.update(pressed) {
                        fired += 1;
                    }
                    prev = pressed;
                }
                prop_assert_eq!(fired, releases);
            }
        }
    }
}
