//! Ripple quickstart — a complete, headless driver loop.
//!
//! Demonstrates:
//!   1. Building a configuration and a `Simulation`
//!   2. Edge-detected actions (preset change, color-mode toggle)
//!   3. Pulse injection from a held pointer
//!   4. Advancing and rendering frames, reading the output buffer
//!
//! A real shell would hand the returned buffer to its presentation
//! surface each frame; here we just summarize it.
//!
//! Run with:
//!   cargo run --example quickstart

use ripple_engine::{Action, ControlState, EdgeDetector, PointerState, SimConfig, Simulation};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = SimConfig {
        grid_side: 200,
        upscale_factor: 2,
        v_char: 2e3,
        ..Default::default()
    };
    let mut sim = Simulation::new(&config)?;
    let mut controls = ControlState::new(config.brightness_step);
    let mut preset_key = EdgeDetector::new();

    let mut pointer = PointerState::default();

    for frame in 0..120u32 {
        // Hold the pointer near the center for a stretch of frames.
        pointer.held = (30..60).contains(&frame);
        pointer.x = -0.2;
        pointer.y = 0.1;
        if pointer.held {
            sim.inject_at(pointer.x, pointer.y);
        }

        // Simulate a key held for frames 80..83; the action fires once,
        // on release.
        if preset_key.update((80..83).contains(&frame)) {
            sim.handle_action(&mut controls, Action::NextPreset);
            println!("frame {frame}: switched preset to {}", controls.preset());
        }

        sim.advance_frame();
        let buffer = sim.render(&controls);

        if frame % 30 == 0 {
            let peak = buffer.as_slice().iter().fold(0.0f32, |a, &c| a.max(c.abs()));
            println!(
                "frame {frame}: {}×{} buffer, peak channel {peak:.3}",
                buffer.side(),
                buffer.side()
            );
        }
    }

    let m = sim.metrics();
    println!(
        "done: {} frames, {} sub-steps, {} injections",
        m.frames, m.substeps, m.injections
    );
    Ok(())
}
