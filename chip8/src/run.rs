use std::time::{Duration, Instant};

use anyhow::Context;
use sdl2::event::Event;
use sdl2::keyboard::Keycode;

use chip8_core::{Chip8, Rom, RunState};
use chip8_display::Display;

use crate::keymap::keymap;

/// How fast to run and how big to draw.
#[derive(Copy, Clone, Debug)]
pub struct Config {
    /// Instructions per second
    pub clock_speed: u32,
    /// Time between delay/sound timer ticks
    pub timer_interval: Duration,
    /// Window pixels per screen pixel
    pub scale: u32,
}

/// Runs `rom` until it halts or the window is closed.
pub fn run(rom: &Rom, config: Config) -> anyhow::Result<()> {
    let mut chip8: Chip8 = Chip8::default();
    chip8.load_rom(rom).context("unable to load ROM")?;

    // Get SDL2 context
    let sdl = sdl2::init().map_err(anyhow::Error::msg)?;
    let mut display = Display::new(&sdl, config.scale).context("unable to open display")?;
    let mut events = sdl.event_pump().map_err(anyhow::Error::msg)?;

    // Set initial timing
    let cycle_time = Duration::from_secs(1) / config.clock_speed.max(1);
    let mut last_cycle = Instant::now();
    let mut last_tick = last_cycle;

    // Whether or not the clock speed should be respected
    let mut fast_forward = false;

    while chip8.state() != RunState::Halted {
        // Handle input
        for event in events.poll_iter() {
            match event {
                Event::Quit { .. } => chip8.halt(),
                Event::KeyDown {
                    keycode: Some(key), ..
                } => match (key, keymap(key)) {
                    (_, Some(kc)) => chip8.key_press(kc),
                    (Keycode::Space, _) => fast_forward = true,
                    (Keycode::Escape, _) => chip8.halt(),
                    _ => continue,
                },
                Event::KeyUp {
                    keycode: Some(key), ..
                } => match (key, keymap(key)) {
                    (_, Some(kc)) => chip8.key_release(kc),
                    (Keycode::Space, _) => fast_forward = false,
                    _ => continue,
                },
                _ => continue,
            };
        }

        // Timers tick at their own rate whatever the CPU is doing
        let current_time = Instant::now();
        while current_time - last_tick >= config.timer_interval {
            chip8.decrement_timers();
            last_tick += config.timer_interval;
        }

        // Update state
        chip8.step().context("interpreter halted")?;

        // If the draw flag is set, unset it and render the current frame
        if chip8.take_redraw() {
            display.render(chip8.screen()).context("unable to render frame")?;
        }

        // Handle timing
        let elapsed_cycle_time = current_time - last_cycle;
        if !fast_forward && cycle_time > elapsed_cycle_time {
            std::thread::sleep(cycle_time - elapsed_cycle_time);
        }
        last_cycle = Instant::now();
    }

    log::info!("stopped at {:#05X}", chip8.pc());
    Ok(())
}
