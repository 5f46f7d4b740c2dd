use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use log::LevelFilter;

use chip8_core::{Rom, CLOCK_SPEED, TIMER_INTERVAL_MS};

mod keymap;
mod run;

/// A CHIP-8 and SUPER-CHIP interpreter.
///
/// Keys 1234/QWER/ASDF/ZXCV are the keypad, hold Space to run unthrottled and Escape quits.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Path to the ROM to run
    rom: PathBuf,

    /// Instructions executed per second
    #[arg(long, default_value_t = CLOCK_SPEED, value_parser = clap::value_parser!(u32).range(1..))]
    clock_speed: u32,

    /// Milliseconds between delay and sound timer ticks
    #[arg(long, default_value_t = TIMER_INTERVAL_MS, value_parser = clap::value_parser!(u64).range(1..))]
    timer_interval: u64,

    /// Window pixels per screen pixel
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..))]
    scale: u32,

    /// Log level, overridden by RUST_LOG
    #[arg(long, default_value = "warn")]
    log_level: LevelFilter,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level)
        .parse_default_env()
        .init();

    let rom = Rom::read(&cli.rom).with_context(|| format!("unable to read {}", cli.rom.display()))?;
    run::run(
        &rom,
        run::Config {
            clock_speed: cli.clock_speed,
            timer_interval: Duration::from_millis(cli.timer_interval),
            scale: cli.scale,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["chip8", "game.ch8"]).unwrap();
        assert_eq!(cli.rom, PathBuf::from("game.ch8"));
        assert_eq!(cli.clock_speed, CLOCK_SPEED);
        assert_eq!(cli.timer_interval, TIMER_INTERVAL_MS);
        assert_eq!(cli.scale, 10);
        assert_eq!(cli.log_level, LevelFilter::Warn);
    }

    #[test]
    fn test_cli_rejects_zero_clock_speed() {
        assert!(Cli::try_parse_from(["chip8", "game.ch8", "--clock-speed", "0"]).is_err());
    }
}
