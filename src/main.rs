use std::io::{ stdout, Write };
use anyhow::{ Context, Result };

mod system;
mod ui;
mod terminal;
mod completion;
mod custom_panic;

fn cli() -> clap::Command {
    clap::Command::new("clock")
        .about("A colorful block letter clock for the terminal")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            clap::Arg::new("mode")
                .long("mode")
                .value_name("mode")
                .help("display mode, can be either 12h or 24h")
                .default_value("24h")
        )
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    // Shell completion never starts the clock
    if let Some(request) = completion::Request::detect(&args) {
        let mut stdout = stdout();
        stdout.write_all(request.respond().as_bytes())?;
        stdout.flush()?;

        return Ok(());
    }

    let options = cli().get_matches_from(&args);

    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_env("CLOCK_LOG")
        .init();

    custom_panic::init();

    let config = system::Config::from_matches(&options);
    log::debug!("starting with {:?}", config);

    system::time::init();

    let clock = ui::Clock::new(config.mode);
    let lines = ui::glyph::HEIGHT as u16;
    let mut repainter = terminal::Repainter::new(stdout());

    // Main loop
    system::scheduler::Scheduler::new(config.period).run(|tick| {
        let now = system::time::sample()?;
        let frame = clock.render(&now)?;
        log::trace!("{:?} -> {}x{} frame", now, frame.width(), frame.height());

        let erase = if tick == 0 { None } else { Some(lines) };

        repainter.paint(&frame, erase).context("Can't draw to the terminal")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::{ Config, DisplayMode };

    fn mode_for(args: &[&str]) -> DisplayMode {
        let options = cli().try_get_matches_from(args).unwrap();
        Config::from_matches(&options).mode
    }

    #[test]
    fn mode_flag() {
        assert_eq!(mode_for(&["clock", "--mode", "12h"]), DisplayMode::Hour12);
        assert_eq!(mode_for(&["clock", "--mode=12h"]), DisplayMode::Hour12);
        assert_eq!(mode_for(&["clock", "--mode", "24h"]), DisplayMode::Hour24);
    }

    #[test]
    fn bogus_and_missing_mode_fall_back_to_24h() {
        assert_eq!(mode_for(&["clock", "--mode", "bogus"]), DisplayMode::Hour24);
        assert_eq!(mode_for(&["clock"]), DisplayMode::Hour24);
    }

    #[test]
    fn period_is_one_second() {
        let options = cli().try_get_matches_from(["clock"]).unwrap();
        assert_eq!(Config::from_matches(&options).period, std::time::Duration::from_millis(1000));
    }

    #[test]
    fn version_flag_is_recognized() {
        let err = cli().try_get_matches_from(["clock", "--version"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
        assert_eq!(cli().render_version().trim_end(), "clock 1.0.0");
    }

    #[test]
    fn cli_is_well_formed() {
        cli().debug_assert();
    }
}
