use std::time::Duration;

pub mod time;
pub mod scheduler;

// The clock always redraws once a second
pub const PERIOD: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    Hour12,
    Hour24,
}

impl DisplayMode {
    // Anything but an exact "12h" is 24 hour mode, typos included
    pub fn from_flag(value: &str) -> Self {
        if value == "12h" {
            DisplayMode::Hour12
        } else {
            DisplayMode::Hour24
        }
    }
}

// Holds all the commandline options.
#[derive(Debug)]
pub struct Config {
    pub mode: DisplayMode,
    pub period: Duration,
}

impl Config {
    pub fn from_matches(options: &clap::ArgMatches) -> Self {
        let mode = options.get_one::<String>("mode").map_or("24h", String::as_str);

        Self {
            mode: DisplayMode::from_flag(mode),
            period: PERIOD,
        }
    }
}
