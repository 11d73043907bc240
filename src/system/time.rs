use anyhow::{ Context, Result };
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum TimeError {
    #[error("Malformed clock string {0:?}")]
    Malformed(String),
    #[error("{field} out of range: {value}")]
    OutOfRange { field: &'static str, value: u8 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeOfDay {
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl TimeOfDay {
    // Parses "HH:MM:SS" as produced by strftime("%H:%M:%S")
    pub fn parse(clock: &str) -> Result<Self, TimeError> {
        let malformed = || TimeError::Malformed(clock.to_string());

        let mut fields = clock.trim().split(':').map(|field| btoi::btou::<u8>(field.as_bytes()));

        let mut next = |name: &'static str, max: u8| -> Result<u8, TimeError> {
            let value = fields.next().ok_or_else(malformed)?.map_err(|_| malformed())?;

            if value > max {
                return Err(TimeError::OutOfRange { field: name, value });
            }

            Ok(value)
        };

        let hour = next("hour", 23)?;
        let minute = next("minute", 59)?;
        // strftime allows 60 for leap seconds, show it as 59
        let second = next("second", 60)?.min(59);

        if fields.next().is_some() {
            return Err(malformed());
        }

        Ok(Self { hour, minute, second })
    }
}

// Set timezone info from the environment. Call once before sampling.
pub fn init() {
    libc_strftime::tz_set();
}

/// Reads the current local wall clock time.
pub fn sample() -> Result<TimeOfDay> {
    let current_time = std::time::SystemTime::now()
        .duration_since(std::time::SystemTime::UNIX_EPOCH)
        .context("System clock is before the epoch")?;

    let clock = libc_strftime::strftime_local("%H:%M:%S", current_time.as_secs() as i64);

    Ok(TimeOfDay::parse(&clock)?)
}
