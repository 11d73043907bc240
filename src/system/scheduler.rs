use std::time::{ Duration, Instant };
use anyhow::Result;

/// Calls a tick function once right away and then once every period.
///
/// Each tick sleeps whatever is left of the period after the work is done.
/// A tick that overruns the period is followed immediately by the next one,
/// missed ticks are not caught up.
pub struct Scheduler {
    period: Duration,
}

impl Scheduler {
    pub fn new(period: Duration) -> Self {
        Self { period }
    }

    // Runs until the process is killed or a tick fails
    pub fn run<F>(&self, tick: F) -> Result<()>
    where
        F: FnMut(u64) -> Result<()>,
    {
        self.run_for(None, tick)
    }

    pub fn run_for<F>(&self, limit: Option<u64>, mut tick: F) -> Result<()>
    where
        F: FnMut(u64) -> Result<()>,
    {
        let mut count: u64 = 0;

        loop {
            if limit.map_or(false, |limit| count >= limit) {
                return Ok(());
            }

            let started = Instant::now();

            tick(count)?;
            count += 1;

            let elapsed = started.elapsed();
            log::trace!("tick {} took {:?}", count, elapsed);

            // No need to sleep after the last tick
            if limit.map_or(false, |limit| count >= limit) {
                return Ok(());
            }

            match self.period.checked_sub(elapsed) {
                Some(remaining) => std::thread::sleep(remaining),
                None => log::warn!("tick {} overran the period by {:?}", count, elapsed - self.period),
            }
        }
    }
}
