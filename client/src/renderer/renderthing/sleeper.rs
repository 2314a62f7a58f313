use std::time::{Duration, Instant};

pub struct Sleeper {
    target_delta_time: Duration,
    last_instant: Option<Instant>,
}

impl Sleeper {
    pub fn new(target_delta_time: Duration) -> Self {
        Self {
            target_delta_time,
            last_instant: None,
        }
    }

    /// Sleeps off whatever is left of the target frame time since the previous call.
    pub fn sleep(&mut self) -> bool {
        let slept = match self.last_instant {
            Some(last_instant) => {
                let delta_time = last_instant.elapsed();

                if self.target_delta_time > delta_time {
                    spin_sleep::sleep(self.target_delta_time - delta_time);
                    true
                } else {
                    false
                }
            }
            // Assume we're late if we've never slept yet.
            None => false,
        };

        self.last_instant = Some(Instant::now());
        slept
    }
}
