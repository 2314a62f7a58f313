use std::time::{Duration, Instant};

pub struct FpsCounter {
    report_interval: Duration,
    frame_count: u32,
    last_report: Instant,
}

impl FpsCounter {
    pub fn new(report_interval: Duration) -> Self {
        Self {
            report_interval,
            frame_count: 0,
            last_report: Instant::now(),
        }
    }

    /// Counts a presented frame. Returns the average frame rate once per report interval.
    pub fn frame(&mut self) -> Option<f64> {
        self.frame_count += 1;

        let elapsed = self.last_report.elapsed();
        if elapsed < self.report_interval {
            return None;
        }

        let fps = self.frame_count as f64 / elapsed.as_secs_f64();
        self.frame_count = 0;
        self.last_report = Instant::now();
        Some(fps)
    }
}
