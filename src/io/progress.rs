//! Terminal progress display for a simulation run

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;
use std::time::Duration;

static RUN_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] {prefix} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks how many walkers have finished while the population steps
///
/// The bar length is the population size and the position is the number of
/// inactive walkers, so it fills as trails run out of room.
pub struct ProgressManager {
    bar: ProgressBar,
}

impl ProgressManager {
    /// Create a progress bar for a population of `walkers`
    pub fn new(walkers: usize) -> Self {
        let bar = ProgressBar::new(walkers as u64);
        bar.set_style(RUN_STYLE.clone());
        bar.set_prefix("walkers");
        bar.enable_steady_tick(Duration::from_millis(250));
        Self { bar }
    }

    /// Create a progress manager that never draws
    pub fn hidden(walkers: usize) -> Self {
        let bar = ProgressBar::hidden();
        bar.set_length(walkers as u64);
        Self { bar }
    }

    /// Report the number of active walkers after `steps` population steps
    pub fn update(&self, active: usize, steps: usize) {
        let total = self.bar.length().unwrap_or(0);
        self.bar.set_position(total.saturating_sub(active as u64));
        self.bar.set_message(format!("step {steps}"));
    }

    /// Walkers reported as finished so far
    pub fn finished(&self) -> u64 {
        self.bar.position()
    }

    /// Clear the display
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
