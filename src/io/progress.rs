//! Progress display for runs generating several floors

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static FLOOR_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template = format!(
        "[{{elapsed_precise}}] Floors: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
    );
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks how many floors of a run have been generated
///
/// A single floor is generated too quickly for a bar to be useful, so nothing
/// is displayed unless the run covers more than one seed.
pub struct ProgressManager {
    bar: Option<ProgressBar>,
    completed: usize,
    total: usize,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create an idle progress manager
    pub const fn new() -> Self {
        Self {
            bar: None,
            completed: 0,
            total: 0,
        }
    }

    /// Prepare the display for `floor_count` floors
    pub fn initialize(&mut self, floor_count: usize) {
        self.total = floor_count;
        self.completed = 0;

        if floor_count > 1 {
            let bar = ProgressBar::new(floor_count as u64);
            bar.set_style(FLOOR_STYLE.clone());
            self.bar = Some(bar);
        }
    }

    /// Show the seed currently being generated
    pub fn start_floor(&self, seed: &str) {
        if let Some(ref bar) = self.bar {
            bar.set_message(seed.to_string());
        }
    }

    /// Count a floor as done
    pub fn complete_floor(&mut self) {
        self.completed += 1;
        if let Some(ref bar) = self.bar {
            bar.inc(1);
        }
    }

    /// Floors completed so far
    pub const fn completed(&self) -> usize {
        self.completed
    }

    /// Floors expected in this run
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Whether a bar is being displayed
    pub const fn is_visible(&self) -> bool {
        self.bar.is_some()
    }

    /// Clean up the display
    pub fn finish(&self) {
        if let Some(ref bar) = self.bar {
            bar.finish_with_message("All floors generated");
        }
    }
}
