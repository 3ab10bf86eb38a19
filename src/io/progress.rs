//! Terminal progress for the stages of one generation run

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::LazyLock;

use crate::io::configuration::PROGRESS_BAR_WIDTH;

static STAGE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "{{prefix:>8}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress bar reused across carve, compose and export stages
pub struct StageProgress {
    bar: ProgressBar,
}

impl StageProgress {
    /// Create a visible progress bar, or a hidden one when `quiet`
    pub fn new(quiet: bool) -> Self {
        let bar = ProgressBar::new(0);
        if quiet {
            bar.set_draw_target(ProgressDrawTarget::hidden());
        }
        bar.set_style(STAGE_STYLE.clone());
        Self { bar }
    }

    /// Start a named stage with an initially unknown length
    pub fn begin(&self, stage: &'static str) {
        self.bar.set_prefix(stage);
        self.bar.set_length(0);
        self.bar.set_position(0);
        self.bar.set_message("");
    }

    /// Report `done` of `total` units in the current stage
    pub fn update(&self, done: usize, total: usize) {
        self.bar.set_length(total as u64);
        self.bar.set_position(done as u64);
    }

    /// Mark the current stage complete with a short note
    pub fn complete(&self, note: String) {
        if let Some(len) = self.bar.length() {
            self.bar.set_position(len);
        }
        self.bar.set_message(note);
    }

    /// Remove the bar from the terminal
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }

    /// Position within the current stage
    pub fn position(&self) -> u64 {
        self.bar.position()
    }
}
