//! Progress display for decode and compose phases

use std::sync::LazyLock;

use indicatif::{ProgressBar, ProgressStyle};

static BAR_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{msg} [{bar:30.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Single-bar progress reporting for one wallpaper run
///
/// One run works through one bounded phase at a time (decoding inputs,
/// compositing cells), so a single reusable bar is enough.
#[derive(Default)]
pub struct ProgressManager {
    bar: Option<ProgressBar>,
}

impl ProgressManager {
    /// Create an idle progress manager
    pub fn new() -> Self {
        Self { bar: None }
    }

    /// Begin a phase of `len` steps, replacing any previous bar
    pub fn start(&mut self, len: usize, message: &'static str) {
        let bar = ProgressBar::new(len as u64);
        bar.set_style(BAR_STYLE.clone());
        bar.set_message(message);
        self.bar = Some(bar);
    }

    /// Record one completed step of the current phase
    pub fn advance(&self) {
        if let Some(bar) = &self.bar {
            bar.inc(1);
        }
    }

    /// Complete the current phase and clear the bar
    pub fn finish(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }
}
