use std::io::IsTerminal;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use indicatif::{ProgressBar, ProgressStyle};

/// Progress bar for auditing manifest entries.
///
/// The bar is disabled in quiet mode or when stderr is not a TTY.
#[derive(Clone)]
pub struct AuditProgress {
    progress_bar: ProgressBar,
    counter: Arc<AtomicU64>,
}

impl AuditProgress {
    /// Creates a progress bar for `total` entries, drawn on stderr.
    ///
    /// # Panics
    ///
    /// Panics if the progress bar template is invalid. The template is a
    /// compile-time constant.
    #[must_use]
    pub fn new(total: u64, quiet: bool) -> Self {
        let is_tty = std::io::stderr().is_terminal();
        Self::new_with_visibility(total, quiet, is_tty)
    }

    fn new_with_visibility(total: u64, quiet: bool, is_tty: bool) -> Self {
        let progress_bar = if quiet || !is_tty {
            ProgressBar::hidden()
        } else {
            Self::create_visible_progress_bar(total)
        };

        Self {
            progress_bar,
            counter: Arc::new(AtomicU64::new(0)),
        }
    }

    fn create_visible_progress_bar(total: u64) -> ProgressBar {
        let pb = ProgressBar::new(total);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} Auditing [{bar:40.cyan/blue}] {pos}/{len} files ({percent}%)",
                )
                .expect("valid template")
                .progress_chars("█▓░"),
        );
        pb
    }

    /// Thread-safe; called from rayon workers.
    pub fn inc(&self) {
        let count = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        self.progress_bar.set_position(count);
    }

    /// Finishes the progress bar and clears it from the terminal.
    pub fn finish(&self) {
        self.progress_bar.finish_and_clear();
    }
}

#[cfg(test)]
#[path = "progress_tests.rs"]
mod tests;
