//! Step-by-step "analysis in progress" animation
//!
//! The steps are cosmetic: they advance on a timer while a request is in
//! flight and hold on the last step until the request resolves.

use indicatif::{ProgressBar, ProgressStyle};
use std::future::Future;
use std::time::Duration;
use tokio::time::Instant;

/// Steps shown while the résumé is uploaded and parsed.
pub const UPLOAD_STEPS: &[&str] = &[
    "Parsing Resume Data...",
    "Scanning GitHub Profile...",
    "Analyzing Code Complexity...",
    "Verifying Skill Evidence...",
];

/// Steps shown while the skill engine verifies the profile.
pub const VERIFICATION_STEPS: &[&str] = &[
    "Scanning Resume Structure...",
    "Validating GitHub Activity...",
    "Computing Skill Complexity...",
    "Finalizing Verification...",
];

/// Index of the step to show after `elapsed`, capped at the last step.
pub fn step_at(elapsed: Duration, interval: Duration, step_count: usize) -> usize {
    let interval_ms = interval.as_millis();
    if step_count == 0 || interval_ms == 0 {
        return 0;
    }
    let advanced = (elapsed.as_millis() / interval_ms) as usize;
    advanced.min(step_count - 1)
}

pub struct AnalysisProgress {
    spinner: Option<ProgressBar>,
    steps: &'static [&'static str],
    interval: Duration,
    started: Instant,
    current: usize,
}

impl AnalysisProgress {
    pub fn new(steps: &'static [&'static str], interval: Duration, enabled: bool) -> Self {
        let spinner = if enabled && !steps.is_empty() {
            let pb = ProgressBar::new_spinner();
            let style = ProgressStyle::default_spinner()
                .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "✔"])
                .template("{spinner} [{pos}/{len}] {msg}");
            if let Ok(style) = style {
                pb.set_style(style);
            }
            pb.set_length(steps.len() as u64);
            pb.set_position(1);
            pb.set_message(steps[0]);
            pb.enable_steady_tick(Duration::from_millis(80));
            Some(pb)
        } else {
            None
        };

        Self {
            spinner,
            steps,
            interval,
            started: Instant::now(),
            current: 0,
        }
    }

    pub fn disabled(steps: &'static [&'static str]) -> Self {
        Self::new(steps, Duration::from_millis(1500), false)
    }

    pub fn current_step(&self) -> usize {
        self.current
    }

    pub fn current_label(&self) -> Option<&'static str> {
        self.steps.get(self.current).copied()
    }

    /// Move to whichever step the elapsed time calls for.
    pub fn refresh(&mut self) {
        let step = step_at(self.started.elapsed(), self.interval, self.steps.len());
        if step != self.current {
            self.current = step;
            log::debug!("Progress step {}: {}", step + 1, self.steps[step]);
            if let Some(spinner) = &self.spinner {
                spinner.set_position(step as u64 + 1);
                spinner.set_message(self.steps[step]);
            }
        }
    }

    /// Drive the animation until `fut` resolves, then return its output.
    pub async fn run<F: Future>(&mut self, fut: F) -> F::Output {
        tokio::pin!(fut);
        let mut ticker = tokio::time::interval(self.interval.max(Duration::from_millis(1)));

        loop {
            tokio::select! {
                output = &mut fut => return output,
                _ = ticker.tick() => self.refresh(),
            }
        }
    }

    pub fn finish(&mut self, message: &str) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
            println!("{}", message);
        }
    }

    /// Clear the spinner without printing anything (error paths).
    pub fn clear(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
    }
}

impl Drop for AnalysisProgress {
    fn drop(&mut self) {
        self.clear();
    }
}
