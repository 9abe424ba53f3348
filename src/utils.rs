use std::time::Duration;

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};

pub fn init_pbar(total: usize) -> Result<ProgressBar> {
    let progress_bar = ProgressBar::new(total as u64);
    progress_bar.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos:>5}/{len:5} {msg}")?
            .progress_chars("#>-"),
    );
    progress_bar.set_message("Reading array files...");
    Ok(progress_bar)
}

/// Human-readable elapsed time, scaled to seconds, minutes or hours.
pub fn format_elapsed(elapsed: Duration) -> String {
    let secs = elapsed.as_secs_f64();
    if secs < 60.0 {
        format!("{:.1} sec", secs)
    } else if secs < 3600.0 {
        format!("{:.1} min", secs / 60.0)
    } else {
        format!("{:.1} hr", secs / 3600.0)
    }
}
