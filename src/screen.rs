use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use derive_new::new;
use indicatif::ProgressBar;
use log::{info, warn};

use crate::{
    aggregate::aggregate_signal,
    compare::small_vs_large,
    config::GroupConfig,
    results::{ScreenResult, ScreenResults},
    scan::{scan_library, ArrayFile},
    utils::{format_elapsed, init_pbar},
};

/// Drives the full screen of an array library.
///
/// Scans the library root, then runs every file through signal aggregation
/// and the small-versus-large comparison in sequence. A file that fails to
/// parse is skipped with a warning naming its path; everything else still
/// lands in the result table. Only a bad library root aborts the run.
#[derive(new)]
pub struct Screen {
    root: PathBuf,
    groups: GroupConfig,
    progress: bool,
}

impl Screen {
    pub fn run(&self) -> Result<ScreenResults> {
        let start = Instant::now();

        info!("collecting array file names under '{}'", self.root.display());
        let files = scan_library(&self.root)?;
        info!("reading {} array files", files.len());

        let progress_bar = if self.progress {
            init_pbar(files.len())?
        } else {
            ProgressBar::hidden()
        };

        let mut rows = Vec::with_capacity(files.len());
        for file in &files {
            match self.process_file(file) {
                Ok(row) => rows.push(row),
                Err(e) => {
                    warn!(
                        "could not read entry at '{}', skipping (is this a valid array analysis file?): {:#}",
                        file.path.display(),
                        e
                    );
                }
            }
            progress_bar.inc(1);
        }
        progress_bar.finish_and_clear();

        info!(
            "processed {} of {} files in {}",
            rows.len(),
            files.len(),
            format_elapsed(start.elapsed())
        );
        Ok(ScreenResults::from_vec(rows))
    }

    fn process_file(&self, file: &ArrayFile) -> Result<ScreenResult> {
        let aggregates = aggregate_signal(&file.path, &file.exp_folder, &file.array)?;
        small_vs_large(&aggregates, &self.groups)
    }
}
