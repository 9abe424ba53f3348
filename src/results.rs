use std::path::Path;

use anyhow::{Context, Result};
use bon::Builder;
use serde::Serialize;

/// One file's small-versus-large comparison, the unit row of the final
/// report. Serialized field names match the established CSV layout of the
/// screen's downstream consumers.
#[derive(Builder, Debug, Clone, Serialize)]
pub struct ScreenResult {
    pub exp_folder: String,
    pub array: String,
    pub small_chr_avrg: f64,
    pub small_chr_sd: f64,
    pub large_chr_avrg: f64,
    pub large_chr_sd: f64,
    pub ratio_small_vs_large: f64,
    #[serde(rename = "ttest_2-tail_p_val")]
    pub p_value: f64,
}

/// The assembled result table, one row per successfully processed file.
pub struct ScreenResults {
    pub rows: Vec<ScreenResult>,
}

impl ScreenResults {
    /// Assembles the table sorted by experiment folder and array name so
    /// repeated runs over the same library produce identical output.
    pub fn from_vec(mut rows: Vec<ScreenResult>) -> Self {
        rows.sort_unstable_by(|a, b| {
            (a.exp_folder.as_str(), a.array.as_str())
                .cmp(&(b.exp_folder.as_str(), b.array.as_str()))
        });
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn write_csv(&self, path: &Path) -> Result<()> {
        let mut writer = csv::Writer::from_path(path)
            .with_context(|| format!("failed to create output file '{}'", path.display()))?;
        for row in &self.rows {
            writer.serialize(row)?;
        }
        writer.flush()?;
        Ok(())
    }

    pub fn pprint(&self) {
        println!(
            "exp_folder\tarray\tsmall_chr_avrg\tsmall_chr_sd\tlarge_chr_avrg\tlarge_chr_sd\tratio_small_vs_large\tttest_2-tail_p_val"
        );
        for row in &self.rows {
            println!(
                "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
                row.exp_folder,
                row.array,
                row.small_chr_avrg,
                row.small_chr_sd,
                row.large_chr_avrg,
                row.large_chr_sd,
                row.ratio_small_vs_large,
                row.p_value
            );
        }
    }
}
