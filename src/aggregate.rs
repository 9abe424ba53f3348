use std::path::Path;

use anyhow::{bail, Context, Result};
use derive_new::new;
use itertools::Itertools;
use serde::Deserialize;

use crate::math::arithmetic_mean;

/// One probe row of an array analysis file. The column names are fixed by
/// the upstream instrument format; extra columns are ignored.
#[derive(Debug, Deserialize)]
pub struct ProbeRecord {
    pub chr: u32,
    pub start: u64,
    pub end: u64,
    #[serde(rename = "Log2Ratio")]
    pub log2_ratio: f64,
}

impl ProbeRecord {
    /// Probe length in bases, both coordinates inclusive.
    pub fn length(&self) -> u64 {
        self.end - self.start + 1
    }

    /// Signal converted from Log2Ratio back to linear ratio, the natural
    /// units for summing and averaging.
    pub fn ratio(&self) -> f64 {
        self.log2_ratio.exp2()
    }
}

/// Per-chromosome signal summary for one array file.
#[derive(new, Debug, Clone)]
pub struct ChromosomeAggregate {
    pub exp_folder: String,
    pub array: String,
    pub chr: u32,
    pub total_length: u64,
    pub total_signal: f64,
    pub mean_signal: f64,
}

/// Reads one array analysis file and aggregates its signal per chromosome.
///
/// The file is a tab-delimited table with a header row carrying at least the
/// `chr`, `start`, `end` and `Log2Ratio` columns. Chromosomes are emitted in
/// the order they are first encountered in the file. Any parse failure is an
/// error for this file alone; callers skip the file and keep going.
pub fn aggregate_signal(
    path: &Path,
    exp_folder: &str,
    array: &str,
) -> Result<Vec<ChromosomeAggregate>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("failed to open array file '{}'", path.display()))?;

    let records = reader
        .deserialize::<ProbeRecord>()
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("failed to parse array file '{}'", path.display()))?;
    if records.is_empty() {
        bail!("array file '{}' contains no probe rows", path.display());
    }

    let chromosomes = records.iter().map(|r| r.chr).unique().collect::<Vec<_>>();
    let aggregates = chromosomes
        .into_iter()
        .map(|chr| {
            let probes = records.iter().filter(|r| r.chr == chr).collect::<Vec<_>>();
            let total_length = probes.iter().map(|r| r.length()).sum();
            let ratios = probes.iter().map(|r| r.ratio()).collect::<Vec<_>>();
            ChromosomeAggregate::new(
                exp_folder.to_string(),
                array.to_string(),
                chr,
                total_length,
                ratios.iter().sum(),
                arithmetic_mean(&ratios),
            )
        })
        .collect();

    Ok(aggregates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_array(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_aggregate_single_chromosome() {
        let file = write_array(
            "chr\tstart\tend\tLog2Ratio\n\
             1\t1\t50\t1.0\n\
             1\t51\t100\t2.0\n",
        );
        let aggs = aggregate_signal(file.path(), "exp", "arr").unwrap();
        assert_eq!(aggs.len(), 1);
        assert_eq!(aggs[0].chr, 1);
        assert_eq!(aggs[0].total_length, 100);
        assert_relative_eq!(aggs[0].total_signal, 6.0);
        assert_relative_eq!(aggs[0].mean_signal, 3.0);
        assert_eq!(aggs[0].exp_folder, "exp");
        assert_eq!(aggs[0].array, "arr");
    }

    #[test]
    fn test_length_conservation() {
        let file = write_array(
            "chr\tstart\tend\tLog2Ratio\n\
             2\t1\t10\t0.0\n\
             1\t5\t25\t0.5\n\
             2\t100\t150\t-1.0\n",
        );
        let aggs = aggregate_signal(file.path(), "exp", "arr").unwrap();
        let total = aggs.iter().map(|a| a.total_length).sum::<u64>();
        assert_eq!(total, 10 + 21 + 51);
    }

    #[test]
    fn test_total_over_mean_recovers_probe_count() {
        let file = write_array(
            "chr\tstart\tend\tLog2Ratio\n\
             1\t1\t10\t0.2\n\
             1\t11\t20\t0.9\n\
             1\t21\t30\t-0.4\n\
             2\t1\t10\t1.1\n\
             2\t11\t20\t0.3\n",
        );
        let aggs = aggregate_signal(file.path(), "exp", "arr").unwrap();
        assert_relative_eq!(aggs[0].total_signal / aggs[0].mean_signal, 3.0, epsilon = 1e-12);
        assert_relative_eq!(aggs[1].total_signal / aggs[1].mean_signal, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_chromosomes_keep_first_encountered_order() {
        let file = write_array(
            "chr\tstart\tend\tLog2Ratio\n\
             3\t1\t10\t0.0\n\
             1\t1\t10\t0.0\n\
             3\t11\t20\t0.0\n\
             2\t1\t10\t0.0\n",
        );
        let aggs = aggregate_signal(file.path(), "exp", "arr").unwrap();
        let order = aggs.iter().map(|a| a.chr).collect::<Vec<_>>();
        assert_eq!(order, vec![3, 1, 2]);
    }

    #[test]
    fn test_ratio_conversion_from_log2() {
        let file = write_array("chr\tstart\tend\tLog2Ratio\n1\t1\t10\t3.0\n");
        let aggs = aggregate_signal(file.path(), "exp", "arr").unwrap();
        assert_relative_eq!(aggs[0].mean_signal, 8.0);
    }

    #[test]
    fn test_extra_columns_are_ignored() {
        let file = write_array(
            "probe_id\tchr\tstart\tend\tLog2Ratio\tflag\n\
             p1\t1\t1\t10\t1.0\tok\n",
        );
        let aggs = aggregate_signal(file.path(), "exp", "arr").unwrap();
        assert_eq!(aggs.len(), 1);
        assert_relative_eq!(aggs[0].mean_signal, 2.0);
    }

    #[test]
    fn test_missing_required_column_is_an_error() {
        let file = write_array("chr\tstart\tend\n1\t1\t10\n");
        assert!(aggregate_signal(file.path(), "exp", "arr").is_err());
    }

    #[test]
    fn test_non_tabular_content_is_an_error() {
        let file = write_array("this is not an array analysis file\n");
        assert!(aggregate_signal(file.path(), "exp", "arr").is_err());
    }

    #[test]
    fn test_empty_file_is_an_error() {
        let file = write_array("chr\tstart\tend\tLog2Ratio\n");
        assert!(aggregate_signal(file.path(), "exp", "arr").is_err());
    }
}
