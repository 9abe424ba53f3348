use anyhow::{bail, Result};
use itertools::{Either, Itertools};

use crate::{
    aggregate::ChromosomeAggregate,
    config::GroupConfig,
    math::{arithmetic_mean, sample_std, students_t_test},
    results::ScreenResult,
};

/// Compares mean signal between the small- and large-chromosome groups of
/// one array file.
///
/// Each chromosome's mean signal is one observation; the two groups are
/// compared with an equal-variance two-sample Student's t-test (two-sided).
/// Degenerate groups (fewer than two chromosomes, zero variance) surface as
/// NaN in the affected fields rather than failing the file.
pub fn small_vs_large(
    aggregates: &[ChromosomeAggregate],
    config: &GroupConfig,
) -> Result<ScreenResult> {
    let Some(first) = aggregates.first() else {
        bail!("cannot compare an empty chromosome table");
    };

    let (small, large): (Vec<f64>, Vec<f64>) = aggregates
        .iter()
        .map(|agg| (agg.chr, agg.mean_signal))
        .partition_map(|(chr, signal)| {
            if config.is_small(chr) {
                Either::Left(signal)
            } else {
                Either::Right(signal)
            }
        });

    let small_avrg = arithmetic_mean(&small);
    let large_avrg = arithmetic_mean(&large);

    Ok(ScreenResult::builder()
        .exp_folder(first.exp_folder.clone())
        .array(first.array.clone())
        .small_chr_avrg(small_avrg)
        .small_chr_sd(sample_std(&small))
        .large_chr_avrg(large_avrg)
        .large_chr_sd(sample_std(&large))
        .ratio_small_vs_large(small_avrg / large_avrg)
        .p_value(students_t_test(&small, &large))
        .build())
}
