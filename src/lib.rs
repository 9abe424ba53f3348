//! chipscreen: chromosome size bias screening for ssDNA ChIP-chip libraries
//!
//! This library screens a microarray experiment library for chromosome size
//! bias effects in meiotic recombination signal. For each array file it
//! converts Log2Ratio signal back to linear ratio, aggregates signal per
//! chromosome, and compares mean signal between small chromosomes (I, III
//! and VI by default) and the remaining large chromosomes with a two-sample
//! Student's t-test.
//!
//! The main components of this library are:
//! - `Screen`: the library driver, one result row per array file
//! - `GroupConfig`: the small/large chromosome partition
//! - `ScreenResults`: the assembled result table, with CSV output

mod aggregate;
mod compare;
mod config;
mod math;
mod results;
mod scan;
mod screen;
mod utils;

pub use aggregate::{aggregate_signal, ChromosomeAggregate, ProbeRecord};
pub use compare::small_vs_large;
pub use config::GroupConfig;
pub use results::{ScreenResult, ScreenResults};
pub use scan::{scan_library, ArrayFile};
pub use screen::Screen;
