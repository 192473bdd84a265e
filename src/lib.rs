//! sdstats: descriptive statistics with standard-deviation bands.
//!
//! Given a numeric sample, [`calculate_stats`] reports the mean, the population
//! standard deviation, the mean ± 1/2/3 standard-deviation bands and the
//! coefficient of variation. [`validate_input`] turns arbitrary scalar-like
//! input into either a parsed `f64` or an invalid marker without ever failing.
//!
//! # Example
//!
//! ```
//! use sdstats::{calculate_stats, parse_sample, SdBand};
//!
//! let sample = parse_sample(["2", "4", "4", "4", "5", "5", "7", "9", "n/a"]);
//! assert_eq!(sample.rejected.len(), 1);
//!
//! let stats = calculate_stats(&sample.values).unwrap();
//! assert_eq!(stats.mean, 5.0);
//! assert_eq!(stats.std, 2.0);
//! assert_eq!(stats.sd_ranges[SdBand::Plus1], 7.0);
//! assert_eq!(stats.cv, 40.0);
//! ```

pub mod stats;
pub mod validate;

pub use stats::{
    calculate_stats, calculate_stats_from, calculate_stats_u64, SdBand, SdRanges, Stats, UnknownBand,
};
pub use validate::{parse_sample, validate_input, NumericInput, Parsed, ParsedSample, Rejected};
