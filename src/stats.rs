//! Mean, population standard deviation, standard-deviation bands and
//! coefficient of variation over an in-memory sample.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::fmt;
use std::ops::Index;
use std::str::FromStr;
use thiserror::Error;

/// One of the six mean ± k·std bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SdBand {
    Plus1,
    Minus1,
    Plus2,
    Minus2,
    Plus3,
    Minus3,
}

impl SdBand {
    /// All bands in reporting order.
    pub const ALL: [SdBand; 6] = [
        SdBand::Plus1,
        SdBand::Minus1,
        SdBand::Plus2,
        SdBand::Minus2,
        SdBand::Plus3,
        SdBand::Minus3,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SdBand::Plus1 => "+1",
            SdBand::Minus1 => "-1",
            SdBand::Plus2 => "+2",
            SdBand::Minus2 => "-2",
            SdBand::Plus3 => "+3",
            SdBand::Minus3 => "-3",
        }
    }

    /// Signed multiple of the standard deviation this band sits at.
    pub fn sigma(self) -> f64 {
        match self {
            SdBand::Plus1 => 1.0,
            SdBand::Minus1 => -1.0,
            SdBand::Plus2 => 2.0,
            SdBand::Minus2 => -2.0,
            SdBand::Plus3 => 3.0,
            SdBand::Minus3 => -3.0,
        }
    }

    fn slot(self) -> usize {
        match self {
            SdBand::Plus1 => 0,
            SdBand::Minus1 => 1,
            SdBand::Plus2 => 2,
            SdBand::Minus2 => 3,
            SdBand::Plus3 => 4,
            SdBand::Minus3 => 5,
        }
    }
}

impl fmt::Display for SdBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returned when a string is not one of the six band labels.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown standard-deviation band label {0:?}")]
pub struct UnknownBand(pub String);

impl FromStr for SdBand {
    type Err = UnknownBand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SdBand::ALL
            .into_iter()
            .find(|band| band.label() == s)
            .ok_or_else(|| UnknownBand(s.to_string()))
    }
}

/// The values of mean ± 1, 2 and 3 standard deviations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SdRanges {
    values: [f64; 6],
}

impl SdRanges {
    pub fn new(mean: f64, std: f64) -> Self {
        let mut values = [0.0; 6];
        for band in SdBand::ALL {
            values[band.slot()] = mean + band.sigma() * std;
        }
        SdRanges { values }
    }

    /// Looks a band up by its label ("+1", "-1", ... "-3").
    pub fn get(&self, label: &str) -> Option<f64> {
        label.parse::<SdBand>().ok().map(|band| self[band])
    }

    /// `(label, value)` pairs in reporting order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        SdBand::ALL
            .into_iter()
            .map(move |band| (band.label(), self[band]))
    }
}

impl Index<SdBand> for SdRanges {
    type Output = f64;

    fn index(&self, band: SdBand) -> &f64 {
        &self.values[band.slot()]
    }
}

impl Serialize for SdRanges {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(SdBand::ALL.len()))?;
        for (label, value) in self.iter() {
            map.serialize_entry(label, &Float(value))?;
        }
        map.end()
    }
}

/// Serializes finite values as numbers and non-finite ones as the strings
/// `"inf"`, `"-inf"` and `"NaN"`, which JSON would otherwise collapse to `null`.
struct Float(f64);

impl Serialize for Float {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_float(&self.0, serializer)
    }
}

fn serialize_float<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_nan() {
        serializer.serialize_str("NaN")
    } else if value.is_infinite() {
        serializer.serialize_str(if *value > 0.0 { "inf" } else { "-inf" })
    } else {
        serializer.serialize_f64(*value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Stats {
    /// Number of values the statistics were computed over.
    pub count: usize,
    #[serde(serialize_with = "serialize_float")]
    pub mean: f64,
    /// Population standard deviation (divisor N).
    #[serde(serialize_with = "serialize_float")]
    pub std: f64,
    pub sd_ranges: SdRanges,
    /// Coefficient of variation as a percentage; 0 when the mean is exactly 0.
    #[serde(serialize_with = "serialize_float")]
    pub cv: f64,
}

/// Computes descriptive statistics over `values`.
///
/// Returns `None` for an empty sample. The standard deviation uses the
/// population convention, dividing by `n` rather than `n - 1`.
///
/// # Example
///
/// ```
/// use sdstats::calculate_stats;
///
/// let stats = calculate_stats(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
/// assert_eq!(stats.std, 2.0);
/// assert_eq!(stats.sd_ranges.get("-1"), Some(3.0));
///
/// assert!(calculate_stats(&[]).is_none());
/// ```
pub fn calculate_stats(values: &[f64]) -> Option<Stats> {
    if values.is_empty() {
        return None;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;
    let std = variance.sqrt();
    let cv = if mean != 0.0 { (std / mean) * 100.0 } else { 0.0 };
    Some(Stats {
        count: values.len(),
        mean,
        std,
        sd_ranges: SdRanges::new(mean, std),
        cv,
    })
}

/// Same as [`calculate_stats`] for any sample losslessly convertible to `f64`.
pub fn calculate_stats_from<I, T>(values: I) -> Option<Stats>
where
    I: IntoIterator<Item = T>,
    T: Into<f64>,
{
    let floats: Vec<f64> = values.into_iter().map(Into::into).collect();
    calculate_stats(&floats)
}

/// Same as [`calculate_stats`] for `u64` counters and durations, which have no
/// lossless `Into<f64>` and so cannot go through [`calculate_stats_from`].
/// Values above 2^53 are rounded to the nearest `f64`.
pub fn calculate_stats_u64(values: &[u64]) -> Option<Stats> {
    let floats: Vec<f64> = values.iter().map(|&x| x as f64).collect();
    calculate_stats(&floats)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sample_has_no_stats() {
        assert!(calculate_stats(&[]).is_none());
        assert!(calculate_stats_u64(&[]).is_none());
        assert!(calculate_stats_from(Vec::<i32>::new()).is_none());
    }

    #[test]
    fn test_reference_sample() {
        let stats = calculate_stats(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
        assert_eq!(stats.count, 8);
        assert_eq!(stats.mean, 5.0);
        assert_eq!(stats.std, 2.0);
        assert_eq!(stats.sd_ranges[SdBand::Plus1], 7.0);
        assert_eq!(stats.sd_ranges[SdBand::Minus1], 3.0);
        assert_eq!(stats.sd_ranges[SdBand::Plus2], 9.0);
        assert_eq!(stats.sd_ranges[SdBand::Minus2], 1.0);
        assert_eq!(stats.sd_ranges[SdBand::Plus3], 11.0);
        assert_eq!(stats.sd_ranges[SdBand::Minus3], -1.0);
        assert_eq!(stats.cv, 40.0);
    }

    #[test]
    fn test_population_not_sample_divisor() {
        // Sample (n-1) std of [1, 3] would be sqrt(2).
        let stats = calculate_stats(&[1.0, 3.0]).unwrap();
        assert_eq!(stats.std, 1.0);
    }

    #[test]
    fn test_single_zero() {
        let stats = calculate_stats(&[0.0]).unwrap();
        assert_eq!(stats.mean, 0.0);
        assert_eq!(stats.std, 0.0);
        assert_eq!(stats.cv, 0.0);
    }

    #[test]
    fn test_zero_mean_with_spread_reports_zero_cv() {
        let stats = calculate_stats(&[-3.0, 3.0]).unwrap();
        assert_eq!(stats.mean, 0.0);
        assert_eq!(stats.std, 3.0);
        assert_eq!(stats.cv, 0.0);
    }

    #[test]
    fn test_negative_mean_gives_negative_cv() {
        let stats = calculate_stats(&[-1.0, -3.0]).unwrap();
        assert_eq!(stats.mean, -2.0);
        assert_eq!(stats.cv, -50.0);
    }

    #[test]
    fn test_integer_conveniences_match() {
        let ints = calculate_stats_from([2i32, 4, 4, 4, 5, 5, 7, 9]).unwrap();
        let unsigned = calculate_stats_u64(&[2, 4, 4, 4, 5, 5, 7, 9]).unwrap();
        assert_eq!(ints, unsigned);
        assert_eq!(ints.std, 2.0);
    }

    #[test]
    fn test_band_labels_round_trip() {
        for band in SdBand::ALL {
            assert_eq!(band.label().parse::<SdBand>(), Ok(band));
        }
        assert!("+4".parse::<SdBand>().is_err());
        assert!("1".parse::<SdBand>().is_err());
    }

    #[test]
    fn test_ranges_lookup_by_label() {
        let ranges = SdRanges::new(10.0, 2.0);
        assert_eq!(ranges.get("+3"), Some(16.0));
        assert_eq!(ranges.get("-2"), Some(6.0));
        assert_eq!(ranges.get("+0"), None);

        let labels: Vec<&str> = ranges.iter().map(|(label, _)| label).collect();
        assert_eq!(labels, vec!["+1", "-1", "+2", "-2", "+3", "-3"]);
    }

    #[test]
    fn test_u64_counters_beyond_f64_integer_range() {
        let stats = calculate_stats_u64(&[u64::MAX, u64::MAX]).unwrap();
        assert_eq!(stats.mean, u64::MAX as f64);
        assert_eq!(stats.std, 0.0);
        assert_eq!(stats.cv, 0.0);
    }

    #[test]
    fn test_nan_propagates() {
        let stats = calculate_stats(&[1.0, f64::NAN]).unwrap();
        assert!(stats.mean.is_nan());
        assert!(stats.std.is_nan());
        assert!(stats.cv.is_nan());
    }
}
