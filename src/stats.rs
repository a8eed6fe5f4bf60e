//! Scalar reductions used to collapse per-pixel maps into feature columns.
use serde::{Deserialize, Serialize};

/// Mean, population variance and maximum of a sample.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    pub mean: f64,
    pub var: f64,
    pub max: f64,
}

impl SummaryStats {
    /// Reduce `values`. Empty input gives all zeros; constant input gives
    /// `var == 0` and `mean == max` exactly.
    pub fn of<I>(values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<f64>,
    {
        let values: Vec<f64> = values.into_iter().map(Into::into).collect();
        let Some(&first) = values.first() else {
            return Self::default();
        };
        let (min, max) = values
            .iter()
            .fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v)));
        if min == max {
            return Self {
                mean: first,
                var: 0.0,
                max,
            };
        }

        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let var = values.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / n;
        Self { mean, var, max }
    }
}

#[cfg(test)]
mod tests {
    use super::SummaryStats;

    #[test]
    fn reduces_small_sample() {
        let s = SummaryStats::of([1.0f32, 2.0, 3.0, 6.0]);
        assert_eq!(s.mean, 3.0);
        assert_eq!(s.var, 3.5);
        assert_eq!(s.max, 6.0);
    }

    #[test]
    fn constant_and_empty_samples_are_degenerate() {
        let c = SummaryStats::of(vec![0.1f64; 1000]);
        assert_eq!(c, SummaryStats { mean: 0.1, var: 0.0, max: 0.1 });
        assert_eq!(SummaryStats::of(Vec::<f64>::new()), SummaryStats::default());
    }

    #[test]
    fn integer_codes_reduce() {
        let s = SummaryStats::of([8u8, 8, 9, 7].iter().map(|&c| c as f64));
        assert_eq!(s.mean, 8.0);
        assert_eq!(s.max, 9.0);
        assert_eq!(s.var, 0.5);
    }
}
