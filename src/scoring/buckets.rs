use crate::models::report::{BucketCount, Histogram};
use serde::{Deserialize, Serialize};

/// Ordered threshold-to-label bucketing with an open-ended terminal bucket.
///
/// `classify` returns the label of the first bucket whose upper bound
/// exceeds the value (bounds are exclusive: a value equal to a bound falls
/// into the following bucket), or the terminal label past the last bound.
#[derive(Debug, Clone)]
pub struct BucketScale {
    bounds: Vec<(f64, String)>,
    terminal: String,
}

impl BucketScale {
    pub fn new<L: Into<String>>(
        bounds: impl IntoIterator<Item = (f64, L)>,
        terminal: impl Into<String>,
    ) -> Self {
        BucketScale {
            bounds: bounds
                .into_iter()
                .map(|(bound, label)| (bound, label.into()))
                .collect(),
            terminal: terminal.into(),
        }
    }

    pub fn classify(&self, value: f64) -> &str {
        for (bound, label) in &self.bounds {
            if value < *bound {
                return label;
            }
        }
        &self.terminal
    }

    /// All bucket labels in scale order, terminal last.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.bounds
            .iter()
            .map(|(_, label)| label.as_str())
            .chain(std::iter::once(self.terminal.as_str()))
    }

    /// Count values into an ordered histogram. Every bucket of the scale
    /// is present in the output, including empty ones.
    pub fn histogram(&self, values: impl IntoIterator<Item = f64>) -> Histogram {
        let mut buckets: Vec<BucketCount> = self
            .labels()
            .map(|label| BucketCount {
                label: label.to_string(),
                count: 0,
            })
            .collect();

        for value in values {
            let label = self.classify(value);
            if let Some(bucket) = buckets.iter_mut().find(|bucket| bucket.label == label) {
                bucket.count += 1;
            }
        }

        Histogram { buckets }
    }
}

/// Bug-age buckets in days.
pub fn age_scale() -> BucketScale {
    BucketScale::new(
        [(7.0, "0-7"), (30.0, "7-30"), (60.0, "30-60")],
        "60+",
    )
}

/// Resolution-time buckets in days.
pub fn resolution_scale() -> BucketScale {
    BucketScale::new(
        [(1.0, "<1"), (3.0, "1-3"), (7.0, "3-7"), (30.0, "7-30")],
        "30+",
    )
}

/// Age histogram for a set of open-bug ages (days).
pub fn age_histogram(ages_in_days: impl IntoIterator<Item = f64>) -> Histogram {
    age_scale().histogram(ages_in_days)
}

/// Resolution-time histogram for a set of closed-bug durations (days).
pub fn resolution_histogram(days_to_resolve: impl IntoIterator<Item = f64>) -> Histogram {
    resolution_scale().histogram(days_to_resolve)
}

/// Band for a signed variance percentage. The on-track band is inclusive
/// at both edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VarianceBand {
    UnderEstimate,
    OnTrack,
    OverEstimate,
}

impl VarianceBand {
    pub fn from_percent(variance_percent: f64) -> Self {
        if variance_percent < -10.0 {
            VarianceBand::UnderEstimate
        } else if variance_percent > 10.0 {
            VarianceBand::OverEstimate
        } else {
            VarianceBand::OnTrack
        }
    }
}

/// Band for an estimation-accuracy percentage (0–100, higher is better).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccuracyBand {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl AccuracyBand {
    pub fn from_percent(accuracy: f64) -> Self {
        if accuracy >= 90.0 {
            AccuracyBand::Excellent
        } else if accuracy >= 75.0 {
            AccuracyBand::Good
        } else if accuracy >= 50.0 {
            AccuracyBand::Fair
        } else {
            AccuracyBand::Poor
        }
    }
}
