//! Descriptive statistics for one numeric column.

/// count / mean / std / min / quartiles / max of a column.
///
/// std is the sample standard deviation (n - 1 denominator) and quantiles
/// interpolate linearly between closest ranks, so the numbers line up with
/// the describe() output analysts already compare against. A single-value
/// column has no sample deviation and reports NaN there.
#[derive(Debug, Clone, PartialEq)]
pub struct Describe {
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub q25: f64,
    pub median: f64,
    pub q75: f64,
    pub max: f64,
}

impl Describe {
    /// None when the column is empty.
    pub fn of(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }

        let count = values.len();
        let mean = values.iter().sum::<f64>() / count as f64;
        let std = if count > 1 {
            let squares = values.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>();
            (squares / (count - 1) as f64).sqrt()
        } else {
            f64::NAN
        };

        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);

        Some(Self {
            count,
            mean,
            std,
            min: sorted[0],
            q25: quantile(&sorted, 0.25),
            median: quantile(&sorted, 0.5),
            q75: quantile(&sorted, 0.75),
            max: sorted[count - 1],
        })
    }
}

/// Linear interpolation between closest ranks. `sorted` must be ascending
/// and non-empty.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let rank = q * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    if lo == hi {
        sorted[lo]
    } else {
        sorted[lo] + (rank - lo as f64) * (sorted[hi] - sorted[lo])
    }
}
