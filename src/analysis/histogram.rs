// src/analysis/histogram.rs

/// Equal-width bins over `[lo, hi]`. Bins are half-open except the last.
#[derive(Clone, Debug, PartialEq)]
pub struct Histogram {
    pub lo: f64,
    pub hi: f64,
    pub counts: Vec<usize>,
}

impl Histogram {
    pub fn bins(&self) -> usize { self.counts.len() }

    pub fn width(&self) -> f64 {
        if self.counts.is_empty() { 0.0 } else { (self.hi - self.lo) / self.counts.len() as f64 }
    }

    /// `bins + 1` edges from `lo` to `hi`.
    pub fn edges(&self) -> Vec<f64> {
        let w = self.width();
        (0..=self.bins()).map(|i| self.lo + w * i as f64).collect()
    }

    pub fn total(&self) -> usize { self.counts.iter().sum() }

    pub fn max_count(&self) -> usize { self.counts.iter().copied().max().unwrap_or(0) }
}

/// Bin `values` into `bins` buckets spanning their min..max.
/// A zero-width range is widened to `v ± 0.5`.
pub fn histogram(values: &[f64], bins: usize) -> Histogram {
    if values.is_empty() || bins == 0 {
        return Histogram { lo: 0.0, hi: 0.0, counts: Vec::new() };
    }

    let (mut lo, mut hi) = values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));
    if lo == hi {
        lo -= 0.5;
        hi += 0.5;
    }

    let span = hi - lo;
    let mut hist = Histogram { lo, hi, counts: vec![0usize; bins] };
    let edges = hist.edges();
    for &v in values {
        let mut ix = (((v - lo) / span * bins as f64) as usize).min(bins - 1);
        // rounding can put v on the wrong side of an edge; the edges decide
        if v < edges[ix] {
            ix -= 1;
        } else if v >= edges[ix + 1] && ix != bins - 1 {
            ix += 1;
        }
        hist.counts[ix] += 1;
    }

    hist
}
