// src/analysis/regression.rs
use crate::error::ScrapeError;

/// Degree-1 least-squares fit `y = slope * x + intercept`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
    /// Pearson correlation; `None` when y has no variance.
    pub r: Option<f64>,
    pub n: usize,
}

impl LinearFit {
    pub fn eval(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    pub fn r_squared(&self) -> Option<f64> {
        self.r.map(|r| r * r)
    }
}

pub fn linear_fit(xs: &[f64], ys: &[f64]) -> Result<LinearFit, ScrapeError> {
    if xs.len() != ys.len() {
        return Err(ScrapeError::Fit("x and y differ in length"));
    }
    let n = xs.len();
    if n < 2 {
        return Err(ScrapeError::Fit("need at least two points"));
    }

    let nf = n as f64;
    let mx = xs.iter().sum::<f64>() / nf;
    let my = ys.iter().sum::<f64>() / nf;

    let (mut sxx, mut sxy, mut syy) = (0.0, 0.0, 0.0);
    for (&x, &y) in xs.iter().zip(ys) {
        let (dx, dy) = (x - mx, y - my);
        sxx += dx * dx;
        sxy += dx * dy;
        syy += dy * dy;
    }
    if sxx == 0.0 {
        return Err(ScrapeError::Fit("x has no variance"));
    }

    let slope = sxy / sxx;
    let intercept = my - slope * mx;
    let r = (syy > 0.0).then(|| sxy / (sxx * syy).sqrt());

    Ok(LinearFit { slope, intercept, r, n })
}
