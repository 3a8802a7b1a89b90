//! Curve and histogram projection.
//!
//! Pure functions turning a [`Distribution`] or a finished sample into
//! plottable geometry. Nothing here holds state; identical inputs give
//! identical output.
//!
//! Data coordinates come out of [`pdf_curve`], [`cdf_curve`],
//! [`shaded_region`] and [`Histogram`]; [`Viewport`] maps them into screen
//! space (y pointing down) and [`path_data`] renders an SVG path string.

use serde::{Deserialize, Serialize};

use crate::distributions::{Distribution, Support};

/// Integer spans wider than this fall back to equal-width bins.
pub const MAX_UNIT_BINS: usize = 200;

/// A point in data or screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// `count` evenly spaced abscissae spanning `[start, end]`, both ends
/// included. Fewer than two points collapse to `start`.
fn linspace(start: f64, end: f64, count: usize) -> impl Iterator<Item = f64> {
    let steps = count.saturating_sub(1).max(1) as f64;
    let step = (end - start) / steps;
    (0..count.max(1)).map(move |i| {
        if count > 1 && i + 1 == count {
            end
        } else {
            start + i as f64 * step
        }
    })
}

/// Integers in `window`, spaced so that at most `limit + 1` are visited.
///
/// Returns the iterator and the stride between visited integers.
fn integers(window: Support, limit: usize) -> (impl Iterator<Item = f64>, u64) {
    let lo = window.min.ceil().max(0.0) as u64;
    let hi = window.max.floor().max(0.0) as u64;
    let limit = limit.max(1) as u64;
    let stride = hi.saturating_sub(lo).div_ceil(limit).max(1);
    let ks = (lo..=hi).step_by(stride as usize).map(|k| k as f64);
    (ks, stride)
}

fn trace(dist: &Distribution, window: Support, points: usize, f: impl Fn(f64) -> f64) -> Vec<Point> {
    let xs: Vec<f64> = if dist.is_discrete() {
        integers(window, points.max(MAX_UNIT_BINS)).0.collect()
    } else {
        linspace(window.min, window.max, points).collect()
    };
    xs.into_iter()
        .map(|x| Point::new(x, f(x)))
        .filter(|p| p.y.is_finite())
        .collect()
}

/// Density (or mass) sampled across `window`.
///
/// Continuous families get `points` evenly spaced samples; discrete
/// families get one point per integer in the window, striding over wide
/// spans so at most `max(points, MAX_UNIT_BINS) + 1` are visited. Points where the
/// density is unbounded (e.g. Gamma with α < 1 at zero) are dropped.
///
/// # Examples
/// ```
/// use frontier_dist::distributions::{Distribution, DistributionFamily};
/// use frontier_dist::projection::pdf_curve;
/// let d = Distribution::with_defaults(DistributionFamily::Normal).unwrap();
/// let curve = pdf_curve(&d, d.support(), 201);
/// assert_eq!(curve.len(), 201);
/// assert!((curve[100].y - 0.3989422804).abs() < 1e-6);
/// ```
pub fn pdf_curve(dist: &Distribution, window: Support, points: usize) -> Vec<Point> {
    trace(dist, window, points, |x| dist.pdf(x))
}

/// Cumulative probability sampled across `window`, laid out like
/// [`pdf_curve`].
pub fn cdf_curve(dist: &Distribution, window: Support, points: usize) -> Vec<Point> {
    trace(dist, window, points, |x| dist.cdf(x))
}

/// Highlighted sub-interval of a density plot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShadedRegion {
    /// Closed polygon outline, starting and ending on the baseline.
    pub points: Vec<Point>,
    /// P(a ≤ X ≤ b).
    pub probability: f64,
}

/// Outline and probability of `[a, b]` under the density.
///
/// The outline is clipped to `window`. For discrete families it traces a
/// unit-width bar per integer in the interval, and the probability
/// includes the mass at `a`. Intervals spanning more integers than
/// `max(points, MAX_UNIT_BINS)` get one wider bar per stride.
pub fn shaded_region(
    dist: &Distribution,
    window: Support,
    a: f64,
    b: f64,
    points: usize,
) -> ShadedRegion {
    if b < a {
        return ShadedRegion {
            points: Vec::new(),
            probability: 0.0,
        };
    }

    let lo = a.max(window.min);
    let hi = b.min(window.max);

    if dist.is_discrete() {
        // P(X < a) is F at the last integer below a.
        let below = dist.cdf(a.ceil() - 1.0);
        let probability = (dist.cdf(b) - below).clamp(0.0, 1.0);
        let mut outline = Vec::new();
        if lo <= hi {
            let (ks, stride) = integers(Support::new(lo, hi), points.max(MAX_UNIT_BINS));
            let half = stride as f64 / 2.0;
            for k in ks {
                let mass = dist.pdf(k);
                outline.extend([
                    Point::new(k - half, 0.0),
                    Point::new(k - half, mass),
                    Point::new(k + half, mass),
                    Point::new(k + half, 0.0),
                ]);
            }
        }
        return ShadedRegion {
            points: outline,
            probability,
        };
    }

    let probability = dist.interval_probability(a, b);
    let mut outline = Vec::new();
    if lo <= hi {
        outline.push(Point::new(lo, 0.0));
        outline.extend(
            linspace(lo, hi, points.max(2))
                .map(|x| Point::new(x, dist.pdf(x)))
                .filter(|p| p.y.is_finite()),
        );
        outline.push(Point::new(hi, 0.0));
    }
    ShadedRegion {
        points: outline,
        probability,
    }
}

// ============================================================================
// Screen space
// ============================================================================

/// Plot area in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64, padding: f64) -> Self {
        Self {
            width,
            height,
            padding,
        }
    }

    /// Maps data points into screen space.
    ///
    /// `x_range` spans the inner width, `[0, y_max]` spans the inner height
    /// with y growing downward. Degenerate ranges map to the left/bottom
    /// edge instead of dividing by zero.
    ///
    /// # Examples
    /// ```
    /// use frontier_dist::distributions::Support;
    /// use frontier_dist::projection::{Point, Viewport};
    /// let vp = Viewport::new(220.0, 120.0, 10.0);
    /// let out = vp.project(&[Point::new(0.0, 0.0), Point::new(1.0, 2.0)], Support::new(0.0, 1.0), 2.0);
    /// assert_eq!(out[0], Point::new(10.0, 110.0));
    /// assert_eq!(out[1], Point::new(210.0, 10.0));
    /// ```
    pub fn project(&self, points: &[Point], x_range: Support, y_max: f64) -> Vec<Point> {
        let inner_w = (self.width - 2.0 * self.padding).max(0.0);
        let inner_h = (self.height - 2.0 * self.padding).max(0.0);
        let span = x_range.width();
        let x_scale = if span > 0.0 { inner_w / span } else { 0.0 };
        let y_scale = if y_max > 0.0 { inner_h / y_max } else { 0.0 };
        let baseline = self.height - self.padding;

        points
            .iter()
            .map(|p| {
                Point::new(
                    self.padding + (p.x - x_range.min) * x_scale,
                    baseline - p.y * y_scale,
                )
            })
            .collect()
    }
}

/// SVG path data for `points`: `M x y L x y …`, with a trailing `Z` when
/// `closed`. Coordinates are rounded to two decimals.
pub fn path_data(points: &[Point], closed: bool) -> String {
    let mut segments: Vec<String> = points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let cmd = if i == 0 { 'M' } else { 'L' };
            format!("{cmd}{:.2} {:.2}", p.x, p.y)
        })
        .collect();
    if closed && !segments.is_empty() {
        segments.push("Z".to_string());
    }
    segments.join(" ")
}

// ============================================================================
// Histogram
// ============================================================================

/// One histogram bin, `[start, end)` (the last bin also includes `end`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
    /// `count / (n · width)`, directly comparable to the density.
    pub density: f64,
}

/// Equal-width binning of a sample over a display window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Histogram {
    pub window: Support,
    pub bins: Vec<Bin>,
    /// Total sample size `n`, including samples outside the window.
    pub total: usize,
    /// Samples that fell outside the window (or were NaN).
    pub outside: usize,
}

impl Histogram {
    /// Bins `samples` into `bins` equal-width bins spanning `window`.
    ///
    /// Densities divide by the full sample size, so mass outside the
    /// window lowers every bar rather than being redistributed.
    ///
    /// # Examples
    /// ```
    /// use frontier_dist::distributions::Support;
    /// use frontier_dist::projection::Histogram;
    /// let h = Histogram::from_samples(&[0.1, 0.2, 0.6, 1.5], Support::new(0.0, 1.0), 2);
    /// assert_eq!(h.bins[0].count, 2);
    /// assert_eq!(h.bins[1].count, 1);
    /// assert_eq!(h.outside, 1);
    /// assert!((h.bins[0].density - 1.0).abs() < 1e-12);
    /// ```
    pub fn from_samples(samples: &[f64], window: Support, bins: usize) -> Self {
        let bins = bins.max(1);
        let width = window.width();
        let bin_width = width / bins as f64;
        let mut counts = vec![0usize; bins];
        let mut outside = 0;
        let usable = bin_width > 0.0;

        for &x in samples {
            if !usable || !window.contains(x) {
                outside += 1;
                continue;
            }
            let idx = (((x - window.min) / bin_width).floor() as usize).min(bins - 1);
            counts[idx] += 1;
        }

        let total = samples.len();
        let norm = total as f64 * bin_width;
        let bins = counts
            .into_iter()
            .enumerate()
            .map(|(i, count)| Bin {
                start: window.min + i as f64 * bin_width,
                end: window.min + (i + 1) as f64 * bin_width,
                count,
                density: if norm > 0.0 { count as f64 / norm } else { 0.0 },
            })
            .collect();

        Self {
            window,
            bins,
            total,
            outside,
        }
    }

    /// Bins a sample drawn from `dist`.
    ///
    /// Discrete families get unit-width bins centred on each integer of
    /// the window, so every bar height equals the observed relative
    /// frequency and compares directly to the mass function. Continuous
    /// families, and integer spans wider than [`MAX_UNIT_BINS`], use
    /// `bins` equal-width bins.
    pub fn for_distribution(
        samples: &[f64],
        dist: &Distribution,
        window: Support,
        bins: usize,
    ) -> Self {
        if dist.is_discrete() {
            let lo = window.min.ceil();
            let hi = window.max.floor();
            if hi >= lo {
                let span = (hi - lo) as usize + 1;
                if span <= MAX_UNIT_BINS {
                    return Self::from_samples(samples, Support::new(lo - 0.5, hi + 0.5), span);
                }
            }
        }
        Self::from_samples(samples, window, bins)
    }

    pub fn bin_count(&self) -> usize {
        self.bins.len()
    }

    /// Tallest bar, for choosing a shared y scale with the curve.
    pub fn max_density(&self) -> f64 {
        self.bins.iter().map(|b| b.density).fold(0.0, f64::max)
    }

    /// Bar outlines as `(top-left, bottom-right)` corners in data space.
    pub fn bars(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.bins
            .iter()
            .map(|b| (Point::new(b.start, b.density), Point::new(b.end, 0.0)))
    }
}
