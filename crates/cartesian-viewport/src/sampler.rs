//! Function sampling.
//!
//! Turns a continuous function into an x-ordered list of samples suitable for
//! drawing as a polyline. Samples where the function is undefined (`NaN` or
//! infinite) split the polyline; no segment is ever drawn across them.

use std::cmp::Ordering;

use cartesian_core::Axis;

use crate::projection::Projection;

/// One evaluated point of a function.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Input, in plane units
    pub x: f64,
    /// Output, in plane units; non-finite when undefined
    pub y: f64,
}

impl Sample {
    /// The function produced a finite value here.
    pub fn is_defined(&self) -> bool {
        self.y.is_finite()
    }
}

/// Samples of one function across the visible x-range, sorted by x.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampledFunction {
    samples: Vec<Sample>,
}

impl SampledFunction {
    /// All samples, ordered by x.
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// True when nothing was sampled
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Number of samples where the function is defined
    pub fn defined_count(&self) -> usize {
        self.samples.iter().filter(|s| s.is_defined()).count()
    }

    /// Drawable segments: pairs of adjacent samples that are both defined.
    pub fn segments(&self) -> impl Iterator<Item = (Sample, Sample)> + '_ {
        self.samples
            .windows(2)
            .filter(|pair| pair[0].is_defined() && pair[1].is_defined())
            .map(|pair| (pair[0], pair[1]))
    }
}

/// Sample `f` over the x-range visible through `projection`.
///
/// Seeds are taken at every multiple of the X step size covering the visible
/// range, one step beyond each edge. Between two consecutive defined seeds
/// the function is also evaluated at every intervening pixel column.
pub fn sample_function<F>(projection: &Projection<'_>, f: F) -> SampledFunction
where
    F: Fn(f64) -> f64,
{
    let step = projection.converter().state().step_size(Axis::X);
    let left = projection.px_to_x(0);
    let right = projection.px_to_x(projection.width());

    let first = ((left / step).floor() as i64).saturating_sub(1);
    let last = ((right / step).ceil() as i64).saturating_add(1);

    let seeds: Vec<Sample> = (first..=last)
        .map(|k| {
            let x = k as f64 * step;
            Sample { x, y: f(x) }
        })
        .collect();

    let mut samples = Vec::with_capacity(seeds.len() * 2);
    for pair in seeds.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        samples.push(a);
        if !(a.is_defined() && b.is_defined()) {
            continue;
        }
        let from = projection.x_to_px(a.x).saturating_add(1);
        let to = projection.x_to_px(b.x).saturating_sub(1);
        for column in from..=to {
            let x = projection.px_to_x(column);
            samples.push(Sample { x, y: f(x) });
        }
    }
    if let Some(last) = seeds.last() {
        samples.push(*last);
    }

    samples.sort_by(|a, b| a.x.total_cmp(&b.x));
    samples.dedup_by(|a, b| a.x.partial_cmp(&b.x) == Some(Ordering::Equal));

    let sampled = SampledFunction { samples };
    tracing::trace!(
        "Sampled {} points ({} defined) over [{}, {}]",
        sampled.len(),
        sampled.defined_count(),
        left,
        right
    );
    sampled
}
