use ndarray::{Array1, ArrayView1, ArrayView2};

use super::layout::ParameterLayout;

/// A read-only view over a flat weights buffer.
///
/// The view *does not own* weights. It interprets them via `ParameterLayout`.
#[derive(Debug, Clone, Copy)]
pub struct LinearRegressionView<'a> {
    weights: &'a [f64],
    layout: &'a ParameterLayout,
}

impl<'a> LinearRegressionView<'a> {
    pub fn new(weights: &'a [f64], layout: &'a ParameterLayout) -> Self {
        debug_assert_eq!(weights.len(), layout.num_params());
        Self { weights, layout }
    }

    #[inline]
    pub fn b(&self) -> f64 {
        self.weights[self.layout.b.start]
    }

    #[inline]
    pub fn w(&self) -> ArrayView1<'a, f64> {
        ArrayView1::from(&self.weights[self.layout.w.clone()])
    }

    /// y = b + w·x
    #[inline]
    pub fn predict(&self, x: ArrayView1<f64>) -> f64 {
        self.b() + self.w().dot(&x)
    }

    /// Predicts every row of `x` at once.
    pub fn predict_batch(&self, x: ArrayView2<f64>) -> Array1<f64> {
        x.dot(&self.w()) + self.b()
    }
}
