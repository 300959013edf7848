/// An update rule for a flat parameter buffer.
pub trait Optimizer {
    /// Applies one step to `params` given the gradient computed for them.
    ///
    /// `params` and `grad` have the same length.
    fn update_params(&mut self, params: &mut [f64], grad: &[f64]);
}
