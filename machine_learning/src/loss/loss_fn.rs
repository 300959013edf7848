use ndarray::ArrayView1;

/// Measures how far a model's predictions are from the expected labels.
pub trait LossFn {
    fn loss(&self, y_pred: ArrayView1<f64>, y: ArrayView1<f64>) -> f64;
}
