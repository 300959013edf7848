use ndarray::ArrayView1;

use super::LossFn;

/// Mean squared error loss function.
#[derive(Debug, Default, Clone, Copy)]
pub struct Mse;

impl LossFn for Mse {
    fn loss(&self, y_pred: ArrayView1<f64>, y: ArrayView1<f64>) -> f64 {
        (&y_pred - &y)
            .mapv(|x| x.powi(2))
            .mean()
            .unwrap_or_default()
    }
}
