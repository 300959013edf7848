use log::{debug, trace, warn};
use ndarray::{Array1, ArrayView1};

use super::{layout::ParameterLayout, ops, view::LinearRegressionView};
use crate::{
    MlErr, Result,
    dataset::Dataset,
    loss::{LossFn, Mse},
    optimization::{GradientDescent, Optimizer},
};

/// Linear regression trained with full-batch gradient descent.
///
/// Owns its weight vector `[b, w_1, ..., w_F]`, starting at zero. Datasets are only borrowed
/// while training, so several regressors can share one.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientDescentRegressor {
    weights: Vec<f64>,
    layout: ParameterLayout,
}

impl GradientDescentRegressor {
    /// Creates a new regressor with every weight set to zero.
    ///
    /// # Arguments
    /// * `feature_count` - The amount of features of the inputs it will handle.
    pub fn new(feature_count: usize) -> Self {
        let layout = ParameterLayout::new(feature_count);

        Self {
            weights: vec![0.0; layout.num_params()],
            layout,
        }
    }

    pub fn feature_count(&self) -> usize {
        self.layout.feature_count()
    }

    /// Returns a copy of the current weights, the intercept first.
    pub fn weights(&self) -> Vec<f64> {
        self.weights.clone()
    }

    /// Predicts the label of a single input.
    ///
    /// # Errors
    /// `MlErr::SizeMismatch` if `features` doesn't have `feature_count()` values.
    pub fn predict(&self, features: &[f64]) -> Result<f64> {
        self.check_features(features.len())?;
        Ok(self.view().predict(ArrayView1::from(features)))
    }

    /// Predicts the label of every row of `dataset`, in order.
    ///
    /// # Errors
    /// `MlErr::SizeMismatch` if the dataset's feature count differs from the regressor's.
    pub fn predict_dataset(&self, dataset: &Dataset) -> Result<Array1<f64>> {
        self.check_features(dataset.feature_count())?;
        Ok(self.view().predict_batch(dataset.x()))
    }

    /// The mean squared error of the current weights over `dataset`.
    pub fn loss(&self, dataset: &Dataset) -> Result<f64> {
        let y_pred = self.predict_dataset(dataset)?;
        Ok(Mse.loss(y_pred.view(), dataset.y()))
    }

    /// Trains the weights with `iterations` full-batch gradient descent steps.
    ///
    /// # Arguments
    /// * `dataset` - The training data.
    /// * `iterations` - The amount of passes over the dataset, one weight update each.
    /// * `learning_rate` - The step size. Too large a rate makes the weights diverge, which
    ///   isn't treated as an error.
    ///
    /// # Returns
    /// The loss of each pass, measured before its update.
    pub fn fit(
        &mut self,
        dataset: &Dataset,
        iterations: usize,
        learning_rate: f64,
    ) -> Result<Vec<f64>> {
        let mut optimizer = GradientDescent::new(learning_rate);
        self.fit_with(dataset, iterations, &mut optimizer)
    }

    /// Same as `fit`, with the update rule given by `optimizer`.
    pub fn fit_with<O>(
        &mut self,
        dataset: &Dataset,
        iterations: usize,
        optimizer: &mut O,
    ) -> Result<Vec<f64>>
    where
        O: Optimizer,
    {
        self.check_features(dataset.feature_count())?;

        debug!(
            "fitting {} weights over {} samples for {iterations} iterations",
            self.weights.len(),
            dataset.size()
        );

        let mut grads = vec![0.0; self.weights.len()];
        let mut losses = Vec::with_capacity(iterations);
        let mut diverged = false;

        for iteration in 0..iterations {
            let y_pred = ops::linreg_sq_err_grad_batch(
                &self.layout,
                &self.weights,
                &mut grads,
                dataset.x(),
                dataset.y(),
            );

            let loss = Mse.loss(y_pred.view(), dataset.y());
            trace!(iteration = iteration, loss = loss; "batch pass");
            losses.push(loss);

            optimizer.update_params(&mut self.weights, &grads);

            if !diverged && self.weights.iter().any(|w| !w.is_finite()) {
                warn!("weights stopped being finite at iteration {iteration}");
                diverged = true;
            }
        }

        debug!("finished fitting, weights: {:?}", self.weights);
        Ok(losses)
    }

    fn view(&self) -> LinearRegressionView<'_> {
        LinearRegressionView::new(&self.weights, &self.layout)
    }

    fn check_features(&self, got: usize) -> Result<()> {
        let expected = self.feature_count();

        if got != expected {
            return Err(MlErr::SizeMismatch {
                what: "features",
                got,
                expected,
            });
        }

        Ok(())
    }
}
