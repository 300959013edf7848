use ndarray::{Array1, ArrayView1, ArrayView2};

use super::{layout::ParameterLayout, view::LinearRegressionView};

/// Computes the full-batch gradient of the squared error for linear regression:
///
/// loss = (1/2) * sum_i (yhat_i - y_i)^2
///
/// grads:
/// - dL/db   = sum_i err_i
/// - dL/dw_k = sum_i err_i * x_ik
///
/// Every prediction uses the same `weights`, nothing is updated here.
/// The gradient overwrites `grads` (flat buffer, same layout as `weights`).
///
/// # Returns
/// The predictions made for every row of `x`.
pub fn linreg_sq_err_grad_batch(
    layout: &ParameterLayout,
    weights: &[f64],
    grads: &mut [f64],
    x: ArrayView2<f64>,
    y: ArrayView1<f64>,
) -> Array1<f64> {
    debug_assert_eq!(x.nrows(), y.len());
    debug_assert_eq!(x.ncols(), layout.feature_count());
    debug_assert_eq!(grads.len(), layout.num_params());

    let view = LinearRegressionView::new(weights, layout);
    let y_pred = view.predict_batch(x);
    let err = &y_pred - &y;

    grads[layout.b.start] = err.sum();

    let dw = x.t().dot(&err);
    for (g, d) in grads[layout.w.clone()].iter_mut().zip(dw.iter()) {
        *g = *d;
    }

    y_pred
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::*;

    #[test]
    fn grad_matches_expected_simple_case() {
        // y = 2x + 1, but weights start at b=0, w=0
        let x = array![[1.0], [2.0], [3.0]];
        let y = array![3.0, 5.0, 7.0];

        let layout = ParameterLayout::new(1);
        let weights = [0.0, 0.0];
        let mut grads = [f64::NAN, f64::NAN];

        let y_pred = linreg_sq_err_grad_batch(&layout, &weights, &mut grads, x.view(), y.view());

        // errs: [-3, -5, -7]
        // dL/db = -15
        // dL/dw = -3*1 + -5*2 + -7*3 = -34
        assert_eq!(y_pred, array![0.0, 0.0, 0.0]);
        assert_eq!(grads, [-15.0, -34.0]);
    }

    #[test]
    fn perfect_fit_has_zero_gradient() {
        let x = array![[1.0, 2.0], [0.0, 1.0], [4.0, -1.0]];
        let y = array![1.0 + 2.0 - 6.0, 1.0 - 3.0, 1.0 + 8.0 + 3.0];

        let layout = ParameterLayout::new(2);
        let weights = [1.0, 2.0, -3.0];
        let mut grads = [1.0; 3];

        linreg_sq_err_grad_batch(&layout, &weights, &mut grads, x.view(), y.view());

        assert_eq!(grads, [0.0; 3]);
    }
}
