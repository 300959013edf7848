mod layout;
mod ops;
mod regressor;
mod view;

pub use layout::ParameterLayout;
pub use regressor::GradientDescentRegressor;
pub use view::LinearRegressionView;
