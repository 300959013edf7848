//! Linear regression fitted with full-batch gradient descent.
//!
//! ```
//! use machine_learning::{Dataset, GradientDescentRegressor, Observation};
//!
//! let dataset = Dataset::load([
//!     Observation::new(vec![1.0], 7.0),
//!     Observation::new(vec![2.0], 9.0),
//!     Observation::new(vec![3.0], 11.0),
//!     Observation::new(vec![4.0], 13.0),
//! ])?;
//!
//! let mut model = GradientDescentRegressor::new(dataset.feature_count());
//! model.fit(&dataset, 5000, 0.01)?;
//!
//! let y = model.predict(&[5.0])?;
//! assert!((y - 15.0).abs() < 0.01);
//! # Ok::<(), machine_learning::MlErr>(())
//! ```

pub mod dataset;
pub mod error;
pub mod loss;
pub mod model;
pub mod optimization;

pub use dataset::{Dataset, Observation, Sample};
pub use error::{MlErr, Result};
pub use model::GradientDescentRegressor;
