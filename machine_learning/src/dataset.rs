use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

use crate::{MlErr, Result};

/// A single owned observation: its features and the label they map to.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    features: Vec<f64>,
    label: f64,
}

impl Observation {
    /// Creates a new `Observation`.
    ///
    /// # Arguments
    /// * `features` - The ordered feature values.
    /// * `label` - The target value.
    pub fn new(features: Vec<f64>, label: f64) -> Self {
        Self { features, label }
    }

    pub fn features(&self) -> &[f64] {
        &self.features
    }

    pub fn label(&self) -> f64 {
        self.label
    }
}

impl<const F: usize> From<([f64; F], f64)> for Observation {
    fn from((features, label): ([f64; F], f64)) -> Self {
        Self::new(features.to_vec(), label)
    }
}

/// A borrowed row of a `Dataset`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample<'a> {
    pub x: ArrayView1<'a, f64>,
    pub y: f64,
}

/// An immutable in-memory table of observations.
///
/// Every row has exactly `feature_count()` features and there is at least one row.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    x: Array2<f64>,
    y: Array1<f64>,
}

impl Dataset {
    /// Builds a dataset out of a list of observations.
    ///
    /// The feature count is taken from the first observation.
    ///
    /// # Arguments
    /// * `rows` - The observations, in order.
    ///
    /// # Returns
    /// The dataset, or a shape error if `rows` is empty or the feature counts disagree.
    pub fn load<I>(rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = Observation>,
    {
        let mut rows = rows.into_iter();
        let first = rows.next().ok_or(MlErr::EmptyDataset)?;
        let x_size = first.features.len();

        let mut xs = first.features;
        let mut ys = vec![first.label];

        for row in rows {
            if row.features().len() != x_size {
                return Err(MlErr::SizeMismatch {
                    what: "features",
                    got: row.features().len(),
                    expected: x_size,
                });
            }

            xs.extend_from_slice(row.features());
            ys.push(row.label());
        }

        Self::from_parts(xs, ys, x_size)
    }

    /// Builds a dataset out of a row-major buffer where each row holds `x_size`
    /// features followed by its label.
    ///
    /// # Arguments
    /// * `data` - The raw rows.
    /// * `x_size` - The amount of features per row.
    pub fn from_flat(data: &[f64], x_size: usize) -> Result<Self> {
        if data.is_empty() {
            return Err(MlErr::EmptyDataset);
        }

        let row_size = x_size.checked_add(1).ok_or(MlErr::SizeMismatch {
            what: "features",
            got: x_size,
            expected: usize::MAX - 1,
        })?;

        if data.len() % row_size != 0 {
            return Err(MlErr::SizeMismatch {
                what: "data",
                got: data.len(),
                expected: (data.len() / row_size)
                    .saturating_add(1)
                    .saturating_mul(row_size),
            });
        }

        let len = data.len() / row_size;
        let mut xs = Vec::with_capacity(len * x_size);
        let mut ys = Vec::with_capacity(len);

        for row in data.chunks_exact(row_size) {
            let (x, y) = row.split_at(x_size);
            xs.extend_from_slice(x);
            ys.push(y[0]);
        }

        Self::from_parts(xs, ys, x_size)
    }

    fn from_parts(xs: Vec<f64>, ys: Vec<f64>, x_size: usize) -> Result<Self> {
        let len = ys.len();
        let got = xs.len();
        let x = Array2::from_shape_vec((len, x_size), xs).map_err(|_| MlErr::SizeMismatch {
            what: "features",
            got,
            expected: len * x_size,
        })?;

        Ok(Self {
            x,
            y: Array1::from(ys),
        })
    }

    /// Returns the amount of features per row.
    pub fn feature_count(&self) -> usize {
        self.x.ncols()
    }

    /// Returns the amount of rows.
    pub fn size(&self) -> usize {
        self.y.len()
    }

    /// Returns the row at position `index`.
    ///
    /// # Errors
    /// `MlErr::OutOfBounds` if `index >= self.size()`.
    pub fn row(&self, index: usize) -> Result<Sample<'_>> {
        if index >= self.size() {
            return Err(MlErr::OutOfBounds {
                index,
                len: self.size(),
            });
        }

        Ok(Sample {
            x: self.x.row(index),
            y: self.y[index],
        })
    }

    /// Iterates over every row in order.
    pub fn samples(&self) -> impl Iterator<Item = Sample<'_>> {
        self.x
            .rows()
            .into_iter()
            .zip(self.y.iter())
            .map(|(x, &y)| Sample { x, y })
    }

    /// The feature matrix, one row per observation.
    pub fn x(&self) -> ArrayView2<'_, f64> {
        self.x.view()
    }

    /// The labels, one per observation.
    pub fn y(&self) -> ArrayView1<'_, f64> {
        self.y.view()
    }
}
