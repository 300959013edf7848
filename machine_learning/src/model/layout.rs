use std::ops::Range;

/// Maps a flat parameter buffer into the intercept and the per-feature weights.
///
/// Flat layout: `[b, w_1, ..., w_F]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterLayout {
    pub b: Range<usize>,
    pub w: Range<usize>,
}

impl ParameterLayout {
    pub fn new(feature_count: usize) -> Self {
        Self {
            b: 0..1,
            w: 1..feature_count + 1,
        }
    }

    /// Total number of parameters in the flat buffer.
    #[inline]
    pub fn num_params(&self) -> usize {
        self.w.end
    }

    #[inline]
    pub fn feature_count(&self) -> usize {
        self.w.len()
    }
}
