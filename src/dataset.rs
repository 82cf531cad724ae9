use crate::error::{Error, Result};

/// A borrowed supervised data set: row-major features with `n_cols` columns and one target per
/// row.
///
/// The data set never copies the caller's buffers. Subsets are expressed as index lists and
/// viewed through [`Rows`].
#[derive(Debug, Copy, Clone)]
pub struct DataSet<'a, X, Y> {
    features: &'a [X],
    targets: &'a [Y],
    n_cols: usize,
}

impl<'a, X, Y> DataSet<'a, X, Y> {
    pub fn new(features: &'a [X], n_cols: usize, targets: &'a [Y]) -> Result<Self> {
        if n_cols == 0 {
            return Err(Error::invalid("feature matrix must have at least one column"));
        }
        if features.len() != n_cols * targets.len() {
            return Err(Error::invalid(format!(
                "{} feature values do not form {} rows of {} columns",
                features.len(),
                targets.len(),
                n_cols
            )));
        }
        Ok(DataSet {
            features,
            targets,
            n_cols,
        })
    }

    /// number of rows
    pub fn n_rows(&self) -> usize {
        self.targets.len()
    }

    pub fn n_cols(&self) -> usize {
        self.n_cols
    }

    /// features of row `i`
    #[inline(always)]
    pub fn row(&self, i: usize) -> &'a [X] {
        &self.features[i * self.n_cols..(i + 1) * self.n_cols]
    }

    #[inline(always)]
    pub fn target(&self, i: usize) -> &'a Y {
        &self.targets[i]
    }

    /// view the rows listed in `indices`, in that order
    pub fn rows<'b>(&'b self, indices: &'b [usize]) -> Rows<'b, X, Y> {
        Rows {
            data: self,
            indices,
        }
    }
}

/// An index-selected view of a [`DataSet`]
#[derive(Debug, Copy, Clone)]
pub struct Rows<'b, X, Y> {
    data: &'b DataSet<'b, X, Y>,
    indices: &'b [usize],
}

impl<'b, X, Y> Rows<'b, X, Y> {
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn n_cols(&self) -> usize {
        self.data.n_cols()
    }

    /// positions of the selected rows in the underlying data set
    pub fn indices(&self) -> &'b [usize] {
        self.indices
    }

    /// iterate over `(features, target)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (&'b [X], &'b Y)> + 'b {
        let data = self.data;
        self.indices
            .iter()
            .map(move |&i| (data.row(i), data.target(i)))
    }

    pub fn features(&self) -> impl Iterator<Item = &'b [X]> + 'b {
        let data = self.data;
        self.indices.iter().map(move |&i| data.row(i))
    }

    pub fn targets(&self) -> impl Iterator<Item = &'b Y> + 'b {
        let data = self.data;
        self.indices.iter().map(move |&i| data.target(i))
    }
}
