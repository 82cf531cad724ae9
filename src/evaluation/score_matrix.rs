/// Row-major matrix of scores: one row per training size, one column per fold
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreMatrix {
    n_rows: usize,
    n_cols: usize,
    values: Vec<f64>,
}

impl ScoreMatrix {
    pub(crate) fn zeros(n_rows: usize, n_cols: usize) -> Self {
        ScoreMatrix {
            n_rows,
            n_cols,
            values: vec![0.0; n_rows * n_cols],
        }
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, value: f64) {
        self.values[row * self.n_cols + col] = value;
    }

    /// `(rows, columns)`
    pub fn shape(&self) -> (usize, usize) {
        (self.n_rows, self.n_cols)
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.n_rows && col < self.n_cols {
            Some(self.values[row * self.n_cols + col])
        } else {
            None
        }
    }

    pub fn row(&self, row: usize) -> Option<&[f64]> {
        if row < self.n_rows {
            self.values.get(row * self.n_cols..(row + 1) * self.n_cols)
        } else {
            None
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.values.chunks(self.n_cols.max(1)).take(self.n_rows)
    }

    /// mean over folds, per row
    pub fn row_means(&self) -> Vec<f64> {
        self.rows()
            .map(|r| r.iter().sum::<f64>() / r.len() as f64)
            .collect()
    }
}

#[test]
fn score_matrix_layout() {
    let mut m = ScoreMatrix::zeros(2, 3);
    m.set(0, 2, 1.5);
    m.set(1, 0, 3.0);
    m.set(1, 1, 6.0);

    assert_eq!(m.shape(), (2, 3));
    assert_eq!(m.row(0), Some(&[0.0, 0.0, 1.5][..]));
    assert_eq!(m.row(2), None);
    assert_eq!(m.get(1, 1), Some(6.0));
    assert_eq!(m.get(2, 0), None);
    assert_eq!(m.row_means(), vec![0.5, 3.0]);
}
