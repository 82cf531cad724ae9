//! Measure accumulators are summaries of model performance. Regression models are scored with
//! the coefficient of determination.

use num_traits::AsPrimitive;
use std::marker::PhantomData;

/// Trait implemented by performance measures
pub trait MeasureAccumulator<T> {
    /// initialize new measure
    fn new() -> Self;

    /// update with one prediction
    fn update_one(&mut self, known: &T, pred: &T);

    /// get resulting performance
    fn result(&self) -> f64;
}

/// Coefficient of determination: `1 - SS_res / SS_tot`
///
/// The total sum of squares is taken around the mean of the known values seen by this
/// accumulator. If all known values are equal, the result is 1.0 for a perfect fit and 0.0
/// otherwise. The value is negative for models worse than predicting the mean.
#[derive(Debug)]
pub struct RSquared<T> {
    known: Vec<f64>,
    predicted: Vec<f64>,
    _t: PhantomData<T>,
}

impl<T> MeasureAccumulator<T> for RSquared<T>
where
    T: AsPrimitive<f64>,
{
    fn new() -> Self {
        RSquared {
            known: Vec::new(),
            predicted: Vec::new(),
            _t: PhantomData,
        }
    }

    fn update_one(&mut self, known: &T, pred: &T) {
        self.known.push(known.as_());
        self.predicted.push(pred.as_());
    }

    fn result(&self) -> f64 {
        let n = self.known.len();
        if n == 0 {
            return f64::NAN;
        }

        let mean = self.known.iter().sum::<f64>() / n as f64;

        let ss_tot: f64 = self.known.iter().map(|y| (y - mean) * (y - mean)).sum();
        let ss_res: f64 = self
            .known
            .iter()
            .zip(&self.predicted)
            .map(|(y, p)| (y - p) * (y - p))
            .sum();

        if ss_tot == 0.0 {
            return if ss_res == 0.0 { 1.0 } else { 0.0 };
        }

        1.0 - ss_res / ss_tot
    }
}

/// R² of `(known, predicted)` pairs
pub fn r_squared<I>(pairs: I) -> f64
where
    I: IntoIterator<Item = (f64, f64)>,
{
    let mut measure = RSquared::<f64>::new();
    for (known, pred) in pairs {
        measure.update_one(&known, &pred);
    }
    measure.result()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn r2_perfect_fit() {
        let y = [1.0, 2.0, 4.0];
        assert_eq!(r_squared(y.iter().map(|&v| (v, v))), 1.0);
    }

    #[test]
    fn r2_mean_prediction_is_zero() {
        let y = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
        let mean = y.iter().sum::<f64>() / y.len() as f64;
        assert_eq!(r_squared(y.iter().map(|&v| (v, mean))), 0.0);
    }

    #[test]
    fn r2_can_be_negative() {
        let y = [1.0, 2.0, 3.0];
        let r2 = r_squared(y.iter().map(|&v| (v, 10.0)));
        assert!(r2 < 0.0);
        // ss_res = 81 + 64 + 49, ss_tot = 2
        assert!((r2 - (1.0 - 194.0 / 2.0)).abs() < 1e-12);
    }

    #[test]
    fn r2_accumulates_integer_targets() {
        let mut m = RSquared::<i32>::new();
        for (known, pred) in vec![(1, 1), (2, 3), (3, 3)] {
            m.update_one(&known, &pred);
        }
        // ss_res = 1, ss_tot = 2
        assert_eq!(m.result(), 0.5);
    }

    #[test]
    fn r2_constant_targets() {
        assert_eq!(r_squared(vec![(3.0, 3.0)]), 1.0);
        assert_eq!(r_squared(vec![(3.0, 2.5)]), 0.0);
        assert!(r_squared(Vec::new()).is_nan());
    }
}
