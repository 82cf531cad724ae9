//! k-fold cross-validation and learning curves for supervised models.
//!
//! The crate partitions sample indices into folds ([`procedures`]), trains a new estimator per
//! fold and scores it on both halves ([`evaluation::cross_val_score`]), and repeats this over
//! nested training subsets of growing size ([`evaluation::learning_curve`]). Estimators are
//! anything implementing [`estimator::Estimator`]; data is borrowed, never copied.

extern crate num_traits;
extern crate rand;
extern crate rand_chacha;
#[cfg(feature = "parallel")]
extern crate rayon;
extern crate serde;
#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_derive;
extern crate serde_json;
extern crate thiserror;

pub mod baseline;
pub mod config;
pub mod dataset;
pub mod error;
pub mod estimator;
pub mod evaluation;
pub mod measure_accumulator;
pub mod procedures;
pub mod random;

pub use crate::config::{CrossValidationConfig, LearningCurveConfig};
pub use crate::dataset::{DataSet, Rows};
pub use crate::error::{Error, Result};
pub use crate::evaluation::{
    cross_val_score, learning_curve, CrossValidationScores, LearningCurve, ScoreMatrix,
};
pub use crate::measure_accumulator::{r_squared, MeasureAccumulator, RSquared};
pub use crate::procedures::{partition, FoldSequence, KFold};

pub mod prelude {
    pub use crate::config::{CrossValidationConfig, LearningCurveConfig};
    pub use crate::dataset::{DataSet, Rows};
    pub use crate::estimator::{Estimator, EstimatorFactory, FreshClone, Prototype};
    pub use crate::evaluation::{cross_val_score, learning_curve, CrossValidation};
    pub use crate::measure_accumulator::MeasureAccumulator;
    pub use crate::procedures::Procedure;
}
