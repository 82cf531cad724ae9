extern crate kfold;
extern crate log;
extern crate rand;
extern crate rand_chacha;
extern crate serde_json;
extern crate simple_logger;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use kfold::baseline::{MeanRegressor, NaiveLinearRegression};
use kfold::prelude::*;

fn main() {
    simple_logger::init_with_level(log::Level::Info).unwrap();

    // noisy line on the second of three features
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let n = 200;
    let mut x = Vec::with_capacity(n * 3);
    let mut y = Vec::with_capacity(n);
    for _ in 0..n {
        let row: [f64; 3] = [rng.gen(), rng.gen_range(0.0..10.0), rng.gen()];
        y.push(1.5 * row[1] - 4.0 + rng.gen_range(-2.0..2.0));
        x.extend_from_slice(&row);
    }
    let data = DataSet::new(&x, 3, &y).unwrap();

    let config = CrossValidationConfig::with_k(10).seed(42);

    let baseline = cross_val_score(&Prototype(MeanRegressor::new()), &data, &config).unwrap();
    let linear = cross_val_score(&NaiveLinearRegression::new, &data, &config).unwrap();

    println!("mean predictor: {}", serde_json::to_string(&baseline).unwrap());
    println!("linear regression: {}", serde_json::to_string(&linear).unwrap());
    println!(
        "R²: {:.3} ± {:.3} (baseline {:.3})",
        linear.mean_test(),
        linear.std_test(),
        baseline.mean_test()
    );
}
