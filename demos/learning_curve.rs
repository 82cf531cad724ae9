extern crate kfold;
extern crate log;
extern crate rand;
extern crate rand_chacha;
extern crate serde_json;
extern crate simple_logger;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use kfold::baseline::NaiveLinearRegression;
use kfold::prelude::*;

fn main() {
    simple_logger::init_with_level(log::Level::Info).unwrap();

    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let n = 300;
    let x: Vec<f64> = (0..n).map(|_| rng.gen_range(-5.0..5.0)).collect();
    let y: Vec<f64> = x
        .iter()
        .map(|&xi| 0.8 * xi + 0.3 * xi * xi + rng.gen_range(-1.0..1.0))
        .collect();
    let data = DataSet::new(&x, 1, &y).unwrap();

    let config = LearningCurveConfig::from_json(
        r#"{"sizes": [5, 10, 20, 40, 80, 160, 240], "k": 5, "seed": 3}"#,
    )
    .unwrap();

    let curve = learning_curve(&NaiveLinearRegression::new, &data, &config).unwrap();

    for ((size, train), test) in curve
        .sizes
        .iter()
        .zip(curve.mean_train_scores())
        .zip(curve.mean_test_scores())
    {
        println!("{:>4} rows: train R² {:.3}, test R² {:.3}", size, train, test);
    }

    println!("{}", serde_json::to_string_pretty(&curve).unwrap());
}
