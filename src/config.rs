//! Options recognised by the evaluation engines.
//!
//! Both configurations deserialize from JSON; absent fields take their defaults:
//! ```
//! # use kfold::config::LearningCurveConfig;
//! let config = LearningCurveConfig::from_json(r#"{"sizes": [10, 20, 40], "seed": 3}"#).unwrap();
//! assert_eq!(config.k, 5);
//! assert!(config.shuffle);
//! ```

use crate::error::{Error, Result};

/// Default number of folds
pub const DEFAULT_K: usize = 5;

fn default_k() -> usize {
    DEFAULT_K
}

fn default_shuffle() -> bool {
    true
}

/// Options of a k-fold cross-validation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrossValidationConfig {
    /// number of folds
    #[serde(default = "default_k")]
    pub k: usize,

    /// seed for shuffling; `None` uses a fixed default seed
    #[serde(default)]
    pub seed: Option<u64>,

    /// shuffle indices before assigning folds
    #[serde(default = "default_shuffle")]
    pub shuffle: bool,
}

impl Default for CrossValidationConfig {
    fn default() -> Self {
        CrossValidationConfig {
            k: DEFAULT_K,
            seed: None,
            shuffle: true,
        }
    }
}

impl CrossValidationConfig {
    pub fn with_k(k: usize) -> Self {
        CrossValidationConfig {
            k,
            ..Default::default()
        }
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }

    pub fn from_json(s: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Check options that do not depend on the data
    pub fn validate(&self) -> Result<()> {
        if self.k < 2 {
            return Err(Error::invalid(format!("k must be at least 2, got {}", self.k)));
        }
        Ok(())
    }
}

/// Options of a learning curve run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearningCurveConfig {
    /// ascending training-set sizes, each in `[k, n]`
    pub sizes: Vec<usize>,

    #[serde(default = "default_k")]
    pub k: usize,

    #[serde(default)]
    pub seed: Option<u64>,

    #[serde(default = "default_shuffle")]
    pub shuffle: bool,
}

impl LearningCurveConfig {
    pub fn new(sizes: Vec<usize>) -> Self {
        LearningCurveConfig {
            sizes,
            k: DEFAULT_K,
            seed: None,
            shuffle: true,
        }
    }

    pub fn k(mut self, k: usize) -> Self {
        self.k = k;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }

    pub fn from_json(s: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(s)?;
        config.cross_validation().validate()?;
        Ok(config)
    }

    /// the fold options shared with plain cross-validation
    pub fn cross_validation(&self) -> CrossValidationConfig {
        CrossValidationConfig {
            k: self.k,
            seed: self.seed,
            shuffle: self.shuffle,
        }
    }

    /// Check the size schedule against a data set of `n` rows
    pub fn validate(&self, n: usize) -> Result<()> {
        self.cross_validation().validate()?;

        if self.sizes.is_empty() {
            return Err(Error::invalid("learning curve needs at least one training size"));
        }
        if let Some(w) = self.sizes.windows(2).find(|w| w[0] >= w[1]) {
            return Err(Error::invalid(format!(
                "training sizes must be strictly ascending, found {} before {}",
                w[0], w[1]
            )));
        }
        if let Some(&s) = self.sizes.iter().find(|&&s| s < self.k || s > n) {
            return Err(Error::invalid(format!(
                "training size {} is outside [{}, {}]",
                s, self.k, n
            )));
        }
        Ok(())
    }
}
