use serde::{Deserialize, Serialize};

use crate::{MlErr, Result};

const DEFAULT_ALPHA: f64 = 0.1;
const DEFAULT_MAX_EPOCHS: usize = 1000;

fn default_alpha() -> f64 {
    DEFAULT_ALPHA
}

fn default_max_epochs() -> usize {
    DEFAULT_MAX_EPOCHS
}

/// The hyperparameters owned by a `LogisticRegression`.
///
/// Overrides passed to a fit call are written back here, so they also become the defaults for
/// every later call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hyperparameters {
    #[serde(default = "default_alpha")]
    pub alpha: f64,
    #[serde(default = "default_max_epochs")]
    pub max_epochs: usize,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for Hyperparameters {
    fn default() -> Self {
        Self {
            alpha: DEFAULT_ALPHA,
            max_epochs: DEFAULT_MAX_EPOCHS,
            seed: None,
        }
    }
}

impl Hyperparameters {
    /// Returns a new unseeded `Hyperparameters`.
    ///
    /// # Arguments
    /// * `alpha` - The learning rate.
    /// * `max_epochs` - The amount of epochs every fit call runs for.
    pub fn new(alpha: f64, max_epochs: usize) -> Self {
        Self {
            alpha,
            max_epochs,
            seed: None,
        }
    }

    /// Parses and validates hyperparameters from a json document. Missing fields take their
    /// default value.
    ///
    /// # Errors
    /// `MlErr::Config` if the document is malformed, `MlErr::InvalidHyperparameter` if a value
    /// is out of range.
    pub fn from_json(s: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the learning rate is finite and strictly positive.
    pub fn validate(&self) -> Result<()> {
        if !self.alpha.is_finite() || self.alpha <= 0. {
            return Err(MlErr::InvalidHyperparameter {
                name: "alpha",
                value: self.alpha.to_string(),
            });
        }

        Ok(())
    }

    /// Overwrites the stored values with whichever overrides are given.
    pub fn apply_overrides(&mut self, alpha: Option<f64>, max_epochs: Option<usize>) {
        if let Some(alpha) = alpha {
            self.alpha = alpha;
        }

        if let Some(max_epochs) = max_epochs {
            self.max_epochs = max_epochs;
        }
    }
}
