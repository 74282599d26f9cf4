pub mod arch;
pub mod config;
pub mod dataset;
pub mod error;
pub mod optimization;
mod test;
pub mod training;

pub use arch::{LogisticRegression, Model};
pub use config::Hyperparameters;
pub use error::{MlErr, Result};
