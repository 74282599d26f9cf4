pub mod activations;
mod logistic_regression;
pub mod loss;
mod model;

pub use logistic_regression::LogisticRegression;
pub use model::Model;
