mod batch;
mod history;
mod stochastic;

pub use history::History;
pub use stochastic::MOMENTUM;
