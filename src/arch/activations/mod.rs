mod sigmoid;
mod step;

pub use sigmoid::Sigmoid;
pub use step::Step;
