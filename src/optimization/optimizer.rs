use ndarray::{ArrayView1, ArrayViewMut1};

pub trait Optimizer {
    fn update_params(&mut self, params: ArrayViewMut1<f64>, grad: ArrayView1<f64>);
}
