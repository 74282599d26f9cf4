use ndarray::{Array1, ArrayView1};

pub trait LossFn {
    fn loss(&self, y_pred: ArrayView1<f64>, y: ArrayView1<f64>) -> f64;
    fn loss_prime(&self, y_pred: ArrayView1<f64>, y: ArrayView1<f64>) -> Array1<f64>;
}
