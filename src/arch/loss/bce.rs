use ndarray::{Array1, ArrayView1, Zip};

use super::LossFn;

/// Binary cross-entropy loss function, averaged over samples.
///
/// Predictions are not clipped away from 0 and 1, a confident wrong prediction yields an
/// infinite (or NaN) loss.
#[derive(Default, Clone, Copy)]
pub struct BinaryCrossEntropy;

impl BinaryCrossEntropy {
    /// Returns a new `BinaryCrossEntropy`.
    pub fn new() -> Self {
        Self
    }
}

impl LossFn for BinaryCrossEntropy {
    fn loss(&self, y_pred: ArrayView1<f64>, y: ArrayView1<f64>) -> f64 {
        Zip::from(&y_pred)
            .and(&y)
            .map_collect(|&p, &y| -y * p.ln() - (1. - y) * (1. - p).ln())
            .mean()
            .unwrap_or(f64::NAN)
    }

    /// Gradient with respect to the pre-sigmoid score, which collapses to `y_pred - y`.
    fn loss_prime(&self, y_pred: ArrayView1<f64>, y: ArrayView1<f64>) -> Array1<f64> {
        &y_pred - &y
    }
}

#[cfg(test)]
mod test {
    use ndarray::array;

    use super::*;

    #[test]
    fn test_loss_at_one_half() {
        let y_pred = array![0.5, 0.5];
        let y = array![0., 1.];
        let loss = BinaryCrossEntropy.loss(y_pred.view(), y.view());
        assert!((loss - 2f64.ln()).abs() < 1e-12, "{loss}");
    }

    #[test]
    fn test_loss_is_mean() {
        let y_pred = array![0.9, 0.2, 0.7];
        let y = array![1., 0., 0.];
        let expected = (-(0.9f64).ln() - (0.8f64).ln() - (0.3f64).ln()) / 3.;
        let loss = BinaryCrossEntropy.loss(y_pred.view(), y.view());
        assert!(
            (loss - expected).abs() < 1e-12,
            "got {loss}, expected {expected}"
        );
    }

    #[test]
    fn test_confident_wrong_prediction_diverges() {
        let y_pred = array![0.];
        let y = array![1.];
        let loss = BinaryCrossEntropy.loss(y_pred.view(), y.view());
        assert_eq!(loss, f64::INFINITY);
    }

    #[test]
    fn test_loss_prime_is_residual() {
        let y_pred = array![0.25, 0.75];
        let y = array![1., 0.];
        let d = BinaryCrossEntropy.loss_prime(y_pred.view(), y.view());
        assert_eq!(d, array![-0.75, 0.75]);
    }
}
