use ndarray::{Array1, ArrayView1, ArrayView2, Zip};

/// A trained binary classifier.
pub trait Model {
    /// Returns the probability of the positive class for every sample of `x`.
    fn predict_proba(&self, x: ArrayView2<f64>) -> Array1<f64>;

    /// Classifies every sample of `x` as `0` or `1`, in input order.
    fn predict(&self, x: ArrayView2<f64>) -> Array1<u8>;

    /// Returns the fraction of samples of `x` whose predicted label equals the one in `y`.
    ///
    /// # Arguments
    /// * `x` - The samples, one per row.
    /// * `y` - The expected labels.
    ///
    /// # Returns
    /// The accuracy in `[0, 1]`, or NaN if there are no samples.
    fn score(&self, x: ArrayView2<f64>, y: ArrayView1<f64>) -> f64 {
        let y_pred = self.predict(x);

        Zip::from(&y_pred)
            .and(&y)
            .map_collect(|&p, &y| if f64::from(p) == y { 1. } else { 0. })
            .mean()
            .unwrap_or(f64::NAN)
    }
}
