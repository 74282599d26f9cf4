use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Axis, s};
use rand::{Rng, seq::SliceRandom};

/// A borrowed view over a set of samples and their labels, visited in a shuffleable order.
pub struct Dataset<'a> {
    x: ArrayView2<'a, f64>,
    y: ArrayView1<'a, f64>,
    order: Vec<usize>,
}

impl<'a> Dataset<'a> {
    /// Creates a new `Dataset` visiting the samples in their original order.
    ///
    /// # Arguments
    /// * `x` - The samples, one per row.
    /// * `y` - The label of each sample.
    pub fn new(x: ArrayView2<'a, f64>, y: ArrayView1<'a, f64>) -> Self {
        Self {
            order: (0..x.nrows()).collect(),
            x,
            y,
        }
    }

    fn len(&self) -> usize {
        self.order.len()
    }

    /// Draws a new random visiting order.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.order.shuffle(rng);
    }

    /// Splits the current order into `len / batch_size + 1` sections and gathers the samples of
    /// each one. Sections differ in length by at most one, trailing ones may be empty.
    ///
    /// # Panics
    /// If `batch_size` is 0.
    pub fn batches(
        &self,
        batch_size: usize,
    ) -> impl Iterator<Item = (Array2<f64>, Array1<f64>)> + '_ {
        let sections = self.len() / batch_size + 1;

        split_sections(&self.order, sections).map(move |indices| {
            (
                self.x.select(Axis(0), indices),
                self.y.select(Axis(0), indices),
            )
        })
    }
}

/// Splits `items` into `sections` contiguous chunks, the first `items.len() % sections` of
/// them one element longer than the rest.
pub fn split_sections<T>(items: &[T], sections: usize) -> impl Iterator<Item = &[T]> {
    let base = items.len() / sections;
    let extra = items.len() % sections;
    let mut rest = items;

    (0..sections).map(move |i| {
        let len = if i < extra { base + 1 } else { base };
        let (chunk, tail) = rest.split_at(len);
        rest = tail;
        chunk
    })
}

/// Appends a column of ones to `x`.
pub fn pad(x: ArrayView2<f64>) -> Array2<f64> {
    let mut padded = Array2::ones((x.nrows(), x.ncols() + 1));
    padded.slice_mut(s![.., ..x.ncols()]).assign(&x);
    padded
}
