use log::debug;
use serde::Serialize;

/// The loss and accuracy recorded at the end of every epoch of the last fit, in epoch order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct History {
    loss: Vec<f64>,
    score: Vec<f64>,
}

impl History {
    pub fn loss(&self) -> &[f64] {
        &self.loss
    }

    pub fn score(&self) -> &[f64] {
        &self.score
    }

    pub fn len(&self) -> usize {
        self.loss.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loss.is_empty()
    }

    /// Returns the loss and accuracy of the last recorded epoch.
    pub fn last(&self) -> Option<(f64, f64)> {
        Some((*self.loss.last()?, *self.score.last()?))
    }

    pub(crate) fn clear(&mut self) {
        self.loss.clear();
        self.score.clear();
    }

    pub(crate) fn record(&mut self, epoch: usize, loss: f64, accuracy: f64) {
        debug!(epoch = epoch, loss = loss, accuracy = accuracy; "epoch finished");

        self.loss.push(loss);
        self.score.push(accuracy);
    }
}
