/// Thresholds a probability into a binary label.
#[derive(Clone, Copy, Debug)]
pub struct Step {
    tresh: f64,
}

impl Default for Step {
    fn default() -> Self {
        Self::new(0.5)
    }
}

impl Step {
    pub fn new(tresh: f64) -> Self {
        Self { tresh }
    }

    /// Returns `1` if `p` reaches the threshold, `0` otherwise.
    pub fn label(&self, p: f64) -> u8 {
        if p >= self.tresh { 1 } else { 0 }
    }
}
