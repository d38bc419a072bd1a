/// Fixed-capacity record of the most recently accepted samples.
///
/// The window always holds exactly `capacity` values, zero-filled at startup.
/// Pushing evicts the oldest sample (index 0) and appends the new one at the
/// end; there is no resize. Non-finite values are accepted as-is.
pub struct RollingWindow {
    samples: Vec<f64>,
}

impl RollingWindow {
    /// Creates a zero-filled window. `capacity` must be at least 1.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity >= 1, "window capacity must be at least 1");
        Self {
            samples: vec![0.0; capacity],
        }
    }

    pub fn capacity(&self) -> usize {
        self.samples.len()
    }

    /// Shifts every sample down one slot and stores `value` at the end.
    pub fn push(&mut self, value: f64) {
        self.samples.copy_within(1.., 0);
        let last = self.samples.len() - 1;
        self.samples[last] = value;
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.samples
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.samples.get(index).copied()
    }

    /// The most recently pushed sample (zero until the first push).
    pub fn last(&self) -> f64 {
        self.samples[self.samples.len() - 1]
    }
}
