//! Fixed-capacity window of the most recent samples.
//!
//! Slots are kept dense and in arrival order: once full, every push shifts
//! the contents left by one and appends at the end. Capacities are small
//! (tens of slots), so the shift costs less than ring-index bookkeeping.

#[derive(Debug, Clone)]
pub(crate) struct Window {
    slots: Vec<f64>,
    filled: usize,
}

impl Window {
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: vec![0.0; capacity],
            filled: 0,
        }
    }

    /// Append a sample, returning the one evicted to make room.
    pub fn push(&mut self, sample: f64) -> Option<f64> {
        let last = self.slots.len() - 1;
        if self.filled <= last {
            self.slots[self.filled] = sample;
            self.filled += 1;
            return None;
        }
        let evicted = self.slots[0];
        self.slots.copy_within(1.., 0);
        self.slots[last] = sample;
        Some(evicted)
    }

    /// Number of samples held.
    pub fn len(&self) -> usize {
        self.filled
    }

    pub fn is_full(&self) -> bool {
        self.filled == self.slots.len()
    }

    /// Oldest retained sample.
    pub fn oldest(&self) -> f64 {
        self.slots[0]
    }

    /// Most recently pushed sample, if any.
    pub fn newest(&self) -> Option<f64> {
        self.filled.checked_sub(1).map(|i| self.slots[i])
    }

    /// Sample at `index`, counting from the oldest.
    pub fn get(&self, index: usize) -> f64 {
        self.slots[index]
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }
}
