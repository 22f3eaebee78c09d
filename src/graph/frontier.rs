//! Pending growth candidates with a value-biased random draw.

use rand::Rng;

use crate::config::BIAS;

/// A candidate value waiting for admission, remembering which admitted
/// node produced it. Only the root seed has no parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontierEntry {
    pub value: u64,
    pub parent: Option<u64>,
}

/// Multiset of pending candidates. Duplicates are allowed on push; the
/// store rejects the stale copy when it is eventually drawn.
#[derive(Default)]
pub struct Frontier {
    entries: Vec<FrontierEntry>,
}

/// Selection weight for a candidate value. Logarithmic so large values
/// are de-prioritized without being starved outright.
fn weight(value: u64) -> f64 {
    1.0 / ((value as f64 + 2.0).log2()).powf(BIAS)
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, value: u64, parent: Option<u64>) {
        self.entries.push(FrontierEntry { value, parent });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Weighted sampling without replacement, O(n) per draw: pick a
    /// threshold uniform in [0, total weight) and take the first entry
    /// whose cumulative weight passes it. A degenerate total (zero or
    /// non-finite) falls back to FIFO so a non-empty frontier always
    /// yields an entry.
    pub fn draw_biased(&mut self, rng: &mut impl Rng) -> Option<FrontierEntry> {
        if self.entries.is_empty() {
            return None;
        }

        let total: f64 = self.entries.iter().map(|e| weight(e.value)).sum();
        if !(total > 0.0) || !total.is_finite() {
            return Some(self.entries.remove(0));
        }

        let threshold = rng.gen::<f64>() * total;
        let mut cumulative = 0.0;
        for i in 0..self.entries.len() {
            cumulative += weight(self.entries[i].value);
            if cumulative > threshold {
                return Some(self.entries.remove(i));
            }
        }
        // Rounding can leave the threshold above every partial sum.
        self.entries.pop()
    }
}
