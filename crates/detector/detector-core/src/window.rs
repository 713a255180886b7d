//! Bounded FIFO window of recent sample values.

use std::collections::VecDeque;

use detector_spi::WindowStats;

/// Fixed-capacity sliding window.
///
/// Values are kept in arrival order. Pushing into a full window evicts
/// exactly one value, the oldest, so `len() <= capacity()` always holds.
#[derive(Debug, Clone)]
pub struct SlidingWindow {
    values: VecDeque<f64>,
    capacity: usize,
}

impl SlidingWindow {
    /// Create an empty window holding at most `capacity` values.
    ///
    /// A zero capacity is bumped to one.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            values: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append `value`, returning the evicted oldest value if the window was full.
    pub fn push(&mut self, value: f64) -> Option<f64> {
        let evicted = if self.values.len() == self.capacity {
            self.values.pop_front()
        } else {
            None
        };
        self.values.push_back(value);
        evicted
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether warm-up is over.
    pub fn is_full(&self) -> bool {
        self.values.len() == self.capacity
    }

    pub fn oldest(&self) -> Option<f64> {
        self.values.front().copied()
    }

    pub fn newest(&self) -> Option<f64> {
        self.values.back().copied()
    }

    /// Iterate values oldest first.
    pub fn iter(&self) -> impl Iterator<Item = f64> + Clone + '_ {
        self.values.iter().copied()
    }

    /// Copy of the values, oldest first.
    pub fn to_vec(&self) -> Vec<f64> {
        self.values.iter().copied().collect()
    }

    /// Mean, population standard deviation and range of the current contents.
    pub fn stats(&self) -> WindowStats {
        WindowStats::from_values(self.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fills_in_arrival_order() {
        let mut window = SlidingWindow::new(4);
        for v in [1.0, 2.0, 3.0] {
            assert_eq!(window.push(v), None);
        }
        assert_eq!(window.to_vec(), vec![1.0, 2.0, 3.0]);
        assert!(!window.is_full());
        assert_eq!(window.oldest(), Some(1.0));
        assert_eq!(window.newest(), Some(3.0));
    }

    #[test]
    fn test_evicts_oldest_one_at_a_time() {
        let mut window = SlidingWindow::new(3);
        let evicted: Vec<Option<f64>> = [1.0, 2.0, 3.0, 4.0, 5.0]
            .into_iter()
            .map(|v| window.push(v))
            .collect();

        assert_eq!(evicted, vec![None, None, None, Some(1.0), Some(2.0)]);
        assert_eq!(window.to_vec(), vec![3.0, 4.0, 5.0]);
        assert_eq!(window.len(), 3);
        assert!(window.is_full());
    }

    #[test]
    fn test_zero_capacity_is_bumped() {
        let mut window = SlidingWindow::new(0);
        assert_eq!(window.capacity(), 1);
        window.push(1.0);
        assert_eq!(window.push(2.0), Some(1.0));
        assert_eq!(window.to_vec(), vec![2.0]);
    }

    #[test]
    fn test_stats_follow_contents() {
        let mut window = SlidingWindow::new(2);
        assert!(window.is_empty());
        assert_eq!(window.stats().count, 0);

        window.push(1.0);
        window.push(3.0);
        let stats = window.stats();
        assert_eq!(stats.count, 2);
        assert_eq!(stats.mean, 2.0);
        assert_eq!(stats.std_dev, 1.0);

        window.push(3.0);
        let stats = window.stats();
        assert_eq!(stats.mean, 3.0);
        assert_eq!(stats.std_dev, 0.0);
    }
}
