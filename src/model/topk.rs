//! Bounded top-k selection over term probabilities.
//!
//! One ascending-id scan over all candidates with a capacity-k heap:
//! O(V log k) time and O(k) space, where V is the vocabulary size. V can
//! reach the hundreds of thousands while k is typically <= 100, so the
//! full-sort alternative is not acceptable here.

use std::collections::BinaryHeap;

/// Heap entry ordered so the weakest candidate is popped first: lowest
/// probability, then highest id (lower ids win probability ties).
#[derive(Clone, PartialEq)]
struct Entry {
    id: u64,
    probability: f64,
}

impl Eq for Entry {}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Use total_cmp for IEEE 754 total ordering (NaN-safe)
        other
            .probability
            .total_cmp(&self.probability)
            .then_with(|| self.id.cmp(&other.id))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Bounded max-selection container.
///
/// Candidates must be offered in ascending id order; a held entry wins
/// ties against a later candidate, which makes the ascending-id tie-break
/// fall out of the traversal order.
pub struct TopK {
    capacity: usize,
    heap: BinaryHeap<Entry>,
}

impl TopK {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            heap: BinaryHeap::with_capacity(capacity + 1),
        }
    }

    /// Offer one candidate. Below capacity it is always kept; at capacity
    /// it evicts the current weakest entry only on strictly greater
    /// probability.
    pub fn push(&mut self, id: u64, probability: f64) {
        if self.capacity == 0 {
            return;
        }
        if self.heap.len() < self.capacity {
            self.heap.push(Entry { id, probability });
        } else if let Some(weakest) = self.heap.peek() {
            if probability > weakest.probability {
                self.heap.pop();
                self.heap.push(Entry { id, probability });
            }
        }
    }

    /// Drain into `(id, probability)` pairs, descending by probability,
    /// ties by ascending id.
    pub fn into_sorted(self) -> Vec<(u64, f64)> {
        // Ascending heap order is strongest-first under Entry's Ord.
        self.heap
            .into_sorted_vec()
            .into_iter()
            .map(|e| (e.id, e.probability))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_k_largest_in_order() {
        let mut sel = TopK::new(3);
        for (id, p) in [(0, 0.1), (1, 0.4), (2, 0.05), (3, 0.2), (4, 0.25)] {
            sel.push(id, p);
        }
        assert_eq!(sel.into_sorted(), vec![(1, 0.4), (4, 0.25), (3, 0.2)]);
    }

    #[test]
    fn fewer_candidates_than_capacity() {
        let mut sel = TopK::new(10);
        sel.push(0, 0.7);
        sel.push(1, 0.3);
        assert_eq!(sel.into_sorted(), vec![(0, 0.7), (1, 0.3)]);
    }

    #[test]
    fn ties_resolve_to_ascending_ids() {
        let mut sel = TopK::new(2);
        for id in 0..5 {
            sel.push(id, 0.2);
        }
        assert_eq!(sel.into_sorted(), vec![(0, 0.2), (1, 0.2)]);
    }

    #[test]
    fn boundary_tie_does_not_evict() {
        let mut sel = TopK::new(2);
        sel.push(0, 0.5);
        sel.push(1, 0.3);
        // Equal to the current weakest: the held entry wins.
        sel.push(2, 0.3);
        assert_eq!(sel.into_sorted(), vec![(0, 0.5), (1, 0.3)]);
    }

    #[test]
    fn zero_capacity_yields_nothing() {
        let mut sel = TopK::new(0);
        sel.push(0, 1.0);
        assert!(sel.into_sorted().is_empty());
    }
}
