use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashSet};

/// Wrapper for BinaryHeap to use as min-heap (ordered by accumulated cost,
/// then by insertion order so equal costs pop first-in first-out)
#[derive(Debug, Clone)]
pub struct HeapEntry {
    pub node_id: String,
    pub accumulated_cost: f64,
    pub seq: u64,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.accumulated_cost
            .total_cmp(&other.accumulated_cost)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// Dijkstra frontier with lazy deletion and a settle counter
///
/// Stale entries stay in the heap and are dropped on the way out; only a
/// pop that settles a node counts toward the iteration cap.
#[derive(Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<Reverse<HeapEntry>>,
    settled: HashSet<String>,
    next_seq: u64,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, node_id: &str, accumulated_cost: f64) {
        self.heap.push(Reverse(HeapEntry {
            node_id: node_id.to_string(),
            accumulated_cost,
            seq: self.next_seq,
        }));
        self.next_seq += 1;
    }

    /// Pop the cheapest node not yet settled and mark it settled
    pub fn settle_next(&mut self) -> Option<(String, f64)> {
        while let Some(Reverse(entry)) = self.heap.pop() {
            if self.settled.insert(entry.node_id.clone()) {
                return Some((entry.node_id, entry.accumulated_cost));
            }
        }
        None
    }

    pub fn is_settled(&self, node_id: &str) -> bool {
        self.settled.contains(node_id)
    }

    pub fn settled_count(&self) -> usize {
        self.settled.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heap_entry_ordering() {
        let entry1 = HeapEntry {
            node_id: "A".to_string(),
            accumulated_cost: 1.0,
            seq: 0,
        };
        let entry2 = HeapEntry {
            node_id: "B".to_string(),
            accumulated_cost: 2.0,
            seq: 1,
        };
        let entry3 = HeapEntry {
            node_id: "C".to_string(),
            accumulated_cost: 1.0,
            seq: 2,
        };

        // Lower cost should compare as less (normal ordering)
        assert_eq!(entry1.cmp(&entry2), Ordering::Less);
        assert_eq!(entry2.cmp(&entry1), Ordering::Greater);

        // Equal costs fall back to insertion order
        assert_eq!(entry1.cmp(&entry3), Ordering::Less);
        assert_eq!(entry1, entry1.clone());
        assert_ne!(entry1, entry2);
    }

    #[test]
    fn test_frontier_settles_cheapest_then_oldest() {
        let mut frontier = Frontier::new();
        frontier.push("late", 1.0);
        frontier.push("far", 5.0);
        frontier.push("later", 1.0);
        frontier.push("near", 0.5);

        let order: Vec<String> =
            std::iter::from_fn(|| frontier.settle_next().map(|(n, _)| n)).collect();
        assert_eq!(order, ["near", "late", "later", "far"]);
        assert_eq!(frontier.settled_count(), 4);
        assert!(frontier.is_settled("far"));
    }

    #[test]
    fn test_frontier_skips_stale_entries() {
        let mut frontier = Frontier::new();
        frontier.push("B", 10.0);
        frontier.push("B", 2.0);
        frontier.push("C", 5.0);

        assert_eq!(frontier.settle_next(), Some(("B".to_string(), 2.0)));
        assert_eq!(frontier.settle_next(), Some(("C".to_string(), 5.0)));
        assert_eq!(frontier.settle_next(), None);
        assert_eq!(frontier.settled_count(), 2);
    }
}
