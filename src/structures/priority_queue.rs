use std::{cmp::Ordering, cmp::Reverse, collections::BinaryHeap};

/// Min-priority queue. Items with equal scores come out in insertion order.
///
/// There is no decrease-key; callers enqueue a fresh entry and drop stale ones on dequeue.
#[derive(Debug)]
pub struct PriorityQueue<T, S: Ord> {
    // Using Reverse to turn the max-heap into a min-heap
    heap: BinaryHeap<Reverse<Entry<T, S>>>,
    next_seq: u64,
}

#[derive(Debug)]
struct Entry<T, S> {
    score: S,
    seq: u64,
    item: T,
}

impl<T, S: Ord> PartialEq for Entry<T, S> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T, S: Ord> Eq for Entry<T, S> {}

impl<T, S: Ord> PartialOrd for Entry<T, S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T, S: Ord> Ord for Entry<T, S> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.score
            .cmp(&other.score)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

impl<T, S: Ord> PriorityQueue<T, S> {
    pub fn new() -> Self {
        PriorityQueue {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    pub fn enqueue(&mut self, item: T, score: S) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Reverse(Entry { score, seq, item }));
    }

    /// Removes the item with the lowest score.
    pub fn dequeue(&mut self) -> Option<T> {
        self.heap.pop().map(|Reverse(entry)| entry.item)
    }

}

impl<T, S: Ord> Default for PriorityQueue<T, S> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dequeues_lowest_score_first() {
        let mut queue = PriorityQueue::new();
        queue.enqueue("c", 7);
        queue.enqueue("a", 1);
        queue.enqueue("b", 4);
        assert_eq!(queue.dequeue(), Some("a"));
        assert_eq!(queue.dequeue(), Some("b"));
        assert_eq!(queue.dequeue(), Some("c"));
        assert_eq!(queue.dequeue(), None);
    }

    #[test]
    fn test_equal_scores_are_fifo() {
        let mut queue = PriorityQueue::new();
        for item in 0..5 {
            queue.enqueue(item, 3);
        }
        queue.enqueue(99, 2);
        let order = std::iter::from_fn(|| queue.dequeue()).collect::<Vec<_>>();
        assert_eq!(order, vec![99, 0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_duplicate_items_are_kept() {
        let mut queue = PriorityQueue::new();
        queue.enqueue((1, 1), 5);
        queue.enqueue((1, 1), 3);
        assert_eq!(queue.dequeue(), Some((1, 1)));
        assert_eq!(queue.dequeue(), Some((1, 1)));
        assert_eq!(queue.dequeue(), None);
    }
}
