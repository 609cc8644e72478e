//! Binary min-heap keyed by a floating priority.
//!
//! Both searches use lazy deletion: a tile may be pushed several times and
//! stale entries are skipped when popped, so there is no decrease-key.
//!
//! Ties between equal priorities pop in insertion order. Every entry carries
//! a sequence number that acts as the secondary key.

/// Entry stored in the heap.
#[derive(Clone, Copy, Debug)]
struct HeapEntry<T> {
    priority: f64,
    seq: u64,
    item: T,
}

impl<T> HeapEntry<T> {
    #[inline]
    fn precedes(&self, other: &Self) -> bool {
        self.priority < other.priority || (self.priority == other.priority && self.seq < other.seq)
    }
}

/// Min-priority queue over `(item, priority)` pairs.
#[derive(Clone, Debug)]
pub struct MinPriorityQueue<T> {
    entries: Vec<HeapEntry<T>>,
    next_seq: u64,
}

impl<T> MinPriorityQueue<T> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create an empty queue with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            next_seq: 0,
        }
    }

    /// Number of entries, stale ones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert an item. O(log n).
    pub fn push(&mut self, item: T, priority: f64) {
        let entry = HeapEntry {
            priority,
            seq: self.next_seq,
            item,
        };
        self.next_seq += 1;
        self.entries.push(entry);
        self.sift_up(self.entries.len() - 1);
    }

    /// Remove and return the item with the lowest priority. O(log n).
    pub fn pop(&mut self) -> Option<(T, f64)> {
        if self.entries.is_empty() {
            return None;
        }
        // Moves the last entry to the root, then restores the heap from there
        let root = self.entries.swap_remove(0);
        if !self.entries.is_empty() {
            self.sift_down(0);
        }
        Some((root.item, root.priority))
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if self.entries[i].precedes(&self.entries[parent]) {
                self.entries.swap(i, parent);
                i = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let len = self.entries.len();
        loop {
            let left = 2 * i + 1;
            let right = left + 1;
            let mut smallest = i;

            if left < len && self.entries[left].precedes(&self.entries[smallest]) {
                smallest = left;
            }
            if right < len && self.entries[right].precedes(&self.entries[smallest]) {
                smallest = right;
            }

            if smallest == i {
                break;
            }
            self.entries.swap(i, smallest);
            i = smallest;
        }
    }
}

impl<T> Default for MinPriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
