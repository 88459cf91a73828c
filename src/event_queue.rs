//! A min-heap keyed by `(x, insertion counter)`, with lazy tombstoning of
//! invalidated entries rather than an O(log n) remove.
//!
//! Each item is identified by a small, cheap-to-copy key (a slotmap key, in
//! practice). At most one heap entry is ever "live" per key: pushing again
//! under the same key implicitly tombstones whatever entry that key
//! previously owned, by overwriting the index's record of its current
//! counter. `pop`/`peek` skip tombstoned entries as they're encountered.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};
use std::hash::Hash;

struct HeapEntry<K, V> {
    x: f64,
    seq: u64,
    key: K,
    value: V,
}

impl<K, V> PartialEq for HeapEntry<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.seq == other.seq
    }
}
impl<K, V> Eq for HeapEntry<K, V> {}

impl<K, V> PartialOrd for HeapEntry<K, V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<K, V> Ord for HeapEntry<K, V> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so that `BinaryHeap` (a max-heap) pops the smallest x
        // first, with ties broken by the smaller insertion counter.
        other
            .x
            .total_cmp(&self.x)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// An event popped or peeked from an [`EventQueue`].
pub struct PoppedEvent<K, V> {
    pub x: f64,
    pub key: K,
    pub value: V,
}

/// Lazily-invalidating priority queue used for both the site-event queue and
/// the circle-event queue.
pub struct EventQueue<K: Copy + Eq + Hash, V> {
    heap: BinaryHeap<HeapEntry<K, V>>,
    live: HashMap<K, u64>,
    counter: u64,
}

impl<K: Copy + Eq + Hash, V: Clone> EventQueue<K, V> {
    pub fn new() -> Self {
        EventQueue {
            heap: BinaryHeap::new(),
            live: HashMap::new(),
            counter: 0,
        }
    }

    /// Pushes `value` under `key` at key `x`. If `key` already owns a live
    /// entry, that entry is implicitly tombstoned: only the most recently
    /// pushed entry for a given key is ever live.
    pub fn push(&mut self, key: K, x: f64, value: V) {
        self.counter += 1;
        let seq = self.counter;
        self.live.insert(key, seq);
        self.heap.push(HeapEntry { x, seq, key, value });
    }

    /// Flags `key`'s current entry, if any, as removed and drops it from the
    /// identity index. The stale entry is skipped the next time it is
    /// encountered in the heap.
    pub fn invalidate(&mut self, key: K) {
        self.live.remove(&key);
    }

    /// True iff no key currently owns a live entry (stale heap entries do
    /// not count).
    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// Removes and returns the live entry with the smallest `(x, counter)`,
    /// discarding tombstoned entries as it goes.
    pub fn pop(&mut self) -> Option<PoppedEvent<K, V>> {
        while let Some(entry) = self.heap.pop() {
            if self.live.get(&entry.key) == Some(&entry.seq) {
                self.live.remove(&entry.key);
                return Some(PoppedEvent {
                    x: entry.x,
                    key: entry.key,
                    value: entry.value,
                });
            }
        }
        None
    }

    /// Returns the live entry with the smallest `(x, counter)` without
    /// removing it from the queue. Tombstoned entries encountered along the
    /// way are discarded permanently, matching the reference
    /// implementation's pop-then-repush.
    pub fn peek(&mut self) -> Option<PoppedEvent<K, V>> {
        let popped = self.pop()?;
        self.push(popped.key, popped.x, popped.value.clone());
        Some(PoppedEvent {
            x: popped.x,
            key: popped.key,
            value: popped.value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_in_x_order() {
        let mut q: EventQueue<u32, ()> = EventQueue::new();
        q.push(1, 2.0, ());
        q.push(2, 0.5, ());
        q.push(3, 1.0, ());

        assert_eq!(q.pop().unwrap().key, 2);
        assert_eq!(q.pop().unwrap().key, 3);
        assert_eq!(q.pop().unwrap().key, 1);
        assert!(q.pop().is_none());
    }

    #[test]
    fn ties_break_by_insertion_order() {
        let mut q: EventQueue<u32, ()> = EventQueue::new();
        q.push(1, 5.0, ());
        q.push(2, 5.0, ());
        q.push(3, 5.0, ());

        assert_eq!(q.pop().unwrap().key, 1);
        assert_eq!(q.pop().unwrap().key, 2);
        assert_eq!(q.pop().unwrap().key, 3);
    }

    #[test]
    fn invalidated_entries_are_skipped() {
        let mut q: EventQueue<u32, ()> = EventQueue::new();
        q.push(1, 1.0, ());
        q.push(2, 2.0, ());
        q.invalidate(1);

        assert!(!q.is_empty());
        assert_eq!(q.pop().unwrap().key, 2);
        assert!(q.pop().is_none());
    }

    #[test]
    fn repushing_a_key_tombstones_the_old_entry() {
        let mut q: EventQueue<u32, ()> = EventQueue::new();
        q.push(1, 10.0, ());
        q.push(1, 1.0, ());

        assert_eq!(q.pop().unwrap().x, 1.0);
        assert!(q.pop().is_none());
    }

    #[test]
    fn peek_does_not_remove() {
        let mut q: EventQueue<u32, ()> = EventQueue::new();
        q.push(1, 1.0, ());
        assert_eq!(q.peek().unwrap().key, 1);
        assert!(!q.is_empty());
        assert_eq!(q.pop().unwrap().key, 1);
    }
}
