use std::borrow::Borrow;
use std::collections::{BTreeSet, HashMap};
use std::fmt::{self, Debug};
use std::hash::Hash;
use std::str::FromStr;

use log::trace;
use num_traits::Float;

use crate::data_structures::LinkNode;
use crate::{Error, Result};

/// Ordering mode of a [`BinaryHeap`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeapMode {
    /// Largest priority at the root
    Max,
    /// Smallest priority at the root
    Min,
}

impl HeapMode {
    /// Returns true when `a` must sit strictly above `b`
    fn outranks<T: Ord + ?Sized>(self, a: &T, b: &T) -> bool {
        match self {
            HeapMode::Max => a > b,
            HeapMode::Min => a < b,
        }
    }
}

impl FromStr for HeapMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "max" => Ok(HeapMode::Max),
            "min" => Ok(HeapMode::Min),
            other => Err(Error::InvalidConfiguration(format!(
                "unknown heap mode '{}', expected 'max' or 'min'",
                other
            ))),
        }
    }
}

impl fmt::Display for HeapMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapMode::Max => write!(f, "max"),
            HeapMode::Min => write!(f, "min"),
        }
    }
}

/// Array-backed, 1-indexed mutable priority queue
///
/// Slot `i` has children `2i` and `2i + 1`. Only slots `1..=len()` are part
/// of the heap; [`heap_sort`](Self::heap_sort) temporarily shrinks that range
/// while it moves extracted roots behind it.
///
/// Besides insert and extract, any slot can have its priority changed in
/// either direction, and the heap keeps an index from each stored value to
/// the slots currently holding it so callers can find an entry again after
/// it has moved.
#[derive(Debug, Clone)]
pub struct BinaryHeap<V, P>
where
    V: Eq + Hash + Clone,
    P: Float + Ord + Debug + Copy,
{
    /// Ordering mode
    mode: HeapMode,

    /// Heap nodes; slot `i` lives at `storage[i - 1]`
    storage: Vec<LinkNode<V, P>>,

    /// Number of logical slots
    size: usize,

    /// Value -> slots holding it, kept in step with every move
    slots: HashMap<V, BTreeSet<usize>>,
}

impl<V, P> BinaryHeap<V, P>
where
    V: Eq + Hash + Clone,
    P: Float + Ord + Debug + Copy,
{
    /// Creates an empty heap
    pub fn empty(mode: HeapMode) -> Self {
        BinaryHeap {
            mode,
            storage: Vec::new(),
            size: 0,
            slots: HashMap::new(),
        }
    }

    /// Builds a heap from `(value, priority)` pairs in O(n)
    ///
    /// The first pair becomes slot 1, the second slot 2, and so on; the heap
    /// property is then restored bottom-up from the last parent to the root.
    pub fn new<I>(mode: HeapMode, entries: I) -> Self
    where
        I: IntoIterator<Item = (V, P)>,
    {
        let mut heap = BinaryHeap::empty(mode);
        for (value, priority) in entries {
            heap.storage.push(LinkNode::with_priority(value.clone(), priority));
            heap.size += 1;
            heap.slots.entry(value).or_default().insert(heap.size);
        }
        heap.build_heap();
        heap
    }

    /// Builds a heap whose mode is given by name (`"max"` or `"min"`)
    pub fn with_mode_name<I>(mode: &str, entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (V, P)>,
    {
        Ok(BinaryHeap::new(mode.parse()?, entries))
    }

    pub fn mode(&self) -> HeapMode {
        self.mode
    }

    /// Number of logical slots
    pub fn len(&self) -> usize {
        self.size
    }

    /// Number of physical slots, including any beyond `len()`
    pub fn storage_len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the node in a logical slot (1-based)
    pub fn get(&self, slot: usize) -> Option<&LinkNode<V, P>> {
        if slot == 0 || slot > self.size {
            return None;
        }
        self.storage.get(slot - 1)
    }

    /// Returns the priority stored in a logical slot
    pub fn priority(&self, slot: usize) -> Option<P> {
        self.get(slot).and_then(|node| node.priority().copied())
    }

    /// Returns the root node without removing it
    pub fn peek(&self) -> Option<&LinkNode<V, P>> {
        self.get(1)
    }

    /// Iterates over the logical slots in storage order
    pub fn iter(&self) -> std::slice::Iter<'_, LinkNode<V, P>> {
        self.storage[..self.size].iter()
    }

    /// Iterates over every physical slot, including any beyond `len()`
    pub fn storage(&self) -> std::slice::Iter<'_, LinkNode<V, P>> {
        self.storage.iter()
    }

    /// Restores the heap property below `index`, assuming both of its
    /// subtrees already satisfy it
    pub fn heapify(&mut self, index: usize) -> Result<()> {
        self.check_slot(index)?;
        self.sift_down(index);
        Ok(())
    }

    /// Re-establishes the heap property over all logical slots
    pub fn build_heap(&mut self) {
        for slot in (1..=self.size / 2).rev() {
            self.sift_down(slot);
        }
    }

    /// Sets a new priority for the node in `index` and moves it up or down
    /// until the heap property holds again
    pub fn change_priority(&mut self, index: usize, new_priority: P) -> Result<()> {
        self.check_slot(index)?;
        self.reposition(index, new_priority);
        Ok(())
    }

    /// Adds a value at the end of the heap and lifts it into place
    ///
    /// The new slot starts with the weakest possible priority for the mode
    /// and is then raised to `priority` through the same path as
    /// [`change_priority`](Self::change_priority).
    pub fn insert(&mut self, value: V, priority: P) {
        let sentinel = match self.mode {
            HeapMode::Max => P::neg_infinity(),
            HeapMode::Min => P::infinity(),
        };

        self.storage.push(LinkNode::with_priority(value.clone(), sentinel));
        self.size += 1;
        self.slots.entry(value).or_default().insert(self.size);
        self.reposition(self.size, priority);
    }

    /// Removes and returns the root node
    pub fn extract_top(&mut self) -> Result<LinkNode<V, P>> {
        if self.size == 0 {
            return Err(Error::EmptyHeap);
        }

        let last = self.size;
        let top = self.storage.swap_remove(0);
        self.size -= 1;
        self.unindex(top.value(), 1);

        if self.size > 0 {
            // The former last node now sits in slot 1
            self.reindex(1, last);
            self.sift_down(1);
        }

        Ok(top)
    }

    /// Sorts the storage in place
    ///
    /// Afterwards the storage is ascending for a max-heap and descending for
    /// a min-heap, and `len()` covers all of it again. The heap property no
    /// longer holds; call [`build_heap`](Self::build_heap) before using the
    /// heap as a priority queue again.
    pub fn heap_sort(&mut self) {
        let total = self.storage.len();
        self.size = total;
        self.build_heap();
        while self.size > 1 {
            self.swap_slots(1, self.size);
            self.size -= 1;
            self.sift_down(1);
        }
        self.size = total;
    }

    /// Returns the lowest logical slot holding `value`
    pub fn first_key<Q>(&self, value: &Q) -> Option<usize>
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.slots
            .get(value)
            .and_then(|slots| slots.iter().copied().find(|&slot| slot <= self.size))
    }

    /// Same answer as [`first_key`](Self::first_key), found by scanning every
    /// logical slot instead of using the index
    pub fn scan_first_key<Q>(&self, value: &Q) -> Option<usize>
    where
        V: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.iter()
            .position(|node| <V as Borrow<Q>>::borrow(node.value()) == value)
            .map(|position| position + 1)
    }

    /// Returns true if any logical slot holds `value`
    pub fn node_exist<Q>(&self, value: &Q) -> bool
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.first_key(value).is_some()
    }

    fn check_slot(&self, index: usize) -> Result<()> {
        if index == 0 || index > self.size {
            return Err(Error::IndexOutOfRange {
                index,
                size: self.size,
            });
        }
        Ok(())
    }

    fn outranks(&self, a: usize, b: usize) -> bool {
        self.mode
            .outranks(&self.storage[a - 1].priority(), &self.storage[b - 1].priority())
    }

    fn reposition(&mut self, index: usize, new_priority: P) {
        let old = self.storage[index - 1].set_priority(new_priority);
        trace!(
            "{}-heap slot {}: priority {:?} -> {:?}",
            self.mode,
            index,
            old,
            new_priority
        );

        match old {
            Some(old) if self.mode.outranks(&old, &new_priority) => self.sift_down(index),
            _ => self.sift_up(index),
        }
    }

    fn sift_down(&mut self, mut slot: usize) {
        loop {
            let left = 2 * slot;
            let right = left + 1;
            let mut extreme = slot;

            if left <= self.size && self.outranks(left, extreme) {
                extreme = left;
            }
            if right <= self.size && self.outranks(right, extreme) {
                extreme = right;
            }
            if extreme == slot {
                break;
            }

            self.swap_slots(slot, extreme);
            slot = extreme;
        }
    }

    fn sift_up(&mut self, mut slot: usize) {
        while slot > 1 {
            let parent = slot / 2;
            if !self.outranks(slot, parent) {
                break;
            }
            self.swap_slots(slot, parent);
            slot = parent;
        }
    }

    fn swap_slots(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        self.storage.swap(a - 1, b - 1);
        if self.storage[a - 1].value() != self.storage[b - 1].value() {
            self.reindex(a, b);
            self.reindex(b, a);
        }
    }

    /// Records that the node now in `slot` came from `from`
    fn reindex(&mut self, slot: usize, from: usize) {
        if let Some(slots) = self.slots.get_mut(self.storage[slot - 1].value()) {
            slots.remove(&from);
            slots.insert(slot);
        }
    }

    fn unindex(&mut self, value: &V, slot: usize) {
        let now_empty = match self.slots.get_mut(value) {
            Some(slots) => {
                slots.remove(&slot);
                slots.is_empty()
            }
            None => false,
        };
        if now_empty {
            self.slots.remove(value);
        }
    }
}

impl<V, P> Default for BinaryHeap<V, P>
where
    V: Eq + Hash + Clone,
    P: Float + Ord + Debug + Copy,
{
    fn default() -> Self {
        BinaryHeap::empty(HeapMode::Max)
    }
}
