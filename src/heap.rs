//! Array backed binary min-heaps.
//!
//! [`BinaryHeap`] is generic over the element type and over a [`Placement`] hook that is invoked
//! every time an element lands in a slot of the backing array. The default hook does nothing.
//! [`IndexedHeap`] uses the [`Tracked`] hook, which writes the slot back into the element through
//! [`HeapIndex`]. That back pointer is what makes [`IndexedHeap::decrease_key`] logarithmic: the
//! element is found without searching for it.

use std::fmt::{Debug, Formatter};
use std::marker::PhantomData;
use crate::error::HeapError;

const DEFAULT_CAPACITY: usize = 16;

/// Capability of an element to remember the slot it occupies in an [`IndexedHeap`].
pub trait HeapIndex {
    /// Called by the heap whenever the element is stored at `index`.
    fn put_index(&mut self, index: usize);

    /// The slot most recently written by [`HeapIndex::put_index`].
    fn get_index(&self) -> usize;
}

/// Hook run by a heap after it stores an element at a slot.
pub trait Placement<T> {
    fn on_place(item: &mut T, index: usize);
}

/// Placement hook that ignores slot changes.
#[derive(Debug, Clone, Copy, Default)]
pub struct Untracked;

impl<T> Placement<T> for Untracked {
    fn on_place(_item: &mut T, _index: usize) {}
}

/// Placement hook that keeps each element's [`HeapIndex`] in sync with its slot.
#[derive(Debug, Clone, Copy, Default)]
pub struct Tracked;

impl<T: HeapIndex> Placement<T> for Tracked {
    fn on_place(item: &mut T, index: usize) {
        item.put_index(index);
    }
}

/// A binary min-heap over a dense array. Capacity doubles whenever an insertion would overflow it
/// and never shrinks.
pub struct BinaryHeap<T, P = Untracked> {
    pq: Vec<T>,
    capacity: usize,
    placement: PhantomData<P>,
}

/// A binary min-heap whose elements track their own position, enabling decrease-key.
pub type IndexedHeap<T> = BinaryHeap<T, Tracked>;

impl<T: Ord, P: Placement<T>> BinaryHeap<T, P> {

    /// Creates an empty heap with room for `capacity` elements before the first resize.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        BinaryHeap { pq: Vec::with_capacity(capacity), capacity, placement: PhantomData }
    }

    /// Creates an empty heap with a small default capacity.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Builds a heap from an arbitrary vector in linear time.
    ///
    /// # Examples
    /// ```
    ///use mst::BinaryHeap;
    ///
    ///let heap: BinaryHeap<i32> = BinaryHeap::from_vec(vec![4, 1, 3]);
    ///assert_eq!(heap.peek_min(), Some(&1));
    /// ```
    pub fn from_vec(items: Vec<T>) -> Self {
        let mut heap = Self::with_capacity(items.len());
        heap.heapify(items);
        heap
    }

    /// Adds an element, growing the backing storage first if it is full.
    pub fn insert(&mut self, x: T) {
        if self.pq.len() == self.capacity {
            self.resize();
        }
        self.pq.push(x);
        let last = self.pq.len() - 1;
        self.settle(last);
        self.percolate_up(last);
    }

    /// Removes and returns the minimum element.
    ///
    /// # Returns
    /// * The minimum, or [`HeapError::EmptyQueue`] if the heap holds nothing. Use
    ///   [`BinaryHeap::pop`] for a non-failing variant.
    pub fn extract_min(&mut self) -> Result<T, HeapError> {
        self.pop().ok_or(HeapError::EmptyQueue)
    }

    /// Removes and returns the minimum element, or `None` if the heap is empty.
    pub fn pop(&mut self) -> Option<T> {
        if self.pq.is_empty() {
            return None;
        }
        // The last element is moved into the root slot
        let min = self.pq.swap_remove(0);
        if !self.pq.is_empty() {
            self.settle(0);
            self.percolate_down(0);
        }
        Some(min)
    }

    /// The minimum element without removing it, or `None` if the heap is empty.
    pub fn peek_min(&self) -> Option<&T> {
        self.pq.first()
    }

    /// Replaces the contents of the heap with `items` and restores heap order bottom-up.
    pub fn heapify(&mut self, items: Vec<T>) {
        self.capacity = self.capacity.max(items.len());
        let mut pq = Vec::with_capacity(self.capacity);
        pq.extend(items);
        self.pq = pq;

        for index in 0..self.pq.len() {
            self.settle(index);
        }
        if self.pq.len() > 1 {
            for index in (0..=parent(self.pq.len() - 1)).rev() {
                self.percolate_down(index);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.pq.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pq.is_empty()
    }

    /// Number of elements the heap can hold before it next doubles its storage.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The backing array in heap order.
    pub fn as_slice(&self) -> &[T] {
        &self.pq
    }

    /// pq[index] may be smaller than its parent
    fn percolate_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = parent(index);
            if self.pq[parent] <= self.pq[index] {
                break;
            }
            self.relocate(index, parent);
            index = parent;
        }
    }

    /// pq[index] may be larger than its children
    fn percolate_down(&mut self, mut index: usize) {
        let size = self.pq.len();
        loop {
            let mut small = left_child(index);
            if small >= size {
                break;
            }
            if small + 1 < size && self.pq[small + 1] < self.pq[small] {
                small += 1;
            }
            if self.pq[index] <= self.pq[small] {
                break;
            }
            self.relocate(index, small);
            index = small;
        }
    }

    fn relocate(&mut self, a: usize, b: usize) {
        self.pq.swap(a, b);
        self.settle(a);
        self.settle(b);
    }

    /// Every element stored at a slot passes through here.
    fn settle(&mut self, index: usize) {
        P::on_place(&mut self.pq[index], index);
    }

    fn resize(&mut self) {
        let mut grown = Vec::with_capacity(self.capacity * 2);
        grown.extend(self.pq.drain(..));
        self.pq = grown;
        self.capacity *= 2;
    }
}

impl<T: Ord + HeapIndex> BinaryHeap<T, Tracked> {

    /// Restores heap order after the priority of `x` has been lowered by the caller.
    ///
    /// `x` must currently be in the heap and its priority must not have increased; neither is
    /// checked. The element is located through its [`HeapIndex`] back pointer.
    pub fn decrease_key(&mut self, x: &T) {
        let index = x.get_index();
        debug_assert!(index < self.pq.len(), "decrease_key on an element outside the heap");
        self.percolate_up(index);
    }
}

impl<T: Ord, P: Placement<T>> Default for BinaryHeap<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Debug, P> Debug for BinaryHeap<T, P> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BinaryHeap")
            .field("pq", &self.pq)
            .field("capacity", &self.capacity)
            .finish()
    }
}

fn parent(index: usize) -> usize {
    (index - 1) / 2
}

fn left_child(index: usize) -> usize {
    2 * index + 1
}
