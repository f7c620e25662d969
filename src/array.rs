use core::iter::FusedIterator;
use core::ops::{Index, IndexMut};
use core::ptr;
use std::fmt;

use crate::error::Error;
use crate::index::{resolve_index, slice_indices};

/// Smallest capacity a buffer ever has, even when empty.
const MIN_CAPACITY: usize = 2;

/// A generic, double-ended, auto-resizing circular array.
///
/// Elements occupy a contiguous logical window inside a fixed-capacity slot
/// buffer; the window wraps around the physical end of the buffer. Pushes and
/// pops at either end are amortized O(1), random access is O(1), and the
/// capacity doubles whenever a push finds the buffer full. Capacity only
/// shrinks on an explicit [`compact`](CircularArray::compact) or
/// [`resize`](CircularArray::resize).
///
/// # Invariants
/// * `len() <= capacity()` after every operation.
/// * `capacity() >= 2` always, even for a freshly created empty array.
/// * Logical index `i` lives in physical slot `(front + i) % capacity()`.
/// * Resizing is allocate-copy-swap inside a single `&mut self` call; no
///   half-resized buffer is ever observable.
///
/// # Examples
///
/// ```
/// use circular_array::carray;
///
/// let mut ca = carray![1, 2, 3];
/// ca.push_front(0);
/// ca.push_back(4);
///
/// assert_eq!(ca.len(), 5);
/// assert_eq!(ca.pop_front(), Ok(0));
/// assert_eq!(ca.pop_back(), Ok(4));
/// assert_eq!(ca.get(-1), Ok(&3));
/// ```
pub struct CircularArray<T> {
    /// Slot buffer; vacant slots hold `None`, never a user value.
    slots: Box<[Option<T>]>,
    /// Physical index of the logical front element.
    front: usize,
    /// Number of live elements.
    count: usize,
}

impl<T> CircularArray<T> {
    /// Creates an empty array with the minimum working capacity.
    pub fn new() -> Self {
        Self {
            slots: vacant_slots(MIN_CAPACITY),
            front: 0,
            count: 0,
        }
    }

    // --- Inspection ---

    /// Returns the number of elements in the array.
    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns the current storage capacity.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the fraction of the storage capacity currently filled.
    pub fn fraction_filled(&self) -> f64 {
        self.count as f64 / self.capacity() as f64
    }

    /// Returns a reference to the front element, or `None` if empty.
    pub fn peek_front(&self) -> Option<&T> {
        if self.count == 0 {
            None
        } else {
            Some(self.slot(0))
        }
    }

    /// Returns a reference to the rear element, or `None` if empty.
    pub fn peek_back(&self) -> Option<&T> {
        self.count.checked_sub(1).map(|last| self.slot(last))
    }

    // --- Access ---

    /// Returns a reference to the element at `index`.
    ///
    /// Negative indices count from the rear: `-1` is the last element.
    ///
    /// # Errors
    /// [`Error::IndexOutOfBounds`] when the resolved index lies outside
    /// `[0, len)`.
    pub fn get(&self, index: isize) -> Result<&T, Error> {
        let at = self.resolve(index)?;
        Ok(self.slot(at))
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    /// [`Error::IndexOutOfBounds`] when the resolved index lies outside
    /// `[0, len)`.
    pub fn get_mut(&mut self, index: isize) -> Result<&mut T, Error> {
        let at = self.resolve(index)?;
        Ok(self.slot_mut(at))
    }

    /// Overwrites the element at `index` with `value`.
    ///
    /// # Errors
    /// [`Error::IndexOutOfBounds`] when the resolved index lies outside
    /// `[0, len)`.
    pub fn set(&mut self, index: isize, value: T) -> Result<(), Error> {
        *self.get_mut(index)? = value;
        Ok(())
    }

    // --- Deque operations ---

    /// Pushes `value` at the front, growing the buffer if full.
    pub fn push_front(&mut self, value: T) {
        self.grow_if_full();
        let capacity = self.capacity();
        self.front = (self.front + capacity - 1) % capacity;
        self.slots[self.front] = Some(value);
        self.count += 1;
    }

    /// Pushes `value` at the rear, growing the buffer if full.
    pub fn push_back(&mut self, value: T) {
        self.grow_if_full();
        let at = self.physical(self.count);
        self.slots[at] = Some(value);
        self.count += 1;
    }

    /// Pushes each value at the front in turn, so the last value yielded
    /// ends up frontmost: pushing `a, b` onto `[x]` gives `[b, a, x]`.
    pub fn push_front_all<I: IntoIterator<Item = T>>(&mut self, values: I) {
        for value in values {
            self.push_front(value);
        }
    }

    /// Pushes each value at the rear in turn, preserving yield order.
    pub fn push_back_all<I: IntoIterator<Item = T>>(&mut self, values: I) {
        for value in values {
            self.push_back(value);
        }
    }

    /// Removes and returns the front element.
    ///
    /// # Errors
    /// [`Error::EmptyContainer`] when the array is empty.
    pub fn pop_front(&mut self) -> Result<T, Error> {
        self.take_front().ok_or(Error::EmptyContainer)
    }

    /// Removes and returns the rear element.
    ///
    /// # Errors
    /// [`Error::EmptyContainer`] when the array is empty.
    pub fn pop_back(&mut self) -> Result<T, Error> {
        self.take_back().ok_or(Error::EmptyContainer)
    }

    /// Removes and returns the front element, or `default` if empty.
    pub fn pop_front_or(&mut self, default: T) -> T {
        self.take_front().unwrap_or(default)
    }

    /// Removes and returns the rear element, or `default` if empty.
    pub fn pop_back_or(&mut self, default: T) -> T {
        self.take_back().unwrap_or(default)
    }

    /// Removes up to `n` elements from the front, returned in removal order
    /// (frontmost first). Never fails; an empty array yields an empty vec.
    pub fn pop_front_n(&mut self, n: usize) -> Vec<T> {
        let mut taken = Vec::with_capacity(n.min(self.count));
        while taken.len() < n {
            match self.take_front() {
                Some(value) => taken.push(value),
                None => break,
            }
        }
        taken
    }

    /// Removes up to `n` elements from the rear, returned in removal order
    /// (rearmost first). Never fails.
    pub fn pop_back_n(&mut self, n: usize) -> Vec<T> {
        let mut taken = Vec::with_capacity(n.min(self.count));
        while taken.len() < n {
            match self.take_back() {
                Some(value) => taken.push(value),
                None => break,
            }
        }
        taken
    }

    /// Removes and returns the element at `index`, shifting the shorter
    /// side of the window to close the gap. O(min(i, len - i)).
    ///
    /// Negative indices count from the rear, as for [`get`](Self::get).
    ///
    /// # Errors
    /// [`Error::IndexOutOfBounds`] when the resolved index lies outside
    /// `[0, len)`.
    pub fn remove(&mut self, index: isize) -> Result<T, Error> {
        let at = self.resolve(index)?;
        let removed = self.slots[self.physical(at)].take();
        if at < self.count - at - 1 {
            // Fewer elements ahead of the gap: shift them rearward.
            for position in (0..at).rev() {
                let from = self.physical(position);
                let to = self.physical(position + 1);
                self.slots[to] = self.slots[from].take();
            }
            self.front = (self.front + 1) % self.capacity();
        } else {
            for position in at + 1..self.count {
                let from = self.physical(position);
                let to = self.physical(position - 1);
                self.slots[to] = self.slots[from].take();
            }
        }
        self.count -= 1;
        match removed {
            Some(value) => Ok(value),
            None => unreachable!("slot at resolved index {} was vacant", at),
        }
    }

    /// Rotates the array left by `n`: the front element moves to the rear,
    /// `n` times. No-op when `len() < 2`.
    pub fn rotate_left(&mut self, n: usize) {
        if self.count < 2 {
            return;
        }
        for _ in 0..n % self.count {
            if let Some(value) = self.take_front() {
                self.push_back(value);
            }
        }
    }

    /// Rotates the array right by `n`: the rear element moves to the front,
    /// `n` times. No-op when `len() < 2`.
    pub fn rotate_right(&mut self, n: usize) {
        if self.count < 2 {
            return;
        }
        for _ in 0..n % self.count {
            if let Some(value) = self.take_back() {
                self.push_front(value);
            }
        }
    }

    /// Drops every element, keeping the current capacity.
    pub fn clear(&mut self) {
        for slot in self.slots.iter_mut() {
            *slot = None;
        }
        self.front = 0;
        self.count = 0;
    }

    // --- Capacity management ---

    /// Shrinks the buffer to the current length plus a slack of two slots,
    /// so one subsequent push at either end needs no immediate regrowth.
    ///
    /// Elements and their order are unchanged; the logical window is
    /// relinearized to physical offset 0. Idempotent.
    pub fn compact(&mut self) {
        self.reallocate((self.count + 2).max(MIN_CAPACITY));
    }

    /// Compacts, then grows back to `minimum_capacity` if that is larger
    /// than the compacted capacity.
    pub fn resize(&mut self, minimum_capacity: usize) {
        let compacted = (self.count + 2).max(MIN_CAPACITY);
        self.reallocate(compacted.max(minimum_capacity));
    }

    // --- Slices & iteration ---

    /// Returns a new independent array holding the elements selected by a
    /// Python-style slice.
    ///
    /// `None` bounds default to the whole array in the direction of `step`;
    /// negative bounds count from the rear; out-of-range bounds clamp
    /// rather than fail; a negative `step` walks rear-to-front; a `step`
    /// of zero selects nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_array::carray;
    ///
    /// let ca = carray![1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
    /// assert_eq!(ca.slice(Some(2), Some(5), 1), carray![3, 4, 5]);
    /// assert_eq!(ca.slice(Some(20), Some(30), 1), carray![]);
    /// assert_eq!(carray![1, 2, 3].slice(None, None, -1), carray![3, 2, 1]);
    /// ```
    pub fn slice(&self, start: Option<isize>, stop: Option<isize>, step: isize) -> Self
    where
        T: Clone,
    {
        slice_indices(start, stop, step, self.count)
            .map(|at| self.slot(at).clone())
            .collect()
    }

    /// Returns a borrowing iterator in logical front-to-rear order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            array: self,
            head: 0,
            tail: self.count,
        }
    }

    /// Returns an owning iterator over a copy of the current contents.
    ///
    /// The copy is taken at the moment of the call, so the array can be
    /// freely pushed, popped, or resized afterwards without affecting an
    /// in-progress snapshot. Calling `snapshot` again takes a fresh copy.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_array::carray;
    ///
    /// let mut ca = carray![1, 2, 3];
    /// let snap = ca.snapshot();
    /// ca.push_back(4);
    /// assert_eq!(snap.collect::<Vec<_>>(), vec![1, 2, 3]);
    /// ```
    pub fn snapshot(&self) -> Snapshot<T>
    where
        T: Clone,
    {
        let copied: Vec<T> = self.iter().cloned().collect();
        Snapshot {
            inner: copied.into_iter(),
        }
    }

    // --- Internals ---

    /// Physical slot of logical position `index`; valid for `index` up to
    /// and including `count` (the next rear slot).
    #[inline]
    fn physical(&self, index: usize) -> usize {
        (self.front + index) % self.capacity()
    }

    fn resolve(&self, index: isize) -> Result<usize, Error> {
        resolve_index(index, self.count).ok_or(Error::IndexOutOfBounds {
            index,
            len: self.count,
        })
    }

    /// Borrows the live element at logical position `index < count`.
    fn slot(&self, index: usize) -> &T {
        let at = self.physical(index);
        match &self.slots[at] {
            Some(value) => value,
            None => unreachable!("slot {} inside the live window is vacant", at),
        }
    }

    fn slot_mut(&mut self, index: usize) -> &mut T {
        let at = self.physical(index);
        match &mut self.slots[at] {
            Some(value) => value,
            None => unreachable!("slot {} inside the live window is vacant", at),
        }
    }

    fn take_front(&mut self) -> Option<T> {
        if self.count == 0 {
            return None;
        }
        let value = self.slots[self.front].take();
        debug_assert!(value.is_some(), "live front slot was vacant");
        self.front = (self.front + 1) % self.capacity();
        self.count -= 1;
        value
    }

    fn take_back(&mut self) -> Option<T> {
        if self.count == 0 {
            return None;
        }
        let at = self.physical(self.count - 1);
        let value = self.slots[at].take();
        debug_assert!(value.is_some(), "live rear slot was vacant");
        self.count -= 1;
        value
    }

    #[inline]
    fn grow_if_full(&mut self) {
        if self.count == self.capacity() {
            self.reallocate((self.capacity() * 2).max(MIN_CAPACITY));
        }
    }

    /// Moves the live window into a fresh buffer of `capacity` slots,
    /// relinearized to start at physical offset 0, and swaps it in.
    fn reallocate(&mut self, capacity: usize) {
        debug_assert!(capacity >= self.count && capacity >= MIN_CAPACITY);
        let mut slots: Vec<Option<T>> = Vec::with_capacity(capacity);
        for index in 0..self.count {
            let at = self.physical(index);
            slots.push(self.slots[at].take());
        }
        slots.resize_with(capacity, || None);
        self.slots = slots.into_boxed_slice();
        self.front = 0;
    }
}

fn vacant_slots<T>(capacity: usize) -> Box<[Option<T>]> {
    let mut slots = Vec::new();
    slots.resize_with(capacity, || None);
    slots.into_boxed_slice()
}

// --- Iterators ---

/// Borrowing front-to-rear iterator over a [`CircularArray`].
pub struct Iter<'a, T> {
    array: &'a CircularArray<T>,
    head: usize,
    tail: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.head == self.tail {
            return None;
        }
        let value = self.array.slot(self.head);
        self.head += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.tail - self.head;
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.head == self.tail {
            return None;
        }
        self.tail -= 1;
        Some(self.array.slot(self.tail))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

/// Owning iterator over a copy of an array's contents, taken at creation.
///
/// Mutating the source array after the snapshot was taken does not affect
/// the elements this iterator yields.
pub struct Snapshot<T> {
    inner: std::vec::IntoIter<T>,
}

impl<T> Iterator for Snapshot<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for Snapshot<T> {
    fn next_back(&mut self) -> Option<T> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for Snapshot<T> {}
impl<T> FusedIterator for Snapshot<T> {}

/// Consuming iterator draining a [`CircularArray`] front-to-rear.
pub struct IntoIter<T> {
    array: CircularArray<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.array.take_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.array.len();
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.array.take_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for CircularArray<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter { array: self }
    }
}

impl<'a, T> IntoIterator for &'a CircularArray<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

// --- Construction & conversion ---

impl<T> Default for CircularArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for CircularArray<T> {
    /// Builds an array from `values` in order, with capacity chosen to
    /// minimally fit them (but never below the working minimum of 2).
    fn from(values: Vec<T>) -> Self {
        let count = values.len();
        let capacity = count.max(MIN_CAPACITY);
        let mut slots: Vec<Option<T>> = values.into_iter().map(Some).collect();
        slots.resize_with(capacity, || None);
        Self {
            slots: slots.into_boxed_slice(),
            front: 0,
            count,
        }
    }
}

impl<T, const N: usize> From<[T; N]> for CircularArray<T> {
    fn from(values: [T; N]) -> Self {
        Vec::from(values).into()
    }
}

impl<T: Clone> From<&[T]> for CircularArray<T> {
    fn from(values: &[T]) -> Self {
        values.to_vec().into()
    }
}

impl<T> FromIterator<T> for CircularArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Vec::from_iter(iter).into()
    }
}

impl<T> Extend<T> for CircularArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

// --- Traits ---

impl<T: Clone> Clone for CircularArray<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for CircularArray<T> {
    /// The same instance is equal without walking its elements. Otherwise:
    /// same length, and each positional pair equal, checked by identity
    /// (same storage address) before falling back to value equality, so an
    /// array always equals itself even when element equality is partial.
    fn eq(&self, other: &Self) -> bool {
        if ptr::eq(self, other) {
            return true;
        }
        if self.count != other.count {
            return false;
        }
        self.iter()
            .zip(other.iter())
            .all(|(a, b)| ptr::eq(a, b) || a == b)
    }
}

impl<T: Eq> Eq for CircularArray<T> {}

impl<T: fmt::Debug> fmt::Debug for CircularArray<T> {
    /// Constructor-style rendering: `carray![1, 2, 3]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("carray![")?;
        for (position, value) in self.iter().enumerate() {
            if position > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value:?}")?;
        }
        f.write_str("]")
    }
}

impl<T: fmt::Display> fmt::Display for CircularArray<T> {
    /// Display rendering: `(|1, 2, 3|)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(|")?;
        for (position, value) in self.iter().enumerate() {
            if position > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str("|)")
    }
}

impl<T> Index<usize> for CircularArray<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        assert!(
            index < self.count,
            "index out of bounds: the len is {} but the index is {}",
            self.count,
            index
        );
        self.slot(index)
    }
}

impl<T> IndexMut<usize> for CircularArray<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        assert!(
            index < self.count,
            "index out of bounds: the len is {} but the index is {}",
            self.count,
            index
        );
        self.slot_mut(index)
    }
}

// --- Tests ---
