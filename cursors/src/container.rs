use alloc::vec::Vec;

use crate::cursor::Cursor;
use crate::error::CursorError;
use crate::iter::SliceCursor;

/// Capacity of [`FixedArray::new`]
pub const DEFAULT_CAPACITY: usize = 100;

/// A type that hands out cursors over the items it owns.
pub trait Container {
    type Item;

    type Cursor<'a>: Cursor<Item = &'a Self::Item>
    where
        Self: 'a;

    /// Returns a fresh cursor positioned on the first item.
    ///
    /// The cursor sees the items present at creation time.
    fn cursor(&self) -> Self::Cursor<'_>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A bounded array whose storage is allocated once at construction
#[derive(Debug, Clone, PartialEq)]
pub struct FixedArray<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T> FixedArray<T> {
    /// Creates an empty array with room for [`DEFAULT_CAPACITY`] items.
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: Vec::with_capacity(DEFAULT_CAPACITY),
            capacity: DEFAULT_CAPACITY,
        }
    }

    /// Creates an empty array with room for `capacity` items.
    ///
    /// # Errors
    ///
    /// Returns `CursorError::InvalidCapacity` if `capacity` is 0 or the
    /// storage for `capacity` items cannot be allocated.
    pub fn with_capacity(capacity: usize) -> Result<Self, CursorError> {
        if capacity == 0 {
            return Err(CursorError::InvalidCapacity { capacity });
        }
        let mut items = Vec::new();
        items
            .try_reserve_exact(capacity)
            .map_err(|_| CursorError::InvalidCapacity { capacity })?;
        Ok(Self { items, capacity })
    }

    /// Appends an item at the next free slot.
    ///
    /// # Errors
    ///
    /// Returns `CursorError::CapacityExceeded` if the array is full. The item
    /// is dropped and the array is left unchanged.
    pub fn insert(&mut self, item: T) -> Result<(), CursorError> {
        if self.items.len() >= self.capacity {
            return Err(CursorError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        self.items.push(item);
        Ok(())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of free slots.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.capacity - self.items.len()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> Default for FixedArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Container for FixedArray<T> {
    type Item = T;

    type Cursor<'a>
        = SliceCursor<'a, T>
    where
        Self: 'a;

    fn cursor(&self) -> SliceCursor<'_, T> {
        SliceCursor::new(&self.items)
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

impl<'a, T> IntoIterator for &'a FixedArray<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// An auto-resizing sequence
#[derive(Debug, Clone, PartialEq)]
pub struct GrowableSeq<T> {
    items: Vec<T>,
}

impl<T> GrowableSeq<T> {
    #[must_use]
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Creates an empty sequence with preallocated room. The sequence still grows past it.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Appends an item, growing the storage when needed.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> Default for GrowableSeq<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Container for GrowableSeq<T> {
    type Item = T;

    type Cursor<'a>
        = SliceCursor<'a, T>
    where
        Self: 'a;

    fn cursor(&self) -> SliceCursor<'_, T> {
        SliceCursor::new(&self.items)
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

impl<'a, T> IntoIterator for &'a GrowableSeq<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> FromIterator<T> for GrowableSeq<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for GrowableSeq<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}
