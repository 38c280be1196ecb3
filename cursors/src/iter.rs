use crate::cursor::Cursor;
use crate::error::CursorError;

/// Cursor over a borrowed slice
///
/// This is the cursor handed out by both containers. The slice length is fixed
/// when the cursor is created.
#[derive(Debug, Clone)]
pub struct SliceCursor<'a, T> {
    items: &'a [T],
    position: usize,
}

impl<'a, T> SliceCursor<'a, T> {
    #[must_use]
    pub fn new(items: &'a [T]) -> Self {
        Self { items, position: 0 }
    }

    /// Zero-based index of the item under the cursor.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Number of items visible to this cursor.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'a, T> Cursor for SliceCursor<'a, T> {
    type Item = &'a T;

    fn reset(&mut self) {
        self.position = 0;
    }

    fn advance(&mut self) -> Result<(), CursorError> {
        if self.is_done() {
            return Err(CursorError::done("advance"));
        }
        self.position += 1;
        Ok(())
    }

    fn is_done(&self) -> bool {
        self.position >= self.items.len()
    }

    fn current(&self) -> Result<&'a T, CursorError> {
        self.items
            .get(self.position)
            .ok_or(CursorError::done("current"))
    }
}

/// Standard iterator over the remaining items of a cursor
///
/// Each `next` reads the current item and advances, so decorations on the
/// wrapped cursor fire once per yielded item. A failing `current` or
/// `advance` ends the iteration; the error is kept and available from
/// [`Steps::error`]. The item of a step whose `advance` failed is not
/// yielded.
#[derive(Debug, Clone)]
pub struct Steps<C> {
    cursor: C,
    error: Option<CursorError>,
}

impl<C: Cursor> Steps<C> {
    pub(crate) fn new(cursor: C) -> Self {
        Self {
            cursor,
            error: None,
        }
    }

    /// The error that stopped the iteration, if any.
    #[must_use]
    pub fn error(&self) -> Option<CursorError> {
        self.error
    }

    /// Gives the cursor back, positioned after the last yielded item.
    pub fn into_cursor(self) -> C {
        self.cursor
    }

    /// Gives the cursor back, or the error that stopped the iteration.
    ///
    /// # Errors
    ///
    /// Returns the cursor error raised during iteration.
    pub fn finish(self) -> Result<C, CursorError> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(self.cursor),
        }
    }

    fn step(&mut self) -> Result<C::Item, CursorError> {
        let item = self.cursor.current()?;
        self.cursor.advance()?;
        Ok(item)
    }
}

impl<C: Cursor> Iterator for Steps<C> {
    type Item = C::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.error.is_some() || self.cursor.is_done() {
            return None;
        }
        match self.step() {
            Ok(item) => Some(item),
            Err(e) => {
                self.error = Some(e);
                None
            }
        }
    }
}
