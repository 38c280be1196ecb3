use alloc::boxed::Box;

use crate::decorator::{Decoration, Decorator};
use crate::error::CursorError;
use crate::iter::Steps;

/// A boxed cursor, used to build heterogeneous decorator chains
pub type BoxedCursor<'a, I> = Box<dyn Cursor<Item = I> + 'a>;

/// A position over an ordered sequence of items.
///
/// A new cursor starts on the first item. Traversal follows the pattern
///
/// ```text
/// cursor.reset();
/// while !cursor.is_done() {
///     let item = cursor.current()?;
///     cursor.advance()?;
/// }
/// ```
///
/// # Contract
///
/// `current` and `advance` are only defined while `is_done()` is false. Calling
/// either on a finished cursor returns [`CursorError::PreconditionViolation`]
/// and leaves the cursor unchanged. Once done, the cursor stays done until
/// `reset`.
pub trait Cursor {
    type Item;

    /// Moves the cursor back to the first item.
    fn reset(&mut self);

    /// Moves the cursor one position forward.
    ///
    /// # Errors
    ///
    /// Returns `CursorError::PreconditionViolation` if the cursor is done.
    fn advance(&mut self) -> Result<(), CursorError>;

    /// True iff the cursor is at or past the end.
    fn is_done(&self) -> bool;

    /// Returns the item under the cursor.
    ///
    /// # Errors
    ///
    /// Returns `CursorError::PreconditionViolation` if the cursor is done.
    fn current(&self) -> Result<Self::Item, CursorError>;

    /// Visits every item from the current position to the end.
    ///
    /// Returns the number of visited items. The first error, from `f` or from
    /// the cursor, stops the walk.
    ///
    /// # Errors
    ///
    /// Propagates errors of `f` and cursor errors converted with `From`.
    fn for_each_remaining<F, E>(&mut self, mut f: F) -> Result<usize, E>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> Result<(), E>,
        E: From<CursorError>,
    {
        let mut visited = 0;
        while !self.is_done() {
            f(self.current()?)?;
            self.advance()?;
            visited += 1;
        }
        Ok(visited)
    }

    /// Turns the cursor into a standard iterator starting at the current position.
    ///
    /// Iteration stops at the first cursor error, kept in [`Steps::error`].
    fn steps(self) -> Steps<Self>
    where
        Self: Sized,
    {
        Steps::new(self)
    }

    /// Wraps the cursor into a [`Decorator`].
    fn decorate<D>(self, decoration: D) -> Decorator<Self, D>
    where
        Self: Sized,
        D: Decoration<Self>,
    {
        Decorator::new(self, decoration)
    }
}

impl<C: Cursor + ?Sized> Cursor for Box<C> {
    type Item = C::Item;

    fn reset(&mut self) {
        (**self).reset();
    }

    fn advance(&mut self) -> Result<(), CursorError> {
        (**self).advance()
    }

    fn is_done(&self) -> bool {
        (**self).is_done()
    }

    fn current(&self) -> Result<Self::Item, CursorError> {
        (**self).current()
    }
}

impl<C: Cursor + ?Sized> Cursor for &mut C {
    type Item = C::Item;

    fn reset(&mut self) {
        (**self).reset();
    }

    fn advance(&mut self) -> Result<(), CursorError> {
        (**self).advance()
    }

    fn is_done(&self) -> bool {
        (**self).is_done()
    }

    fn current(&self) -> Result<Self::Item, CursorError> {
        (**self).current()
    }
}
