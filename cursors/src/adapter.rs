use core::fmt;

use crate::cursor::Cursor;
use crate::error::CursorError;

/// Cursor over a collection that only offers a forward iterator
///
/// Works for any `C` where `&C: IntoIterator`, for example `LinkedList`,
/// `VecDeque` or `BTreeSet`. The collection is borrowed, not owned. The
/// item under the cursor is kept aside so `current` does not need `&mut self`.
pub struct ForeignCursor<'a, C: ?Sized>
where
    &'a C: IntoIterator,
{
    source: &'a C,
    iter: <&'a C as IntoIterator>::IntoIter,
    head: Option<<&'a C as IntoIterator>::Item>,
}

impl<'a, C: ?Sized> ForeignCursor<'a, C>
where
    &'a C: IntoIterator,
{
    pub fn new(source: &'a C) -> Self {
        let mut iter = source.into_iter();
        let head = iter.next();
        Self { source, iter, head }
    }

    /// The adapted collection.
    #[must_use]
    pub fn source(&self) -> &'a C {
        self.source
    }
}

impl<'a, C: ?Sized> Cursor for ForeignCursor<'a, C>
where
    &'a C: IntoIterator,
    <&'a C as IntoIterator>::Item: Clone,
{
    type Item = <&'a C as IntoIterator>::Item;

    fn reset(&mut self) {
        self.iter = self.source.into_iter();
        self.head = self.iter.next();
    }

    fn advance(&mut self) -> Result<(), CursorError> {
        if self.head.is_none() {
            return Err(CursorError::done("advance"));
        }
        self.head = self.iter.next();
        Ok(())
    }

    fn is_done(&self) -> bool {
        self.head.is_none()
    }

    fn current(&self) -> Result<Self::Item, CursorError> {
        self.head.clone().ok_or(CursorError::done("current"))
    }
}

impl<'a, C: ?Sized> fmt::Debug for ForeignCursor<'a, C>
where
    &'a C: IntoIterator,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ForeignCursor {{ done: {}, source: <foreign> }}",
            self.head.is_none()
        )
    }
}
