use crate::cursor::Cursor;
use crate::error::CursorError;

/// Behaviour injected around a wrapped cursor.
///
/// Every method receives the wrapped cursor and, by default, forwards the
/// call unchanged. Override only the operations that need a side effect, and
/// decide per operation whether it runs before or after delegating.
pub trait Decoration<C: Cursor + ?Sized> {
    fn reset(&mut self, inner: &mut C) {
        inner.reset();
    }

    /// # Errors
    ///
    /// Propagates the wrapped cursor's error.
    fn advance(&mut self, inner: &mut C) -> Result<(), CursorError> {
        inner.advance()
    }

    fn is_done(&self, inner: &C) -> bool {
        inner.is_done()
    }

    /// # Errors
    ///
    /// Propagates the wrapped cursor's error.
    fn current(&self, inner: &C) -> Result<C::Item, CursorError> {
        inner.current()
    }
}

/// Decoration that changes nothing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Passthrough;

impl<C: Cursor + ?Sized> Decoration<C> for Passthrough {}

/// A cursor that owns another cursor and routes every operation through a [`Decoration`]
///
/// Decorators nest: the wrapped cursor may itself be a `Decorator`. Dropping
/// the outermost decorator drops the whole chain.
#[derive(Debug, Clone)]
pub struct Decorator<C, D> {
    inner: C,
    decoration: D,
}

impl<C: Cursor, D: Decoration<C>> Decorator<C, D> {
    #[must_use]
    pub fn new(inner: C, decoration: D) -> Self {
        Self { inner, decoration }
    }

    pub fn inner(&self) -> &C {
        &self.inner
    }

    pub fn decoration(&self) -> &D {
        &self.decoration
    }

    pub fn decoration_mut(&mut self) -> &mut D {
        &mut self.decoration
    }

    /// Unwraps one level of the chain.
    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<C: Cursor, D: Decoration<C>> Cursor for Decorator<C, D> {
    type Item = C::Item;

    fn reset(&mut self) {
        self.decoration.reset(&mut self.inner);
    }

    fn advance(&mut self) -> Result<(), CursorError> {
        self.decoration.advance(&mut self.inner)
    }

    fn is_done(&self) -> bool {
        self.decoration.is_done(&self.inner)
    }

    fn current(&self) -> Result<Self::Item, CursorError> {
        self.decoration.current(&self.inner)
    }
}
