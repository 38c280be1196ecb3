//! Decorations applied while walking a container of firearms

use std::cell::RefCell;

use cursors::{Cursor, CursorError, Decoration, Decorator};

use crate::firearm::Firearm;
use crate::journal::Journal;

/// Announces the 1-based ordinal of every item the cursor lands on
#[derive(Debug)]
pub struct Numbering<'j> {
    journal: &'j RefCell<Journal>,
    number: usize,
}

impl<'j> Numbering<'j> {
    #[must_use]
    pub fn new(journal: &'j RefCell<Journal>) -> Self {
        Self { journal, number: 1 }
    }

    /// Ordinal of the item under the cursor.
    #[must_use]
    pub fn number(&self) -> usize {
        self.number
    }

    fn announce(&self) {
        self.journal
            .borrow_mut()
            .line(format!("Sample number {}:", self.number));
    }
}

impl<C: Cursor + ?Sized> Decoration<C> for Numbering<'_> {
    fn reset(&mut self, inner: &mut C) {
        inner.reset();
        self.number = 1;
        if !inner.is_done() {
            self.announce();
        }
    }

    fn advance(&mut self, inner: &mut C) -> Result<(), CursorError> {
        inner.advance()?;
        if !inner.is_done() {
            self.number += 1;
            self.announce();
        }
        Ok(())
    }
}

/// Cleans each firearm before moving off it
#[derive(Debug)]
pub struct Cleaning<'j> {
    journal: &'j RefCell<Journal>,
}

impl<'j> Cleaning<'j> {
    #[must_use]
    pub fn new(journal: &'j RefCell<Journal>) -> Self {
        Self { journal }
    }
}

impl<'a, C> Decoration<C> for Cleaning<'_>
where
    C: Cursor<Item = &'a Firearm> + ?Sized,
{
    fn advance(&mut self, inner: &mut C) -> Result<(), CursorError> {
        leaving(inner)?.clean(&mut self.journal.borrow_mut());
        inner.advance()?;
        // separates one firearm's narration from the next
        self.journal.borrow_mut().blank();
        Ok(())
    }
}

/// Reloads each firearm before moving off it
#[derive(Debug)]
pub struct Reloading<'j> {
    journal: &'j RefCell<Journal>,
}

impl<'j> Reloading<'j> {
    #[must_use]
    pub fn new(journal: &'j RefCell<Journal>) -> Self {
        Self { journal }
    }
}

impl<'a, C> Decoration<C> for Reloading<'_>
where
    C: Cursor<Item = &'a Firearm> + ?Sized,
{
    fn advance(&mut self, inner: &mut C) -> Result<(), CursorError> {
        leaving(inner)?.reload(&mut self.journal.borrow_mut());
        inner.advance()
    }
}

/// The firearm the cursor is about to move off. A finished cursor rejects
/// the advance itself.
fn leaving<'a, C>(inner: &C) -> Result<&'a Firearm, CursorError>
where
    C: Cursor<Item = &'a Firearm> + ?Sized,
{
    if inner.is_done() {
        return Err(CursorError::PreconditionViolation {
            operation: "advance",
        });
    }
    inner.current()
}

/// `Numbering` over `Cleaning` over `Reloading` over the base cursor
pub type FullService<'j, C> =
    Decorator<Decorator<Decorator<C, Reloading<'j>>, Cleaning<'j>>, Numbering<'j>>;

/// Wraps `cursor` so that every step is numbered, then the firearm is
/// cleaned, then reloaded, before the cursor moves on.
pub fn full_service<'j, 'a, C>(cursor: C, journal: &'j RefCell<Journal>) -> FullService<'j, C>
where
    C: Cursor<Item = &'a Firearm>,
{
    cursor
        .decorate(Reloading::new(journal))
        .decorate(Cleaning::new(journal))
        .decorate(Numbering::new(journal))
}
