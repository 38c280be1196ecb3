#![no_std]

//! `cursors`: cursor-style iteration over owned containers, with decorators and adapters.
//!
//! A [`Cursor`] is an explicit position over an ordered sequence: `reset`,
//! `advance`, `is_done`, `current`. Containers implementing [`Container`]
//! hand out fresh cursors bound to their storage. On top of that:
//!
//! - [`Decorator`] wraps a cursor and runs a [`Decoration`] around each
//!   operation, forwarding unchanged by default. Decorators nest and own the
//!   cursor they wrap.
//! - [`ForeignCursor`] exposes any collection with a borrowing `IntoIterator`
//!   through the same cursor contract.
//!
//! Misuse is reported, not undefined: reading or advancing a finished cursor
//! returns [`CursorError::PreconditionViolation`], inserting into a full
//! [`FixedArray`] returns [`CursorError::CapacityExceeded`].
//!
//! This crate is `no_std` compatible and needs only `alloc`.
//!
//! # Containers
//!
//! - [`FixedArray`]: capacity chosen at construction, storage allocated once.
//! - [`GrowableSeq`]: grows as items are pushed.
//!
//! ```
//! use cursors::{Container, Cursor, CursorError, FixedArray};
//!
//! let mut array = FixedArray::with_capacity(2).unwrap();
//! array.insert("a").unwrap();
//! array.insert("b").unwrap();
//! assert_eq!(
//!     array.insert("c"),
//!     Err(CursorError::CapacityExceeded { capacity: 2 })
//! );
//!
//! let mut cursor = array.cursor();
//! let mut seen = Vec::new();
//! cursor.reset();
//! while !cursor.is_done() {
//!     seen.push(*cursor.current().unwrap());
//!     cursor.advance().unwrap();
//! }
//! assert_eq!(seen, ["a", "b"]);
//! assert!(cursor.current().is_err());
//! ```
//!
//! # Decorators
//!
//! A decoration overrides only what it needs. Here every step is counted
//! after the wrapped cursor moved:
//!
//! ```
//! use cursors::{Container, Cursor, CursorError, Decoration, GrowableSeq};
//!
//! struct CountSteps(usize);
//!
//! impl<C: Cursor + ?Sized> Decoration<C> for CountSteps {
//!     fn advance(&mut self, inner: &mut C) -> Result<(), CursorError> {
//!         inner.advance()?;
//!         self.0 += 1;
//!         Ok(())
//!     }
//! }
//!
//! let seq: GrowableSeq<u32> = (1..=4).collect();
//! let mut cursor = seq.cursor().decorate(CountSteps(0));
//! let sum: u32 = (&mut cursor).steps().copied().sum();
//!
//! assert_eq!(sum, 10);
//! assert_eq!(cursor.decoration().0, 4);
//! assert!(cursor.is_done());
//! ```
//!
//! # Adapters
//!
//! ```
//! use std::collections::LinkedList;
//! use cursors::{Cursor, ForeignCursor};
//!
//! let list: LinkedList<i32> = [3, 1, 2].into_iter().collect();
//! let collected: Vec<i32> = ForeignCursor::new(&list).steps().copied().collect();
//! assert_eq!(collected, [3, 1, 2]);
//! ```

extern crate alloc;

mod adapter;
mod container;
mod cursor;
mod decorator;
mod error;
mod iter;

// Re-export public types and traits
pub use adapter::ForeignCursor;
pub use container::{Container, FixedArray, GrowableSeq, DEFAULT_CAPACITY};
pub use cursor::{BoxedCursor, Cursor};
pub use decorator::{Decoration, Decorator, Passthrough};
pub use error::CursorError;
pub use iter::{SliceCursor, Steps};
