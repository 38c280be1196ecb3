//! Firearm walk-through on top of the `cursors` framework
//!
//! Firearms are closed variants ([`FirearmKind`]) built by a factory
//! ([`create_firearm`]), each carrying a pluggable [`ShootingStrategy`] used by
//! the template method [`Firearm::shoot`]. Containers of firearms are walked
//! with cursors, decorated by [`Numbering`], [`Cleaning`] and [`Reloading`].
//! All narration goes to a [`Journal`], flushed to any `embedded_io::Write`.

pub mod decorators;
pub mod demo;
pub mod error;
pub mod firearm;
pub mod journal;
pub mod salute;
pub mod source;
pub mod strategy;

pub use decorators::{full_service, Cleaning, FullService, Numbering, Reloading};
pub use demo::{run, DemoConfig, DemoSummary};
pub use error::{ArmoryError, Result};
pub use firearm::{create_firearm, Firearm, FirearmKind};
pub use journal::Journal;
pub use salute::salute;
pub use source::{DiscriminantSource, RandomSource, ScriptedSource};
pub use strategy::{
    create_shooting_strategy, LongBurstsStrategy, ShootingManner, ShootingStrategy,
    ShortBurstsStrategy, SingleShotsStrategy,
};
