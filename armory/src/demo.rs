use std::cell::RefCell;
use std::collections::LinkedList;

use cursors::{Container, Decorator, FixedArray, ForeignCursor, GrowableSeq, DEFAULT_CAPACITY};
use embedded_io::Write as IoWrite;

use crate::decorators::{full_service, Cleaning};
use crate::error::Result;
use crate::firearm::{create_firearm, Firearm};
use crate::journal::Journal;
use crate::salute::salute;
use crate::source::DiscriminantSource;

/// Knobs of the walk-through
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoConfig {
    /// Firearms created for each of the three containers
    pub per_container: usize,
    /// Capacity of the fixed array
    pub array_capacity: usize,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            per_container: 5,
            array_capacity: DEFAULT_CAPACITY,
        }
    }
}

/// Shots fired per container and samples removed at the end
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DemoSummary {
    pub array_shots: usize,
    pub sequence_shots: usize,
    pub list_shots: usize,
    pub decommissioned: usize,
}

/// Runs the whole walk-through, writing the narration to `out` phase by phase.
///
/// 1. fill a fixed array, a growable sequence and a linked list;
/// 2. salute the array and the sequence through numbering, cleaning and
///    reloading decorations;
/// 3. salute the list through the foreign-collection adapter with cleaning;
/// 4. remove every sample.
///
/// # Errors
///
/// Stops at the first factory, container, cursor or output error.
pub fn run<S, W>(config: &DemoConfig, source: &mut S, out: &mut W) -> Result<DemoSummary>
where
    S: DiscriminantSource + ?Sized,
    W: IoWrite,
{
    let journal = RefCell::new(Journal::new());
    let mut summary = DemoSummary::default();

    heading(&journal, "Creating and filling the firearm array:");
    let mut array = FixedArray::with_capacity(config.array_capacity)?;
    for _ in 0..config.per_container {
        array.insert(produce(source, &journal)?)?;
    }
    end_phase(&journal, out)?;

    heading(&journal, "Creating and filling the firearm sequence:");
    let mut sequence = GrowableSeq::new();
    for _ in 0..config.per_container {
        sequence.push(produce(source, &journal)?);
    }
    end_phase(&journal, out)?;

    heading(&journal, "Creating and filling the firearm list:");
    let mut list = LinkedList::new();
    for _ in 0..config.per_container {
        list.push_back(produce(source, &journal)?);
    }
    end_phase(&journal, out)?;

    heading(&journal, "Decorators at work on the firearm array:");
    summary.array_shots = salute(&mut full_service(array.cursor(), &journal), &journal)?;
    end_phase(&journal, out)?;

    heading(&journal, "Decorators at work on the firearm sequence:");
    summary.sequence_shots = salute(&mut full_service(sequence.cursor(), &journal), &journal)?;
    end_phase(&journal, out)?;

    heading(&journal, "Working through the firearm list with an adapter:");
    let mut adapted = Decorator::new(ForeignCursor::new(&list), Cleaning::new(&journal));
    summary.list_shots = salute(&mut adapted, &journal)?;
    end_phase(&journal, out)?;

    heading(&journal, "Removing the samples:");
    {
        let mut journal = journal.borrow_mut();
        for firearm in array.iter().chain(sequence.iter()).chain(list.iter()) {
            firearm.decommission(&mut journal);
            summary.decommissioned += 1;
        }
    }
    end_phase(&journal, out)?;

    Ok(summary)
}

fn heading(journal: &RefCell<Journal>, title: &str) {
    let mut journal = journal.borrow_mut();
    journal.line(title);
    journal.blank();
}

fn end_phase<W: IoWrite>(journal: &RefCell<Journal>, out: &mut W) -> Result<()> {
    let mut journal = journal.borrow_mut();
    journal.blank();
    journal.flush_to(out)
}

fn produce<S: DiscriminantSource + ?Sized>(
    source: &mut S,
    journal: &RefCell<Journal>,
) -> Result<Firearm> {
    create_firearm(source.next_discriminant(), &mut journal.borrow_mut())
}
