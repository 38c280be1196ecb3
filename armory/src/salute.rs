use std::cell::RefCell;

use cursors::Cursor;

use crate::error::Result;
use crate::firearm::Firearm;
use crate::journal::Journal;

/// Fires every firearm the cursor visits, from the first one.
///
/// Returns the number of shots. The journal must not be borrowed by the
/// caller while this runs, since decorations on `cursor` write to it too.
///
/// # Errors
///
/// The first cursor error aborts the salute.
pub fn salute<'a, C>(cursor: &mut C, journal: &RefCell<Journal>) -> Result<usize>
where
    C: Cursor<Item = &'a Firearm> + ?Sized,
{
    let mut shots = 0;
    cursor.reset();
    while !cursor.is_done() {
        let firearm = cursor.current()?;
        firearm.shoot(&mut journal.borrow_mut());
        cursor.advance()?;
        shots += 1;
    }
    Ok(shots)
}
