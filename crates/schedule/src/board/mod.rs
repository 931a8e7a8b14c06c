//! In-memory maintenance board: the PM list plus its due-date queries.
//!
//! Holds the schedule of every tracked asset and answers which assets are
//! due on or before a given date. The board uses the same projector as the
//! list view, so a job driven from here and the UI never disagree on a
//! next-due date.

mod core;
mod entry;


pub use self::core::MaintenanceBoard;
pub use self::entry::{BoardEntry, BoardRow, DueItem};
