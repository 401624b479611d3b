//! Domain types for the train finder.
//!
//! All types enforce their invariants at construction time, so code that
//! receives them can trust their validity.

mod station;
mod time;
mod train;

pub use station::{InvalidStationId, StationId};
pub use time::{TimeError, TimeOfDay};
pub use train::TrainRecord;
