//! Train dataset decoding.
//!
//! The dataset is a JSON array of objects, one per train, with the fields
//! `trainId`, `departureStationId`, `arrivalStationId`, `price`,
//! `arrivalTime` and `departureTime`. Times are "HH:MM:SS" strings.
//!
//! Decoding is strict about types but lenient about presence:
//! - a recognized field with the wrong JSON type fails the decode
//! - a missing field leaves the record's zero value in place
//! - unrecognized fields are ignored

mod convert;
mod error;
mod store;
mod types;

pub use convert::{convert_train, decode_records};
pub use error::{DecodeError, LoadError};
pub use store::Dataset;
pub use types::TrainDto;
