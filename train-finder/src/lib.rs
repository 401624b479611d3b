//! Train finder.
//!
//! Answers: "which trains go from station A to station B?" Given a
//! departure station, an arrival station and a sort criteria, returns up to
//! three trains from a JSON dataset, cheapest or earliest first.

pub mod config;
pub mod dataset;
pub mod domain;
pub mod finder;
pub mod prompt;
