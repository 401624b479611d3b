//! Train query engine.
//!
//! Answers: "which trains run from this station to that one, cheapest (or
//! earliest) first?" A query is validated, then the dataset is filtered on
//! both station ids, stably sorted on the chosen field and capped at
//! [`MAX_RESULTS`] trains.

mod criteria;
mod search;


pub use criteria::{SortCriteria, UnsupportedCriteria};
pub use search::{MAX_RESULTS, QueryError, QueryRequest, find_trains};
