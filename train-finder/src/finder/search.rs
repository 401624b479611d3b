//! Query validation and execution.

use tracing::debug;

use super::criteria::SortCriteria;
use crate::domain::{StationId, TrainRecord};

/// Maximum number of trains a query returns.
pub const MAX_RESULTS: usize = 3;

/// Errors from validating a query.
///
/// Validation stops at the first failing input, checked in the order the
/// variants are declared.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    /// No departure station was given
    #[error("empty departure station")]
    EmptyDepartureStation,

    /// Departure station is not an integer
    #[error("bad departure station input: {0:?}")]
    InvalidDepartureStation(String),

    /// No arrival station was given
    #[error("empty arrival station")]
    EmptyArrivalStation,

    /// Arrival station is not an integer
    #[error("bad arrival station input: {0:?}")]
    InvalidArrivalStation(String),

    /// Criteria is not one of price, arrival-time, departure-time
    #[error("unsupported criteria: {0:?}")]
    UnsupportedCriteria(String),
}

/// A validated query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryRequest {
    pub departure: StationId,
    pub arrival: StationId,
    pub criteria: SortCriteria,
}

impl QueryRequest {
    /// Create a request from already-validated parts.
    pub fn new(departure: StationId, arrival: StationId, criteria: SortCriteria) -> Self {
        Self {
            departure,
            arrival,
            criteria,
        }
    }

    /// Validate raw query strings.
    ///
    /// The criteria is checked here, before any records are looked at, so an
    /// unsupported criteria fails even when nothing would match.
    pub fn parse(departure: &str, arrival: &str, criteria: &str) -> Result<Self, QueryError> {
        if departure.is_empty() {
            return Err(QueryError::EmptyDepartureStation);
        }
        let departure = StationId::parse(departure)
            .map_err(|_| QueryError::InvalidDepartureStation(departure.to_string()))?;

        if arrival.is_empty() {
            return Err(QueryError::EmptyArrivalStation);
        }
        let arrival = StationId::parse(arrival)
            .map_err(|_| QueryError::InvalidArrivalStation(arrival.to_string()))?;

        let criteria = SortCriteria::parse(criteria)
            .map_err(|e| QueryError::UnsupportedCriteria(e.0))?;

        Ok(Self::new(departure, arrival, criteria))
    }

    /// Run the query against a dataset.
    ///
    /// Returns at most [`MAX_RESULTS`] records, borrowed from `dataset`,
    /// sorted ascending by the request's criteria. Ties keep dataset order.
    /// An empty result means nothing matched.
    pub fn run<'a>(&self, dataset: &'a [TrainRecord]) -> Vec<&'a TrainRecord> {
        let mut matches: Vec<&TrainRecord> = dataset
            .iter()
            .filter(|train| train.serves(self.departure, self.arrival))
            .collect();

        debug!(
            departure = %self.departure,
            arrival = %self.arrival,
            criteria = %self.criteria,
            matches = matches.len(),
            "filtered trains"
        );

        self.criteria.sort(&mut matches);
        matches.truncate(MAX_RESULTS);
        matches
    }
}

/// Find up to three trains between two stations, ordered by `criteria`.
///
/// # Examples
///
/// ```
/// use train_finder::dataset::decode_records;
/// use train_finder::finder::{QueryError, find_trains};
///
/// let dataset = decode_records(br#"[
///     {"trainId": 1, "departureStationId": 1, "arrivalStationId": 2, "price": 500},
///     {"trainId": 2, "departureStationId": 1, "arrivalStationId": 2, "price": 300}
/// ]"#).unwrap();
///
/// let found = find_trains("1", "2", "price", &dataset).unwrap();
/// assert_eq!(found.iter().map(|t| t.id).collect::<Vec<_>>(), [2, 1]);
///
/// assert!(find_trains("1", "9", "price", &dataset).unwrap().is_empty());
/// assert_eq!(
///     find_trains("", "2", "price", &dataset),
///     Err(QueryError::EmptyDepartureStation)
/// );
/// ```
pub fn find_trains<'a>(
    departure_station: &str,
    arrival_station: &str,
    criteria: &str,
    dataset: &'a [TrainRecord],
) -> Result<Vec<&'a TrainRecord>, QueryError> {
    let request = QueryRequest::parse(departure_station, arrival_station, criteria)?;
    Ok(request.run(dataset))
}
