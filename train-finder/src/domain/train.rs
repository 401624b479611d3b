//! Train record type.

use std::fmt;

use super::{StationId, TimeOfDay};

/// A single train offering from the dataset.
///
/// Records are built once when the dataset is decoded and never change
/// afterwards. Ids are opaque: duplicates are allowed and kept.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TrainRecord {
    pub id: i64,
    pub departure_station_id: StationId,
    pub arrival_station_id: StationId,
    pub price: f32,
    pub departure_time: TimeOfDay,
    pub arrival_time: TimeOfDay,
}

impl TrainRecord {
    /// Returns true if this train runs between the given stations.
    pub fn serves(&self, departure: StationId, arrival: StationId) -> bool {
        self.departure_station_id == departure && self.arrival_station_id == arrival
    }
}

impl fmt::Display for TrainRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "train {}: {} -> {}, price {:.2}, departs {}, arrives {}",
            self.id,
            self.departure_station_id,
            self.arrival_station_id,
            self.price,
            self.departure_time,
            self.arrival_time
        )
    }
}
