//! Train schedule record and its ordering.

use std::cmp::Ordering;
use std::fmt;

/// One train departure.
///
/// Dates and times are kept as the strings found in the input ("YYYY-MM-DD"
/// and "HH:MM"), which already sort correctly byte by byte.
///
/// Records are ordered by departure date, then departure time, then train
/// number, all ascending, and finally by travel time *descending*. The train
/// type takes no part in ordering or equality, so two records that differ
/// only in `train_type` compare equal.
///
/// # Examples
///
/// ```
/// use schedule_bench::domain::ScheduleRecord;
///
/// let long = ScheduleRecord::new(7, "2024-01-01", "fast", "09:00", 45);
/// let short = ScheduleRecord::new(7, "2024-01-01", "slow", "09:00", 30);
///
/// // Longer journeys come first when everything else ties.
/// assert!(long < short);
///
/// // Train type is ignored by equality.
/// let relabelled = ScheduleRecord::new(7, "2024-01-01", "slow", "09:00", 45);
/// assert_eq!(long, relabelled);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScheduleRecord {
    pub train_number: i32,
    /// "YYYY-MM-DD"
    pub departure_date: String,
    pub train_type: String,
    /// "HH:MM"
    pub departure_time: String,
    pub travel_minutes: i32,
}

impl ScheduleRecord {
    pub fn new(
        train_number: i32,
        departure_date: impl Into<String>,
        train_type: impl Into<String>,
        departure_time: impl Into<String>,
        travel_minutes: i32,
    ) -> Self {
        Self {
            train_number,
            departure_date: departure_date.into(),
            train_type: train_type.into(),
            departure_time: departure_time.into(),
            travel_minutes,
        }
    }

    /// Formats the record as a CSV line, without the trailing newline.
    ///
    /// Field order matches the input format:
    /// `train_number,departure_date,train_type,departure_time,travel_minutes`.
    pub fn to_csv_line(&self) -> String {
        format!(
            "{},{},{},{},{}",
            self.train_number,
            self.departure_date,
            self.train_type,
            self.departure_time,
            self.travel_minutes
        )
    }
}

impl PartialEq for ScheduleRecord {
    fn eq(&self, other: &Self) -> bool {
        self.departure_date == other.departure_date
            && self.departure_time == other.departure_time
            && self.train_number == other.train_number
            && self.travel_minutes == other.travel_minutes
    }
}

impl Eq for ScheduleRecord {}

impl Ord for ScheduleRecord {
    fn cmp(&self, other: &Self) -> Ordering {
        self.departure_date
            .cmp(&other.departure_date)
            .then_with(|| self.departure_time.cmp(&other.departure_time))
            .then_with(|| self.train_number.cmp(&other.train_number))
            // Inverted: longer journeys sort first.
            .then_with(|| other.travel_minutes.cmp(&self.travel_minutes))
    }
}

// `lt` is the primitive; the other relations are its converse or negation so
// they can never disagree with it at ties.
impl PartialOrd for ScheduleRecord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }

    fn lt(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Less
    }

    fn gt(&self, other: &Self) -> bool {
        other.lt(self)
    }

    fn le(&self, other: &Self) -> bool {
        !other.lt(self)
    }

    fn ge(&self, other: &Self) -> bool {
        !self.lt(other)
    }
}

impl fmt::Display for ScheduleRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Train {}, {}, Departure: {} {}, Travel Time: {} minutes",
            self.train_number,
            self.train_type,
            self.departure_date,
            self.departure_time,
            self.travel_minutes
        )
    }
}
