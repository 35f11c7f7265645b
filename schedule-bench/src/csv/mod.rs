//! Reading and writing schedule CSV files.
//!
//! Lines hold `train_number,departure_date,train_type,departure_time,travel_minutes`
//! with no quoting. Parsing is lenient: bad numbers read as 0.

mod reader;
mod writer;

pub use reader::{load_records, parse_line, read_records};
pub use writer::{TrailingRecord, write_records, write_to};

/// Header line written at the top of every output file.
pub const HEADER: &str = "TrainNumber,DepartureDate,TrainType,DepartureTime,TravelMinutes";
