//! Domain types for the schedule benchmark.
//!
//! Records are plain values: they are parsed once, cloned freely and only
//! moved around by the sorts.

mod record;

pub use record::ScheduleRecord;
