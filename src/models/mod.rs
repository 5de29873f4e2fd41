//! Planning domain models.
//!
//! Provides the data types shared by the extraction, scheduling, and
//! analytics layers.
//!
//! # Domain Mappings
//!
//! | u-timeline | Issue tracker | Generic scheduling |
//! |------------|---------------|--------------------|
//! | Record | Issue / Pull request | Job |
//! | ValuedItem | Estimated issue | Job with processing time |
//! | Worker | Developer | Identical parallel machine |
//! | ScheduledTask | Gantt bar | Assignment |

mod calendar;
mod record;
mod schedule;
mod unit;

pub use calendar::{calculate_end_time, end_time_in, HolidaySet, WorkCalendar, DAYS_PER_WEEK};
pub use record::{
    coerce_number, lookup_field, numeric_field, parse_float, parse_number, record_identifier,
    record_label, ValuedItem, CUSTOM_FIELDS_KEY, DEFAULT_IDENTIFIER, DEFAULT_LABEL,
};
pub use schedule::{ScheduledTask, WorkerLoad};
pub use unit::{
    convert_from_ms, convert_to_ms, TimeUnit, MS_PER_DAY, MS_PER_HOUR, MS_PER_MONTH, MS_PER_WEEK,
};
