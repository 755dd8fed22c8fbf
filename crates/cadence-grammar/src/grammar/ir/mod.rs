//! Language-neutral intermediate representation of a schedule.
//!
//! Both front-ends produce it; the engine consumes it. The JSON form is
//! stable and round-trips without loss.

mod rule;
mod schedule;

pub use rule::{
    BUSINESS_WEEKDAYS, Frequency, IrBetweenTime, IrConstraints, IrExcept, IrHolidays, IrOneshot,
    IrRecurring, IrRule, IrStep, IrWindowDate, WeekendShift, weekday_from_index, weekday_index,
};
pub use schedule::{IrSchedule, IrVersion};
