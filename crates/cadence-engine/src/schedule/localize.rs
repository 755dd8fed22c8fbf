//! Local civil time to absolute instants.

use chrono::{DateTime, LocalResult, NaiveDateTime, Offset, TimeDelta, TimeZone};
use chrono_tz::Tz;

/// ## Summary
/// Attaches `tz` to a local date-time.
///
/// Ambiguous times (DST fold) resolve to the earlier instant. Nonexistent
/// times (DST gap) are read with the offset in force before the transition,
/// so 02:30 in a 02:00 to 03:00 gap becomes 03:30 summer time.
#[must_use]
pub fn localize(local: NaiveDateTime, tz: Tz) -> DateTime<Tz> {
    match tz.from_local_datetime(&local) {
        LocalResult::Single(dt) => dt,
        LocalResult::Ambiguous(earliest, _latest) => earliest,
        LocalResult::None => {
            let before = local - TimeDelta::days(1);
            let offset = tz.offset_from_utc_datetime(&before).fix();
            let utc = local - TimeDelta::seconds(i64::from(offset.local_minus_utc()));
            tracing::trace!(local = %local, tz = %tz.name(), "Local time falls in a DST gap");
            tz.from_utc_datetime(&utc)
        }
    }
}
