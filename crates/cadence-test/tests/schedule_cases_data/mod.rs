/// A rule text and its next occurrence after the reference instant,
/// as wall-clock time in Europe/Paris.
pub struct ScheduleCase {
    pub text: &'static str,
    pub expected_local: &'static str,
}

const fn case(text: &'static str, expected_local: &'static str) -> ScheduleCase {
    ScheduleCase {
        text,
        expected_local,
    }
}

/// Reference instant for every case: 2026-03-12 12:00 in Europe/Paris, a Thursday.
pub const REFERENCE_LOCAL: (i32, u32, u32, u32, u32) = (2026, 3, 12, 12, 0);

#[expect(clippy::too_many_lines)]
pub fn schedule_cases() -> Vec<ScheduleCase> {
    vec![
        // Daily and weekly
        case("every sunday at 10AM", "2026-03-15T10:00"),
        case("every day at 3PM", "2026-03-12T15:00"),
        case("every day except wednesday at 10AM", "2026-03-13T10:00"),
        case("every 2 days at 10:00", "2026-03-14T10:00"),
        case("every 3 weeks on monday at 08:30", "2026-03-30T08:30"),
        case("every monday and thursday at 18:00", "2026-03-12T18:00"),
        case("every weekday at 09:00", "2026-03-13T09:00"),
        case("every day at 09:00 and 18:00", "2026-03-12T18:00"),
        case("every saturday at 10:00, 14:00, 18:00", "2026-03-14T10:00"),
        case("every day at 12:01", "2026-03-12T12:01"),
        case("every day at 12:00", "2026-03-13T12:00"),
        case("every day at 11:00, 12:30, 23:00", "2026-03-12T12:30"),
        case("every weekday at 12:30", "2026-03-12T12:30"),
        // Step within day
        case("every day every 2 hours between 09:00 and 17:00", "2026-03-12T13:00"),
        case("every weekday every 2 hours between 09:00 and 17:00", "2026-03-12T13:00"),
        case("every day every 30 minutes between 12:00 and 14:00", "2026-03-12T12:30"),
        case("every day every 30 minutes between 12:00 and 14:00 except thursday", "2026-03-13T12:00"),
        case("every weekday every 30 minutes between 12:00 and 14:00", "2026-03-12T12:30"),
        case("every weekday every 30 minutes between 12:00 and 14:00 except thursday", "2026-03-13T12:00"),
        case("every weekday every 90 minutes between 08:00 and 12:00 except friday", "2026-03-16T08:00"),
        case("every day every 2 hours between 09:00 and 17:00 except thursday", "2026-03-13T09:00"),
        case("every day every 2 hours between 09:00 and 17:00 except friday", "2026-03-12T13:00"),
        case("every day every 2 hours between 09:00 and 17:00 except 2026-03-13", "2026-03-12T13:00"),
        case(
            "every day every 2 hours between 09:00 and 17:00 between 2026-03-12 and 2026-03-14 except 2026-03-13",
            "2026-03-12T13:00",
        ),
        case(
            "every weekday every 2 hours between 09:00 and 17:00 between 2026-03-12 and 2026-03-14 except thursday",
            "2026-03-13T09:00",
        ),
        case(
            "every weekday every 2 hours between 09:00 and 17:00 between 2026-03-12 and 2026-03-14 except friday",
            "2026-03-12T13:00",
        ),
        // Hourly and minutely
        case("every 2 hours between 09:00 and 17:00", "2026-03-12T14:00"),
        case("every 2 hours between 09:00 and 17:00 except thursday", "2026-03-13T10:00"),
        case("every hour between 18:00 and 23:00", "2026-03-12T18:00"),
        case("every hour between 18:00 and 23:00 except thursday", "2026-03-13T18:00"),
        case("every 3 hours between 08:00 and 23:00", "2026-03-12T15:00"),
        case("every 4 hours between 01:00 and 23:00 except thursday", "2026-03-13T04:00"),
        case("every hour between 12:00 and 14:00", "2026-03-12T13:00"),
        case("every hour between 12:00 and 14:00 except thursday", "2026-03-13T12:00"),
        case("every 6 hours between 00:00 and 23:00", "2026-03-12T18:00"),
        case("every 15 minutes", "2026-03-12T12:15"),
        case("every 45 minutes", "2026-03-12T12:45"),
        case("every 6 hours", "2026-03-12T18:00"),
        case("every 6 hours except thursday", "2026-03-13T00:00"),
        case("every 6 hours at 06:00 and 18:00", "2026-03-12T18:00"),
        case("every 7 minutes at 10:01", "2026-03-19T10:01"),
        // Windows
        case("every weekday at 15:00 between 2026-02-01 and 2026-03-31", "2026-03-12T15:00"),
        case("every day at 10:00 until 2026-12-31", "2026-03-13T10:00"),
        case("every day at 18:00 until 2026-03-13 except 2026-03-12", "2026-03-13T18:00"),
        case("every day at 18:00 between 2026-03-12 and 2026-03-13 except 2026-03-12", "2026-03-13T18:00"),
        case("every day except thursday at 18:00 between 2026-03-12 and 2026-03-20", "2026-03-13T18:00"),
        case(
            "every day at 18:00 between 2026-03-12 and 2026-03-15 except 2026-03-12, 2026-03-13",
            "2026-03-14T18:00",
        ),
        case("every weekday at 15:30 between 2026-03-01 and 2026-03-31 except thursday", "2026-03-13T15:30"),
        case("every weekday at 15:30 until 2026-03-20 except 2026-03-13", "2026-03-12T15:30"),
        case("every weekday at 15:30 until 2026-03-20 except thursday", "2026-03-13T15:30"),
        case("every weekday at 09:00 between 2026-03-12 and 2026-03-16 except 2026-03-13", "2026-03-16T09:00"),
        case("every weekday at 09:00 between 2026-03-12 and 2026-03-16 except friday", "2026-03-16T09:00"),
        // Monthly
        case("every month on the 1st at 09:00", "2026-04-01T09:00"),
        case("every month on the last day at 20:00", "2026-03-31T20:00"),
        case("every month on the 2nd and 15th at 08:00", "2026-03-15T08:00"),
        case("every month on the 15th at 08:00", "2026-03-15T08:00"),
        case("every month on the 31st at 20:00", "2026-03-31T20:00"),
        case("every month on the 12th at 12:30", "2026-03-12T12:30"),
        case("every month on the 12th at 18:00", "2026-03-12T18:00"),
        case("every month on the 13th at 10:00", "2026-03-13T10:00"),
        case("every month on the 12th and 14th at 18:00", "2026-03-12T18:00"),
        case("every month on the 31st at 20:00 except 2026-03-31", "2026-05-31T20:00"),
        case("every month on the 15th at 08:00 except 2026-03-15", "2026-04-15T08:00"),
        case("every month on the last day at 20:00 except 2026-03-31", "2026-04-30T20:00"),
        case("every month on the 31st at 20:00 except 2026-03-31 and 2026-05-31", "2026-07-31T20:00"),
        case("every month on the first monday at 09:00", "2026-04-06T09:00"),
        case("every month on the first monday at 09:00 except 2026-04-06", "2026-05-04T09:00"),
        case("every month on the last friday at 18:00", "2026-03-27T18:00"),
        case("every month on the second thursday at 18:00", "2026-03-12T18:00"),
        case("every month on the second thursday at 09:00", "2026-04-09T09:00"),
        case("every month on the third friday at 08:00", "2026-03-20T08:00"),
        case("every month on the last monday at 07:15", "2026-03-30T07:15"),
        case("every month on the fifth monday at 09:00", "2026-03-30T09:00"),
        // Yearly
        case("every year on 03-14 at 10:00", "2026-03-14T10:00"),
        case("every year on 03-01 at 10:00", "2027-03-01T10:00"),
        case("every year on 03-12 at 12:30", "2026-03-12T12:30"),
        case("every year on 03-12 at 11:00", "2027-03-12T11:00"),
        case("every year on the last sunday of october at 23:00", "2026-10-25T23:00"),
        // Exclusions
        case("every day at 10:00 except 2026-03-13", "2026-03-14T10:00"),
        case("every day at 10:00 except 2026-12-25, 2026-01-01", "2026-03-13T10:00"),
        case("every day at 10:00 except 2026-03-13, 2026-03-14", "2026-03-15T10:00"),
        case("every day at 10:00 except 2026-03-13 2026-03-14", "2026-03-15T10:00"),
        case("every weekday except friday at 09:00", "2026-03-16T09:00"),
        case("every day except wednesday and sunday at 10:00", "2026-03-13T10:00"),
        case("every day except thursday at 18:00", "2026-03-13T18:00"),
        case("every day except friday at 18:00", "2026-03-12T18:00"),
        case("every weekday except thursday at 15:00", "2026-03-13T15:00"),
        case("every monday and thursday except thursday at 18:00", "2026-03-16T18:00"),
        case("every day at 18:00 except thursday", "2026-03-13T18:00"),
        case("every day at 18:00 except friday", "2026-03-12T18:00"),
        case("every weekday at 09:00 except friday", "2026-03-16T09:00"),
        case("every weekday at 09:00 except thursday", "2026-03-13T09:00"),
        case("every weekday at 13:00 except thursday", "2026-03-13T13:00"),
        case("every weekday at 13:00 except friday", "2026-03-12T13:00"),
        case("every sunday at 10AM except 2026-03-15", "2026-03-22T10:00"),
        case("every day except thursday at 12:30", "2026-03-13T12:30"),
        case("every day except friday 2026-03-15 at 10:00", "2026-03-14T10:00"),
        case("every day except friday 2026-03-15 at 18:00", "2026-03-12T18:00"),
        case("every weekday except friday 2026-03-16 at 09:00", "2026-03-17T09:00"),
        case("every day except thursday friday 2026-03-12 at 18:00", "2026-03-14T18:00"),
        // Composed schedules
        case("every weekday at 09:00, and every saturday at 10:30", "2026-03-13T09:00"),
        case("every day at 18:00, and 2026-03-13 at 02:00", "2026-03-12T18:00"),
        case("every day at 18:00 except thursday, and 2026-03-13 at 02:00", "2026-03-13T02:00"),
        case("every day at 18:00 except friday, and 2026-03-13 at 02:00", "2026-03-12T18:00"),
        case("2026-03-12 at 13:00, and every day at 18:00", "2026-03-12T13:00"),
        case("every day at 18:00 except thursday, and every day at 17:00", "2026-03-12T17:00"),
        // Weekend shift
        case(
            "every month on the 1st at 09:00 between 2026-08-01 and 2026-08-31 if weekend then next monday",
            "2026-08-03T09:00",
        ),
        case(
            "every month on the 1st at 09:00 between 2026-08-01 and 2026-08-31 if weekend then next business day",
            "2026-08-03T09:00",
        ),
        // Zones; 10:00 in New York is 15:00 in Paris before Europe changes clocks
        case("every day at 10:00 in Europe/Paris", "2026-03-13T10:00"),
        case("every day at 10:00 in America/New_York", "2026-03-12T15:00"),
        // One-shot
        case("2026-03-13 at 2:00", "2026-03-13T02:00"),
    ]
}
