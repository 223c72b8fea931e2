//! Demo time slots: generation, validation and pt-BR formatting
//!
//! Slots are expressed in the visitor's local time as `YYYY-MM-DDTHH:MM`
//! strings (the value of the `<select>` options). Validation and slot
//! generation work on naive local datetimes; conversion to an absolute UTC
//! timestamp happens only when a request is built.

use std::ops::Range;

use chrono::{
    DateTime, Datelike, Days, NaiveDate, NaiveDateTime, TimeZone, Timelike, Utc, Weekday,
};

/// Hours (local) during which demos can start
pub const BUSINESS_HOURS: Range<u32> = 9..18;

/// Number of calendar days ahead offered for booking
pub const BOOKING_WINDOW_DAYS: u64 = 14;

/// Format of a slot value as submitted by the `<select>`
pub const SLOT_VALUE_FORMAT: &str = "%Y-%m-%dT%H:%M";

const WEEKDAYS_SHORT: [&str; 7] = ["seg.", "ter.", "qua.", "qui.", "sex.", "sáb.", "dom."];

const WEEKDAYS_LONG: [&str; 7] = [
    "segunda-feira",
    "terça-feira",
    "quarta-feira",
    "quinta-feira",
    "sexta-feira",
    "sábado",
    "domingo",
];

const MONTHS: [&str; 12] = [
    "janeiro",
    "fevereiro",
    "março",
    "abril",
    "maio",
    "junho",
    "julho",
    "agosto",
    "setembro",
    "outubro",
    "novembro",
    "dezembro",
];

/// Reasons a selected demo datetime is rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleError {
    /// No slot selected (or the value could not be read)
    MissingDatetime,
    /// Selected time is not strictly after now
    NotInFuture,
    /// Local hour outside `BUSINESS_HOURS`
    OutsideBusinessHours,
    /// Saturday or Sunday
    Weekend,
    /// Local time does not exist in the visitor's timezone (DST gap)
    UnrepresentableLocalTime,
}

impl std::fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScheduleError::MissingDatetime => write!(f, "Selecione data e horário para o demo"),
            ScheduleError::NotInFuture => write!(f, "Selecione uma data futura"),
            ScheduleError::OutsideBusinessHours => {
                write!(f, "Demos disponíveis das 9h às 18h (horário de Brasília)")
            }
            ScheduleError::Weekend => write!(f, "Demos disponíveis apenas em dias úteis"),
            ScheduleError::UnrepresentableLocalTime => write!(f, "Data/hora inválida."),
        }
    }
}

impl std::error::Error for ScheduleError {}

/// One bookable demo slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeSlot {
    /// Local start time
    pub start: NaiveDateTime,
    /// `<option>` value, `YYYY-MM-DDTHH:MM`
    pub value: String,
    /// Human label, e.g. `seg., 20/10, 09:00`
    pub label: String,
}

impl TimeSlot {
    pub fn at(start: NaiveDateTime) -> Self {
        Self {
            start,
            value: start.format(SLOT_VALUE_FORMAT).to_string(),
            label: slot_label(start),
        }
    }
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Slots for the next `BOOKING_WINDOW_DAYS` days after `today`.
///
/// Weekends are skipped; every remaining day gets one slot per hour in
/// `BUSINESS_HOURS`. Today itself is never offered.
pub fn generate_time_slots(today: NaiveDate) -> Vec<TimeSlot> {
    (1..=BOOKING_WINDOW_DAYS)
        .filter_map(|offset| today.checked_add_days(Days::new(offset)))
        .filter(|date| !is_weekend(*date))
        .flat_map(|date| BUSINESS_HOURS.filter_map(move |hour| date.and_hms_opt(hour, 0, 0)))
        .map(TimeSlot::at)
        .collect()
}

/// Parse a `<select>` value back into a local datetime
pub fn parse_slot_value(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value.trim(), SLOT_VALUE_FORMAT).ok()
}

/// Validate the selected slot against `now` (both local).
///
/// Checks run in order and stop at the first failure: selection present,
/// strictly in the future, inside business hours, on a weekday.
pub fn validate_demo_datetime(
    selected: &str,
    now: NaiveDateTime,
) -> Result<NaiveDateTime, ScheduleError> {
    let selected = parse_slot_value(selected).ok_or(ScheduleError::MissingDatetime)?;

    if selected <= now {
        return Err(ScheduleError::NotInFuture);
    }

    if !BUSINESS_HOURS.contains(&selected.hour()) {
        return Err(ScheduleError::OutsideBusinessHours);
    }

    if is_weekend(selected.date()) {
        return Err(ScheduleError::Weekend);
    }

    Ok(selected)
}

/// Convert a local datetime in `tz` to an absolute UTC timestamp.
///
/// Ambiguous local times (DST fold) resolve to the earlier instant.
pub fn to_utc<Tz: TimeZone>(local: NaiveDateTime, tz: &Tz) -> Result<DateTime<Utc>, ScheduleError> {
    tz.from_local_datetime(&local)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or(ScheduleError::UnrepresentableLocalTime)
}

/// Parse a timestamp returned by the backend.
///
/// Accepts RFC 3339 with an offset, and naive ISO datetimes which the
/// backend emits in UTC.
pub fn parse_backend_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

/// `seg., 20/10, 09:00`
pub fn slot_label(dt: NaiveDateTime) -> String {
    format!(
        "{}, {}",
        WEEKDAYS_SHORT[dt.weekday().num_days_from_monday() as usize],
        dt.format("%d/%m, %H:%M")
    )
}

/// `segunda-feira, 20 de outubro de 2025 às 09:00`
pub fn format_long_datetime(dt: NaiveDateTime) -> String {
    format!(
        "{}, {:02} de {} de {} às {}",
        WEEKDAYS_LONG[dt.weekday().num_days_from_monday() as usize],
        dt.day(),
        MONTHS[dt.month0() as usize],
        dt.year(),
        dt.format("%H:%M")
    )
}

/// `21/10/2025, 12:00`
pub fn format_short_datetime(dt: NaiveDateTime) -> String {
    dt.format("%d/%m/%Y, %H:%M").to_string()
}

/// Confirmed demo time from the backend, shown in the visitor's timezone
pub fn format_demo_date<Tz: TimeZone>(raw: &str, tz: &Tz) -> String {
    match parse_backend_timestamp(raw) {
        Some(dt) => format_long_datetime(dt.with_timezone(tz).naive_local()),
        None => raw.to_string(),
    }
}

/// Trial expiry from the backend, shown in the visitor's timezone
pub fn format_trial_expiry<Tz: TimeZone>(raw: &str, tz: &Tz) -> String {
    match parse_backend_timestamp(raw) {
        Some(dt) => format_short_datetime(dt.with_timezone(tz).naive_local()),
        None => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn at(s: &str) -> NaiveDateTime {
        parse_slot_value(s).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn brasilia() -> FixedOffset {
        FixedOffset::west_opt(3 * 3600).unwrap()
    }

    #[test]
    fn test_slots_from_a_friday() {
        // 2025-10-17 is a Friday
        let slots = generate_time_slots(date(2025, 10, 17));

        assert_eq!(slots.len(), 10 * 9);
        assert_eq!(slots[0].value, "2025-10-20T09:00");
        assert_eq!(slots[0].label, "seg., 20/10, 09:00");
        let last = slots.last().unwrap();
        assert_eq!(last.value, "2025-10-31T17:00");
        assert_eq!(last.label, "sex., 31/10, 17:00");
    }

    #[test]
    fn test_slots_only_weekdays_business_hours_within_window() {
        for today in [date(2025, 10, 17), date(2025, 10, 19), date(2025, 12, 29)] {
            let slots = generate_time_slots(today);
            let last_day = today.checked_add_days(Days::new(BOOKING_WINDOW_DAYS)).unwrap();

            assert_eq!(slots.len(), 90, "14 days always hold 10 weekdays");
            for slot in &slots {
                let day = slot.start.date();
                assert!(day > today && day <= last_day);
                assert!(!is_weekend(day));
                assert!(BUSINESS_HOURS.contains(&slot.start.hour()));
                assert_eq!(slot.start.minute(), 0);
                assert_eq!(parse_slot_value(&slot.value), Some(slot.start));
            }
        }
    }

    #[test]
    fn test_slots_cross_year_boundary() {
        let slots = generate_time_slots(date(2025, 12, 29));
        assert!(slots.iter().any(|s| s.value.starts_with("2026-01-")));
    }

    #[test]
    fn test_validate_requires_selection() {
        let now = at("2025-10-17T12:00");
        assert_eq!(validate_demo_datetime("", now), Err(ScheduleError::MissingDatetime));
        assert_eq!(
            validate_demo_datetime("amanhã", now),
            Err(ScheduleError::MissingDatetime)
        );
    }

    #[test]
    fn test_validate_rejects_past_and_now() {
        let now = at("2025-10-17T12:00");
        assert_eq!(
            validate_demo_datetime("2025-10-17T11:00", now),
            Err(ScheduleError::NotInFuture)
        );
        assert_eq!(
            validate_demo_datetime("2025-10-17T12:00", now),
            Err(ScheduleError::NotInFuture)
        );
        // past wins over the business-hours rule
        assert_eq!(
            validate_demo_datetime("2025-10-16T20:00", now),
            Err(ScheduleError::NotInFuture)
        );
    }

    #[test]
    fn test_validate_business_hours() {
        let now = at("2025-10-17T12:00");
        for value in ["2025-10-20T08:59", "2025-10-20T18:00", "2025-10-20T23:00", "2025-10-21T00:00"] {
            assert_eq!(
                validate_demo_datetime(value, now),
                Err(ScheduleError::OutsideBusinessHours),
                "{value}"
            );
        }
        assert!(validate_demo_datetime("2025-10-20T09:00", now).is_ok());
        assert!(validate_demo_datetime("2025-10-20T17:30", now).is_ok());
    }

    #[test]
    fn test_validate_rejects_weekends() {
        let now = at("2025-10-17T12:00");
        assert_eq!(
            validate_demo_datetime("2025-10-18T10:00", now),
            Err(ScheduleError::Weekend)
        );
        assert_eq!(
            validate_demo_datetime("2025-10-19T15:00", now),
            Err(ScheduleError::Weekend)
        );
    }

    #[test]
    fn test_validate_messages() {
        assert_eq!(ScheduleError::NotInFuture.to_string(), "Selecione uma data futura");
        assert_eq!(
            ScheduleError::OutsideBusinessHours.to_string(),
            "Demos disponíveis das 9h às 18h (horário de Brasília)"
        );
        assert_eq!(
            ScheduleError::Weekend.to_string(),
            "Demos disponíveis apenas em dias úteis"
        );
    }

    #[test]
    fn test_every_generated_slot_validates() {
        let now = at("2025-10-17T12:00");
        for slot in generate_time_slots(now.date()) {
            assert_eq!(validate_demo_datetime(&slot.value, now), Ok(slot.start));
        }
    }

    #[test]
    fn test_to_utc_uses_local_offset() {
        let utc = to_utc(at("2025-10-20T09:00"), &brasilia()).unwrap();
        assert_eq!(utc.to_rfc3339(), "2025-10-20T12:00:00+00:00");

        let same = to_utc(at("2025-10-20T09:00"), &Utc).unwrap();
        assert_eq!(same.to_rfc3339(), "2025-10-20T09:00:00+00:00");
    }

    #[test]
    fn test_parse_backend_timestamp_variants() {
        let expected = at("2025-10-20T12:00").and_utc();
        assert_eq!(parse_backend_timestamp("2025-10-20T12:00:00Z"), Some(expected));
        assert_eq!(parse_backend_timestamp("2025-10-20T09:00:00-03:00"), Some(expected));
        assert_eq!(parse_backend_timestamp("2025-10-20T12:00:00"), Some(expected));
        assert_eq!(
            parse_backend_timestamp("2025-10-20T12:00:00.250000").map(|d| d.timestamp()),
            Some(expected.timestamp())
        );
        assert_eq!(parse_backend_timestamp("soon"), None);
    }

    #[test]
    fn test_long_and_short_formats() {
        assert_eq!(
            format_long_datetime(at("2025-10-20T09:00")),
            "segunda-feira, 20 de outubro de 2025 às 09:00"
        );
        assert_eq!(format_short_datetime(at("2025-03-05T07:05")), "05/03/2025, 07:05");
    }

    #[test]
    fn test_format_backend_values_in_local_time() {
        assert_eq!(
            format_demo_date("2025-10-20T12:00:00Z", &brasilia()),
            "segunda-feira, 20 de outubro de 2025 às 09:00"
        );
        assert_eq!(
            format_trial_expiry("2025-10-21T02:30:00", &brasilia()),
            "20/10/2025, 23:30"
        );
        assert_eq!(format_trial_expiry("n/a", &brasilia()), "n/a");
    }
}
