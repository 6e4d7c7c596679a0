//! Resolving "now" and local midnights in the user's timezone.

use time::{Date, Duration, OffsetDateTime, PrimitiveDateTime, Time, UtcOffset};
use time_tz::{OffsetDateTimeExt, OffsetResult, PrimitiveDateTimeExt, Tz};

use crate::Error;

/// The current instant and the timezone used to find local calendar days.
///
/// With a timezone, midnights are resolved with that zone's rules, so days
/// either side of a daylight saving change start at the right instant.
/// Without one, every midnight uses the UTC offset of the instant.
///
/// An [OffsetDateTime] converts into a `LocalNow` without a timezone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalNow {
    instant: OffsetDateTime,
    timezone: Option<&'static Tz>,
}

impl LocalNow {
    /// `instant` as seen from `timezone`.
    pub fn new(instant: OffsetDateTime, timezone: &'static Tz) -> Self {
        Self {
            instant: instant.to_timezone(timezone),
            timezone: Some(timezone),
        }
    }

    /// `instant` with every midnight at the UTC offset of `instant`.
    pub fn fixed_offset(instant: OffsetDateTime) -> Self {
        Self {
            instant,
            timezone: None,
        }
    }

    /// The current instant, in the local UTC offset.
    pub fn instant(&self) -> OffsetDateTime {
        self.instant
    }

    /// The local calendar day.
    pub fn today(&self) -> Date {
        self.instant.date()
    }

    /// The instant the local calendar day `date` starts.
    pub fn midnight(&self, date: Date) -> OffsetDateTime {
        let midnight = PrimitiveDateTime::new(date, Time::MIDNIGHT);

        let Some(timezone) = self.timezone else {
            return midnight.assume_offset(self.instant.offset());
        };

        match midnight.assume_timezone(timezone) {
            OffsetResult::Some(start) | OffsetResult::Ambiguous(start, _) => start,
            // Midnight was skipped by a daylight saving change, so the day
            // starts at the change, i.e. midnight in the earlier offset.
            OffsetResult::None => {
                let earlier = (midnight - Duration::days(1)).assume_timezone_utc(timezone);
                midnight.assume_offset(earlier.offset())
            }
        }
    }
}

impl From<OffsetDateTime> for LocalNow {
    fn from(instant: OffsetDateTime) -> Self {
        Self::fixed_offset(instant)
    }
}

/// Look up a canonical timezone name such as "Pacific/Auckland".
///
/// # Errors
/// This function will return an [Error::InvalidTimezoneError] if `canonical_timezone`
/// is not a known timezone.
pub fn get_timezone(canonical_timezone: &str) -> Result<&'static Tz, Error> {
    time_tz::timezones::get_by_name(canonical_timezone)
        .ok_or_else(|| Error::InvalidTimezoneError(canonical_timezone.to_owned()))
}

/// The current date and time in `canonical_timezone`.
///
/// When no timezone is given the system's local offset is used, falling back
/// to UTC if it cannot be determined.
///
/// # Errors
/// This function will return an [Error::InvalidTimezoneError] if
/// `canonical_timezone` is not a known timezone.
pub fn now_in_timezone(canonical_timezone: Option<&str>) -> Result<LocalNow, Error> {
    let now = OffsetDateTime::now_utc();

    match canonical_timezone {
        Some(name) => Ok(LocalNow::new(now, get_timezone(name)?)),
        None => {
            let offset = UtcOffset::current_local_offset().unwrap_or_else(|error| {
                tracing::warn!("Could not determine the local UTC offset, using UTC: {error}");
                UtcOffset::UTC
            });

            Ok(LocalNow::fixed_offset(now.to_offset(offset)))
        }
    }
}

#[cfg(test)]
mod tests {
    use time::{
        UtcOffset,
        macros::{date, datetime, offset},
    };
    use time_tz::{Offset, TimeZone};

    use crate::{
        Error,
        timezone::{LocalNow, get_timezone, now_in_timezone},
    };

    #[test]
    fn utc_has_zero_offset() {
        let utc = get_timezone("Etc/UTC").unwrap();

        assert_eq!(
            utc.get_offset_utc(&datetime!(2025-01-15 12:00 UTC)).to_utc(),
            UtcOffset::UTC
        );
    }

    #[test]
    fn unknown_timezone_is_an_error() {
        assert_eq!(
            get_timezone("Middle/Earth"),
            Err(Error::InvalidTimezoneError("Middle/Earth".to_owned()))
        );
    }

    #[test]
    fn now_uses_named_timezone() {
        let now = now_in_timezone(Some("Etc/UTC")).unwrap();

        assert_eq!(now.instant().offset(), UtcOffset::UTC);
    }

    #[test]
    fn now_rejects_unknown_timezone() {
        assert_eq!(
            now_in_timezone(Some("Middle/Earth")),
            Err(Error::InvalidTimezoneError("Middle/Earth".to_owned()))
        );
    }

    #[test]
    fn now_without_timezone_succeeds() {
        assert!(now_in_timezone(None).is_ok());
    }

    #[test]
    fn instant_is_converted_to_timezone() {
        let auckland = get_timezone("Pacific/Auckland").unwrap();

        let now = LocalNow::new(datetime!(2025-09-30 23:00 UTC), auckland);

        assert_eq!(now.instant().offset(), offset!(+13));
        assert_eq!(now.today(), date!(2025 - 10 - 01));
    }

    #[test]
    fn midnight_follows_daylight_saving_rules() {
        // Daylight saving starts in New Zealand at 2am on 2025-09-28.
        let auckland = get_timezone("Pacific/Auckland").unwrap();
        let now = LocalNow::new(datetime!(2025-10-01 12:00 +13), auckland);

        assert_eq!(now.midnight(date!(2025 - 09 - 27)), datetime!(2025-09-27 00:00 +12));
        assert_eq!(now.midnight(date!(2025 - 09 - 28)), datetime!(2025-09-28 00:00 +12));
        assert_eq!(now.midnight(date!(2025 - 09 - 29)), datetime!(2025-09-29 00:00 +13));
    }

    #[test]
    fn fixed_offset_midnight_uses_offset_of_instant() {
        let now = LocalNow::from(datetime!(2025-10-01 12:00 +13));

        assert_eq!(now.midnight(date!(2025 - 09 - 27)), datetime!(2025-09-27 00:00 +13));
    }
}
