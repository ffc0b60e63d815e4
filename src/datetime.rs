use crate::domain::DateTimeParts;
use crate::provider::EphemerisProvider;

const SECONDS_PER_DAY: f64 = 86400.0;

/// Calendar conversions, delegated to the provider's calendar routines.
pub struct JulianDayCalculator<'a, P: EphemerisProvider + ?Sized> {
    provider: &'a P,
}

impl<'a, P: EphemerisProvider + ?Sized> JulianDayCalculator<'a, P> {
    pub fn new(provider: &'a P) -> Self {
        JulianDayCalculator { provider }
    }

    /// Julian day for UT. The date is not validated here.
    pub fn jd_ut(&self, parts: &DateTimeParts) -> f64 {
        self.provider.julday(
            parts.year,
            parts.month,
            parts.day,
            parts.ut_hours(),
            parts.gregorian,
        )
    }

    /// A date is valid when converting it to a Julian day and back yields the
    /// same year, month and day. 1953-02-29 comes back as 1953-03-01.
    pub fn is_valid_date(&self, year: i32, month: i32, day: i32, gregorian: bool) -> bool {
        let jd = self.provider.julday(year, month, day, 0.0, gregorian);
        let date = self.provider.revjul(jd, gregorian);
        date.year == year && date.month == month && date.day == day
    }

    /// `YYYY/MM/DD HH:MM:SS`, rounded to the nearest second.
    pub fn date_time_text(&self, jd: f64, gregorian: bool) -> String {
        let date = self
            .provider
            .revjul(jd + 0.5 / SECONDS_PER_DAY, gregorian);
        let seconds = (date.hour * 3600.0).floor() as i64;
        format!(
            "{:04}/{:02}/{:02} {:02}:{:02}:{:02}",
            date.year,
            date.month,
            date.day,
            seconds / 3600,
            (seconds % 3600) / 60,
            seconds % 60
        )
    }
}
