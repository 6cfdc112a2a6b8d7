use crate::{CalendarDate, Locale, types};

/// Calendar-unit distance between two dates, as a person would count it:
/// whole years, then whole months, then remaining days.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DateDiff {
    pub years: u32,
    pub months: u32,
    pub days: u32,
}

impl DateDiff {
    /// Computes the difference from `start` to `end`.
    ///
    /// A negative day count borrows the length of the month preceding `end`'s
    /// month; a negative month count borrows twelve months from the years.
    /// Returns the zero difference when `start` is after `end`.
    pub fn between(start: CalendarDate, end: CalendarDate) -> Self {
        if start > end {
            return Self::default();
        }

        let mut years = i32::from(end.year()) - i32::from(start.year());
        let mut months = i32::from(end.month()) - i32::from(start.month());
        let mut days = i32::from(end.day()) - i32::from(start.day());

        if days < 0 {
            months -= 1;
            let (prev_year, prev_month) = types::previous_month(end.year(), end.month());
            days += i32::from(types::days_in_month(prev_year, prev_month));
        }

        if months < 0 {
            years -= 1;
            months += 12;
        }

        // Borrowing a short month can still leave days negative (31 Jan to 1 Mar
        // in a common year); such a unit is not shown, so it counts as zero.
        Self {
            years: u32::try_from(years).unwrap_or_default(),
            months: u32::try_from(months).unwrap_or_default(),
            days: u32::try_from(days).unwrap_or_default(),
        }
    }

    pub const fn is_zero(&self) -> bool {
        self.years == 0 && self.months == 0 && self.days == 0
    }

    /// Renders the non-zero units, largest first, in the given locale.
    pub fn phrase(&self, locale: Locale) -> String {
        let parts: Vec<String> = [
            (self.years, locale.years(self.years)),
            (self.months, locale.months(self.months)),
            (self.days, locale.days(self.days)),
        ]
        .into_iter()
        .filter(|(value, _)| *value > 0)
        .map(|(_, text)| text)
        .collect();

        if parts.is_empty() {
            return locale.zero_duration().to_owned();
        }
        locale.join_units(parts)
    }
}
