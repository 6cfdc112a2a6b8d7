use serde::{Deserialize, Serialize};

use crate::{CalendarDate, DateError, Locale, prelude::*};

/// One non-reckonable period exactly as the user typed it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RawPeriod {
    pub start: String,
    pub end:   String,
}

impl RawPeriod {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end:   end.into(),
        }
    }
}

/// A validated non-reckonable period. Both endpoints count, and the end is
/// strictly after the start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{start} - {end}")]
pub struct ExclusionPeriod {
    start: CalendarDate,
    end:   CalendarDate,
}

/// Which endpoint of a period failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Bound {
    #[display(fmt = "start")]
    Start,
    #[display(fmt = "end")]
    End,
}

/// Error type for exclusion period validation. Indices are 1-based, in the
/// order the periods were supplied.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PeriodError {
    /// Exclusions are enabled but the list is empty.
    #[error("At least one exclusion period is required when exclusions are enabled")]
    Empty,

    /// A start or end date did not parse.
    #[error("Exclusion period {index}: invalid {bound} date: {source}")]
    InvalidBound {
        index:  usize,
        bound:  Bound,
        source: DateError,
    },

    /// The end date is on or before the start date.
    #[error("Exclusion period {index}: end ({end}) must be after start ({start})")]
    EndNotAfterStart {
        index: usize,
        start: CalendarDate,
        end:   CalendarDate,
    },
}

impl PeriodError {
    /// The 1-based position of the offending period, if the error concerns one.
    pub const fn index(&self) -> Option<usize> {
        match self {
            Self::Empty => None,
            Self::InvalidBound { index, .. } | Self::EndNotAfterStart { index, .. } => Some(*index),
        }
    }
}

impl ExclusionPeriod {
    /// Creates a period, or `None` if `end` is not strictly after `start`.
    pub fn new(start: CalendarDate, end: CalendarDate) -> Option<Self> {
        (end > start).then_some(Self { start, end })
    }

    /// Parses and validates the period at 1-based position `index`.
    ///
    /// # Errors
    /// Returns `PeriodError::InvalidBound` if either date fails to parse and
    /// `PeriodError::EndNotAfterStart` if the end does not follow the start.
    pub fn parse(index: usize, raw: &RawPeriod) -> Result<Self, PeriodError> {
        let start = raw
            .start
            .parse::<CalendarDate>()
            .map_err(|source| PeriodError::InvalidBound {
                index,
                bound: Bound::Start,
                source,
            })?;
        let end = raw
            .end
            .parse::<CalendarDate>()
            .map_err(|source| PeriodError::InvalidBound {
                index,
                bound: Bound::End,
                source,
            })?;

        Self::new(start, end).ok_or(PeriodError::EndNotAfterStart { index, start, end })
    }

    /// Returns the start date of the period
    pub const fn start(&self) -> CalendarDate {
        self.start
    }

    /// Returns the end date of the period
    pub const fn end(&self) -> CalendarDate {
        self.end
    }

    /// Length in days, counting both endpoints.
    #[allow(clippy::cast_sign_loss)]
    pub fn days(&self) -> u64 {
        // end > start, so the difference is positive
        self.start.days_until(self.end) as u64 + 1
    }
}

/// Total extension contributed by a set of exclusion periods.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExclusionSummary {
    pub total_days:   u64,
    pub period_count: usize,
}

impl ExclusionSummary {
    /// Explanation sentence for the extension, empty when nothing was added.
    pub fn fragment(&self, locale: Locale) -> String {
        if self.total_days == 0 {
            return String::new();
        }
        locale.exclusion_fragment(self.total_days, self.period_count)
    }
}

/// Validates the periods left to right and sums their inclusive lengths.
///
/// Overlapping periods are counted in full each time. The first invalid period
/// stops the aggregation.
///
/// # Errors
/// Returns `PeriodError::Empty` for an empty list, otherwise the error of the
/// first invalid period.
pub fn aggregate<'a, I>(periods: I) -> Result<ExclusionSummary, PeriodError>
where
    I: IntoIterator<Item = &'a RawPeriod>,
{
    let mut summary = ExclusionSummary::default();

    for (position, raw) in periods.into_iter().enumerate() {
        let period = ExclusionPeriod::parse(position + 1, raw)?;
        tracing::trace!(index = position + 1, %period, days = period.days(), "exclusion period");
        summary.total_days += period.days();
        summary.period_count += 1;
    }

    if summary.period_count == 0 {
        return Err(PeriodError::Empty);
    }
    Ok(summary)
}
