use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    BaseDeadline, CUTOFF, CalendarDate, Config, DateDiff, DateError, DeadlineRule,
    ExclusionSummary, Locale, PeriodError, RawPeriod, aggregate, compute_base_deadline,
};

/// Everything needed for one calculation, as gathered from the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeadlineRequest {
    /// Start date as typed
    pub start: String,
    /// Whether non-reckonable periods should be applied
    #[serde(default)]
    pub exclusions_enabled: bool,
    /// Periods in display order; ignored unless `exclusions_enabled`
    #[serde(default)]
    pub exclusion_periods: Vec<RawPeriod>,
}

impl DeadlineRequest {
    /// A request with no exclusion periods.
    pub fn new(start: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            ..Self::default()
        }
    }

    /// Enables exclusions and appends one period.
    #[must_use]
    pub fn with_period(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.exclusions_enabled = true;
        self.exclusion_periods.push(RawPeriod::new(start, end));
        self
    }
}

/// Outcome of a successful calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeadlineResult {
    /// Base deadline shifted by the exclusion days
    pub deadline: CalendarDate,
    pub base_deadline: CalendarDate,
    pub rule: DeadlineRule,
    /// Present only when exclusions were enabled
    pub exclusion: Option<ExclusionSummary>,
    pub explanation: String,
    /// Elapsed time from the start date to today
    pub days_passed: String,
}

/// The strings a front end displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultView {
    pub deadline: String,
    pub explanation: String,
    #[serde(rename = "daysPassed")]
    pub days_passed: String,
}

impl DeadlineResult {
    pub fn view(&self, locale: Locale) -> ResultView {
        ResultView {
            deadline: locale.format_date(self.deadline),
            explanation: self.explanation.clone(),
            days_passed: self.days_passed.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalculationError {
    #[error("Invalid start date: {0}")]
    InvalidStartDate(#[source] DateError),

    #[error(transparent)]
    Exclusion(#[from] PeriodError),

    #[error("Deadline arithmetic failed: {0}")]
    OutOfRange(#[source] DateError),
}

impl CalculationError {
    /// The message to show the user.
    pub fn localized(&self, locale: Locale) -> String {
        locale.error_message(self)
    }
}

/// Turns a [`DeadlineRequest`] into a [`DeadlineResult`].
///
/// Holds only immutable settings; every call is independent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeadlineCalculator {
    locale: Locale,
    cutoff: CalendarDate,
}

impl Default for DeadlineCalculator {
    fn default() -> Self {
        Self::new(Locale::default())
    }
}

impl DeadlineCalculator {
    pub const fn new(locale: Locale) -> Self {
        Self {
            locale,
            cutoff: CUTOFF,
        }
    }

    pub const fn from_config(config: &Config) -> Self {
        Self::new(config.locale)
    }

    pub const fn locale(&self) -> Locale {
        self.locale
    }

    /// Runs the calculation against the local date, captured once.
    ///
    /// # Errors
    /// See [`DeadlineCalculator::calculate`].
    pub fn calculate_today(
        &self,
        request: &DeadlineRequest,
    ) -> Result<DeadlineResult, CalculationError> {
        let today = CalendarDate::today().map_err(CalculationError::OutOfRange)?;
        self.calculate(request, today)
    }

    /// Runs the calculation with an explicit `today`.
    ///
    /// Stops at the first failure: an unparseable start date, then the first
    /// invalid exclusion period.
    ///
    /// # Errors
    /// Returns `CalculationError::InvalidStartDate`, `CalculationError::Exclusion`,
    /// or `CalculationError::OutOfRange` if the deadline leaves the supported years.
    pub fn calculate(
        &self,
        request: &DeadlineRequest,
        today: CalendarDate,
    ) -> Result<DeadlineResult, CalculationError> {
        let start: CalendarDate = request
            .start
            .parse()
            .map_err(CalculationError::InvalidStartDate)?;

        let exclusion = if request.exclusions_enabled {
            Some(aggregate(&request.exclusion_periods)?)
        } else {
            None
        };

        let BaseDeadline { deadline: base_deadline, rule } =
            compute_base_deadline(start, today, self.cutoff).map_err(CalculationError::OutOfRange)?;
        debug!(%start, %today, %base_deadline, ?rule, "base deadline");

        let extra_days = exclusion.map_or(0, |summary| summary.total_days);
        let deadline = base_deadline
            .add_days(extra_days)
            .map_err(CalculationError::OutOfRange)?;

        let mut explanation = rule.explanation(self.locale, self.cutoff);
        if let Some(summary) = &exclusion {
            explanation.push_str(&summary.fragment(self.locale));
        }

        let days_passed = if start > today {
            self.locale.future_start().to_owned()
        } else {
            DateDiff::between(start, today).phrase(self.locale)
        };

        debug!(%deadline, extra_days, "deadline calculated");

        Ok(DeadlineResult {
            deadline,
            base_deadline,
            rule,
            exclusion,
            explanation,
            days_passed,
        })
    }
}
