use serde::{Deserialize, Serialize};

use crate::{CalendarDate, DateError, LONG_TERM_MONTHS, Locale, SHORT_TERM_MONTHS};

/// Which branch of the duration rule produced a base deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeadlineRule {
    /// Start on or after the cutoff: 18 months.
    EighteenMonths,
    /// Start before the cutoff and the 24-month mark also before it: 24 months.
    TwentyFourMonths,
    /// The 24-month mark would overshoot the cutoff and 18 months have
    /// already passed: the cutoff itself.
    PinnedToCutoff,
    /// The 24-month mark would overshoot the cutoff but 18 months have not
    /// passed yet: 18 months.
    EighteenMonthsBeforeOvershoot,
}

impl DeadlineRule {
    pub fn explanation(self, locale: Locale, cutoff: CalendarDate) -> String {
        locale.rule_explanation(self, cutoff)
    }
}

/// Deadline before any exclusion periods are added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BaseDeadline {
    pub deadline: CalendarDate,
    pub rule:     DeadlineRule,
}

/// Applies the cutoff-dependent duration rule. The first matching branch wins:
///
/// 1. `start >= cutoff`: start + 18 months.
/// 2. start + 24 months is before the cutoff: start + 24 months.
/// 3. `today` is on or after start + 18 months: the cutoff.
/// 4. otherwise: start + 18 months.
///
/// # Errors
/// Returns `DateError::OutOfRange` if month arithmetic leaves the supported years.
pub fn compute_base_deadline(
    start: CalendarDate,
    today: CalendarDate,
    cutoff: CalendarDate,
) -> Result<BaseDeadline, DateError> {
    if start >= cutoff {
        return Ok(BaseDeadline {
            deadline: start.add_months(SHORT_TERM_MONTHS)?,
            rule:     DeadlineRule::EighteenMonths,
        });
    }

    let two_year = start.add_months(LONG_TERM_MONTHS)?;
    if two_year < cutoff {
        return Ok(BaseDeadline {
            deadline: two_year,
            rule:     DeadlineRule::TwentyFourMonths,
        });
    }

    let eighteen_month = start.add_months(SHORT_TERM_MONTHS)?;
    if today >= eighteen_month {
        Ok(BaseDeadline {
            deadline: cutoff,
            rule:     DeadlineRule::PinnedToCutoff,
        })
    } else {
        Ok(BaseDeadline {
            deadline: eighteen_month,
            rule:     DeadlineRule::EighteenMonthsBeforeOvershoot,
        })
    }
}
