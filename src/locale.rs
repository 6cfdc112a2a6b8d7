//! User-facing wording.
//!
//! Hebrew is the language the calculator was written for and stays the
//! default; English mirrors it sentence for sentence.

use crate::{CalculationError, CalendarDate, DeadlineRule, PeriodError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Rendering language for phrases, explanations and error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "he", alias = "hebrew")]
    Hebrew,
    #[serde(rename = "en", alias = "english")]
    English,
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hebrew => write!(f, "he"),
            Self::English => write!(f, "en"),
        }
    }
}

impl Locale {
    pub fn years(self, n: u32) -> String {
        match self {
            Self::Hebrew => format!("{n} {}", if n == 1 { "שנה" } else { "שנים" }),
            Self::English => format!("{n} {}", if n == 1 { "year" } else { "years" }),
        }
    }

    pub fn months(self, n: u32) -> String {
        match self {
            Self::Hebrew => format!("{n} {}", if n == 1 { "חודש" } else { "חודשים" }),
            Self::English => format!("{n} {}", if n == 1 { "month" } else { "months" }),
        }
    }

    pub fn days(self, n: u32) -> String {
        match self {
            Self::Hebrew => format!("{n} {}", if n == 1 { "יום" } else { "ימים" }),
            Self::English => format!("{n} {}", if n == 1 { "day" } else { "days" }),
        }
    }

    pub const fn zero_duration(self) -> &'static str {
        match self {
            Self::Hebrew => "0 ימים",
            Self::English => "0 days",
        }
    }

    pub const fn future_start(self) -> &'static str {
        match self {
            Self::Hebrew => "מועד ההתחלה הוא בעתיד.",
            Self::English => "The start date is in the future.",
        }
    }

    /// Joins unit phrases with a conjunction before the last one.
    ///
    /// Hebrew attaches "ו" to the last unit after a comma; English uses
    /// "A and B" for two units and "A, B, and C" for three.
    pub fn join_units(self, mut parts: Vec<String>) -> String {
        let Some(last) = parts.pop() else {
            return self.zero_duration().to_owned();
        };
        if parts.is_empty() {
            return last;
        }
        let head = parts.join(", ");
        match self {
            Self::Hebrew => format!("{head}, ו{last}"),
            Self::English if parts.len() == 1 => format!("{head} and {last}"),
            Self::English => format!("{head}, and {last}"),
        }
    }

    /// Date as shown to the user: `DD.MM.YYYY` in Hebrew, `DD/MM/YYYY` in English.
    pub fn format_date(self, date: CalendarDate) -> String {
        match self {
            Self::Hebrew => format!("{:02}.{:02}.{:04}", date.day(), date.month(), date.year()),
            Self::English => date.to_string(),
        }
    }

    /// Short form of a date used inside sentences.
    fn inline_date(self, date: CalendarDate) -> String {
        match self {
            Self::Hebrew => format!("{}.{}.{}", date.day(), date.month(), date.year()),
            Self::English => date.to_string(),
        }
    }

    pub fn rule_explanation(self, rule: DeadlineRule, cutoff: CalendarDate) -> String {
        let c = self.inline_date(cutoff);
        match (self, rule) {
            (Self::Hebrew, DeadlineRule::EighteenMonths) => format!(
                "הדד-ליין הוא שנה וחצי לאחר מועד ההתחלה, מכיוון שמועד ההתחלה חל ב-{c} או לאחריו."
            ),
            (Self::Hebrew, DeadlineRule::TwentyFourMonths) => format!(
                "הדד-ליין הוא שנתיים לאחר מועד ההתחלה, מכיוון שהוא חל לפני {c}."
            ),
            (Self::Hebrew, DeadlineRule::PinnedToCutoff) => format!(
                "הדד-ליין הוא {c}. חישוב של שנתיים היה חורג מתאריך {c}, וכבר חלפה שנה וחצי ממועד ההתחלה."
            ),
            (Self::Hebrew, DeadlineRule::EighteenMonthsBeforeOvershoot) => format!(
                "הדד-ליין הוא שנה וחצי ממועד ההתחלה. חישוב של שנתיים היה חורג מתאריך {c}, ולכן הכלל המעודכן הוא שנה וחצי."
            ),
            (Self::English, DeadlineRule::EighteenMonths) => format!(
                "The deadline is 18 months after the start date, because the start date falls on or after {c}."
            ),
            (Self::English, DeadlineRule::TwentyFourMonths) => format!(
                "The deadline is two years after the start date, because that date falls before {c}."
            ),
            (Self::English, DeadlineRule::PinnedToCutoff) => format!(
                "The deadline is {c}. A two-year period would run past {c}, and 18 months have already passed since the start date."
            ),
            (Self::English, DeadlineRule::EighteenMonthsBeforeOvershoot) => format!(
                "The deadline is 18 months after the start date. A two-year period would run past {c}, so the updated 18-month rule applies."
            ),
        }
    }

    /// Sentence appended to the explanation when exclusions moved the
    /// deadline. Starts with a space so it can be concatenated directly.
    pub fn exclusion_fragment(self, total_days: u64, periods: usize) -> String {
        match (self, periods) {
            (Self::Hebrew, 1) => format!(
                " הדד-ליין נדחה ב-{total_days} ימים נוספים בשל התקופה הבלתי נמנית שהוזנה."
            ),
            (Self::Hebrew, n) => format!(
                " הדד-ליין נדחה ב-{total_days} ימים נוספים בשל {n} התקופות הבלתי נמנות שהוזנו."
            ),
            (Self::English, 1) => format!(
                " The deadline is extended by {total_days} additional days due to the non-reckonable period entered."
            ),
            (Self::English, n) => format!(
                " The deadline is extended by {total_days} additional days due to the {n} non-reckonable periods entered."
            ),
        }
    }

    /// The sentence shown to the user for a failed calculation.
    pub fn error_message(self, error: &CalculationError) -> String {
        match (self, error) {
            (Self::Hebrew, CalculationError::InvalidStartDate(_)) => {
                "פורמט תאריך ההתחלה אינו חוקי. יש להשתמש בפורמט DD/MM/YYYY או DD/MM/YY.".to_owned()
            }
            (Self::Hebrew, CalculationError::Exclusion(PeriodError::Empty)) => {
                "יש להזין לפחות תקופה בלתי נמנית אחת, או לבטל את האפשרות.".to_owned()
            }
            (Self::Hebrew, CalculationError::Exclusion(PeriodError::InvalidBound { index, .. })) => {
                format!("יש להזין תאריכי התחלה וסוף חוקיים עבור התקופה הבלתי נמנית מס' {index}.")
            }
            (
                Self::Hebrew,
                CalculationError::Exclusion(PeriodError::EndNotAfterStart { index, .. }),
            ) => format!(
                "תאריך הסיום של התקופה הבלתי נמנית מס' {index} חייב להיות לאחר תאריך ההתחלה שלה."
            ),
            (Self::Hebrew, CalculationError::OutOfRange(_)) => {
                "התאריך המחושב חורג מטווח התאריכים הנתמך.".to_owned()
            }
            (Self::English, CalculationError::InvalidStartDate(_)) => {
                "Invalid start date. Use the format DD/MM/YYYY or DD/MM/YY.".to_owned()
            }
            (Self::English, CalculationError::Exclusion(PeriodError::Empty)) => {
                "Add at least one non-reckonable period, or turn the option off.".to_owned()
            }
            (Self::English, CalculationError::Exclusion(PeriodError::InvalidBound { index, .. })) => {
                format!("Enter valid start and end dates for non-reckonable period {index}.")
            }
            (
                Self::English,
                CalculationError::Exclusion(PeriodError::EndNotAfterStart { index, .. }),
            ) => format!(
                "The end date of non-reckonable period {index} must be after its start date."
            ),
            (Self::English, CalculationError::OutOfRange(_)) => {
                "The calculated date falls outside the supported range.".to_owned()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::date;
    use crate::{Bound, DateError};

    #[test]
    fn test_locale_serde() {
        let locale: Locale = serde_json::from_str(r#""en""#).unwrap();
        assert_eq!(locale, Locale::English);
        let locale: Locale = serde_json::from_str(r#""hebrew""#).unwrap();
        assert_eq!(locale, Locale::Hebrew);
        assert!(serde_json::from_str::<Locale>(r#""fr""#).is_err());
    }

    #[test]
    fn test_display_matches_serialized_form() {
        for locale in [Locale::Hebrew, Locale::English] {
            let json = serde_json::to_string(&locale).unwrap();
            assert_eq!(json, format!("\"{locale}\""));
        }
        assert_eq!(serde_json::to_string(&Locale::English).unwrap(), r#""en""#);
    }

    #[test]
    fn test_default_is_hebrew() {
        assert_eq!(Locale::default(), Locale::Hebrew);
        assert_eq!(Locale::default().to_string(), "he");
    }

    #[test]
    fn test_join_units() {
        let parts = |items: &[&str]| items.iter().map(|s| (*s).to_owned()).collect::<Vec<_>>();

        assert_eq!(Locale::English.join_units(parts(&[])), "0 days");
        assert_eq!(Locale::English.join_units(parts(&["A"])), "A");
        assert_eq!(Locale::English.join_units(parts(&["A", "B"])), "A and B");
        assert_eq!(Locale::English.join_units(parts(&["A", "B", "C"])), "A, B, and C");
        assert_eq!(Locale::Hebrew.join_units(parts(&["A", "B"])), "A, וB");
        assert_eq!(Locale::Hebrew.join_units(parts(&["A", "B", "C"])), "A, B, וC");
    }

    #[test]
    fn test_format_date() {
        let d = date(1, 7, 2027);
        assert_eq!(Locale::Hebrew.format_date(d), "01.07.2027");
        assert_eq!(Locale::English.format_date(d), "01/07/2027");
    }

    #[test]
    fn test_rule_explanation_mentions_cutoff() {
        let cutoff = date(1, 1, 2026);
        let text = Locale::Hebrew.rule_explanation(DeadlineRule::EighteenMonths, cutoff);
        assert!(text.contains("1.1.2026"), "{text}");

        let text = Locale::English.rule_explanation(DeadlineRule::PinnedToCutoff, cutoff);
        assert!(text.starts_with("The deadline is 01/01/2026."), "{text}");
    }

    #[test]
    fn test_exclusion_fragment_wording() {
        assert_eq!(
            Locale::English.exclusion_fragment(7, 1),
            " The deadline is extended by 7 additional days due to the non-reckonable period entered."
        );
        assert_eq!(
            Locale::English.exclusion_fragment(12, 3),
            " The deadline is extended by 12 additional days due to the 3 non-reckonable periods entered."
        );
        assert!(Locale::Hebrew.exclusion_fragment(7, 1).contains("התקופה הבלתי נמנית שהוזנה"));
        assert!(Locale::Hebrew.exclusion_fragment(9, 2).contains("2 התקופות"));
    }

    #[test]
    fn test_error_messages_cite_index() {
        let error = CalculationError::Exclusion(PeriodError::EndNotAfterStart {
            index: 2,
            start: date(10, 1, 2024),
            end: date(10, 1, 2024),
        });
        assert_eq!(
            Locale::English.error_message(&error),
            "The end date of non-reckonable period 2 must be after its start date."
        );
        assert!(Locale::Hebrew.error_message(&error).contains("מס' 2"));

        let error = CalculationError::Exclusion(PeriodError::InvalidBound {
            index: 3,
            bound: Bound::End,
            source: DateError::EmptyInput,
        });
        assert_eq!(
            Locale::English.error_message(&error),
            "Enter valid start and end dates for non-reckonable period 3."
        );
    }
}
