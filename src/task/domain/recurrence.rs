//! Recurrence schedules and deadline arithmetic.

use super::TaskDomainError;
use chrono::{Days, Months, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};

/// Calendar unit between two occurrences of a recurring task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RecurrenceUnit {
    /// The task does not repeat.
    #[default]
    None,
    /// Repeats every `interval` days.
    Day,
    /// Repeats every `interval` weeks.
    Week,
    /// Repeats every `interval` calendar months.
    Month,
    /// Repeats every `interval` calendar years.
    Year,
}

/// Recurrence descriptor attached to every task.
///
/// The interval is always at least one; values of zero or below, whether
/// passed to a constructor or read from storage, are coerced to one. Stored
/// descriptors are normalised as they are decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "StoredRecurrence")]
pub struct Recurrence {
    is_recurring: bool,
    unit: RecurrenceUnit,
    interval: u32,
}

/// Wire shape of a recurrence descriptor before normalisation.
#[derive(Deserialize)]
struct StoredRecurrence {
    #[serde(default)]
    is_recurring: bool,
    #[serde(default)]
    unit: RecurrenceUnit,
    #[serde(default = "default_interval", deserialize_with = "deserialize_interval")]
    interval: u32,
}

impl From<StoredRecurrence> for Recurrence {
    fn from(stored: StoredRecurrence) -> Self {
        Self {
            is_recurring: stored.is_recurring,
            unit: stored.unit,
            interval: stored.interval,
        }
        .normalised()
    }
}

impl Recurrence {
    /// A descriptor for a task that does not repeat.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            is_recurring: false,
            unit: RecurrenceUnit::None,
            interval: 1,
        }
    }

    /// A descriptor repeating every `interval` units.
    ///
    /// Passing [`RecurrenceUnit::None`] yields a non-recurring descriptor.
    #[must_use]
    pub fn every(interval: i64, unit: RecurrenceUnit) -> Self {
        Self::new(true, unit, interval)
    }

    /// Builds a descriptor from raw form values and normalises it.
    #[must_use]
    pub fn new(is_recurring: bool, unit: RecurrenceUnit, interval: i64) -> Self {
        Self {
            is_recurring,
            unit,
            interval: coerce_interval(interval),
        }
        .normalised()
    }

    /// Returns whether the task is flagged as recurring.
    #[must_use]
    pub const fn is_recurring(&self) -> bool {
        self.is_recurring
    }

    /// Returns the recurrence unit.
    #[must_use]
    pub const fn unit(&self) -> RecurrenceUnit {
        self.unit
    }

    /// Returns the number of units between occurrences.
    #[must_use]
    pub const fn interval(&self) -> u32 {
        self.interval
    }

    /// Returns whether completing the task should schedule a new occurrence.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.is_recurring && self.unit != RecurrenceUnit::None
    }

    /// Returns the descriptor with the consistency invariant applied: a
    /// descriptor that is not recurring, or has no unit, is neither.
    #[must_use]
    pub fn normalised(self) -> Self {
        if self.is_active() {
            return self;
        }
        Self {
            is_recurring: false,
            unit: RecurrenceUnit::None,
            interval: self.interval,
        }
    }

    /// Computes the occurrence following `date`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::DeadlineOutOfRange`] when the result would
    /// not be representable.
    pub fn next_after(&self, date: NaiveDate) -> Result<NaiveDate, TaskDomainError> {
        advance(date, self.unit, self.interval)
    }
}

impl Default for Recurrence {
    fn default() -> Self {
        Self::none()
    }
}

/// Advances `date` by `interval` recurrence units.
///
/// Month and year steps follow calendar rules and clamp to the last valid day
/// (31 January plus one month is 28 or 29 February). [`RecurrenceUnit::None`]
/// advances a single day. An interval of zero is treated as one.
///
/// # Errors
///
/// Returns [`TaskDomainError::DeadlineOutOfRange`] when the result would not
/// be representable.
pub fn advance(
    date: NaiveDate,
    unit: RecurrenceUnit,
    interval: u32,
) -> Result<NaiveDate, TaskDomainError> {
    let steps = interval.max(1);
    let next = match unit {
        RecurrenceUnit::Day => date.checked_add_days(Days::new(u64::from(steps))),
        RecurrenceUnit::Week => date.checked_add_days(Days::new(u64::from(steps) * 7)),
        RecurrenceUnit::Month => date.checked_add_months(Months::new(steps)),
        RecurrenceUnit::Year => steps
            .checked_mul(12)
            .and_then(|months| date.checked_add_months(Months::new(months))),
        RecurrenceUnit::None => date.checked_add_days(Days::new(1)),
    };
    next.ok_or(TaskDomainError::DeadlineOutOfRange(date))
}

const fn default_interval() -> u32 {
    1
}

fn coerce_interval(raw: i64) -> u32 {
    u32::try_from(raw.max(1)).unwrap_or(u32::MAX)
}

fn deserialize_interval<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = i64::deserialize(deserializer)?;
    Ok(coerce_interval(raw))
}
