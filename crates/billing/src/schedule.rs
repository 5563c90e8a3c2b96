//! Due-date resolution and aging.
//!
//! All of this is relative to an explicit `today`/date argument; nothing
//! here reads a clock, so every result is reproducible in tests and safe to
//! recompute on every read. `days_to_due` is a snapshot, not a stable value.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// Upper bound of the "due soon" window, in days from today.
pub const DUE_SOON_WINDOW_DAYS: i64 = 5;

/// The calendar date a bill falls due: bill date plus the credit period.
///
/// A 0-day term means the bill is due the day it is raised.
pub fn resolve_due_date(bill_date: NaiveDate, term_days: u32) -> NaiveDate {
    bill_date + Days::new(u64::from(term_days))
}

/// Signed whole-day distance from `today` to `due_date`.
///
/// Positive: due in the future. Negative: overdue by that many days.
/// Zero: due today. A future bill date (data-entry anomaly) simply yields a
/// larger positive number; chronological sanity is a form-layer concern.
pub fn days_to_due(due_date: NaiveDate, today: NaiveDate) -> i64 {
    (due_date - today).num_days()
}

/// Settlement status of a bill relative to "today".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BillStatus {
    Paid,
    Overdue,
    DueSoon,
    Pending,
}

impl BillStatus {
    /// Classify a bill. Payment always wins over aging: a paid bill is
    /// `Paid` no matter how far past due it was.
    pub fn classify(payment_received: bool, days_to_due: i64) -> Self {
        if payment_received {
            Self::Paid
        } else if days_to_due < 0 {
            Self::Overdue
        } else if days_to_due <= DUE_SOON_WINDOW_DAYS {
            Self::DueSoon
        } else {
            Self::Pending
        }
    }
}

impl core::fmt::Display for BillStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let s = match self {
            BillStatus::Paid => "paid",
            BillStatus::Overdue => "overdue",
            BillStatus::DueSoon => "due-soon",
            BillStatus::Pending => "pending",
        };
        f.write_str(s)
    }
}
