//! Work-on date scheduling.
//!
//! An order gets exactly one production day, assigned when the order is
//! created and never recomputed: the day after creation, pushed one more
//! day when that lands on the workshop's weekly off day. There is no
//! capacity bookkeeping here - the calendar shows an advisory slot count,
//! but scheduling never blocks on a full day.

use chrono::{Datelike, Days, NaiveDate, Weekday};

/// Computes the work-on date for an order created on `created`.
///
/// Returns the calendar day immediately after `created`; if that day falls
/// on `skip`, advances one more day. A single skip check suffices - the off
/// day recurs every 7 days, so the day after it can never be the off day
/// again.
#[must_use]
pub fn compute_work_on_date(created: NaiveDate, skip: Weekday) -> NaiveDate {
    let mut work_date = created + Days::new(1);
    if work_date.weekday() == skip {
        work_date = work_date + Days::new(1);
    }
    work_date
}
