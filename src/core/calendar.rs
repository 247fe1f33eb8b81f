//! Monthly and daily calendar view models.
//!
//! Pure functions from the order collection to the data the calendar tab
//! renders: which orders are worked on or due each day, which days are the
//! workshop's off day, and the advisory slot count. Grid HTML assembly and
//! styling stay with the presentation layer; this module only computes the
//! per-day contents.

use crate::config::workshop::WorkshopConfig;
use crate::core::order::Order;
use chrono::{Datelike, Days, NaiveDate};

/// One calendar day's schedule.
#[derive(Clone, Debug)]
pub struct DaySchedule<'a> {
    /// The calendar date
    pub date: NaiveDate,
    /// Whether this is the workshop's weekly off day (rendered "OFF",
    /// no slot count shown)
    pub is_off: bool,
    /// Orders scheduled to be worked on this day, in insertion order
    pub work_orders: Vec<&'a Order>,
    /// Orders due to the client this day, in insertion order
    pub due_orders: Vec<&'a Order>,
    /// Whether the work count has reached the configured daily capacity.
    /// Display-only: the scheduler keeps assigning work past it.
    pub at_capacity: bool,
}

impl DaySchedule<'_> {
    /// `true` when nothing is scheduled or due.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.work_orders.is_empty() && self.due_orders.is_empty()
    }
}

/// A whole month of day schedules, ready for grid assembly.
#[derive(Clone, Debug)]
pub struct MonthSchedule<'a> {
    /// Calendar year
    pub year: i32,
    /// Calendar month, 1-12
    pub month: u32,
    /// Number of blank leading cells before day 1 in a Sunday-first grid
    pub leading_blanks: u32,
    /// One entry per day of the month, in order
    pub days: Vec<DaySchedule<'a>>,
}

/// Computes the schedule for a single day.
pub fn day_schedule<'a>(
    orders: &'a [Order],
    date: NaiveDate,
    config: &WorkshopConfig,
) -> DaySchedule<'a> {
    let work_orders: Vec<&Order> = orders.iter().filter(|o| o.work_on_date == date).collect();
    let due_orders: Vec<&Order> = orders.iter().filter(|o| o.due_date == date).collect();
    let at_capacity = work_orders.len() >= config.daily_capacity;

    DaySchedule {
        date,
        is_off: date.weekday() == config.skip_day,
        work_orders,
        due_orders,
        at_capacity,
    }
}

/// Computes the schedule for every day of the given month.
///
/// Months outside the chrono-representable range yield an empty `days`
/// list, which the grid renders as a blank month.
pub fn month_schedule<'a>(
    orders: &'a [Order],
    year: i32,
    month: u32,
    config: &WorkshopConfig,
) -> MonthSchedule<'a> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return MonthSchedule {
            year,
            month,
            leading_blanks: 0,
            days: Vec::new(),
        };
    };

    let days = (0..31u64)
        .map_while(|offset| {
            let date = first + Days::new(offset);
            (date.month() == month).then(|| day_schedule(orders, date, config))
        })
        .collect();

    MonthSchedule {
        year,
        month,
        leading_blanks: first.weekday().num_days_from_sunday(),
        days,
    }
}
