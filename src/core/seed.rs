//! Sample data for first runs.
//!
//! A fresh installation starts with an empty snapshot store; seeding a
//! handful of orders spread around today gives the status board and the
//! calendar something to show immediately. The store only adopts these
//! when its order collection is empty (see
//! [`crate::core::store::OrderStore::seed_if_empty`]).

use crate::core::order::{Measurements, Order, OrderStatus, Pricing};
use crate::core::schedule::compute_work_on_date;
use chrono::{Datelike, Days, NaiveDate, Weekday};
use uuid::Uuid;

/// Offsets a date by whole days relative to `today`, nudging dates on or
/// after today off the workshop's closed day. Past dates are left alone -
/// history is history.
fn offset_date(today: NaiveDate, offset: i64, skip: Weekday) -> NaiveDate {
    let mut date = if offset >= 0 {
        today + Days::new(offset.unsigned_abs())
    } else {
        today - Days::new(offset.unsigned_abs())
    };
    if offset >= 0 && date.weekday() == skip {
        date = date + Days::new(1);
    }
    date
}

#[allow(clippy::too_many_arguments)]
fn sample(
    name: &str,
    phone: &str,
    measurements: (f64, f64, f64),
    pricing: (f64, f64, f64, f64, f64),
    prepayment: f64,
    created_offset: i64,
    due_offset: i64,
    status: OrderStatus,
    today: NaiveDate,
    skip: Weekday,
) -> Order {
    let (bust, waist, height) = measurements;
    let (embroidery, sewing, gems, fabric, extra) = pricing;
    let pricing = Pricing {
        embroidery,
        sewing,
        gems,
        fabric,
        extra,
    };
    let created_date = offset_date(today, created_offset, skip);

    Order {
        id: Uuid::new_v4(),
        client_name: name.to_string(),
        phone_number: phone.to_string(),
        measurements: Measurements {
            bust: Some(bust),
            waist: Some(waist),
            height: Some(height),
        },
        pricing,
        prepayment,
        total: pricing.total(),
        created_date,
        work_on_date: compute_work_on_date(created_date, skip),
        due_date: offset_date(today, due_offset, skip),
        status,
    }
}

/// Builds the eight demonstration orders, spread from five days ago to two
/// days ahead so every status bucket and several calendar days are
/// populated.
#[must_use]
pub fn sample_orders(today: NaiveDate, skip: Weekday) -> Vec<Order> {
    vec![
        sample(
            "Sarah Johnson",
            "555-0101",
            (90.0, 70.0, 165.0),
            (50.0, 80.0, 30.0, 40.0, 0.0),
            100.0,
            -5,
            2,
            OrderStatus::Cutting,
            today,
            skip,
        ),
        sample(
            "Maria Garcia",
            "555-0102",
            (88.0, 68.0, 162.0),
            (60.0, 90.0, 40.0, 50.0, 20.0),
            150.0,
            -3,
            5,
            OrderStatus::Sewing,
            today,
            skip,
        ),
        sample(
            "Lisa Chen",
            "555-0103",
            (92.0, 72.0, 168.0),
            (70.0, 85.0, 50.0, 45.0, 10.0),
            120.0,
            -2,
            3,
            OrderStatus::Embroidery,
            today,
            skip,
        ),
        sample(
            "Emma Wilson",
            "555-0104",
            (85.0, 65.0, 160.0),
            (55.0, 75.0, 35.0, 40.0, 15.0),
            110.0,
            -1,
            4,
            OrderStatus::Gems,
            today,
            skip,
        ),
        sample(
            "Jessica Brown",
            "555-0105",
            (91.0, 71.0, 167.0),
            (65.0, 80.0, 45.0, 50.0, 5.0),
            140.0,
            -4,
            1,
            OrderStatus::Done,
            today,
            skip,
        ),
        sample(
            "Amanda Martinez",
            "555-0106",
            (89.0, 69.0, 164.0),
            (50.0, 85.0, 40.0, 45.0, 0.0),
            130.0,
            0,
            6,
            OrderStatus::Cutting,
            today,
            skip,
        ),
        sample(
            "Rachel White",
            "555-0107",
            (87.0, 67.0, 163.0),
            (60.0, 80.0, 50.0, 50.0, 10.0),
            150.0,
            1,
            7,
            OrderStatus::Sewing,
            today,
            skip,
        ),
        sample(
            "Nicole Taylor",
            "555-0108",
            (93.0, 73.0, 169.0),
            (70.0, 90.0, 55.0, 55.0, 20.0),
            160.0,
            2,
            8,
            OrderStatus::Embroidery,
            today,
            skip,
        ),
    ]
}
