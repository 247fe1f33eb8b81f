//! Status and search filtering of the order list.
//!
//! Pure functions from the order collection to the shapes the status board
//! renders. Filtering never re-sorts: results keep the insertion order of
//! the underlying collection.

use crate::core::order::{Order, OrderStatus};

/// Which status bucket the board is currently showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatusFilter {
    /// Show every status
    #[default]
    All,
    /// Show a single status bucket
    Only(OrderStatus),
}

impl StatusFilter {
    fn matches(self, status: OrderStatus) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => status == wanted,
        }
    }
}

/// Filters the order list by status bucket and free-text search.
///
/// The status filter applies first, then the search term as a
/// case-insensitive substring match against the client name or the phone
/// number. An empty (or all-whitespace) term passes everything through.
/// The returned iterator is lazy and preserves insertion order.
pub fn filter_orders<'a>(
    orders: &'a [Order],
    status: StatusFilter,
    search: &str,
) -> impl Iterator<Item = &'a Order> {
    let term = search.trim().to_lowercase();
    orders
        .iter()
        .filter(move |order| status.matches(order.status))
        .filter(move |order| {
            term.is_empty()
                || order.client_name.to_lowercase().contains(&term)
                || order.phone_number.to_lowercase().contains(&term)
        })
}

/// Partitions orders into the five status buckets in display order.
///
/// Buckets with no members are omitted entirely - the board renders no
/// empty sections. Within a bucket, insertion order is preserved.
pub fn group_by_status<'a, I>(orders: I) -> Vec<(OrderStatus, Vec<&'a Order>)>
where
    I: IntoIterator<Item = &'a Order>,
{
    let mut buckets: Vec<(OrderStatus, Vec<&Order>)> = OrderStatus::ALL
        .iter()
        .map(|&status| (status, Vec::new()))
        .collect();

    for order in orders {
        if let Some((_, bucket)) = buckets.iter_mut().find(|(s, _)| *s == order.status) {
            bucket.push(order);
        }
    }

    buckets.retain(|(_, bucket)| !bucket.is_empty());
    buckets
}

/// Orders a worker payment can still be logged against: everything not yet
/// `Done`. This is the population offered by the dress picker when logging
/// work.
pub fn payable_orders(orders: &[Order]) -> impl Iterator<Item = &Order> {
    orders
        .iter()
        .filter(|order| order.status != OrderStatus::Done)
}
