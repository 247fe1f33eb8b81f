//! Worker payment domain types - compensation owed or paid to a worker for
//! a specific dress order.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One payment record tied to an order.
///
/// `dress_id` is a weak reference: it names an [`crate::core::order::Order`]
/// but carries no ownership, and deleting the order leaves it dangling.
/// Consumers resolve it at render time and show a placeholder when the
/// order is gone.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkerPayment {
    /// Unique identifier
    pub id: Uuid,
    /// Id of the order this payment is for; may dangle after a delete
    pub dress_id: Uuid,
    /// Worker's name, free text
    pub worker_name: String,
    /// Amount owed or paid
    pub payment_amount: f64,
    /// Date the payment was logged; set at creation
    pub logged_date: NaiveDate,
    /// Whether the worker has been paid
    pub is_paid: bool,
    /// Date the payment was made; `Some` exactly when `is_paid`
    pub date_paid: Option<NaiveDate>,
}

/// The host-supplied fields of a new worker payment.
///
/// `logged_date` and `date_paid` are stamped by the store from its clock:
/// a payment created with `is_paid` set gets today as its paid date, which
/// keeps the `Some` iff paid invariant in one place.
#[derive(Clone, Debug)]
pub struct PaymentDraft {
    /// Order the payment is for
    pub dress_id: Uuid,
    /// Worker's name
    pub worker_name: String,
    /// Amount owed or paid
    pub payment_amount: f64,
    /// Whether the payment was already made when logged
    pub is_paid: bool,
}
