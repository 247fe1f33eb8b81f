//! Order domain types - a client garment order with measurements, itemized
//! pricing and scheduling dates.
//!
//! These are plain serde structs, not database entities: the whole order
//! book is persisted as one JSON snapshot. Field names serialize in
//! camelCase to match the persisted layout of the original system.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The fixed pipeline stages an order moves through, in display order.
///
/// Transitions are unconstrained - any status is reachable from any other
/// by direct edit; there is no enforced state machine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    /// Fabric is being cut
    #[default]
    Cutting,
    /// Garment is being sewn
    Sewing,
    /// Embroidery work
    Embroidery,
    /// Gem application
    Gems,
    /// Finished and ready for pickup
    Done,
}

impl OrderStatus {
    /// All statuses in the fixed display order used by the status board.
    pub const ALL: [Self; 5] = [
        Self::Cutting,
        Self::Sewing,
        Self::Embroidery,
        Self::Gems,
        Self::Done,
    ];

    /// Stable display name, identical to the serialized form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cutting => "Cutting",
            Self::Sewing => "Sewing",
            Self::Embroidery => "Embroidery",
            Self::Gems => "Gems",
            Self::Done => "Done",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Client body measurements in centimeters. Every field is optional; a
/// missing measurement is simply not shown on the order card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Measurements {
    /// Bust circumference
    pub bust: Option<f64>,
    /// Waist circumference
    pub waist: Option<f64>,
    /// Full height
    pub height: Option<f64>,
}

/// Itemized price lines for one order, each defaulting to zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Pricing {
    /// Embroidery work
    pub embroidery: f64,
    /// Sewing labor
    pub sewing: f64,
    /// Gem application
    pub gems: f64,
    /// Fabric cost
    pub fabric: f64,
    /// Anything not covered above
    pub extra: f64,
}

impl Pricing {
    /// Sum of all line items.
    ///
    /// This is the convenience the original used to pre-fill the total
    /// field in the order form. The stored [`Order::total`] is independent
    /// and user-editable; nothing recomputes or validates it against this.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.embroidery + self.sewing + self.gems + self.fabric + self.extra
    }
}

/// One client garment order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Unique identifier, assigned at creation, never reused
    pub id: Uuid,
    /// Client's name
    pub client_name: String,
    /// Client's phone number, free text
    pub phone_number: String,
    /// Body measurements in centimeters
    pub measurements: Measurements,
    /// Itemized price lines
    pub pricing: Pricing,
    /// Amount the client already paid
    pub prepayment: f64,
    /// Total price. Stored independently of [`Pricing`]; the form keeps
    /// them in sync but the store accepts any value.
    pub total: f64,
    /// Date the order was recorded; set once, immutable
    pub created_date: NaiveDate,
    /// Scheduled production day; computed once at creation, never
    /// recomputed on edit
    pub work_on_date: NaiveDate,
    /// Date the client expects the garment
    pub due_date: NaiveDate,
    /// Current pipeline stage
    pub status: OrderStatus,
}

impl Order {
    /// Amount still owed by the client.
    #[must_use]
    pub fn balance_due(&self) -> f64 {
        self.total - self.prepayment
    }
}

/// The mutable fields of an order, as submitted by the host's order form.
///
/// Used for both creation and edits; `id`, `created_date` and
/// `work_on_date` are managed by the store and never part of a draft.
#[derive(Clone, Debug, Default)]
pub struct OrderDraft {
    /// Client's name
    pub client_name: String,
    /// Client's phone number
    pub phone_number: String,
    /// Body measurements
    pub measurements: Measurements,
    /// Itemized price lines
    pub pricing: Pricing,
    /// Amount already paid
    pub prepayment: f64,
    /// Total price as entered
    pub total: f64,
    /// Requested completion date
    pub due_date: NaiveDate,
    /// Pipeline stage
    pub status: OrderStatus,
}
