use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Cents, CustomerId};

pub type EntryId = Uuid;

/// Direction of a ledger movement. Debt raises the customer's balance,
/// payment lowers it; the sign is never carried by the amount itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Debt,
    Payment,
}

impl EntryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::Debt => "debt",
            EntryKind::Payment => "payment",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "debt" => Some(EntryKind::Debt),
            "payment" => Some(EntryKind::Payment),
            _ => None,
        }
    }
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One immutable movement on a customer's ledger. Entries are created once,
/// never edited, and only disappear when their owning customer is deleted.
///
/// `customer_name` is a copy of the name at recording time, used by
/// cross-customer activity views; it is not kept in sync with later renames.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry {
    pub id: EntryId,
    pub customer_id: CustomerId,
    pub customer_name: String,
    pub kind: EntryKind,
    /// Magnitude of the movement, always >= 0.
    pub amount: Cents,
    pub recorded_at: DateTime<Utc>,
    pub description: String,
}

impl Entry {
    /// Create a new entry. A negative amount is normalized to its magnitude;
    /// the balance effect is decided by `kind` alone.
    pub fn new(
        customer_id: CustomerId,
        customer_name: impl Into<String>,
        kind: EntryKind,
        amount: Cents,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            customer_id,
            customer_name: customer_name.into(),
            kind,
            amount: amount.abs(),
            recorded_at: Utc::now(),
            description: description.into(),
        }
    }

    /// The amount as it applies to the owning balance: positive for debt,
    /// negative for payment.
    pub fn signed_amount(&self) -> Cents {
        match self.kind {
            EntryKind::Debt => self.amount,
            EntryKind::Payment => -self.amount,
        }
    }
}
