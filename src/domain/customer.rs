use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Cents, Entry};

pub type CustomerId = Uuid;

/// Avatar background colors handed out in rotation as customers are created.
/// Cosmetic only; the store owns the rotation cursor.
pub const AVATAR_COLORS: [&str; 6] = ["amber", "indigo", "green", "orange", "cyan", "rose"];

/// A customer and their ledger. `total_debt` is maintained incrementally by
/// the store and must always equal the signed sum of `entries`; positive
/// means the customer owes the merchant, negative means credit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub phone: String,
    pub total_debt: Cents,
    /// Display initials derived from `name` at creation.
    pub initials: String,
    /// Avatar color picked from `AVATAR_COLORS` at creation.
    pub color: String,
    /// Ledger entries, newest first.
    pub entries: Vec<Entry>,
    pub created_at: DateTime<Utc>,
}

impl Customer {
    pub fn new(name: impl Into<String>, phone: impl Into<String>, color: &str) -> Self {
        let name = name.into();
        Self {
            id: Uuid::new_v4(),
            initials: initials(&name),
            name,
            phone: phone.into(),
            total_debt: 0,
            color: color.to_string(),
            entries: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Case-insensitive substring match against name or phone.
    pub fn matches(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.name.to_lowercase().contains(&needle) || self.phone.to_lowercase().contains(&needle)
    }

    pub fn is_settled(&self) -> bool {
        self.total_debt <= 0
    }
}

/// First letter of up to the first two whitespace-separated name tokens,
/// uppercased. May yield fewer than two characters for short names.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .take(2)
        .filter_map(|token| token.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}
