use crate::domain::{
    aggregate_debt, build_integrity_report, recent_entries, Cents, Customer, CustomerId, Entry,
    EntryKind, IntegrityReport, AVATAR_COLORS,
};

/// The authoritative in-memory ledger state. Lives for one merchant session
/// and is discarded at the end of it; nothing here touches disk.
///
/// Customers are held newest-first. Balances are only ever changed by
/// `append_entry`, which keeps `total_debt` equal to the signed sum of the
/// entry log. Every method that returns customer data returns an owned
/// snapshot, so callers cannot mutate the store behind its back.
pub struct LedgerStore {
    customers: Vec<Customer>,
    palette_cursor: usize,
}

impl LedgerStore {
    pub fn new() -> Self {
        Self {
            customers: Vec::new(),
            palette_cursor: 0,
        }
    }

    pub fn customer_count(&self) -> usize {
        self.customers.len()
    }

    pub(crate) fn customers(&self) -> &[Customer] {
        &self.customers
    }

    /// Insert a new customer at the head of the collection. The caller has
    /// already validated name and phone; initials and avatar color are
    /// derived here.
    pub fn insert_customer(&mut self, name: String, phone: String) -> Customer {
        let color = AVATAR_COLORS[self.palette_cursor % AVATAR_COLORS.len()];
        self.palette_cursor += 1;

        let customer = Customer::new(name, phone, color);
        self.customers.insert(0, customer.clone());
        customer
    }

    /// Remove a customer and, with it, every entry it owns. Removing an
    /// unknown id is a no-op so deletes are safe to retry.
    pub fn remove_customer(&mut self, id: CustomerId) {
        self.customers.retain(|c| c.id != id);
    }

    pub fn get(&self, id: CustomerId) -> Option<Customer> {
        self.customers.iter().find(|c| c.id == id).cloned()
    }

    /// Customers in store order (newest first), optionally filtered by a
    /// case-insensitive substring of name or phone.
    pub fn list(&self, filter: Option<&str>) -> Vec<Customer> {
        match filter {
            Some(needle) if !needle.trim().is_empty() => self
                .customers
                .iter()
                .filter(|c| c.matches(needle.trim()))
                .cloned()
                .collect(),
            _ => self.customers.clone(),
        }
    }

    /// Append a movement to a customer's log and roll its balance forward.
    /// This is the single path through which balances change. The amount is
    /// taken as a magnitude; payments may push the balance below zero
    /// (customer credit). Returns `None` when the id is not live.
    pub fn append_entry(
        &mut self,
        customer_id: CustomerId,
        kind: EntryKind,
        amount: Cents,
        description: &str,
    ) -> Option<Customer> {
        let customer = self.customers.iter_mut().find(|c| c.id == customer_id)?;

        let entry = Entry::new(customer_id, customer.name.clone(), kind, amount, description);
        customer.total_debt += entry.signed_amount();
        customer.entries.insert(0, entry);
        Some(customer.clone())
    }

    pub fn aggregate_debt(&self) -> Cents {
        aggregate_debt(&self.customers)
    }

    pub fn recent_entries(&self, limit: Option<usize>) -> Vec<Entry> {
        recent_entries(&self.customers, limit)
    }

    pub fn integrity_report(&self) -> IntegrityReport {
        build_integrity_report(&self.customers)
    }
}

impl Default for LedgerStore {
    fn default() -> Self {
        Self::new()
    }
}
