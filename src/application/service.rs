use crate::domain::{Cents, Customer, CustomerId, Entry, EntryKind, IntegrityReport};
use crate::storage::LedgerStore;

use super::{build_overview, AppError, OverviewReport};

/// High-level ledger operations. This is the only surface presentation code
/// talks to: it validates input, delegates to the store, and hands back
/// owned snapshots, so balances can never be edited around `record_entry`.
pub struct LedgerService {
    store: LedgerStore,
}

impl LedgerService {
    pub fn new() -> Self {
        Self {
            store: LedgerStore::new(),
        }
    }

    // ========================
    // Customer operations
    // ========================

    /// Register a customer. Name and phone must be non-empty after trimming.
    /// A positive seed debt opens the ledger with one debt entry carrying the
    /// caller-supplied (already localized) description; negative seeds are
    /// clamped to zero.
    pub fn create_customer(
        &mut self,
        name: &str,
        phone: &str,
        seed_debt: Cents,
        seed_description: &str,
    ) -> Result<Customer, AppError> {
        let name = name.trim();
        let phone = phone.trim();
        if name.is_empty() {
            return Err(AppError::EmptyName);
        }
        if phone.is_empty() {
            return Err(AppError::EmptyPhone);
        }

        let customer = self.store.insert_customer(name.to_string(), phone.to_string());
        if seed_debt > 0 {
            return self.record_entry(customer.id, EntryKind::Debt, seed_debt, seed_description);
        }
        Ok(customer)
    }

    pub fn get_customer(&self, id: CustomerId) -> Result<Customer, AppError> {
        self.store
            .get(id)
            .ok_or_else(|| AppError::CustomerNotFound(id.to_string()))
    }

    /// Customers newest-first, optionally narrowed by a case-insensitive
    /// name/phone substring.
    pub fn list_customers(&self, search: Option<&str>) -> Vec<Customer> {
        self.store.list(search)
    }

    /// Delete a customer and every entry it owns. Unknown ids are ignored so
    /// a retried delete cannot fail.
    pub fn delete_customer(&mut self, id: CustomerId) {
        self.store.remove_customer(id);
    }

    pub fn customer_count(&self) -> usize {
        self.store.customer_count()
    }

    // ========================
    // Ledger operations
    // ========================

    /// Record a debt or payment against a live customer and return the
    /// updated snapshot. The amount is a magnitude; the balance may go
    /// negative on overpayment. There is no other way to move a balance.
    pub fn record_entry(
        &mut self,
        customer_id: CustomerId,
        kind: EntryKind,
        amount: Cents,
        description: &str,
    ) -> Result<Customer, AppError> {
        self.store
            .append_entry(customer_id, kind, amount, description)
            .ok_or_else(|| AppError::CustomerNotFound(customer_id.to_string()))
    }

    pub fn aggregate_debt(&self) -> Cents {
        self.store.aggregate_debt()
    }

    /// All entries across all customers, newest first.
    pub fn recent_entries(&self, limit: Option<usize>) -> Vec<Entry> {
        self.store.recent_entries(limit)
    }

    // ========================
    // Derived reads
    // ========================

    pub fn overview(&self) -> OverviewReport {
        build_overview(self.store.customers())
    }

    /// Re-derive every balance from its entry log and cross-check the stored
    /// totals and id/ownership invariants.
    pub fn check_integrity(&self) -> IntegrityReport {
        self.store.integrity_report()
    }
}

impl Default for LedgerService {
    fn default() -> Self {
        Self::new()
    }
}
