use std::collections::HashSet;

use super::{Cents, Customer, Entry};

/// Derive a balance from an entry log alone. This is the independent
/// definition of a customer's debt; the store keeps `total_debt` updated
/// incrementally and the integrity report compares the two.
pub fn derive_balance(entries: &[Entry]) -> Cents {
    entries.iter().map(Entry::signed_amount).sum()
}

/// Sum of all customer balances, the merchant's outstanding debt figure.
pub fn aggregate_debt(customers: &[Customer]) -> Cents {
    customers.iter().map(|c| c.total_debt).sum()
}

/// Merge every customer's entries into one feed, newest first, optionally
/// truncated. Per-customer entry order is left untouched.
pub fn recent_entries(customers: &[Customer], limit: Option<usize>) -> Vec<Entry> {
    let mut feed: Vec<Entry> = customers.iter().flat_map(|c| c.entries.clone()).collect();
    feed.sort_by(|a, b| b.recorded_at.cmp(&a.recorded_at));
    if let Some(limit) = limit {
        feed.truncate(limit);
    }
    feed
}

/// One customer whose stored balance disagrees with its entry log.
#[derive(Debug, Clone)]
pub struct BalanceMismatch {
    pub customer_name: String,
    pub stored: Cents,
    pub derived: Cents,
}

/// Result of re-deriving the whole ledger from its entry logs.
#[derive(Debug, Clone, Default)]
pub struct IntegrityReport {
    pub customer_count: usize,
    pub entry_count: usize,
    pub mismatched_balances: Vec<BalanceMismatch>,
    /// Ids reused across customers or entries.
    pub duplicate_ids: usize,
    /// Entries whose back-reference does not point at their owner.
    pub foreign_entries: usize,
    /// Entries holding a negative amount.
    pub negative_amounts: usize,
}

impl IntegrityReport {
    pub fn is_consistent(&self) -> bool {
        self.mismatched_balances.is_empty()
            && self.duplicate_ids == 0
            && self.foreign_entries == 0
            && self.negative_amounts == 0
    }
}

/// Check every ledger invariant that can be read off the data: stored
/// balances match their logs, ids are unique, entries belong to their
/// customer, amounts are magnitudes.
pub fn build_integrity_report(customers: &[Customer]) -> IntegrityReport {
    let mut report = IntegrityReport {
        customer_count: customers.len(),
        ..Default::default()
    };
    let mut seen_ids = HashSet::new();

    for customer in customers {
        if !seen_ids.insert(customer.id) {
            report.duplicate_ids += 1;
        }

        let derived = derive_balance(&customer.entries);
        if derived != customer.total_debt {
            report.mismatched_balances.push(BalanceMismatch {
                customer_name: customer.name.clone(),
                stored: customer.total_debt,
                derived,
            });
        }

        for entry in &customer.entries {
            report.entry_count += 1;
            if !seen_ids.insert(entry.id) {
                report.duplicate_ids += 1;
            }
            if entry.customer_id != customer.id {
                report.foreign_entries += 1;
            }
            if entry.amount < 0 {
                report.negative_amounts += 1;
            }
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;
    use crate::domain::EntryKind;

    fn customer_with_entries(name: &str, movements: &[(EntryKind, Cents)]) -> Customer {
        let mut customer = Customer::new(name, "0615000000", "amber");
        for (kind, amount) in movements {
            let entry = Entry::new(customer.id, name, *kind, *amount, kind.as_str());
            customer.total_debt += entry.signed_amount();
            customer.entries.insert(0, entry);
        }
        customer
    }

    #[test]
    fn test_derive_balance_empty() {
        assert_eq!(derive_balance(&[]), 0);
    }

    #[test]
    fn test_derive_balance_mixed() {
        let customer = customer_with_entries(
            "Ahmed Mohamed",
            &[
                (EntryKind::Debt, 45000),
                (EntryKind::Payment, 20000),
                (EntryKind::Debt, 5000),
            ],
        );
        assert_eq!(derive_balance(&customer.entries), 30000);
        assert_eq!(customer.total_debt, 30000);
    }

    #[test]
    fn test_aggregate_debt() {
        let customers = vec![
            customer_with_entries("Ahmed Mohamed", &[(EntryKind::Debt, 45000)]),
            customer_with_entries("Fartuun Ali", &[(EntryKind::Debt, 120000)]),
            customer_with_entries("Jaamac Diiriye", &[(EntryKind::Debt, 7550)]),
        ];
        assert_eq!(aggregate_debt(&customers), 172550);
    }

    #[test]
    fn test_recent_entries_sorted_and_limited() {
        let customers = vec![
            customer_with_entries("Ahmed Mohamed", &[(EntryKind::Debt, 100), (EntryKind::Debt, 200)]),
            customer_with_entries("Fartuun Ali", &[(EntryKind::Payment, 300)]),
        ];

        let feed = recent_entries(&customers, None);
        assert_eq!(feed.len(), 3);
        assert!(feed.windows(2).all(|w| w[0].recorded_at >= w[1].recorded_at));

        let feed = recent_entries(&customers, Some(2));
        assert_eq!(feed.len(), 2);
    }

    #[test]
    fn test_integrity_report_clean() {
        let customers = vec![
            customer_with_entries("Ahmed Mohamed", &[(EntryKind::Debt, 45000)]),
            customer_with_entries("Fartuun Ali", &[]),
        ];
        let report = build_integrity_report(&customers);
        assert!(report.is_consistent());
        assert_eq!(report.customer_count, 2);
        assert_eq!(report.entry_count, 1);
    }

    #[test]
    fn test_integrity_report_detects_drift() {
        let mut customer = customer_with_entries("Ahmed Mohamed", &[(EntryKind::Debt, 45000)]);
        customer.total_debt = 999;
        let report = build_integrity_report(&[customer]);
        assert!(!report.is_consistent());
        assert_eq!(report.mismatched_balances.len(), 1);
        assert_eq!(report.mismatched_balances[0].stored, 999);
        assert_eq!(report.mismatched_balances[0].derived, 45000);
    }

    #[test]
    fn test_integrity_report_detects_foreign_entry() {
        let mut customer = customer_with_entries("Ahmed Mohamed", &[]);
        let stray = Entry::new(Uuid::new_v4(), "Someone Else", EntryKind::Debt, 100, "debt");
        customer.total_debt += stray.signed_amount();
        customer.entries.push(stray);
        let report = build_integrity_report(&[customer]);
        assert_eq!(report.foreign_entries, 1);
        assert!(!report.is_consistent());
    }
}
