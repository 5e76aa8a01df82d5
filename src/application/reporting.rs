use serde::{Deserialize, Serialize};

use crate::domain::{aggregate_debt, Cents, Customer, EntryKind};

/// The dashboard numbers: outstanding debt across the book, income taken in
/// (total of payment entries), head count, and the heaviest debtor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverviewReport {
    pub outstanding_debt: Cents,
    pub income: Cents,
    pub active_customers: usize,
    pub top_debtor: Option<TopDebtor>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopDebtor {
    pub name: String,
    pub total_debt: Cents,
}

/// Derive the overview from a ledger snapshot. Pure read, no side effects.
pub fn build_overview(customers: &[Customer]) -> OverviewReport {
    let income = customers
        .iter()
        .flat_map(|c| &c.entries)
        .filter(|e| e.kind == EntryKind::Payment)
        .map(|e| e.amount)
        .sum();

    let top_debtor = customers
        .iter()
        .max_by_key(|c| c.total_debt)
        .map(|c| TopDebtor {
            name: c.name.clone(),
            total_debt: c.total_debt,
        });

    OverviewReport {
        outstanding_debt: aggregate_debt(customers),
        income,
        active_customers: customers.len(),
        top_debtor,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Customer, Entry};

    fn customer(name: &str, movements: &[(EntryKind, Cents)]) -> Customer {
        let mut customer = Customer::new(name, "0615000000", "amber");
        for (kind, amount) in movements {
            let entry = Entry::new(customer.id, name, *kind, *amount, kind.as_str());
            customer.total_debt += entry.signed_amount();
            customer.entries.insert(0, entry);
        }
        customer
    }

    #[test]
    fn test_overview_empty_ledger() {
        let report = build_overview(&[]);
        assert_eq!(report.outstanding_debt, 0);
        assert_eq!(report.income, 0);
        assert_eq!(report.active_customers, 0);
        assert!(report.top_debtor.is_none());
    }

    #[test]
    fn test_overview_totals() {
        let customers = vec![
            customer("Ahmed Mohamed", &[(EntryKind::Debt, 45000)]),
            customer(
                "Fartuun Ali",
                &[(EntryKind::Debt, 120000), (EntryKind::Payment, 20000)],
            ),
        ];

        let report = build_overview(&customers);
        assert_eq!(report.outstanding_debt, 145000);
        assert_eq!(report.income, 20000);
        assert_eq!(report.active_customers, 2);

        let top = report.top_debtor.unwrap();
        assert_eq!(top.name, "Fartuun Ali");
        assert_eq!(top.total_debt, 100000);
    }
}
