use std::io::Write;

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::application::LedgerService;
use crate::domain::Customer;

/// Versioned snapshot of the whole ledger for JSON export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerSnapshot {
    pub version: String,
    pub exported_at: DateTime<Utc>,
    pub customers: Vec<Customer>,
}

/// Turns ledger data into CSV or JSON on any writer.
pub struct Exporter<'a> {
    service: &'a LedgerService,
}

impl<'a> Exporter<'a> {
    pub fn new(service: &'a LedgerService) -> Self {
        Self { service }
    }

    /// Export every entry, newest first, one CSV row each. Returns the row
    /// count.
    pub fn export_entries_csv<W: Write>(&self, writer: W) -> Result<usize> {
        let entries = self.service.recent_entries(None);
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer.write_record([
            "id",
            "recorded_at",
            "customer",
            "kind",
            "amount_cents",
            "description",
        ])?;

        for entry in &entries {
            csv_writer.write_record([
                entry.id.to_string(),
                entry.recorded_at.to_rfc3339(),
                entry.customer_name.clone(),
                entry.kind.as_str().to_string(),
                entry.amount.to_string(),
                entry.description.clone(),
            ])?;
        }

        csv_writer.flush()?;
        Ok(entries.len())
    }

    /// Export the customer book with current balances. Returns the row count.
    pub fn export_customers_csv<W: Write>(&self, writer: W) -> Result<usize> {
        let customers = self.service.list_customers(None);
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer.write_record(["name", "phone", "total_debt_cents", "entry_count"])?;

        for customer in &customers {
            csv_writer.write_record([
                customer.name.clone(),
                customer.phone.clone(),
                customer.total_debt.to_string(),
                customer.entries.len().to_string(),
            ])?;
        }

        csv_writer.flush()?;
        Ok(customers.len())
    }

    /// Export the full ledger as a JSON snapshot.
    pub fn export_snapshot_json<W: Write>(&self, mut writer: W) -> Result<LedgerSnapshot> {
        let snapshot = LedgerSnapshot {
            version: env!("CARGO_PKG_VERSION").to_string(),
            exported_at: Utc::now(),
            customers: self.service.list_customers(None),
        };

        let json = serde_json::to_string_pretty(&snapshot)?;
        writer.write_all(json.as_bytes())?;
        writer.flush()?;

        Ok(snapshot)
    }
}
