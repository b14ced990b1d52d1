use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::domain::{Expense, Ledger};

/// Snapshot written by the JSON export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerSnapshot {
    pub version: String,
    pub exported_at: DateTime<Utc>,
    pub total: f64,
    pub expenses: Vec<Expense>,
}

/// Output format for [`Exporter`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Csv,
    Json,
}

/// Exporter for writing the ledger out in a portable format
pub struct Exporter<'a> {
    ledger: &'a Ledger,
}

impl<'a> Exporter<'a> {
    pub fn new(ledger: &'a Ledger) -> Self {
        Self { ledger }
    }

    /// Write in the chosen format, returning the number of expenses written
    pub fn export<W: Write>(&self, format: ExportFormat, writer: W) -> Result<usize> {
        match format {
            ExportFormat::Csv => self.export_csv(writer),
            ExportFormat::Json => self.export_json(writer),
        }
    }

    /// Export expenses to CSV, one row per expense in ledger order.
    /// Costs keep full precision, matching the JSON export.
    pub fn export_csv<W: Write>(&self, writer: W) -> Result<usize> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        csv_writer.write_record(["name", "cost"])?;

        let mut count = 0;
        for expense in self.ledger.expenses() {
            let cost = expense.cost().to_string();
            csv_writer.write_record([expense.name(), cost.as_str()])?;
            count += 1;
        }

        csv_writer.flush()?;
        Ok(count)
    }

    /// Export a full snapshot as pretty-printed JSON
    pub fn export_json<W: Write>(&self, mut writer: W) -> Result<usize> {
        let snapshot = LedgerSnapshot {
            version: env!("CARGO_PKG_VERSION").to_string(),
            exported_at: Utc::now(),
            total: self.ledger.total().unwrap_or(0.0),
            expenses: self.ledger.expenses().to_vec(),
        };

        serde_json::to_writer_pretty(&mut writer, &snapshot)?;
        writeln!(writer)?;
        writer.flush()?;
        Ok(snapshot.expenses.len())
    }
}
