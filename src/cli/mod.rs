use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::error;

use crate::application::{Action, AppError, ExpenseService, Outcome};
use crate::domain::{Expense, SearchCriteria, SearchMode, SortOrder, format_cost};
use crate::io::{ExportFormat, Exporter};
use crate::storage::{DEFAULT_STORE_PATH, FileStore, LoadPolicy, Store};

/// Expense Tracker - record, total, search and sort personal expenses
#[derive(Parser)]
#[command(name = "expense-tracker")]
#[command(about = "A small personal expense tracker backed by a local file")]
#[command(version)]
pub struct Cli {
    /// Store file path
    #[arg(short, long, env = "EXPENSES_FILE", default_value = DEFAULT_STORE_PATH)]
    pub file: PathBuf,

    /// Action to perform
    #[arg(short, long, value_enum, default_value = "view")]
    pub action: ActionArg,

    /// Name of the expense (add), or name to search for
    #[arg(short, long, default_value = "")]
    pub name: String,

    /// Cost of the expense (e.g., "4.50")
    #[arg(short, long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub cost: f64,

    /// Minimum cost when searching (0 for no lower bound)
    #[arg(
        long = "minCost",
        alias = "min-cost",
        default_value_t = 0.0,
        allow_negative_numbers = true
    )]
    pub min_cost: f64,

    /// Maximum cost when searching (0 for no upper bound)
    #[arg(
        long = "maxCost",
        alias = "max-cost",
        default_value_t = 0.0,
        allow_negative_numbers = true
    )]
    pub max_cost: f64,

    /// Sort order for view, summarize and sort: asc or desc (anything else sorts ascending)
    #[arg(long = "sortOrder", alias = "sort-order", default_value = "asc")]
    pub sort_order: String,

    /// Keep insertion order when viewing or summarizing
    #[arg(long)]
    pub keep_order: bool,

    /// Search by exact name and stop at the first match
    #[arg(long)]
    pub first: bool,

    /// Abort instead of starting empty when the store cannot be read
    #[arg(long)]
    pub strict: bool,

    /// Export format
    #[arg(long, value_enum, default_value = "csv")]
    pub format: FormatArg,

    /// Export output file (stdout if omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ActionArg {
    Add,
    View,
    Summarize,
    Search,
    Sort,
    Export,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Csv,
    Json,
}

impl From<FormatArg> for ExportFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Csv => ExportFormat::Csv,
            FormatArg::Json => ExportFormat::Json,
        }
    }
}

impl Cli {
    fn load_policy(&self) -> LoadPolicy {
        if self.strict {
            LoadPolicy::Strict
        } else {
            LoadPolicy::Lenient
        }
    }

    /// Translate the parsed flags into a ledger action. `None` for export,
    /// which reads the ledger without going through the service.
    pub fn to_action(&self) -> Option<Action> {
        let order = SortOrder::parse(&self.sort_order);
        let sort = (!self.keep_order).then_some(order);

        let action = match self.action {
            ActionArg::Add => Action::Add {
                name: self.name.clone(),
                cost: self.cost,
            },
            ActionArg::View => Action::View { sort },
            ActionArg::Summarize => Action::Summarize { sort },
            ActionArg::Search => Action::Search {
                criteria: SearchCriteria::new(self.name.clone(), self.min_cost, self.max_cost),
                mode: if self.first {
                    SearchMode::FirstByName
                } else {
                    SearchMode::Criteria
                },
            },
            ActionArg::Sort => Action::Sort { order },
            ActionArg::Export => return None,
        };
        Some(action)
    }

    pub fn run(self) -> Result<()> {
        let store = FileStore::new(self.file.clone());
        let service = ExpenseService::open(store, self.load_policy())
            .with_context(|| format!("Failed to load expenses from {}", self.file.display()))?;
        self.run_with(service)
    }

    /// Execute against an already opened service, then save.
    pub fn run_with<S: Store>(&self, mut service: ExpenseService<S>) -> Result<()> {
        match self.to_action() {
            Some(action) => run_action(&mut service, action)?,
            None => run_export_command(&service, self.format.into(), self.output.as_deref())?,
        }

        if let Err(err) = service.save() {
            if self.strict {
                return Err(err).context("Failed to save expenses");
            }
            error!(location = %service.store().location(), error = %err, "expenses were not saved");
        }

        Ok(())
    }
}

fn run_action<S: Store>(service: &mut ExpenseService<S>, action: Action) -> Result<()> {
    match service.execute(action) {
        Ok(outcome) => print_outcome(&outcome),
        Err(AppError::Validation(err)) => println!("Invalid input: {}", err),
        Err(err) => return Err(err.into()),
    }
    Ok(())
}

fn print_outcome(outcome: &Outcome) {
    match outcome {
        Outcome::Added(expense) => {
            println!(
                "Expense added: {} ({})",
                expense.name(),
                format_cost(expense.cost())
            );
        }
        Outcome::Listed(expenses) => {
            println!("All Expenses:");
            print_table(expenses);
        }
        Outcome::Total(total) => {
            println!("Total Expenses: {}", format_cost(*total));
        }
        Outcome::Found(expenses) => {
            for expense in expenses {
                println!(
                    "Expense found: {} ({})",
                    expense.name(),
                    format_cost(expense.cost())
                );
            }
        }
        Outcome::Sorted(order) => {
            println!("Expenses sorted by cost ({}).", order);
        }
        Outcome::Empty => println!("No expenses recorded."),
        Outcome::NoMatch => println!("No expenses found matching the specified criteria."),
    }
}

fn print_table(expenses: &[Expense]) {
    println!("{:<30} {:>12}", "NAME", "COST");
    println!("{}", "-".repeat(43));
    for expense in expenses {
        println!(
            "{:<30} {:>12}",
            truncate(expense.name(), 30),
            format_cost(expense.cost())
        );
    }
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}

fn run_export_command<S: Store>(
    service: &ExpenseService<S>,
    format: ExportFormat,
    output: Option<&Path>,
) -> Result<()> {
    let ledger = service.ledger();
    if ledger.is_empty() {
        println!("No expenses recorded.");
        return Ok(());
    }

    let exporter = Exporter::new(ledger);
    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file {}", path.display()))?;
            let count = exporter
                .export(format, BufWriter::new(file))
                .map_err(AppError::Export)?;
            println!("Exported {} expense(s) to {}", count, path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            exporter
                .export(format, &mut handle)
                .map_err(AppError::Export)?;
            handle.flush()?;
        }
    }

    Ok(())
}
