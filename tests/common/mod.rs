// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use std::path::PathBuf;

use anyhow::Result;
use expense_tracker::application::ExpenseService;
use expense_tracker::storage::{FileStore, LoadPolicy};
use tempfile::TempDir;

/// Helper to create a store path inside a fresh temporary directory
pub fn temp_store_path() -> Result<(PathBuf, TempDir)> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("expenses.dat");
    Ok((path, temp_dir))
}

/// Helper to open a service over a temporary file store
pub fn test_service() -> Result<(ExpenseService<FileStore>, TempDir)> {
    let (path, temp_dir) = temp_store_path()?;
    let service = ExpenseService::open(FileStore::new(path), LoadPolicy::Lenient)?;
    Ok((service, temp_dir))
}

/// Test fixture: a few everyday expenses
pub struct SampleExpenses;

impl SampleExpenses {
    /// Records A(5), B(15), A(25)
    pub fn create_search_set(service: &mut ExpenseService<FileStore>) -> Result<()> {
        service.add_expense("A", 5.0)?;
        service.add_expense("B", 15.0)?;
        service.add_expense("A", 25.0)?;
        Ok(())
    }

    /// Records A(5), B(3), C(5), D(1)
    pub fn create_sort_set(service: &mut ExpenseService<FileStore>) -> Result<()> {
        service.add_expense("A", 5.0)?;
        service.add_expense("B", 3.0)?;
        service.add_expense("C", 5.0)?;
        service.add_expense("D", 1.0)?;
        Ok(())
    }
}
