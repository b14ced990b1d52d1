mod common;

use anyhow::Result;
use common::{SampleExpenses, test_service};
use expense_tracker::application::{Action, Outcome};
use expense_tracker::storage::{FileStore, Store};
use expense_tracker::{Expense, SearchCriteria, SearchMode, SortOrder};

fn names(expenses: &[Expense]) -> Vec<&str> {
    expenses.iter().map(|e| e.name()).collect()
}

#[test]
fn test_add_validity() -> Result<()> {
    let (mut service, _temp) = test_service()?;

    assert!(service.add_expense("", 5.0).is_err());
    assert!(service.add_expense("Coffee", 0.0).is_err());
    assert!(service.add_expense("Coffee", -3.0).is_err());
    assert_eq!(service.ledger().len(), 0);

    let added = service.add_expense("Coffee", 4.50)?;
    assert_eq!(added.name(), "Coffee");
    assert_eq!(added.cost(), 4.50);
    assert_eq!(service.ledger().len(), 1);
    assert_eq!(service.ledger().expenses()[0], added);
    Ok(())
}

#[test]
fn test_view_sorts_ascending_by_default() -> Result<()> {
    let (mut service, _temp) = test_service()?;
    SampleExpenses::create_sort_set(&mut service)?;

    let outcome = service.execute(Action::View {
        sort: Some(SortOrder::default()),
    })?;
    let Outcome::Listed(expenses) = outcome else {
        panic!("expected a listing");
    };
    assert_eq!(names(&expenses), vec!["D", "B", "A", "C"]);
    assert_eq!(names(service.ledger().expenses()), vec!["D", "B", "A", "C"]);
    Ok(())
}

#[test]
fn test_view_without_sort_keeps_insertion_order() -> Result<()> {
    let (mut service, _temp) = test_service()?;
    SampleExpenses::create_sort_set(&mut service)?;

    let outcome = service.execute(Action::View { sort: None })?;
    let Outcome::Listed(expenses) = outcome else {
        panic!("expected a listing");
    };
    assert_eq!(names(&expenses), vec!["A", "B", "C", "D"]);
    Ok(())
}

#[test]
fn test_summarize() -> Result<()> {
    let (mut service, _temp) = test_service()?;
    assert_eq!(service.summarize_expenses(), None);

    service.add_expense("A", 10.0)?;
    service.add_expense("B", 5.5)?;
    assert_eq!(service.summarize_expenses(), Some(15.5));
    Ok(())
}

#[test]
fn test_search_criteria_mode() -> Result<()> {
    let (mut service, _temp) = test_service()?;
    SampleExpenses::create_search_set(&mut service)?;

    let found = service.search_expenses(&SearchCriteria::new("A", 0.0, 0.0), SearchMode::Criteria)?;
    assert_eq!(found.len(), 2);
    assert!(found.iter().all(|e| e.name() == "A"));

    let found =
        service.search_expenses(&SearchCriteria::new("", 10.0, 20.0), SearchMode::Criteria)?;
    assert_eq!(names(&found), vec!["B"]);
    Ok(())
}

#[test]
fn test_search_first_by_name_mode() -> Result<()> {
    let (mut service, _temp) = test_service()?;
    SampleExpenses::create_search_set(&mut service)?;

    let found = service.search_expenses(&SearchCriteria::by_name("A"), SearchMode::FirstByName)?;
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].cost(), 5.0);
    Ok(())
}

#[test]
fn test_search_outcomes() -> Result<()> {
    let (mut service, _temp) = test_service()?;
    SampleExpenses::create_search_set(&mut service)?;

    let outcome = service.execute(Action::Search {
        criteria: SearchCriteria::in_range(100.0, 0.0),
        mode: SearchMode::Criteria,
    })?;
    assert_eq!(outcome, Outcome::NoMatch);

    let err = service
        .execute(Action::Search {
            criteria: SearchCriteria::new("", 0.0, 0.0),
            mode: SearchMode::Criteria,
        })
        .unwrap_err();
    assert!(err.is_validation());
    assert!(err.to_string().contains("no search criteria"));
    Ok(())
}

#[test]
fn test_sort_stability() -> Result<()> {
    let (mut service, _temp) = test_service()?;
    SampleExpenses::create_sort_set(&mut service)?;

    let outcome = service.execute(Action::Sort {
        order: SortOrder::Ascending,
    })?;
    assert_eq!(outcome, Outcome::Sorted(SortOrder::Ascending));
    assert_eq!(names(service.ledger().expenses()), vec!["D", "B", "A", "C"]);

    service.sort_by_cost(SortOrder::Descending);
    // A and C tie on 5 and keep their relative order
    assert_eq!(names(service.ledger().expenses()), vec!["A", "C", "B", "D"]);
    Ok(())
}

#[test]
fn test_sorted_order_survives_reload() -> Result<()> {
    let (mut service, _temp) = test_service()?;
    SampleExpenses::create_sort_set(&mut service)?;
    service.sort_by_cost(SortOrder::Ascending);
    service.save()?;

    let path = service.store().path().to_path_buf();
    let reloaded = FileStore::new(path).load()?;
    assert_eq!(names(reloaded.expenses()), vec!["D", "B", "A", "C"]);
    Ok(())
}
