mod common;

use anyhow::Result;
use budget_tracker::application::{AppError, LedgerService};
use budget_tracker::domain::{Cents, SavingsGoal};
use common::{income, test_service};

#[test]
fn test_car_goal_example() -> Result<()> {
    let mut service = test_service()?;
    income(&mut service, "i1", 50000, "Salary")?;
    service.add_savings_goal(SavingsGoal::new("Car", 100000))?;

    service.contribute_to_goal("Car", 20000)?;

    assert_eq!(service.balance(), 30000);
    assert_eq!(
        service.find_goal("Car").map(|g| g.current_cents),
        Some(20000)
    );
    Ok(())
}

#[test]
fn test_contribution_to_unknown_goal_changes_nothing() -> Result<()> {
    let mut service = test_service()?;
    income(&mut service, "i1", 50000, "Salary")?;
    service.add_savings_goal(SavingsGoal::new("Car", 100000))?;
    let goals_before = service.savings_goals().to_vec();

    let err = service.contribute_to_goal("car", 20000).unwrap_err();

    assert_eq!(err, AppError::GoalNotFound("car".into()));
    assert!(err.is_lookup());
    assert_eq!(service.balance(), 50000);
    assert_eq!(service.savings_goals(), goals_before.as_slice());
    Ok(())
}

#[test]
fn test_contribution_has_no_solvency_check() -> Result<()> {
    let mut service = LedgerService::new();
    service.add_savings_goal(SavingsGoal::new("Trip", 10000))?;

    service.contribute_to_goal("Trip", 25000)?;

    assert_eq!(service.balance(), -25000);
    assert_eq!(service.savings_goals()[0].current_cents, 25000);
    assert!(service.savings_goals()[0].is_reached());
    Ok(())
}

#[test]
fn test_negative_and_zero_contributions_are_applied() -> Result<()> {
    let mut service = LedgerService::new();
    service.add_savings_goal(SavingsGoal::new("Trip", 10000))?;

    service.contribute_to_goal("Trip", 3000)?;
    service.contribute_to_goal("Trip", 0)?;
    service.contribute_to_goal("Trip", -1000)?;

    assert_eq!(service.savings_goals()[0].current_cents, 2000);
    assert_eq!(service.balance(), -2000);
    Ok(())
}

#[test]
fn test_contribution_out_of_range_is_rejected() -> Result<()> {
    let mut service = LedgerService::new();
    service.add_savings_goal(SavingsGoal::new("Car", 100))?;

    // Withdrawing from the goal credits the balance until the balance overflows.
    service.contribute_to_goal("Car", -Cents::MAX)?;
    let err = service.contribute_to_goal("Car", -1).unwrap_err();

    assert_eq!(err, AppError::InvalidAmount("amount out of range".into()));
    assert_eq!(service.balance(), Cents::MAX);
    assert_eq!(service.savings_goals()[0].current_cents, -Cents::MAX);
    Ok(())
}

#[test]
fn test_goal_overflow_leaves_balance() -> Result<()> {
    let mut service = LedgerService::new();
    service.add_savings_goal(SavingsGoal::new("Car", 100))?;
    service.add_savings_goal(SavingsGoal::new("Boat", 100))?;

    service.contribute_to_goal("Car", Cents::MAX)?;
    service.contribute_to_goal("Boat", -Cents::MAX)?;
    assert_eq!(service.balance(), 0);

    assert!(service.contribute_to_goal("Car", 1).unwrap_err().is_validation());

    assert_eq!(service.balance(), 0);
    assert_eq!(service.savings_goals()[0].current_cents, Cents::MAX);
    Ok(())
}

#[test]
fn test_goal_target_validation() -> Result<()> {
    let mut service = LedgerService::new();

    assert_eq!(
        service.add_savings_goal(SavingsGoal::new("Nothing", 0)),
        Err(AppError::InvalidGoalTarget {
            name: "Nothing".into(),
            target: 0,
        })
    );
    assert!(service.add_savings_goal(SavingsGoal::new("Debt", -500)).is_err());
    assert!(service.savings_goals().is_empty());

    service.add_savings_goal(SavingsGoal::new("Penny", 1))?;
    assert_eq!(service.savings_goals().len(), 1);
    Ok(())
}

#[test]
fn test_goals_keep_insertion_order_and_allow_duplicates() -> Result<()> {
    let mut service = LedgerService::new();
    service.add_savings_goal(SavingsGoal::new("Zeta", 100))?;
    service.add_savings_goal(SavingsGoal::new("Alpha", 100))?;
    service.add_savings_goal(SavingsGoal::new("Zeta", 900))?;

    let names: Vec<&str> = service
        .savings_goals()
        .iter()
        .map(|g| g.name.as_str())
        .collect();
    assert_eq!(names, vec!["Zeta", "Alpha", "Zeta"]);
    assert_eq!(service.find_goal("Zeta").map(|g| g.target_cents), Some(100));
    Ok(())
}

#[test]
fn test_goal_names_are_independent_of_categories() -> Result<()> {
    let mut service = test_service()?;
    service.add_savings_goal(SavingsGoal::new("Food", 5000))?;

    service.contribute_to_goal("Food", 1000)?;

    assert_eq!(service.generate_report().category("Food"), None);
    assert_eq!(service.balance(), -1000);
    Ok(())
}
