//! Roster store
//!
//! Holds the employee records for the lifetime of the process. Shared across
//! handlers behind a `tokio::sync::RwLock` in [`crate::api::AppState`].

use chrono::NaiveDate;
use rand::Rng;
use thiserror::Error;

use super::types::{generate_history, EmployeeId, EmployeeRecord, Score};

/// Errors raised by roster operations
#[derive(Error, Debug, PartialEq)]
pub enum RosterError {
    /// No employee with this id
    #[error("Employee not found: {0}")]
    EmployeeNotFound(EmployeeId),
}

/// Result type alias for roster operations
pub type RosterResult<T> = Result<T, RosterError>;

/// The set of employees known to the server
#[derive(Debug, Clone, Default)]
pub struct Roster {
    employees: Vec<EmployeeRecord>,
}

impl Roster {
    /// Create a roster from explicit records, kept in the given order
    pub fn new(employees: Vec<EmployeeRecord>) -> Self {
        Self { employees }
    }

    /// The demo team, each member with a week of seeded history.
    /// Employee 1 is the person using the check-in form.
    pub fn seeded(today: NaiveDate, rng: &mut impl Rng) -> Self {
        let team = [
            (1, "Manu Sharma", "Senior Dev", "Engineering"),
            (2, "Ishika Agarwal", "UX Lead", "Design"),
            (3, "Gurveer", "Product Owner", "Product"),
            (4, "Puja", "Sales Rep", "Sales"),
        ];

        let employees = team
            .into_iter()
            .map(|(id, name, role, dept)| {
                EmployeeRecord::new(id, name, role, dept)
                    .with_history(generate_history(today, &mut *rng))
            })
            .collect();

        Self { employees }
    }

    /// All employees in roster order
    pub fn employees(&self) -> &[EmployeeRecord] {
        &self.employees
    }

    /// Look up one employee
    pub fn get(&self, id: EmployeeId) -> Option<&EmployeeRecord> {
        self.employees.iter().find(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// Append a scored check-in to an employee's record
    pub fn record_score(&mut self, id: EmployeeId, score: Score) -> RosterResult<()> {
        let employee = self
            .employees
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(RosterError::EmployeeNotFound(id))?;

        employee.scores.push(score);
        Ok(())
    }
}
