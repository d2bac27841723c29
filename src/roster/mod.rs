//! Roster
//!
//! In-memory employee records. Each record carries a seeded daily history
//! plus the live check-in scores recorded since the process started.

pub mod store;
pub mod types;

pub use store::{Roster, RosterError, RosterResult};
pub use types::{generate_history, EmployeeId, EmployeeRecord, HistoryPoint, Score};
