//! UI Components
//!
//! Reusable Leptos components shared by the pages.

pub mod chart;
pub mod dialog;
pub mod sidebar;

pub use chart::{DepartmentChart, TrendChart};
pub use dialog::blocking_alert;
pub use sidebar::Sidebar;
