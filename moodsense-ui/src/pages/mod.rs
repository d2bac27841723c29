//! Pages
//!
//! Top-level views selected from the sidebar.

pub mod hr_dashboard;
pub mod vibe_check;

pub use hr_dashboard::HrDashboard;
pub use vibe_check::VibeCheck;
