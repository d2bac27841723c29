//! State Management
//!
//! Plain state machines behind the views. Components hold these in signals
//! and drive them through their methods, so every transition is testable
//! without a browser.

pub mod hr;
pub mod vibe;
pub mod view;

pub use hr::{
    roster_battery_class, DashboardPayload, DepartmentMetric, Employee, HrAction, HrState,
    RefreshOutcome, TrendPoint,
};
pub use vibe::{
    battery_bar_class, deliver, Phase, SubmitError, VibeEntry, VibeForm, MOODS, PRESSURE_OPTIONS,
    SUBMIT_DELAY_MS,
};
pub use view::{View, NAV_ITEMS};
