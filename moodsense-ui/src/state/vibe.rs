//! Check-in Form State
//!
//! The VibeCheck form is a small state machine:
//!
//! ```text
//! Composing --submit--> Submitting --ok + delay--> Submitted
//!     ^                     |                          |
//!     +------ failure ------+                          |
//!     +------------------ check in again --------------+
//! ```

use serde::Serialize;
use std::future::Future;
use thiserror::Error;

use crate::api::ClientError;

/// Mood forecast scale, very negative to very positive
pub const MOODS: [&str; 7] = ["⛈️", "🌧️", "☁️", "😐", "🌤️", "☀️", "🔥"];

/// Pressure source pills: (label, icon)
pub const PRESSURE_OPTIONS: [(&str, &str); 7] = [
    ("Deadlines", "⏰"),
    ("Workload", "📚"),
    ("Management", "👔"),
    ("Pay/Comp", "💰"),
    ("Team", "🗣️"),
    ("Personal", "🏠"),
    ("All Good", "✅"),
];

pub const DEFAULT_MOOD: &str = "😐";
pub const DEFAULT_BATTERY: u8 = 50;
pub const MAX_BATTERY: u8 = 100;

/// Pause between a successful POST and the confirmation screen
pub const SUBMIT_DELAY_MS: u32 = 800;

/// Where the form is in its lifecycle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Composing,
    Submitting,
    Submitted,
}

/// Why a submit was refused before any request went out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("Please select a pressure source (or 'All Good') to continue.")]
    MissingPressureSource,
    #[error("A check-in is already being sent.")]
    NotComposing,
}

/// Snapshot posted to `/api/submit-vibe`
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VibeEntry {
    pub mood: String,
    pub battery: u8,
    pub vent_text: String,
    pub pressure_source: String,
}

/// Local state of the check-in form
#[derive(Clone, Debug, PartialEq)]
pub struct VibeForm {
    pub mood: String,
    pub battery: u8,
    pub vent_text: String,
    pub pressure_source: String,
    pub phase: Phase,
}

impl Default for VibeForm {
    fn default() -> Self {
        Self {
            mood: DEFAULT_MOOD.to_string(),
            battery: DEFAULT_BATTERY,
            vent_text: String::new(),
            pressure_source: String::new(),
            phase: Phase::Composing,
        }
    }
}

impl VibeForm {
    /// Pick a mood. Symbols not on the scale are ignored.
    pub fn set_mood(&mut self, mood: &str) {
        if MOODS.contains(&mood) {
            self.mood = mood.to_string();
        }
    }

    /// Set the battery, clamped to 0-100
    pub fn set_battery(&mut self, value: i64) {
        self.battery = value.clamp(0, i64::from(MAX_BATTERY)) as u8;
    }

    /// Set the battery from a range input's string value.
    /// Unparseable input leaves the value unchanged.
    pub fn set_battery_input(&mut self, raw: &str) {
        if let Ok(value) = raw.trim().parse::<f64>() {
            if value.is_finite() {
                self.set_battery(value.round() as i64);
            }
        }
    }

    pub fn set_vent_text(&mut self, text: String) {
        self.vent_text = text;
    }

    pub fn set_pressure_source(&mut self, label: &str) {
        self.pressure_source = label.to_string();
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == Phase::Submitting
    }

    /// Validate and move to Submitting, returning the payload to send.
    /// On error nothing changes.
    pub fn begin_submit(&mut self) -> Result<VibeEntry, SubmitError> {
        if self.phase != Phase::Composing {
            return Err(SubmitError::NotComposing);
        }
        if self.pressure_source.is_empty() {
            return Err(SubmitError::MissingPressureSource);
        }

        self.phase = Phase::Submitting;
        Ok(VibeEntry {
            mood: self.mood.clone(),
            battery: self.battery,
            vent_text: self.vent_text.clone(),
            pressure_source: self.pressure_source.clone(),
        })
    }

    /// The request resolved and the confirmation delay elapsed
    pub fn submit_succeeded(&mut self) {
        if self.phase == Phase::Submitting {
            self.phase = Phase::Submitted;
        }
    }

    /// The request failed; back to an editable form with fields intact
    pub fn submit_failed(&mut self) {
        if self.phase == Phase::Submitting {
            self.phase = Phase::Composing;
        }
    }

    /// "Check In Again": clear notes, battery and pressure source.
    /// The mood is kept as it was.
    pub fn check_in_again(&mut self) {
        self.vent_text.clear();
        self.battery = DEFAULT_BATTERY;
        self.pressure_source.clear();
        self.phase = Phase::Composing;
    }
}

/// Tailwind class for the energy bar fill
pub fn battery_bar_class(battery: u8) -> &'static str {
    if battery < 30 {
        "bg-red-500"
    } else if battery > 70 {
        "bg-emerald-500"
    } else {
        "bg-indigo-500"
    }
}

/// Send `entry` once and, if that succeeds, wait for the confirmation delay.
///
/// `send` is called exactly once. `wait` only runs after a successful send.
pub async fn deliver<S, SFut, W, WFut>(entry: VibeEntry, send: S, wait: W) -> Result<(), ClientError>
where
    S: FnOnce(VibeEntry) -> SFut,
    SFut: Future<Output = Result<(), ClientError>>,
    W: FnOnce() -> WFut,
    WFut: Future<Output = ()>,
{
    send(entry).await?;
    wait().await;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::{Cell, RefCell};

    fn ready_form() -> VibeForm {
        let mut form = VibeForm::default();
        form.set_mood("🌧️");
        form.set_battery(23);
        form.set_vent_text("long week".to_string());
        form.set_pressure_source("Workload");
        form
    }

    #[test]
    fn test_defaults() {
        let form = VibeForm::default();
        assert_eq!(form.mood, "😐");
        assert_eq!(form.battery, 50);
        assert!(form.vent_text.is_empty());
        assert!(form.pressure_source.is_empty());
        assert_eq!(form.phase, Phase::Composing);
    }

    #[test]
    fn test_missing_pressure_source_changes_nothing() {
        let mut form = VibeForm::default();
        form.set_mood("🔥");
        let before = form.clone();

        assert_eq!(form.begin_submit(), Err(SubmitError::MissingPressureSource));
        assert_eq!(form, before);
    }

    #[test]
    fn test_missing_pressure_source_sends_nothing() {
        let mut form = VibeForm::default();
        let sends = Cell::new(0);

        if let Ok(entry) = form.begin_submit() {
            let _ = block_on(deliver(
                entry,
                |_| {
                    sends.set(sends.get() + 1);
                    async { Ok(()) }
                },
                || async {},
            ));
        }

        assert_eq!(sends.get(), 0);
        assert_eq!(form.phase, Phase::Composing);
    }

    #[test]
    fn test_begin_submit_snapshots_fields() {
        let mut form = ready_form();
        let entry = form.begin_submit().unwrap();

        assert_eq!(
            entry,
            VibeEntry {
                mood: "🌧️".to_string(),
                battery: 23,
                vent_text: "long week".to_string(),
                pressure_source: "Workload".to_string(),
            }
        );
        assert!(form.is_submitting());
        assert_eq!(form.begin_submit(), Err(SubmitError::NotComposing));
    }

    #[test]
    fn test_entry_wire_names() {
        let entry = ready_form().begin_submit().unwrap();
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["ventText"], "long week");
        assert_eq!(json["pressureSource"], "Workload");
        assert_eq!(json["battery"], 23);
    }

    #[test]
    fn test_successful_submit_sends_once_then_waits() {
        let mut form = ready_form();
        let entry = form.begin_submit().unwrap();
        let sent = RefCell::new(Vec::new());
        let waited = Cell::new(false);

        let result = block_on(deliver(
            entry.clone(),
            |e| {
                sent.borrow_mut().push(e);
                async { Ok(()) }
            },
            || {
                waited.set(true);
                async {}
            },
        ));

        assert!(result.is_ok());
        assert_eq!(*sent.borrow(), vec![entry]);
        assert!(waited.get());

        form.submit_succeeded();
        assert_eq!(form.phase, Phase::Submitted);
    }

    #[test]
    fn test_failed_submit_returns_to_composing() {
        let mut form = ready_form();
        let entry = form.begin_submit().unwrap();
        let waited = Cell::new(false);

        let result = block_on(deliver(
            entry,
            |_| async { Err(ClientError::Network("connection refused".to_string())) },
            || {
                waited.set(true);
                async {}
            },
        ));

        assert!(matches!(result, Err(ClientError::Network(_))));
        assert!(!waited.get());

        form.submit_failed();
        assert_eq!(form.phase, Phase::Composing);
        assert_eq!(form.pressure_source, "Workload");
        assert_eq!(form.vent_text, "long week");
    }

    #[test]
    fn test_check_in_again_keeps_mood() {
        let mut form = ready_form();
        form.begin_submit().unwrap();
        form.submit_succeeded();

        form.check_in_again();
        assert_eq!(form.phase, Phase::Composing);
        assert_eq!(form.vent_text, "");
        assert_eq!(form.battery, 50);
        assert_eq!(form.pressure_source, "");
        assert_eq!(form.mood, "🌧️");
    }

    #[test]
    fn test_battery_bands() {
        assert_eq!(battery_bar_class(29), "bg-red-500");
        assert_eq!(battery_bar_class(30), "bg-indigo-500");
        assert_eq!(battery_bar_class(70), "bg-indigo-500");
        assert_eq!(battery_bar_class(71), "bg-emerald-500");
    }

    #[test]
    fn test_battery_clamped() {
        let mut form = VibeForm::default();
        form.set_battery(-20);
        assert_eq!(form.battery, 0);
        form.set_battery(250);
        assert_eq!(form.battery, 100);

        form.set_battery_input("73");
        assert_eq!(form.battery, 73);
        form.set_battery_input("104.6");
        assert_eq!(form.battery, 100);
        form.set_battery_input("-3");
        assert_eq!(form.battery, 0);
        form.set_battery_input("abc");
        assert_eq!(form.battery, 0);
    }

    #[test]
    fn test_unknown_mood_ignored() {
        let mut form = VibeForm::default();
        form.set_mood("🙃");
        assert_eq!(form.mood, DEFAULT_MOOD);
    }

    #[test]
    fn test_settle_only_from_submitting() {
        let mut form = VibeForm::default();
        form.submit_succeeded();
        assert_eq!(form.phase, Phase::Composing);
    }
}
