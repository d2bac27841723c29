//! Browser dialogs

/// Show a modal `window.alert`. Logs to the console if no window is available.
pub fn blocking_alert(message: &str) {
    match web_sys::window() {
        Some(window) => {
            if window.alert_with_message(message).is_err() {
                web_sys::console::warn_1(&format!("alert failed: {}", message).into());
            }
        }
        None => web_sys::console::warn_1(&format!("no window for alert: {}", message).into()),
    }
}
