//! Check-in vocabulary shared by the API and the CLI.

/// Mood forecast scale, ordered from very negative to very positive.
pub const MOOD_SCALE: [&str; 7] = ["⛈️", "🌧️", "☁️", "😐", "🌤️", "☀️", "🔥"];

/// Mood a fresh check-in form starts on
pub const NEUTRAL_MOOD: &str = "😐";

/// Pressure source labels offered to the user, with their pill icons
pub const PRESSURE_SOURCES: [(&str, &str); 7] = [
    ("Deadlines", "⏰"),
    ("Workload", "📚"),
    ("Management", "👔"),
    ("Pay/Comp", "💰"),
    ("Team", "🗣️"),
    ("Personal", "🏠"),
    ("All Good", "✅"),
];

/// The pressure source that means "nothing is wrong"
pub const NO_PRESSURE: &str = "All Good";

/// Whether `mood` is one of the symbols on [`MOOD_SCALE`]
pub fn is_known_mood(mood: &str) -> bool {
    MOOD_SCALE.contains(&mood)
}

/// Position of `mood` on the scale, 0 being the most negative
pub fn mood_rank(mood: &str) -> Option<usize> {
    MOOD_SCALE.iter().position(|m| *m == mood)
}
