//! MoodSense API access

mod client;

pub use client::{fetch_dashboard, submit_vibe, ClientError};
