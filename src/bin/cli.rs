//! MoodSense CLI
//!
//! Command-line client for a running MoodSense API:
//! - Submit a mood check-in
//! - Print the HR dashboard

use clap::{Parser, Subcommand};
use moodsense::api::dto::{HrDashboardResponse, SubmitVibeRequest, SubmitVibeResponse};
use moodsense::vibe::{is_known_mood, MOOD_SCALE, NEUTRAL_MOOD, PRESSURE_SOURCES};

#[derive(Parser)]
#[command(name = "moodsense-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Mood check-ins and HR dashboard from the terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// API server URL
    #[arg(long, default_value = "http://localhost:5000", global = true)]
    pub api_url: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Submit a mood check-in
    Checkin {
        /// Mood symbol: ⛈️ 🌧️ ☁️ 😐 🌤️ ☀️ 🔥
        #[arg(short, long, default_value = NEUTRAL_MOOD)]
        mood: String,
        /// Energy level, clamped to 0-100
        #[arg(short, long, default_value = "50", allow_negative_numbers = true)]
        battery: i64,
        /// Primary pressure source (Deadlines, Workload, Management, Pay/Comp, Team, Personal, All Good)
        #[arg(short, long)]
        pressure: String,
        /// Free-text notes
        #[arg(short, long, default_value = "")]
        notes: String,
    },

    /// Show the HR dashboard
    Dashboard {
        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let api_url = cli.api_url.trim_end_matches('/');

    match cli.command {
        Commands::Checkin {
            mood,
            battery,
            pressure,
            notes,
        } => {
            if !is_known_mood(&mood) {
                eprintln!("Unknown mood {:?}. Pick one of: {}", mood, MOOD_SCALE.join(" "));
                std::process::exit(1);
            }

            if pressure.trim().is_empty() {
                let labels: Vec<&str> = PRESSURE_SOURCES.iter().map(|(label, _)| *label).collect();
                eprintln!(
                    "Please select a pressure source (or 'All Good') to continue: {}",
                    labels.join(", ")
                );
                std::process::exit(1);
            }

            let body = SubmitVibeRequest {
                mood,
                battery: battery.clamp(0, 100),
                vent_text: notes,
                pressure_source: pressure,
            };

            let response = client
                .post(format!("{}/api/submit-vibe", api_url))
                .json(&body)
                .send()
                .await?;

            if !response.status().is_success() {
                let status = response.status();
                let text = response.text().await.unwrap_or_default();
                eprintln!("Check-in failed ({}): {}", status, text);
                std::process::exit(1);
            }

            let result: SubmitVibeResponse = response.json().await?;
            println!("Vibe logged! {} at {}%", body.mood, body.battery);
            if result.drivers.is_empty() {
                println!("No negative triggers detected.");
            } else {
                println!("Drivers: {}", result.drivers.join(", "));
            }
        }

        Commands::Dashboard { format } => {
            let response = client
                .get(format!("{}/api/hr-dashboard", api_url))
                .send()
                .await;

            let response = match response {
                Ok(resp) if resp.status().is_success() => resp,
                Ok(resp) => {
                    eprintln!("API returned error: {}", resp.status());
                    std::process::exit(1);
                }
                Err(e) => {
                    eprintln!("Cannot connect to MoodSense API at {}", api_url);
                    eprintln!("Error: {}", e);
                    eprintln!();
                    eprintln!("Make sure the API server is running:");
                    eprintln!("  cargo run --bin moodsense");
                    std::process::exit(1);
                }
            };

            let dashboard: HrDashboardResponse = response.json().await?;

            match format.as_str() {
                "json" => println!("{}", serde_json::to_string_pretty(&dashboard)?),
                _ => print_dashboard(&dashboard),
            }
        }
    }

    Ok(())
}

fn print_dashboard(dashboard: &HrDashboardResponse) {
    println!("{:<20} {:<16} {:<12} {:>7}  {}", "Name", "Role", "Risk", "Battery", "Drivers");
    println!("{}", "-".repeat(80));

    for emp in &dashboard.employees {
        println!(
            "{:<20} {:<16} {:<12} {:>6}%  {}",
            emp.name,
            emp.role,
            emp.risk_status.label(),
            emp.avg_battery,
            emp.drivers.join(", ")
        );
    }

    println!();
    println!("Department Energy");
    for dept in &dashboard.department_data {
        let filled = (dept.energy.min(100) / 5) as usize;
        println!(
            "  {:<14} {:>3}  {}{}",
            dept.dept_name,
            dept.energy,
            "#".repeat(filled),
            ".".repeat(20 - filled)
        );
    }
}
