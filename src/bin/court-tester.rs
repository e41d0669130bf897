//! Court Tester CLI Tool
//!
//! Interactive command-line tool for exercising a running courtside service.
//!
//! Usage:
//!   # Start the service first:
//!   cargo run
//!
//!   # Then exercise it:
//!   cargo run --bin court-tester -- --help
//!   cargo run --bin court-tester signup --name "Ava" --shooting 8 --speed 7
//!   cargo run --bin court-tester predict --shooting 9 --dribbling 6
//!   cargo run --bin court-tester find-match --policy closest-rating
//!   cargo run --bin court-tester start-tournament
//!   cargo run --bin court-tester run-scenario --scenario rivals

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use courtside::types::PlayerStats;
use reqwest::StatusCode;

#[path = "../../tests/court_tester.rs"]
mod court_tester;

use court_tester::{CourtTester, PlayerConfig, TestScenarios, DEFAULT_BASE_URL};

#[derive(Parser)]
#[command(name = "court-tester")]
#[command(about = "Interactive testing tool for the courtside tournament service")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Base URL of the running service
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,
}

/// Stat flags shared by the signup and predict commands
#[derive(Args)]
struct StatArgs {
    /// Years of experience (0-10)
    #[arg(long, default_value = "5.0")]
    experience: f64,

    /// Level of competition faced (0-10)
    #[arg(long, default_value = "5.0")]
    competition_level: f64,

    /// Height (0-10)
    #[arg(long, default_value = "5.0")]
    height: f64,

    /// Weight (0-10)
    #[arg(long, default_value = "5.0")]
    weight: f64,

    /// Wingspan (0-10)
    #[arg(long, default_value = "5.0")]
    wingspan: f64,

    /// Shooting skill (0-10)
    #[arg(long, default_value = "5.0")]
    shooting: f64,

    /// Dribbling skill (0-10)
    #[arg(long, default_value = "5.0")]
    dribbling: f64,

    /// Speed (0-10)
    #[arg(long, default_value = "5.0")]
    speed: f64,

    /// Agility (0-10)
    #[arg(long, default_value = "5.0")]
    agility: f64,
}

impl StatArgs {
    fn to_stats(&self) -> PlayerStats {
        PlayerStats {
            experience: self.experience,
            competition_level: self.competition_level,
            height: self.height,
            weight: self.weight,
            wingspan: self.wingspan,
            shooting: self.shooting,
            dribbling: self.dribbling,
            speed: self.speed,
            agility: self.agility,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Sign up a player for the tournament
    Signup {
        /// Player name
        #[arg(short, long)]
        name: String,

        #[command(flatten)]
        stats: StatArgs,
    },
    /// Predict a rating without signing up
    Predict {
        #[command(flatten)]
        stats: StatArgs,
    },
    /// Request a match between registered players
    FindMatch {
        /// Pairing policy (random, closest-rating)
        #[arg(short, long)]
        policy: Option<String>,
    },
    /// Announce a tournament matchup
    StartTournament,
    /// List registered players
    Players,
    /// Show service health
    Health,
    /// Run a predefined test scenario
    RunScenario {
        /// Scenario name (full-court, rivals, lone-player)
        #[arg(short, long)]
        scenario: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    println!("🏀 Courtside service at: {}", cli.base_url);

    let tester = CourtTester::new(&cli.base_url);
    match tester.welcome().await {
        Ok(message) => println!("✅ Connected: {}", message),
        Err(e) => {
            eprintln!("❌ Failed to reach service: {}", e);
            eprintln!("💡 Make sure the service is running: cargo run");
            std::process::exit(1);
        }
    }

    match cli.command {
        Commands::Signup { name, stats } => {
            let player = PlayerConfig::new(&name, stats.to_stats());
            let (status, body) = tester.signup(&player).await?;
            if status == StatusCode::CREATED {
                println!("✅ {}", body["message"].as_str().unwrap_or(""));
                println!("   Player id: {}", body["player"]["id"]);
                println!("   Rating: {}", body["player"]["rating"]);
            } else {
                eprintln!("❌ Signup rejected ({}): {}", status, body);
                std::process::exit(1);
            }
        }

        Commands::Predict { stats } => {
            let (status, body) = tester.predict(&stats.to_stats()).await?;
            if status == StatusCode::OK {
                println!("✅ Predicted rating: {}", body["player rating"]);
            } else {
                eprintln!("❌ Prediction rejected ({}): {}", status, body);
                std::process::exit(1);
            }
        }

        Commands::FindMatch { policy } => {
            let (status, body) = tester.find_match(policy.as_deref()).await?;
            if status == StatusCode::OK {
                let found = &body["match"];
                println!("✅ Match found!");
                println!(
                    "   {} (rating {}) vs {} (rating {})",
                    found["player1"]["name"].as_str().unwrap_or("?"),
                    found["player1"]["rating"],
                    found["player2"]["name"].as_str().unwrap_or("?"),
                    found["player2"]["rating"]
                );
                println!("   Rating difference: {}", found["rating_difference"]);
            } else {
                eprintln!("❌ No match ({}): {}", status, body);
                std::process::exit(1);
            }
        }

        Commands::StartTournament => {
            let (status, body) = tester.start_tournament().await?;
            if status == StatusCode::OK {
                println!("✅ {}", body["message"].as_str().unwrap_or(""));
                println!("   Total players: {}", body["total_players"]);
            } else {
                eprintln!("❌ Tournament start failed ({}): {}", status, body);
                std::process::exit(1);
            }
        }

        Commands::Players => {
            let (status, body) = tester.players().await?;
            if status != StatusCode::OK {
                eprintln!("❌ Failed to list players ({}): {}", status, body);
                std::process::exit(1);
            }

            println!("📋 {} players registered:", body["count"]);
            if let Some(players) = body["players"].as_array() {
                for player in players {
                    println!(
                        "   #{} {} (rating {})",
                        player["id"],
                        player["name"].as_str().unwrap_or("?"),
                        player["rating"]
                    );
                }
            }
        }

        Commands::Health => {
            let (status, body) = tester.health().await?;
            println!(
                "Health: {} (HTTP {})",
                body["status"].as_str().unwrap_or("unknown"),
                status
            );
            println!("  Service: {}", body["service"].as_str().unwrap_or("?"));
            println!("  Roster size: {}", body["roster_size"]);
            println!("  Uptime: {}s", body["uptime_seconds"]);
        }

        Commands::RunScenario { scenario } => {
            let config = match scenario.to_lowercase().as_str() {
                "full-court" => TestScenarios::full_court(),
                "rivals" => TestScenarios::rivals(),
                "lone-player" => TestScenarios::lone_player(),
                _ => {
                    eprintln!(
                        "❌ Unknown scenario '{}'. Available: full-court, rivals, lone-player",
                        scenario
                    );
                    std::process::exit(1);
                }
            };

            println!("🧪 Running scenario: {}", config.scenario_name);
            match tester.run_scenario(config).await {
                Ok(true) => println!("✅ Scenario completed successfully!"),
                Ok(false) => {
                    println!("❌ Scenario failed.");
                    std::process::exit(1);
                }
                Err(e) => {
                    eprintln!("❌ Error running scenario: {}", e);
                    std::process::exit(1);
                }
            }
        }
    }

    Ok(())
}
