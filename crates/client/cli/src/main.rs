//! Scripted duel driver.
mod config;
mod duel;

use anyhow::Result;
use config::CliConfig;
use duel::{Action, Duel, DuelReport};

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    setup_logging();

    let config = CliConfig::from_env();
    let scenario = config.scenario()?;
    let factory = config.character_factory()?;
    tracing::info!(
        challenger = %scenario.challenger.name,
        opponent = %scenario.opponent.name,
        sequence = %scenario.sequence,
        max_rounds = scenario.max_rounds,
        "starting duel"
    );

    let report = Duel::new(scenario, &factory).run()?;
    print_report(&report);
    Ok(())
}

/// Logs go to stderr so the report on stdout stays clean.
fn setup_logging() {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_report(report: &DuelReport) {
    for round in &report.rounds {
        println!("Round {}", round.round);
        for action in &round.actions {
            match action {
                Action::Turn {
                    attacker,
                    defender,
                    outcome,
                } => {
                    print!("  {attacker} hits {defender} for {}", outcome.damage_dealt);
                    if outcome.recoil_taken > 0 {
                        print!(" (recoil {})", outcome.recoil_taken);
                    }
                    println!();
                }
                Action::Counter {
                    description,
                    damage_dealt,
                } => println!("  {description} for {damage_dealt}"),
                Action::Skipped { actor, reason } => println!("  {actor} skips: {reason}"),
            }
        }
    }

    for description in &report.undone {
        println!("Undone: {description}");
    }

    match &report.winner {
        Some(name) => println!("Winner: {name}"),
        None => println!("No winner"),
    }
    for line in &report.standings {
        println!("  {line}");
    }
}
