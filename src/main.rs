//! MTG Arena deck advisor - command line front end
//!
//! Loads a database snapshot, a collection export and a directory of
//! decklists, runs one reload pass and prints the result.

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use mtga_deck_advisor::{
    catalog::Catalog,
    collection::CardQuantities,
    core::Colors,
    engine::{ArchetypeAnalysis, LandColors},
    loader::{decklist, read_json, DatabaseSnapshot, InventoryRecord},
    Advisor, AdvisorConfig, FormatReport, Inventory, ReloadOutcome, ReloadRequest,
};
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "advisor")]
#[command(
    about = "MTG Arena deck advisor - what to build next with the cards you own",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank every archetype of a format and print the meta report
    Report {
        #[command(flatten)]
        inputs: Inputs,

        /// Rows of the meta report to print
        #[arg(long, value_name = "N")]
        meta: Option<usize>,

        /// Decks to list as most worth building
        #[arg(long, value_name = "N")]
        top: Option<usize>,
    },

    /// Show collected, missing and replacement cards for one archetype
    Deck {
        /// Archetype name (decklist file stem, case-insensitive)
        name: String,

        #[command(flatten)]
        inputs: Inputs,
    },
}

#[derive(Args)]
struct Inputs {
    /// Card database snapshot (JSON)
    #[arg(long, value_name = "FILE")]
    database: PathBuf,

    /// Directory of decklists (.txt, Arena export format)
    #[arg(long, value_name = "DIR")]
    decks: PathBuf,

    /// Collection export (JSON)
    #[arg(long, value_name = "FILE")]
    inventory: PathBuf,

    /// Land colour identities, name -> colour letters (JSON)
    #[arg(long, value_name = "FILE")]
    lands: Option<PathBuf>,

    /// Advisor configuration (JSON)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print JSON instead of tables
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Report { inputs, meta, top } => {
            let json = inputs.json;
            let report = reload(inputs, meta, top).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&*report)?);
            } else {
                print_report(&report);
            }
        }
        Commands::Deck { name, inputs } => {
            let json = inputs.json;
            let report = reload(inputs, None, None).await?;
            let Some(analysis) = report.archetype(&name) else {
                bail!("No archetype named '{name}'");
            };
            if json {
                println!("{}", serde_json::to_string_pretty(analysis)?);
            } else {
                print_deck(analysis, &report.catalog);
            }
        }
    }

    Ok(())
}

async fn reload(
    inputs: Inputs,
    meta: Option<usize>,
    top: Option<usize>,
) -> Result<Arc<FormatReport>> {
    let database: DatabaseSnapshot = read_json(&inputs.database)
        .with_context(|| format!("loading database {}", inputs.database.display()))?;
    let archetypes = decklist::load_directory(&inputs.decks)
        .with_context(|| format!("loading decklists from {}", inputs.decks.display()))?;
    let inventory: InventoryRecord = read_json(&inputs.inventory)
        .with_context(|| format!("loading inventory {}", inputs.inventory.display()))?;

    let land_colors = match &inputs.lands {
        Some(path) => {
            let lands: BTreeMap<String, Colors> = read_json(path)
                .with_context(|| format!("loading land colours {}", path.display()))?;
            LandColors::new(lands)
        }
        None => LandColors::default(),
    };

    let mut config = match &inputs.config {
        Some(path) => AdvisorConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => AdvisorConfig::default(),
    };
    if let Some(meta) = meta {
        config.meta_report_size = meta;
    }
    if let Some(top) = top {
        config.top_decks = top;
    }

    let advisor = Advisor::new();
    let request = ReloadRequest {
        database: Some(database),
        archetypes,
        inventory: Inventory::from_record(&inventory),
        land_colors,
        config,
    };
    match advisor.reload(request).await.context("reload failed")? {
        ReloadOutcome::Published(report) => Ok(report),
        ReloadOutcome::Superseded => bail!("reload was superseded"),
    }
}

fn print_report(report: &FormatReport) {
    println!("=== Archetypes (cheapest to complete first) ===\n");
    println!(
        "{:<32} {:>12} {:>12} {:>10}",
        "Archetype", "Boosters", "After WC", "Wildcards"
    );
    for analysis in &report.archetypes {
        println!(
            "{:<32} {:>12.1} {:>12.1} {:>10}",
            analysis.archetype.name,
            analysis.cost.booster_cost,
            analysis.cost.booster_cost_after_wc,
            analysis.cost.wildcards_needed
        );
    }

    if !report.dropped.is_empty() {
        println!("\n=== Dropped ===\n");
        for dropped in &report.dropped {
            println!("  {}: {}", dropped.name, dropped.reason);
        }
    }

    println!("\n=== Meta report ===\n");
    println!(
        "{:<32} {:<9} {:>7} {:>6} {:>6} {:>6} {:>10}",
        "Card", "Rarity", "Decks%", "Avg", "Owned", "Need", "Dominance"
    );
    for entry in &report.meta_report {
        println!(
            "{:<32} {:<9} {:>6.1}% {:>6.2} {:>6} {:>6} {:>10.3}",
            entry.name.as_str(),
            entry.rarity.as_str(),
            entry.deck_percentage * 100.0,
            entry.average_copies,
            entry.owned,
            entry.total_copies_needed,
            entry.dominance
        );
    }

    println!("\n=== Decks worth building ===\n");
    for (rank, deck) in report.top_decks.iter().enumerate() {
        println!("{:>3}. {:<32} {:.3}", rank + 1, deck.name, deck.dominance);
    }
}

fn print_quantities(title: &str, quantities: &CardQuantities, catalog: &Catalog) {
    if quantities.is_empty() {
        return;
    }
    println!("{title} ({}):", quantities.total());
    for (id, qty) in quantities.iter() {
        match catalog.card(id) {
            Ok(card) => println!("  {qty} {} ({}) {}", card.name, card.set.code, card.rarity),
            Err(_) => println!("  {qty} #{id}"),
        }
    }
}

fn print_deck(analysis: &ArchetypeAnalysis, catalog: &Catalog) {
    let archetype = &analysis.archetype;
    println!(
        "=== {} ({} main, {} sideboard) ===\n",
        archetype.name,
        archetype.total_cards(),
        archetype.sideboard_size()
    );

    let allocation = &analysis.allocation;
    print_quantities("Main deck owned", &allocation.suggested_main, catalog);
    print_quantities("Sideboard owned", &allocation.suggested_side, catalog);
    print_quantities("Main deck missing", &allocation.main_to_collect, catalog);
    print_quantities("Sideboard missing", &allocation.side_to_collect, catalog);

    if !analysis.replacements.is_empty() {
        println!("Suggested replacements:");
        for swap in &analysis.replacements {
            let name = |id| {
                catalog
                    .card(id)
                    .map(|card| card.name.to_string())
                    .unwrap_or_else(|_| format!("#{id}"))
            };
            println!(
                "  {} x {} -> {}",
                swap.quantity,
                name(swap.missing),
                name(swap.replacement)
            );
        }
    }

    println!(
        "\nBoosters: {:.1} ({:.1} after wildcards), wildcards still needed: {}",
        analysis.cost.booster_cost,
        analysis.cost.booster_cost_after_wc,
        analysis.cost.wildcards_needed
    );
}
