//! Playoff city draw for an amateur football tournament.
//!
//! Draws are persisted to `config_tournoi.json` and audited in
//! `journal_tournoi.log`. Without a subcommand the interactive menu runs.

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;

use tournoi::core::geography::Geography;
use tournoi::core::menu::resolve_region;
use tournoi::core::selection::RngChooser;
use tournoi::draw::Tournament;
use tournoi::exit_codes;
use tournoi::io::config::{ConfigOverrides, DEFAULT_CONFIG_PATH, load_config};
use tournoi::io::console::Console;
use tournoi::io::journal::FileJournal;
use tournoi::logging;
use tournoi::session::{Session, render_match, render_summary};

#[derive(Parser)]
#[command(
    name = "tournoi",
    version,
    about = "Playoff city draw for an amateur football tournament"
)]
struct Cli {
    /// TOML config file (optional).
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,
    /// Draw state file (overrides config).
    #[arg(long, global = true)]
    state: Option<PathBuf>,
    /// Audit journal file (overrides config).
    #[arg(long, global = true)]
    journal: Option<PathBuf>,
    /// RNG seed for reproducible draws (overrides config).
    #[arg(long, global = true)]
    seed: Option<u64>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Command {
    /// Interactive menu (default).
    Menu,
    /// Draw two cities from two distinct regions.
    Kpessekou,
    /// Draw two cities for two chosen regions (name or 1-based number).
    Zobibi { region1: String, region2: String },
    /// Print tournament statistics.
    Stats,
    /// List regions and their cities.
    Regions,
}

fn main() {
    logging::init();
    let code = match run() {
        Ok(()) => exit_codes::OK,
        Err(err) => {
            eprintln!("{:#}", err);
            exit_codes::for_error(&err)
        }
    };
    std::process::exit(code);
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let cfg = load_config(&cli.config)?.apply(&ConfigOverrides {
        state_path: cli.state,
        journal_path: cli.journal,
        seed: cli.seed,
    })?;
    debug!(?cfg, "effective config");

    let chooser = match cfg.seed {
        Some(seed) => RngChooser::seeded(seed),
        None => RngChooser::from_entropy(),
    };
    let mut tournament = Tournament::open(
        Geography::togo(),
        &cfg.state_path,
        FileJournal::new(&cfg.journal_path),
        chooser,
    );

    match cli.command.unwrap_or(Command::Menu) {
        Command::Menu => {
            let console = Console::new(io::stdin().lock(), io::stdout());
            Session::new(tournament, console).run()
        }
        Command::Kpessekou => {
            let record = tournament.play_kpessekou()?;
            print_lines(render_match(&record));
            Ok(())
        }
        Command::Zobibi { region1, region2 } => {
            let region1 = resolve_region(tournament.geography(), &region1)?;
            let region2 = resolve_region(tournament.geography(), &region2)?;
            let record = tournament.play_zobibi(&region1, &region2)?;
            print_lines(render_match(&record));
            Ok(())
        }
        Command::Stats => {
            print_lines(render_summary(&tournament.summary()));
            Ok(())
        }
        Command::Regions => {
            for (index, region) in tournament.geography().regions().iter().enumerate() {
                println!("{}. {}: {}", index + 1, region.name, region.cities.join(", "));
            }
            Ok(())
        }
    }
}

fn print_lines(lines: impl IntoIterator<Item = String>) {
    for line in lines {
        println!("{line}");
    }
}
