//! Interactive menu session.
//!
//! [`Session::run`] reads menu choices until the operator quits (or input
//! ends) and hands each resolved command to [`Session::dispatch`]. Bad input
//! and failed draws are reported and the menu comes back; only journal and
//! persistence errors end the session.

use std::io::{BufRead, Write};

use anyhow::Result;
use tracing::{debug, warn};

use crate::core::geography::Geography;
use crate::core::menu::{MenuCommand, parse_menu_choice, parse_region_index, parse_region_pair};
use crate::core::selection::Chooser;
use crate::core::stats::Summary;
use crate::core::types::MatchRecord;
use crate::draw::{Tournament, is_draw_error};
use crate::io::console::Console;
use crate::io::journal::MatchRecorder;

/// What the menu loop does after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Session<J, C, R, W> {
    tournament: Tournament<J, C>,
    console: Console<R, W>,
}

impl<J, C, R, W> Session<J, C, R, W>
where
    J: MatchRecorder,
    C: Chooser,
    R: BufRead,
    W: Write,
{
    pub fn new(tournament: Tournament<J, C>, console: Console<R, W>) -> Self {
        Self {
            tournament,
            console,
        }
    }

    pub fn tournament(&self) -> &Tournament<J, C> {
        &self.tournament
    }

    pub fn into_parts(self) -> (Tournament<J, C>, Console<R, W>) {
        (self.tournament, self.console)
    }

    /// Run the main menu until quit or end of input.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.console.say("")?;
            self.console.say("--- Main menu ---")?;
            for (number, label) in MenuCommand::ENTRIES {
                self.console.say(&format!("{number}. {label}"))?;
            }

            let Some(line) = self.console.ask("Choose an option (1-4): ")? else {
                debug!("end of input, leaving menu");
                return Ok(());
            };
            let command = match parse_menu_choice(&line) {
                Ok(command) => command,
                Err(err) => {
                    self.console
                        .say(&format!("Invalid option: {err}. Use the numbers 1 to 4."))?;
                    continue;
                }
            };

            if self.dispatch(command)? == Flow::Quit {
                return Ok(());
            }
        }
    }

    /// Execute one resolved menu command.
    pub fn dispatch(&mut self, command: MenuCommand) -> Result<Flow> {
        debug!(?command, "dispatching menu command");
        match command {
            MenuCommand::Kpessekou => {
                self.console.say("")?;
                self.console.say("--- Kpessekou draw ---")?;
                let outcome = self.tournament.play_kpessekou();
                self.report_draw(outcome)?;
                Ok(Flow::Continue)
            }
            MenuCommand::Zobibi => {
                self.console.say("")?;
                self.console.say("--- Zobibi draw ---")?;
                let Some((region1, region2)) = self.prompt_region_pair()? else {
                    return Ok(Flow::Quit);
                };
                let outcome = self.tournament.play_zobibi(&region1, &region2);
                self.report_draw(outcome)?;
                Ok(Flow::Continue)
            }
            MenuCommand::Statistics => {
                self.console.say("")?;
                for line in render_summary(&self.tournament.summary()) {
                    self.console.say(&line)?;
                }
                Ok(Flow::Continue)
            }
            MenuCommand::Quit => {
                self.console.say("Thanks for running the tournament. See you soon!")?;
                Ok(Flow::Quit)
            }
        }
    }

    /// Ask for two distinct region numbers until valid. `None` at end of input.
    fn prompt_region_pair(&mut self) -> Result<Option<(String, String)>> {
        loop {
            self.console.say("")?;
            for line in render_regions(self.tournament.geography()) {
                self.console.say(&line)?;
            }
            let Some(first) = self.console.ask("Select region 1 (number): ")? else {
                return Ok(None);
            };
            let count = self.tournament.geography().regions().len();
            if let Err(err) = parse_region_index(&first, count) {
                self.console
                    .say(&format!("Invalid selection: {err}. Try again."))?;
                continue;
            }
            let Some(second) = self.console.ask("Select region 2 (number): ")? else {
                return Ok(None);
            };
            match parse_region_pair(self.tournament.geography(), &first, &second) {
                Ok(pair) => return Ok(Some(pair)),
                Err(err) => self
                    .console
                    .say(&format!("Invalid selection: {err}. Try again."))?,
            }
        }
    }

    fn report_draw(&mut self, outcome: Result<MatchRecord>) -> Result<()> {
        match outcome {
            Ok(record) => {
                for line in render_match(&record) {
                    self.console.say(&line)?;
                }
                Ok(())
            }
            Err(err) if is_draw_error(&err) => {
                warn!(error = %err, "draw failed");
                self.console.say(&format!("Draw failed: {err}"))
            }
            Err(err) => Err(err),
        }
    }
}

/// Two result lines for a drawn match.
pub fn render_match(record: &MatchRecord) -> [String; 2] {
    [
        format!("Playoff city 1: {} (region {})", record.city1, record.region1),
        format!("Playoff city 2: {} (region {})", record.city2, record.region2),
    ]
}

pub fn render_summary(summary: &Summary) -> Vec<String> {
    let mut lines = vec![
        "--- Tournament statistics ---".to_string(),
        format!("Total matches played: {}", summary.total_matches),
        String::new(),
        "Matches by type:".to_string(),
    ];
    for (match_type, count) in &summary.counts_by_type {
        lines.push(format!("- {match_type}: {count}"));
    }
    lines.push(String::new());
    lines.push(format!("Regions used: {}", summary.regions_used));
    lines.push(format!("Cities used: {}", summary.cities_used));
    lines
}

/// Numbered region list, 1-based.
pub fn render_regions(geography: &Geography) -> Vec<String> {
    let mut lines = vec!["Available regions:".to_string()];
    lines.extend(
        geography
            .regions()
            .iter()
            .enumerate()
            .map(|(index, region)| format!("{}. {}", index + 1, region.name)),
    );
    lines
}
