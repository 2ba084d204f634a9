//! Engine state management.
//!
//! Holds the map, the settings, and dispatches parsed commands: setup and
//! update commands change the map, decision commands run a strategy phase and
//! write exactly one response line.
//!
//! Errors during map setup or update leave the map unusable for the rest of
//! the game. Errors during a decision degrade to a fallback response so the
//! turn is still answered.

use std::io::{self, Write};
use std::time::Duration;

use tracing::{debug, error, info, warn};

use crate::board::{AttackTransfer, GameState, RegionId, StateError};
use crate::protocol::{
    format_orders, format_regions, parse_command, Command, GoPhase, ParseError, NO_MOVES,
};
use crate::settings::{Settings, SettingsError};
use crate::strategy::{self, Deadline, Placement};

/// Time budget used when neither the command nor the settings give one.
const DEFAULT_MOVETIME_MS: u64 = 500;

/// Kept back from every time budget for formatting and I/O.
const DEADLINE_MARGIN_MS: u64 = 50;

/// Errors surfaced by the engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    State(#[from] StateError),

    #[error(transparent)]
    Settings(#[from] SettingsError),

    #[error("map is unusable after an earlier error: {0}")]
    MapUnusable(String),
}

/// Holds the mutable state of the bot between commands.
#[derive(Debug, Default)]
pub struct Engine {
    pub state: GameState,
    pub settings: Settings,
    map_error: Option<String>,
}

impl Engine {
    /// Creates an engine with an empty map and no settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses and handles one input line, writing a response if the command
    /// calls for one.
    ///
    /// Only write failures are returned; every protocol or game error is
    /// logged and handled here.
    pub fn handle_line<W: Write>(&mut self, line: &str, out: &mut W) -> io::Result<()> {
        match parse_command(line) {
            Ok(Some(cmd)) => self.handle_command(cmd, out),
            Ok(None) => Ok(()),
            Err(ParseError::UnknownCommand(_)) => {
                warn!("Unable to understand line: \"{}\"", line.trim());
                Ok(())
            }
            Err(e) => self.reject(line, e, out),
        }
    }

    /// Applies the error policy to a line that failed to parse.
    fn reject<W: Write>(&mut self, line: &str, err: ParseError, out: &mut W) -> io::Result<()> {
        match line.split_whitespace().next() {
            Some("setup_map" | "update_map") => {
                self.mark_unusable(&err.into());
                Ok(())
            }
            Some("pick_starting_regions") => {
                warn!(error = %err, "malformed pick_starting_regions, answering without picks");
                respond(out, "")
            }
            Some("go") => {
                warn!(error = %err, "malformed go, passing the turn");
                respond(out, NO_MOVES)
            }
            _ => {
                warn!(error = %err, line = line.trim(), "ignoring malformed line");
                Ok(())
            }
        }
    }

    /// Handles a parsed command.
    pub fn handle_command<W: Write>(&mut self, cmd: Command, out: &mut W) -> io::Result<()> {
        match cmd {
            Command::Settings { key, value } => {
                debug!(%key, %value, "setting");
                self.settings.set(key, value);
            }
            Command::SetupContinents(continents) => {
                for (id, bonus) in continents {
                    self.state.register_continent(id, bonus);
                }
            }
            Command::SetupRegions(regions) => self.update_map_with(|state| {
                regions
                    .iter()
                    .try_for_each(|&(id, continent)| state.register_region(id, continent))
            }),
            Command::SetupNeighbors(neighbors) => {
                self.update_map_with(|state| {
                    neighbors
                        .iter()
                        .try_for_each(|(id, list)| state.register_connections(*id, list))
                });
                debug!(edges = self.state.adjacency().edge_count(), "connections registered");
            }
            Command::UpdateMap(updates) => self.update_map_with(|state| {
                updates
                    .into_iter()
                    .try_for_each(|u| state.apply_ownership_update(u.region, u.owner, u.troops))
            }),
            Command::OpponentMoves { raw } => {
                debug!(moves = %raw, "opponent moves");
            }
            Command::PickStartingRegions { time_ms, candidates } => {
                let response = match self.pick_starting_regions(Some(time_ms), &candidates) {
                    Ok(picks) => format_regions(&picks),
                    Err(e) => {
                        warn!(error = %e, "starting region selection failed");
                        String::new()
                    }
                };
                return respond(out, &response);
            }
            Command::Go { phase, time_ms } => {
                let response = match phase {
                    GoPhase::PlaceArmies => {
                        self.place_armies(time_ms).map(|p| format_orders(&p.orders))
                    }
                    GoPhase::AttackTransfer => {
                        self.attack_transfer(time_ms).map(|o| format_orders(&o))
                    }
                };
                let response = response.unwrap_or_else(|e| {
                    warn!(error = %e, ?phase, "decision failed, passing the turn");
                    NO_MOVES.to_string()
                });
                return respond(out, &response);
            }
        }
        Ok(())
    }

    /// Runs a map mutation, marking the map unusable if it fails.
    fn update_map_with<F>(&mut self, apply: F)
    where
        F: FnOnce(&mut GameState) -> Result<(), StateError>,
    {
        if let Err(e) = apply(&mut self.state) {
            self.mark_unusable(&e.into());
        }
    }

    fn mark_unusable(&mut self, err: &EngineError) {
        error!(error = %err, "map setup failed, decisions will pass from now on");
        if self.map_error.is_none() {
            self.map_error = Some(err.to_string());
        }
    }

    /// Returns an error if an earlier setup or update failed.
    pub fn check_map(&self) -> Result<(), EngineError> {
        match &self.map_error {
            Some(e) => Err(EngineError::MapUnusable(e.clone())),
            None => Ok(()),
        }
    }

    /// Deadline for a decision, from the command's time budget, then the
    /// `time_per_move` setting, then the `timebank` setting, then the default.
    fn deadline(&self, time_ms: Option<u64>) -> Deadline {
        let millis = |d: Duration| u64::try_from(d.as_millis()).unwrap_or(u64::MAX);
        let budget = time_ms
            .or_else(|| self.settings.time_per_move().ok().flatten().map(millis))
            .or_else(|| self.settings.timebank().ok().flatten().map(millis))
            .unwrap_or(DEFAULT_MOVETIME_MS);
        Deadline::after(Duration::from_millis(budget.saturating_sub(DEADLINE_MARGIN_MS)))
    }

    /// Ranks the offered starting regions.
    pub fn pick_starting_regions(
        &self,
        time_ms: Option<u64>,
        candidates: &[RegionId],
    ) -> Result<Vec<RegionId>, EngineError> {
        self.check_map()?;
        let deadline = self.deadline(time_ms);
        let picks = strategy::select_starting_regions(&self.state, candidates, &deadline)?;
        info!(?picks, "starting regions");
        Ok(picks)
    }

    /// Spends this round's armies and adds them to the map so the following
    /// attack phase plans with them.
    pub fn place_armies(&mut self, time_ms: Option<u64>) -> Result<Placement, EngineError> {
        self.check_map()?;
        let deadline = self.deadline(time_ms);
        let me = self.settings.your_bot()?;
        let opponent = self.settings.opponent_bot()?;
        let budget = self.settings.starting_armies()?;

        let placement = strategy::place_armies(&mut self.state, me, opponent, budget, &deadline);
        for order in &placement.orders {
            self.state.reinforce(order.region, order.troops)?;
        }
        info!(
            budget,
            placed = placement.placed(),
            unplaced = placement.unplaced,
            "armies placed"
        );
        Ok(placement)
    }

    /// Plans this round's attacks and transfers.
    pub fn attack_transfer(
        &mut self,
        time_ms: Option<u64>,
    ) -> Result<Vec<AttackTransfer>, EngineError> {
        self.check_map()?;
        let deadline = self.deadline(time_ms);
        let me = self.settings.your_bot()?;
        let opponent = self.settings.opponent_bot()?;

        let orders = strategy::attack_transfer(&mut self.state, me, opponent, &deadline);
        info!(count = orders.len(), "attacks and transfers");
        Ok(orders)
    }
}

/// Writes one response line and flushes it.
fn respond<W: Write>(out: &mut W, line: &str) -> io::Result<()> {
    writeln!(out, "{}", line)?;
    out.flush()
}
