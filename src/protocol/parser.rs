//! Game server command parser.
//!
//! Parses incoming protocol lines into structured `Command` variants that the
//! engine dispatches on. A line holds one command; arguments are separated by
//! whitespace and repeated in fixed-size groups for the map commands.

use std::str::FromStr;

use crate::board::{ContinentId, Owner, RegionId};

/// Errors that can occur while parsing a command line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("unknown command: '{0}'")]
    UnknownCommand(String),

    #[error("missing argument, expected '{0}'")]
    MissingArgument(&'static str),

    #[error("invalid number: '{0}'")]
    InvalidNumber(String),

    #[error("unknown setup_map section: '{0}'")]
    UnknownSetupSection(String),

    #[error("unknown go phase: '{0}'")]
    UnknownGoPhase(String),

    #[error("{command} expects groups of {group} arguments, got {count}")]
    Ungrouped {
        command: &'static str,
        group: usize,
        count: usize,
    },
}

/// The two move phases the server asks for with `go`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GoPhase {
    PlaceArmies,
    AttackTransfer,
}

impl GoPhase {
    /// Parses the protocol name of a phase.
    pub fn from_name(name: &str) -> Option<GoPhase> {
        match name {
            "place_armies" => Some(GoPhase::PlaceArmies),
            "attack/transfer" => Some(GoPhase::AttackTransfer),
            _ => None,
        }
    }
}

/// New owner and troop count of one region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionUpdate {
    pub region: RegionId,
    pub owner: Owner,
    pub troops: u32,
}

/// A parsed server-to-bot command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `settings <key> <value>`; multi-token values are joined by a space.
    Settings { key: String, value: String },

    /// `setup_map super_regions <id> <bonus> ...`
    SetupContinents(Vec<(ContinentId, u32)>),

    /// `setup_map regions <id> <continent> ...`
    SetupRegions(Vec<(RegionId, ContinentId)>),

    /// `setup_map neighbors <id> <id,id,...> ...`
    SetupNeighbors(Vec<(RegionId, Vec<RegionId>)>),

    /// `update_map <id> <owner> <troops> ...`
    UpdateMap(Vec<RegionUpdate>),

    /// `opponent_moves ...`: the opponent's visible orders, kept raw.
    OpponentMoves { raw: String },

    /// `pick_starting_regions <time> <id> ...`
    PickStartingRegions {
        time_ms: u64,
        candidates: Vec<RegionId>,
    },

    /// `go place_armies <time>` or `go attack/transfer <time>`
    Go { phase: GoPhase, time_ms: Option<u64> },
}

/// Parses a single line of input into a `Command`.
///
/// Returns `Ok(None)` for blank lines.
pub fn parse_command(line: &str) -> Result<Option<Command>, ParseError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some((&keyword, args)) = tokens.split_first() else {
        return Ok(None);
    };

    let cmd = match keyword {
        "settings" => parse_settings(args)?,
        "setup_map" => parse_setup_map(args)?,
        "update_map" => parse_update_map(args)?,
        "opponent_moves" => Command::OpponentMoves { raw: args.join(" ") },
        "pick_starting_regions" => parse_pick_starting_regions(args)?,
        "go" => parse_go(args)?,
        other => return Err(ParseError::UnknownCommand(other.to_string())),
    };
    Ok(Some(cmd))
}

/// Parses a number token.
fn number<T: FromStr>(token: &str) -> Result<T, ParseError> {
    token
        .parse()
        .map_err(|_| ParseError::InvalidNumber(token.to_string()))
}

/// Splits `args` into groups of `group`, rejecting a ragged tail.
fn groups<'a, 'b>(
    command: &'static str,
    args: &'a [&'b str],
    group: usize,
) -> Result<std::slice::ChunksExact<'a, &'b str>, ParseError> {
    if args.len() % group != 0 {
        return Err(ParseError::Ungrouped {
            command,
            group,
            count: args.len(),
        });
    }
    Ok(args.chunks_exact(group))
}

/// Parses `settings <key> <value...>`.
fn parse_settings(args: &[&str]) -> Result<Command, ParseError> {
    match args {
        [key, value @ ..] if !value.is_empty() => Ok(Command::Settings {
            key: key.to_string(),
            value: value.join(" "),
        }),
        _ => Err(ParseError::MissingArgument("settings <key> <value>")),
    }
}

/// Parses the three `setup_map` sections.
fn parse_setup_map(args: &[&str]) -> Result<Command, ParseError> {
    let Some((&section, rest)) = args.split_first() else {
        return Err(ParseError::MissingArgument("setup_map <section> ..."));
    };

    match section {
        "super_regions" => groups("setup_map super_regions", rest, 2)?
            .map(|pair| Ok::<_, ParseError>((number(pair[0])?, number(pair[1])?)))
            .collect::<Result<_, _>>()
            .map(Command::SetupContinents),
        "regions" => groups("setup_map regions", rest, 2)?
            .map(|pair| Ok::<_, ParseError>((number(pair[0])?, number(pair[1])?)))
            .collect::<Result<_, _>>()
            .map(Command::SetupRegions),
        "neighbors" => groups("setup_map neighbors", rest, 2)?
            .map(|pair| Ok::<_, ParseError>((number(pair[0])?, parse_id_list(pair[1])?)))
            .collect::<Result<_, _>>()
            .map(Command::SetupNeighbors),
        other => Err(ParseError::UnknownSetupSection(other.to_string())),
    }
}

/// Parses a comma-separated id list such as `2,3,4`.
fn parse_id_list(csv: &str) -> Result<Vec<RegionId>, ParseError> {
    csv.split(',')
        .filter(|s| !s.is_empty())
        .map(number)
        .collect()
}

/// Parses `update_map (<id> <owner> <troops>)*`.
fn parse_update_map(args: &[&str]) -> Result<Command, ParseError> {
    groups("update_map", args, 3)?
        .map(|triple| {
            Ok::<_, ParseError>(RegionUpdate {
                region: number(triple[0])?,
                owner: Owner::from_name(triple[1]),
                troops: number(triple[2])?,
            })
        })
        .collect::<Result<_, _>>()
        .map(Command::UpdateMap)
}

/// Parses `pick_starting_regions <time> <id>...`.
fn parse_pick_starting_regions(args: &[&str]) -> Result<Command, ParseError> {
    let Some((&time, ids)) = args.split_first() else {
        return Err(ParseError::MissingArgument("pick_starting_regions <time> <id> ..."));
    };
    Ok(Command::PickStartingRegions {
        time_ms: number(time)?,
        candidates: ids.iter().map(|t| number(t)).collect::<Result<_, _>>()?,
    })
}

/// Parses `go <phase> [<time>]`.
fn parse_go(args: &[&str]) -> Result<Command, ParseError> {
    let Some((&phase, rest)) = args.split_first() else {
        return Err(ParseError::MissingArgument("go <phase> <time>"));
    };
    let phase =
        GoPhase::from_name(phase).ok_or_else(|| ParseError::UnknownGoPhase(phase.to_string()))?;
    let time_ms = rest.first().map(|t| number(t)).transpose()?;
    Ok(Command::Go { phase, time_ms })
}
