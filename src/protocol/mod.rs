//! Game server protocol handling.
//!
//! Parses the line-oriented commands the server sends and formats the bot's
//! responses.

pub mod format;
pub mod parser;

pub use format::{format_orders, format_regions, NO_MOVES};
pub use parser::{parse_command, Command, GoPhase, ParseError, RegionUpdate};
