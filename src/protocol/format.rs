//! Response formatting.
//!
//! Orders are joined with `", "` into a single response line. A phase with
//! nothing to do answers with the server's pass token instead of a blank
//! line so the turn is never left unanswered.

use std::fmt::Display;

use crate::board::RegionId;

/// Pass token understood by the game server.
pub const NO_MOVES: &str = "No moves";

/// Joins orders into one response line, or `NO_MOVES` if there are none.
pub fn format_orders<T: Display>(orders: &[T]) -> String {
    if orders.is_empty() {
        return NO_MOVES.to_string();
    }
    orders
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Space-separated region ids, as expected by `pick_starting_regions`.
pub fn format_regions(ids: &[RegionId]) -> String {
    ids.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
