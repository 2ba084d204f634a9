//! Conquest bot library.
//!
//! Exposes the map representation, graph queries, combat model, strategy
//! phases, and protocol modules for use by integration tests and the binary
//! entry point.

pub mod board;
pub mod combat;
pub mod engine;
pub mod pathfind;
pub mod protocol;
pub mod settings;
pub mod strategy;
