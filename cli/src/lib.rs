//! Terminal host for the tilesweep engine.

pub mod command;
pub mod console;
pub mod render;
pub mod shell;
pub mod stopwatch;

pub use command::Command;
pub use shell::{Flow, Shell};
