//! pegrisk-cli library root.
//!
//! The command-line front end: it plays the part of the input form and the
//! result page around the scoring crate. Modules are exposed so integration
//! tests can drive them without spawning the binary.

pub mod cli;
pub mod commands;
pub mod config;
pub mod narrative;
pub mod visits;
