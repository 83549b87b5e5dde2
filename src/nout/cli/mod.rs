//! # CLI Layer
//!
//! One possible UI client for nout, not the application itself. This is the
//! only place that parses arguments, reads stdin, prints, derives card labels
//! from note text, or knows about exit codes. Everything it shows comes from
//! `NoutApi` snapshots, and every change goes through an `NoutApi` mutator.

mod args;
mod commands;
mod print;

pub use args::Cli;
pub use commands::run;
