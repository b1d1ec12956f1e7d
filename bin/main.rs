//! Taskboard CLI Entry Point
//!
//! This binary runs the demonstration sequence against an in-memory board.

mod cli;
mod demo;

use std::process;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
