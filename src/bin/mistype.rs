//! Mistype CLI binary.

use clap::Parser;
use mistype::cli::{args::MistypeArgs, commands::execute_command};
use std::process;

fn main() {
    // Parse command line arguments using clap
    let args = MistypeArgs::parse();

    // Execute the command
    if let Err(e) = execute_command(args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
