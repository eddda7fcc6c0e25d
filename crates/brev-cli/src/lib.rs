pub mod cli;
pub mod commands;

use clap::Parser;
use cli::Brev;
use commands::handle_command;
use std::process;

/// Run the brev CLI application
pub fn run_main() {
    let args = Brev::parse();

    if let Err(e) = handle_command(args.command) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
