//! retaildb entry point
//!
//! Parses arguments and dispatches through `cli::run`. Configuration,
//! subsystems and the runtime are all owned by the CLI module.

use retaildb::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
