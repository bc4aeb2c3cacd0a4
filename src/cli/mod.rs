//! Command-line interface
//!
//! - serve: boot the service and the HTTP listener
//! - query: one-shot search from stdin
//! - explain: one-shot explain from stdin
//! - load: one-shot bulk load, prints the report

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{
    build_service, execute_explain, execute_query, explain, load, query, run, run_command, serve,
};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{error_envelope, ok_envelope, parse_request, read_request, write_error, write_response};
