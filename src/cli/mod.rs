//! Command-line interface layer.
//!
//! - `args`: clap definitions
//! - `commands`: one handler per command, each returning a `CommandResult`
//! - `report`: cargo-style terminal output
//! - `exit_status`: process exit codes

use anyhow::Result;

mod args;
mod commands;
mod exit_status;
mod report;
mod run;

pub use args::{Arguments, Command, CommonArgs};
pub use exit_status::ExitStatus;

use crate::error::Error;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let (common, command) = args.into_command();

    match run::run(&common, &command) {
        Ok(result) => {
            report::print(&result, common.verbose);
            Ok(result.exit_status())
        }
        Err(err) => match err.downcast_ref::<Error>() {
            Some(error) if error.is_informational() => {
                report::print_note(&error.to_string());
                Ok(ExitStatus::Success)
            }
            _ => Err(err),
        },
    }
}
